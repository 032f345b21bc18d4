//! Theme system
//!
//! Static color, radius and animation tokens. See theme.rs for the Theme
//! struct and keyframes.rs for the animation presets.

pub mod keyframes;
pub mod theme;

pub use keyframes::{AnimationPreset, Motion};
pub use theme::{Radius, Theme};
