//! UI components module
//!
//! Reusable UI components for the widget: panels, dropdowns, buttons,
//! status bar, help overlay and animations.

pub mod animation;
pub mod borders;
pub mod button;
pub mod dropdown;
pub mod help_overlay;
pub mod panels;
pub mod status_bar;

pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
