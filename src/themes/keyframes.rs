//! Animation presets
//!
//! Each preset is a duration and a list of keyframes, eased out.
//! Keyframes interpolate opacity and a vertical offset in pixels; the
//! renderer converts pixels to terminal rows.

use std::time::Duration;

/// Rough height of a terminal row, used to turn pixel offsets into rows
pub const ROW_HEIGHT_PX: f32 = 10.0;

/// Cubic ease-out of linear progress (0.0 - 1.0)
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A single keyframe stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Position in the animation (0.0 - 1.0)
    pub at: f32,
    pub opacity: f32,
    /// Downward offset in pixels
    pub offset_y: f32,
}

impl Keyframe {
    pub const fn new(at: f32, opacity: f32, offset_y: f32) -> Self {
        Self {
            at,
            opacity,
            offset_y,
        }
    }
}

/// Interpolated animation values at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub opacity: f32,
    pub offset_y: f32,
}

impl Motion {
    /// Resting frame: fully visible, in place
    pub const REST: Motion = Motion {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Offset converted to whole terminal rows
    pub fn offset_rows(&self) -> u16 {
        (self.offset_y / ROW_HEIGHT_PX).round().max(0.0) as u16
    }
}

/// Named animation
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationPreset {
    pub name: &'static str,
    pub duration: Duration,
    pub keyframes: Vec<Keyframe>,
}

impl AnimationPreset {
    /// `fade-in`: opacity 0 -> 1 over 500ms, ease-out
    pub fn fade_in() -> Self {
        Self {
            name: "fade-in",
            duration: Duration::from_millis(500),
            keyframes: vec![Keyframe::new(0.0, 0.0, 0.0), Keyframe::new(1.0, 1.0, 0.0)],
        }
    }

    /// `slide-up`: 10px below and transparent -> in place and opaque,
    /// 500ms, ease-out
    pub fn slide_up() -> Self {
        Self {
            name: "slide-up",
            duration: Duration::from_millis(500),
            keyframes: vec![Keyframe::new(0.0, 0.0, 10.0), Keyframe::new(1.0, 1.0, 0.0)],
        }
    }

    /// Sample the preset at `elapsed`
    pub fn frame_at(&self, elapsed: Duration) -> Motion {
        let linear = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        self.frame(ease_out(linear))
    }

    /// Interpolate keyframes at eased progress `t`
    fn frame(&self, t: f32) -> Motion {
        let (first, last) = match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Motion::REST,
        };
        if t <= first.at {
            return Motion {
                opacity: first.opacity,
                offset_y: first.offset_y,
            };
        }
        if t >= last.at {
            return Motion {
                opacity: last.opacity,
                offset_y: last.offset_y,
            };
        }

        for pair in self.keyframes.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.at && t <= b.at {
                let span = (b.at - a.at).max(f32::EPSILON);
                let k = (t - a.at) / span;
                return Motion {
                    opacity: a.opacity + (b.opacity - a.opacity) * k,
                    offset_y: a.offset_y + (b.offset_y - a.offset_y) * k,
                };
            }
        }
        Motion::REST
    }
}
