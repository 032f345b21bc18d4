//! Animation runtime
//!
//! Tracks when a theme preset started and applies its current opacity to
//! already-rendered buffer cells.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use tracing::debug;

use crate::themes::{AnimationPreset, Motion, Theme};

/// A running instance of an animation preset
#[derive(Clone, Debug)]
pub struct Animation {
    preset: AnimationPreset,
    start: Instant,
}

impl Animation {
    pub fn start(preset: &AnimationPreset) -> Self {
        Self::started_at(preset, Instant::now())
    }

    pub fn started_at(preset: &AnimationPreset, start: Instant) -> Self {
        Self {
            preset: preset.clone(),
            start,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn is_done(&self) -> bool {
        self.elapsed() >= self.preset.duration
    }

    /// Current interpolated values
    pub fn motion(&self) -> Motion {
        self.preset.frame_at(self.elapsed())
    }
}

/// Optional animation slot; empty or finished means "at rest"
#[derive(Clone, Debug, Default)]
pub struct AnimationSlot {
    current: Option<Animation>,
}

impl AnimationSlot {
    pub fn play(&mut self, preset: &AnimationPreset) {
        debug!(animation = preset.name, "Animation started");
        self.current = Some(Animation::start(preset));
    }

    pub fn motion(&self) -> Motion {
        self.current
            .as_ref()
            .map(Animation::motion)
            .unwrap_or(Motion::REST)
    }

    /// Drop the animation once it has finished
    pub fn cleanup(&mut self) {
        if self.current.as_ref().is_some_and(Animation::is_done) {
            self.current = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.current.is_some()
    }
}

/// Blend every cell in `area` towards the theme background by `opacity`
pub fn apply_opacity(buf: &mut Buffer, area: Rect, opacity: f32, theme: &Theme) {
    if opacity >= 0.99 {
        return;
    }
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.fg = Theme::with_opacity(cell.fg, theme.background, opacity);
                if cell.bg != Color::Reset {
                    cell.bg = Theme::with_opacity(cell.bg, theme.background, opacity);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_animation_rests() {
        let preset = AnimationPreset::fade_in();
        let past = Instant::now() - Duration::from_secs(2);
        let anim = Animation::started_at(&preset, past);
        assert!(anim.is_done());
        assert_eq!(anim.motion(), Motion::REST);
        assert_eq!(anim.preset.name, "fade-in");
    }

    #[test]
    fn test_slot_cleanup() {
        let mut slot = AnimationSlot::default();
        assert_eq!(slot.motion(), Motion::REST);
        assert!(!slot.is_animating());

        slot.play(&AnimationPreset::slide_up());
        assert!(slot.is_animating());
        assert!(slot.motion().opacity < 1.0);

        slot.current = Some(Animation::started_at(
            &AnimationPreset::slide_up(),
            Instant::now() - Duration::from_secs(1),
        ));
        slot.cleanup();
        assert!(!slot.is_animating());
    }

    #[test]
    fn test_apply_opacity_dims_towards_background() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        for x in 0..2 {
            if let Some(cell) = buf.cell_mut((x, 0)) {
                cell.fg = Color::Rgb(255, 255, 255);
            }
        }

        apply_opacity(&mut buf, area, 0.0, &theme);
        assert_eq!(buf[(0, 0)].fg, theme.background);

        let mut buf = Buffer::empty(area);
        if let Some(cell) = buf.cell_mut((0, 0)) {
            cell.fg = Color::Rgb(255, 255, 255);
        }
        apply_opacity(&mut buf, area, 1.0, &theme);
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(255, 255, 255));
    }
}
