//! Theme structure and color utilities
//!
//! Semantic color system: colors are organized by purpose, not by color
//! name. Values are fixed; there is no runtime theme loading.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

use crate::themes::keyframes::AnimationPreset;

/// Corner radius tokens, in rem
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Radius {
    pub lg: f32,
    pub md: f32,
    pub sm: f32,
}

impl Radius {
    /// Terminal cells only know square or rounded corners
    pub fn border_type(rem: f32) -> BorderType {
        if rem > 0.0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }
}

impl Default for Radius {
    fn default() -> Self {
        Self {
            lg: 1.0,
            md: 0.75,
            sm: 0.5,
        }
    }
}

/// Theme tokens with semantic organization
#[derive(Clone, Debug)]
pub struct Theme {
    // ─────────────────────────────────────────────────────────────────────────
    // Surfaces
    // ─────────────────────────────────────────────────────────────────────────
    /// Page background
    pub background: Color,
    /// Default text
    pub foreground: Color,

    // ─────────────────────────────────────────────────────────────────────────
    // Brand
    // ─────────────────────────────────────────────────────────────────────────
    /// Primary action color (buttons, focus)
    pub primary: Color,
    /// Text drawn on top of `primary`
    pub primary_foreground: Color,
    /// Secondary surfaces (inputs, cards)
    pub secondary: Color,
    pub secondary_foreground: Color,

    // ─────────────────────────────────────────────────────────────────────────
    // Semantic
    // ─────────────────────────────────────────────────────────────────────────
    /// Positive change
    pub success: Color,
    /// Negative change
    pub warning: Color,
    /// Disabled states, dividers
    pub muted: Color,
    /// Labels, hints
    pub muted_foreground: Color,

    // ─────────────────────────────────────────────────────────────────────────
    // Borders
    // ─────────────────────────────────────────────────────────────────────────
    pub border: Color,
    pub border_focused: Color,

    // ─────────────────────────────────────────────────────────────────────────
    // Shape and motion
    // ─────────────────────────────────────────────────────────────────────────
    pub radius: Radius,
    pub fade_in: AnimationPreset,
    pub slide_up: AnimationPreset,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The dark theme the widget ships with
    pub fn dark() -> Self {
        let primary = hsl(210.0, 70.0, 50.0);
        let secondary = hsl(60.0, 5.0, 23.0);
        let white = hsl(0.0, 0.0, 100.0);

        Self {
            background: hsl(60.0, 5.0, 8.0),
            foreground: hsl(60.0, 9.0, 98.0),

            primary,
            primary_foreground: white,
            secondary,
            secondary_foreground: hsl(60.0, 9.0, 98.0),

            success: hsl(140.0, 50.0, 50.0),
            warning: hsl(0.0, 70.0, 60.0),
            muted: hsl(60.0, 5.0, 38.0),
            muted_foreground: hsl(60.0, 5.0, 85.0),

            border: secondary,
            border_focused: primary,

            radius: Radius::default(),
            fade_in: AnimationPreset::fade_in(),
            slide_up: AnimationPreset::slide_up(),
        }
    }

    /// Color for a price move
    pub fn change_color(&self, gain: bool) -> Color {
        if gain {
            self.success
        } else {
            self.warning
        }
    }

    /// Card background (`secondary` at 30% over the page)
    pub fn card_background(&self) -> Color {
        Self::with_opacity(self.secondary, self.background, 0.3)
    }

    /// Input background (`secondary` at 50% over the page)
    pub fn input_background(&self) -> Color {
        Self::with_opacity(self.secondary, self.background, 0.5)
    }

    /// Lay `color` over `base` at the given opacity (0.0 - 1.0)
    pub fn with_opacity(color: Color, base: Color, opacity: f32) -> Color {
        Self::blend_colors(color, base, opacity.clamp(0.0, 1.0))
    }

    /// Blend two colors with a ratio (1.0 = color1, 0.0 = color2)
    fn blend_colors(color1: Color, color2: Color, ratio: f32) -> Color {
        match (color1, color2) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                let blend = |c1: u8, c2: u8| -> u8 {
                    let c1 = c1 as f32;
                    let c2 = c2 as f32;
                    (c1 * ratio + c2 * (1.0 - ratio)).round() as u8
                };
                Color::Rgb(blend(r1, r2), blend(g1, g2), blend(b1, b2))
            }
            _ => color1,
        }
    }
}

/// Convert an HSL triple (degrees, percent, percent) to an RGB color
pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);
    let h = hue.rem_euclid(360.0) / 60.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match h as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}
