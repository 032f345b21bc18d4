//! Glyphs for visual hierarchy

/// Separator and marker characters
pub struct Separators;

impl Separators {
    /// Bullet point
    pub const BULLET: &'static str = "•";

    /// Diamond (for branding)
    pub const DIAMOND: &'static str = "◆";

    /// Filled circle (status indicator)
    pub const CIRCLE_FILLED: &'static str = "●";

    /// Empty circle
    pub const CIRCLE_EMPTY: &'static str = "○";

    /// Price up
    pub const TRIANGLE_UP: &'static str = "▲";

    /// Price down
    pub const TRIANGLE_DOWN: &'static str = "▼";

    /// Spinner frames for loading states
    pub const SPINNER: [&'static str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

    /// Spinner frame for a monotonically increasing tick
    pub fn spinner(tick: u64) -> &'static str {
        Self::SPINNER[(tick % Self::SPINNER.len() as u64) as usize]
    }
}
