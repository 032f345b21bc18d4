//! Reusable panel components
//!
//! Provides styled panels/cards with consistent theming.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding};

use crate::themes::{Radius, Theme};

/// Panel style variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelStyle {
    /// Default panel style
    #[default]
    Default,
    /// Focused panel (highlighted border)
    Focused,
    /// Elevated panel (open dropdown lists)
    Elevated,
    /// Outdated content
    Muted,
}

/// A styled panel component
#[derive(Clone)]
pub struct Panel<'a> {
    title: Option<Line<'a>>,
    style: PanelStyle,
    theme: &'a Theme,
    padding: Padding,
    radius: f32,
    background: Option<Color>,
}

impl<'a> Panel<'a> {
    /// Create a new panel with the given theme
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            title: None,
            style: PanelStyle::Default,
            theme,
            padding: Padding::horizontal(1),
            radius: theme.radius.lg,
            background: None,
        }
    }

    /// Set the panel title
    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the panel style
    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    /// Set focused style
    pub fn focused(mut self, focused: bool) -> Self {
        if focused {
            self.style = PanelStyle::Focused;
        }
        self
    }

    /// Set the padding
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Corner radius in rem
    pub fn radius(mut self, rem: f32) -> Self {
        self.radius = rem;
        self
    }

    /// Fill the panel with a background color
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Build the Block widget
    pub fn block(&self) -> Block<'a> {
        let border_color = match self.style {
            PanelStyle::Default => self.theme.border,
            PanelStyle::Focused => self.theme.border_focused,
            PanelStyle::Elevated => self.theme.secondary,
            PanelStyle::Muted => self.theme.muted,
        };

        let title_color = match self.style {
            PanelStyle::Default | PanelStyle::Elevated => self.theme.foreground,
            PanelStyle::Focused => self.theme.primary,
            PanelStyle::Muted => self.theme.muted,
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(Radius::border_type(self.radius))
            .border_style(Style::default().fg(border_color))
            .padding(self.padding);

        if let Some(bg) = self.background {
            block = block.style(Style::default().bg(bg));
        }

        if let Some(title) = self.title.clone() {
            block = block
                .title(title)
                .title_style(Style::default().fg(title_color).bold());
        }

        block
    }
}

/// A card: panel on the card background with the large radius
pub struct Card<'a> {
    panel: Panel<'a>,
}

impl<'a> Card<'a> {
    /// Create a new card with the given theme
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            panel: Panel::new(theme)
                .radius(theme.radius.lg)
                .background(theme.card_background()),
        }
    }

    /// Set the card title
    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.panel = self.panel.title(title);
        self
    }

    /// Dim the border and title
    pub fn muted(mut self, muted: bool) -> Self {
        if muted {
            self.panel = self.panel.style(PanelStyle::Muted);
        }
        self
    }

    /// Build the Block widget
    pub fn block(&self) -> Block<'a> {
        self.panel.block()
    }
}

/// Center a `width` x `height` box inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_inner_area() {
        let theme = Theme::dark();
        let inner = Panel::new(&theme).block().inner(Rect::new(0, 0, 20, 5));
        // 1 cell border each side plus 1 cell horizontal padding
        assert_eq!(inner, Rect::new(2, 1, 16, 3));
    }

    #[test]
    fn test_style_sets_border_color() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 6, 3);
        let cases = [
            (Panel::new(&theme), theme.border),
            (Panel::new(&theme).focused(true), theme.border_focused),
            (Panel::new(&theme).focused(false), theme.border),
            (Panel::new(&theme).style(PanelStyle::Elevated), theme.secondary),
            (Panel::new(&theme).style(PanelStyle::Muted), theme.muted),
        ];
        for (panel, expected) in cases {
            let mut buf = Buffer::empty(area);
            ratatui::widgets::Widget::render(panel.block(), area, &mut buf);
            assert_eq!(buf[(0, 0)].fg, expected);
        }
    }

    #[test]
    fn test_muted_card() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        ratatui::widgets::Widget::render(Card::new(&theme).muted(true).block(), area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, theme.muted);
    }

    #[test]
    fn test_panel_rounded_corners() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        ratatui::widgets::Widget::render(Card::new(&theme).block(), area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "╭");
        assert_eq!(buf[(5, 2)].symbol(), "╯");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(centered_rect(area, 20, 10), Rect::new(10, 5, 20, 10));
        assert_eq!(centered_rect(area, 80, 40), area);
    }
}
