//! Push button

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::themes::{Radius, Theme};

/// A bordered, centered-label button
pub struct Button<'a> {
    label: &'a str,
    enabled: bool,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
            focused: false,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        // Disabled buttons render at half opacity
        let (fill, text) = if self.enabled {
            (theme.primary, theme.primary_foreground)
        } else {
            (
                Theme::with_opacity(theme.primary, theme.background, 0.5),
                Theme::with_opacity(theme.primary_foreground, theme.background, 0.5),
            )
        };
        let border = if self.focused { theme.foreground } else { fill };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Radius::border_type(theme.radius.md))
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(fill));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.label)
            .style(Style::default().fg(text).bold())
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
