//! Help overlay
//!
//! Keyboard shortcuts reference overlay.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::themes::{Radius, Theme};
use crate::ui::panels::centered_rect;

/// A keyboard shortcut entry
struct ShortcutEntry {
    key: &'static str,
    description: &'static str,
}

/// Help overlay showing keyboard shortcuts
pub struct HelpOverlay {
    pub visible: bool,
}

impl HelpOverlay {
    /// Create a new help overlay
    pub fn new() -> Self {
        Self { visible: false }
    }

    /// Show the overlay
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the overlay
    pub fn hide(&mut self) {
        self.visible = false;
    }

    fn shortcuts() -> Vec<ShortcutEntry> {
        vec![
            ShortcutEntry { key: "Tab / →", description: "Next control" },
            ShortcutEntry { key: "Shift+Tab / ←", description: "Previous control" },
            ShortcutEntry { key: "Enter / Space", description: "Open picker / press button" },
            ShortcutEntry { key: "j/k ↓/↑", description: "Move in open picker" },
            ShortcutEntry { key: "Esc", description: "Close picker" },
            ShortcutEntry { key: "p", description: "Get prediction" },
            ShortcutEntry { key: "?", description: "This help" },
            ShortcutEntry { key: "q / Ctrl+C", description: "Quit" },
        ]
    }

    /// Render the help overlay
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.visible {
            return;
        }

        let shortcuts = Self::shortcuts();
        let overlay_area = centered_rect(area, 52, shortcuts.len() as u16 + 6);
        Clear.render(overlay_area, buf);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(Style::default().fg(theme.primary).bold())
            .borders(Borders::ALL)
            .border_type(Radius::border_type(theme.radius.lg))
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.secondary));
        let inner = block.inner(overlay_area);
        block.render(overlay_area, buf);

        let mut lines: Vec<Line> = shortcuts
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>16}", entry.key),
                        Style::default().fg(theme.primary).bold(),
                    ),
                    Span::styled(
                        format!("  {}", entry.description),
                        Style::default().fg(theme.secondary_foreground),
                    ),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Predictions are simulated and not financial advice.",
            Style::default().fg(theme.muted_foreground).italic(),
        )));
        lines.push(Line::from(Span::styled(
            "[Press any key to close]",
            Style::default().fg(theme.muted_foreground),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}
