//! Status bar component
//!
//! Bottom status bar showing the prediction phase, key hints and a clock.

use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::session::Phase;
use crate::themes::Theme;
use crate::ui::borders::Separators;

/// Status bar widget
pub struct StatusBar<'a> {
    theme: &'a Theme,
    phase: Phase,
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar
    pub fn new(theme: &'a Theme, phase: Phase) -> Self {
        Self {
            theme,
            phase,
            hints: Vec::new(),
        }
    }

    /// Add a key hint, e.g. `("Tab", "Next")`
    pub fn hint(mut self, key: &'a str, action: &'a str) -> Self {
        self.hints.push((key, action));
        self
    }

    /// Build the status bar content as a Line
    fn build_content(&self) -> Line<'a> {
        let mut spans = Vec::new();
        let separator = Span::styled(" │ ", Style::default().fg(self.theme.border));

        spans.push(Span::styled(
            format!(" {} CRYPTO PREDICT", Separators::DIAMOND),
            Style::default().fg(self.theme.primary).bold(),
        ));
        spans.push(separator.clone());

        let (dot, label, color) = match self.phase {
            Phase::Idle => (Separators::CIRCLE_EMPTY, "Idle", self.theme.muted_foreground),
            Phase::Loading => (Separators::CIRCLE_FILLED, "Analyzing", self.theme.primary),
            Phase::Displayed => (Separators::CIRCLE_FILLED, "Ready", self.theme.success),
        };
        spans.push(Span::styled(
            format!("{} {}", dot, label),
            Style::default().fg(color),
        ));

        for (key, action) in &self.hints {
            spans.push(separator.clone());
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(self.theme.primary),
            ));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(self.theme.muted_foreground),
            ));
        }

        spans.push(separator);
        spans.push(Span::styled(
            Local::now().format("%H:%M:%S").to_string(),
            Style::default().fg(self.theme.muted),
        ));

        Line::from(spans)
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.card_background()));
        Paragraph::new(self.build_content()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_line(bar: StatusBar) -> String {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_phase_labels() {
        let theme = Theme::dark();
        let idle = render_line(StatusBar::new(&theme, Phase::Idle));
        assert!(idle.contains("○ Idle"));
        let loading = render_line(StatusBar::new(&theme, Phase::Loading));
        assert!(loading.contains("● Analyzing"));
        let ready = render_line(StatusBar::new(&theme, Phase::Displayed));
        assert!(ready.contains("● Ready"));
    }

    #[test]
    fn test_hints_rendered() {
        let theme = Theme::dark();
        let line = render_line(StatusBar::new(&theme, Phase::Idle).hint("Tab", "Next"));
        assert!(line.contains("[Tab] Next"));
        assert!(line.contains("CRYPTO PREDICT"));
    }
}
