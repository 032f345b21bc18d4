//! Prediction result panel
//!
//! Pure rendering of a `PredictionResult`: prices, expected change,
//! confidence and the analysis factor list.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::prediction::PredictionResult;
use crate::themes::{Motion, Theme};
use crate::ui::animation::apply_opacity;
use crate::ui::borders::Separators;
use crate::ui::panels::Card;

/// Below this width the two columns stack vertically
const TWO_COLUMN_MIN_WIDTH: u16 = 64;

/// Opacity of an outdated result while a new one loads
const STALE_OPACITY: f32 = 0.5;

/// Price with a dollar sign and two decimals
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Percent change with two decimals
pub fn format_change(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Confidence rounded to a whole percent
pub fn format_confidence(value: f64) -> String {
    format!("{:.0}%", value)
}

/// Rows needed to show a result without clipping at `width`
pub fn required_height(width: u16) -> u16 {
    if width >= TWO_COLUMN_MIN_WIDTH {
        // borders + 5 body rows + spacer + footer
        9
    } else {
        // borders + 4 metric rows + spacer + 5 factor rows + spacer + footer
        15
    }
}

/// Result panel widget
pub struct PredictionPanel<'a> {
    result: &'a PredictionResult,
    theme: &'a Theme,
    motion: Motion,
    /// A newer prediction is being generated
    stale: bool,
}

impl<'a> PredictionPanel<'a> {
    pub fn new(result: &'a PredictionResult, theme: &'a Theme) -> Self {
        Self {
            result,
            theme,
            motion: Motion::REST,
            stale: false,
        }
    }

    /// Apply an in-flight entrance animation
    pub fn motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn stale(mut self, stale: bool) -> Self {
        self.stale = stale;
        self
    }

    fn title(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(" $ ", Style::default().fg(self.theme.primary).bold()),
            Span::styled(
                format!("Prediction for {} ", self.result.asset.name),
                Style::default().fg(self.theme.foreground).bold(),
            ),
            Span::styled(
                format!("· {} ", self.result.period.label),
                Style::default().fg(self.theme.muted_foreground),
            ),
        ];
        if self.result.simulated {
            spans.push(Span::styled(
                " SIMULATED ",
                Style::default()
                    .fg(self.theme.background)
                    .bg(self.theme.warning)
                    .bold(),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn metric_lines(&self, width: u16) -> Vec<Line<'a>> {
        let result = self.result;
        let change_color = self.theme.change_color(result.is_gain());
        let arrow = if result.is_gain() {
            Separators::TRIANGLE_UP
        } else {
            Separators::TRIANGLE_DOWN
        };

        let rows = [
            ("Current Price:", format_price(result.current_price), self.theme.foreground),
            ("Predicted Price:", format_price(result.predicted_price), self.theme.foreground),
            (
                "Expected Change:",
                format!("{} {}", arrow, format_change(result.change_percent)),
                change_color,
            ),
            ("Confidence:", format_confidence(result.confidence), self.theme.foreground),
        ];

        rows.into_iter()
            .map(|(label, value, color)| {
                // Label left, value right-aligned within the column
                let gap = (width as usize)
                    .saturating_sub(label.chars().count() + value.chars().count())
                    .max(1);
                Line::from(vec![
                    Span::styled(label, Style::default().fg(self.theme.muted_foreground)),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(value, Style::default().fg(color).bold()),
                ])
            })
            .collect()
    }

    fn factor_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(
            "◷ Analysis Factors:",
            Style::default().fg(self.theme.foreground).bold(),
        ))];
        lines.extend(self.result.factors.iter().map(|factor| {
            Line::from(Span::styled(
                format!("{} {}", Separators::BULLET, factor),
                Style::default().fg(self.theme.muted_foreground),
            ))
        }));
        lines
    }

    fn footer(&self) -> Line<'a> {
        Line::from(Span::styled(
            format!(
                "Generated {} · simulated output, not financial advice",
                self.result.generated_at.format("%H:%M:%S")
            ),
            Style::default().fg(self.theme.muted).italic(),
        ))
    }
}

impl<'a> Widget for PredictionPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Slide: start lower, shrink from the bottom
        let offset = self.motion.offset_rows().min(area.height);
        let area = Rect {
            y: area.y + offset,
            height: area.height - offset,
            ..area
        };
        if area.height < 3 {
            return;
        }

        let block = Card::new(self.theme)
            .title(self.title())
            .muted(self.stale)
            .block();
        let inner = block.inner(area);
        block.render(area, buf);

        let [body, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)])
            .areas(inner);

        if inner.width >= TWO_COLUMN_MIN_WIDTH {
            let [left, _, right] = Layout::horizontal([
                Constraint::Percentage(48),
                Constraint::Percentage(4),
                Constraint::Percentage(48),
            ])
            .areas(body);
            Paragraph::new(self.metric_lines(left.width)).render(left, buf);
            Paragraph::new(self.factor_lines()).render(right, buf);
        } else {
            let [top, _, bottom] = Layout::vertical([
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(body);
            Paragraph::new(self.metric_lines(top.width)).render(top, buf);
            Paragraph::new(self.factor_lines()).render(bottom, buf);
        }

        Paragraph::new(self.footer()).render(footer, buf);

        let opacity = if self.stale {
            self.motion.opacity * STALE_OPACITY
        } else {
            self.motion.opacity
        };
        apply_opacity(buf, area, opacity, self.theme);
    }
}
