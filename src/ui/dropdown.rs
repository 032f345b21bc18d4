//! Single-select dropdown
//!
//! A closed trigger box showing the current value (or a placeholder) and an
//! option list that opens as an overlay below it.

use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{
    Clear, List, ListItem, ListState, Padding, Paragraph, StatefulWidget, Widget,
};

use crate::themes::Theme;
use crate::ui::panels::{Panel, PanelStyle};

/// Outcome of a key press routed to the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Key not used by the dropdown
    Ignored,
    /// Key consumed, nothing committed
    Handled,
    /// Option at this index was committed
    Selected(usize),
    /// List closed without a change
    Closed,
}

/// Dropdown state
pub struct Dropdown {
    placeholder: &'static str,
    options: Vec<String>,
    selected: Option<usize>,
    highlighted: usize,
    open: bool,
    list_state: ListState,
    max_visible: u16,
}

impl Dropdown {
    pub fn new(placeholder: &'static str, options: Vec<String>) -> Self {
        Self {
            placeholder,
            options,
            selected: None,
            highlighted: 0,
            open: false,
            list_state: ListState::default(),
            max_visible: 8,
        }
    }

    /// Cap the number of rows shown while open
    pub fn max_visible(mut self, rows: u16) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Text shown in the closed trigger
    pub fn display_text(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
            .unwrap_or(self.placeholder)
    }

    /// Open the list, highlighting the current value
    pub fn open(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.highlighted = self.selected.unwrap_or(0);
        self.open = true;
    }

    pub fn handle_key(&mut self, key: KeyCode) -> DropdownEvent {
        if !self.open {
            return match key {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.open();
                    DropdownEvent::Handled
                }
                _ => DropdownEvent::Ignored,
            };
        }

        let last = self.options.len().saturating_sub(1);
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.highlighted = self.highlighted.saturating_sub(1);
                DropdownEvent::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.highlighted = (self.highlighted + 1).min(last);
                DropdownEvent::Handled
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.highlighted = 0;
                DropdownEvent::Handled
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.highlighted = last;
                DropdownEvent::Handled
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.selected = Some(self.highlighted);
                self.open = false;
                DropdownEvent::Selected(self.highlighted)
            }
            KeyCode::Esc => {
                self.open = false;
                DropdownEvent::Closed
            }
            // Swallow everything else so the list behaves modally
            _ => DropdownEvent::Handled,
        }
    }

    /// Render the closed trigger box (3 rows)
    pub fn render_trigger(&self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        let block = Panel::new(theme)
            .radius(theme.radius.md)
            .padding(Padding::ZERO)
            .background(theme.input_background())
            .focused(focused)
            .block();
        let inner = block.inner(area);
        block.render(area, buf);

        let text_color = if self.selected.is_some() {
            theme.foreground
        } else {
            theme.muted_foreground
        };
        let arrow = if self.open { "▲" } else { "▼" };
        let text_width = inner.width.saturating_sub(2) as usize;
        let text: String = self.display_text().chars().take(text_width).collect();
        let padding = text_width.saturating_sub(text.chars().count());

        let line = Line::from(vec![
            Span::styled(text, Style::default().fg(text_color)),
            Span::raw(" ".repeat(padding)),
            Span::styled(format!(" {}", arrow), Style::default().fg(theme.muted_foreground)),
        ]);
        Paragraph::new(line).render(inner, buf);
    }

    /// Render the open option list below `anchor`, clipped to `bounds`
    pub fn render_list(&mut self, anchor: Rect, bounds: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.open {
            return;
        }
        let rows = (self.options.len() as u16).min(self.max_visible);
        let below = bounds.bottom().saturating_sub(anchor.bottom());
        let height = (rows + 2).min(below);
        if height < 3 {
            return;
        }
        let area = Rect::new(anchor.x, anchor.bottom(), anchor.width, height);

        Clear.render(area, buf);
        let block = Panel::new(theme)
            .radius(theme.radius.sm)
            .padding(Padding::ZERO)
            .background(theme.secondary)
            .style(PanelStyle::Elevated)
            .block();

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let marker = if Some(i) == self.selected { "✓ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.primary)),
                    Span::styled(option.as_str(), Style::default().fg(theme.secondary_foreground)),
                ]))
            })
            .collect();

        let highlight = Theme::with_opacity(theme.primary, theme.secondary, 0.25);
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(highlight).bold());

        self.list_state.select(Some(self.highlighted));
        StatefulWidget::render(list, area, buf, &mut self.list_state);
    }
}
