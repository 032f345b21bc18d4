//! Prediction view - pick an asset and a horizon, get a (simulated) forecast
//!
//! Three controls sit in a row: the asset picker, the period picker and the
//! trigger button. Once a result exists it is shown in a card below them.

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};
use tracing::{debug, info};

use crate::market::{ASSETS, PERIODS};
use crate::prediction::PredictionResult;
use crate::session::{Blocked, PredictionSession};
use crate::themes::Theme;
use crate::ui::animation::{apply_opacity, AnimationSlot};
use crate::ui::borders::Separators;
use crate::ui::button::Button;
use crate::ui::dropdown::{Dropdown, DropdownEvent};
use crate::ui::panels::Panel;
use crate::widgets::prediction_panel::{self, PredictionPanel};

use super::{ViewAction, ViewTrait};

/// Below this width the controls stack vertically
const ROW_LAYOUT_MIN_WIDTH: u16 = 72;

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Asset,
    Period,
    Button,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Asset => Focus::Period,
            Focus::Period => Focus::Button,
            Focus::Button => Focus::Asset,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Asset => Focus::Button,
            Focus::Period => Focus::Asset,
            Focus::Button => Focus::Period,
        }
    }
}

/// The prediction widget
pub struct PredictorView {
    theme: Theme,
    session: PredictionSession,
    asset_picker: Dropdown,
    period_picker: Dropdown,
    focus: Focus,
    /// Whole-view fade on first render
    entrance: AnimationSlot,
    /// Result card slide when a new result lands
    reveal: AnimationSlot,
    animations: bool,
    tick: u64,
}

impl PredictorView {
    pub fn new(theme: Theme, animations: bool) -> Self {
        let asset_picker =
            Dropdown::new("Choose crypto", ASSETS.iter().map(|a| a.to_string()).collect())
                .max_visible(10);
        let period_picker =
            Dropdown::new("Select period", PERIODS.iter().map(|p| p.label.to_string()).collect());

        let mut entrance = AnimationSlot::default();
        if animations {
            entrance.play(&theme.fade_in);
        }

        Self {
            theme,
            session: PredictionSession::new(),
            asset_picker,
            period_picker,
            focus: Focus::Asset,
            entrance,
            reveal: AnimationSlot::default(),
            animations,
            tick: 0,
        }
    }

    pub fn session(&self) -> &PredictionSession {
        &self.session
    }

    /// Store a finished prediction
    pub fn complete(&mut self, result: PredictionResult) {
        info!(asset = result.asset.id, period = result.period.value, "Displaying prediction");
        self.session.complete(result);
        if self.animations {
            self.reveal.play(&self.theme.slide_up);
        }
    }

    /// Any animation or spinner that needs frequent redraws
    pub fn is_animating(&self) -> bool {
        self.session.is_loading() || self.entrance.is_animating() || self.reveal.is_animating()
    }

    fn try_predict(&mut self) -> ViewAction {
        match self.session.trigger() {
            Ok(request) => {
                info!(
                    asset = request.asset.id,
                    period = request.period.value,
                    "Prediction requested"
                );
                ViewAction::Predict(request)
            }
            Err(reason) => {
                debug!(?reason, "Prediction not started");
                ViewAction::Continue
            }
        }
    }

    fn open_picker(&mut self) -> Option<&mut Dropdown> {
        if self.asset_picker.is_open() {
            Some(&mut self.asset_picker)
        } else if self.period_picker.is_open() {
            Some(&mut self.period_picker)
        } else {
            None
        }
    }

    fn focused_picker(&mut self) -> Option<&mut Dropdown> {
        match self.focus {
            Focus::Asset => Some(&mut self.asset_picker),
            Focus::Period => Some(&mut self.period_picker),
            Focus::Button => None,
        }
    }

    fn apply_pick(&mut self, event: DropdownEvent) {
        if let DropdownEvent::Selected(index) = event {
            match self.focus {
                Focus::Asset => {
                    if let Some(asset) = ASSETS.get(index) {
                        self.session.select_asset(asset);
                    }
                }
                Focus::Period => {
                    if let Some(period) = PERIODS.get(index) {
                        self.session.select_period(period);
                    }
                }
                Focus::Button => {}
            }
        }
    }

    fn button_label(&self) -> String {
        if self.session.is_loading() {
            format!("{} Analyzing...", Separators::spinner(self.tick))
        } else {
            "Get Prediction".to_string()
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let header = Line::from(vec![
            Span::styled("↗ ", Style::default().fg(self.theme.primary).bold()),
            Span::styled(
                "Crypto Price Prediction",
                Style::default().fg(self.theme.foreground).bold(),
            ),
        ]);
        Paragraph::new(header).render(area, buf);
    }

    fn render_label(&self, text: &str, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            text.to_string(),
            Style::default().fg(self.theme.foreground),
        ))
        .render(area, buf);
    }

    /// Render the three controls; returns the picker trigger areas
    fn render_controls(&self, area: Rect, buf: &mut Buffer) -> (Rect, Rect) {
        let columns: Vec<Rect> = if area.width >= ROW_LAYOUT_MIN_WIDTH {
            Layout::horizontal([Constraint::Ratio(1, 3); 3])
                .spacing(2)
                .split(area)
                .to_vec()
        } else {
            Layout::vertical([Constraint::Length(4); 3]).split(area).to_vec()
        };

        let split = |column: Rect| -> (Rect, Rect) {
            let [label, control] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(column);
            (label, control)
        };

        let (asset_label, asset_area) = split(columns[0]);
        let (period_label, period_area) = split(columns[1]);
        let (_, button_area) = split(columns[2]);

        self.render_label("Select Cryptocurrency", asset_label, buf);
        self.asset_picker
            .render_trigger(asset_area, buf, &self.theme, self.focus == Focus::Asset);

        self.render_label("Time Period", period_label, buf);
        self.period_picker
            .render_trigger(period_area, buf, &self.theme, self.focus == Focus::Period);

        let label = self.button_label();
        Button::new(&label)
            .enabled(self.session.can_trigger())
            .focused(self.focus == Focus::Button)
            .render(button_area, buf, &self.theme);

        (asset_area, period_area)
    }

    fn render_hint(&self, area: Rect, buf: &mut Buffer) {
        let line = match self.session.blocked() {
            Some(Blocked::Loading) => Line::from(Span::styled(
                Blocked::Loading.hint(),
                Style::default().fg(self.theme.primary),
            )),
            Some(reason) => Line::from(Span::styled(
                reason.hint(),
                Style::default().fg(self.theme.muted_foreground),
            )),
            None => {
                let mut spans = Vec::new();
                if let (Some(asset), Some(period)) = (self.session.asset(), self.session.period())
                {
                    spans.push(Span::styled(
                        format!("{} · {}  ", asset, period),
                        Style::default().fg(self.theme.foreground),
                    ));
                }
                spans.push(Span::styled("[Enter/p] ", Style::default().fg(self.theme.primary)));
                spans.push(Span::styled(
                    "Generate a simulated prediction",
                    Style::default().fg(self.theme.muted_foreground),
                ));
                Line::from(spans)
            }
        };
        Paragraph::new(line).render(area, buf);
    }

    /// Draw the whole widget into a buffer
    pub fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.background));

        let card = Panel::new(&self.theme).padding(ratatui::widgets::Padding::new(2, 2, 1, 0));
        let block = card.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let controls_height = if inner.width >= ROW_LAYOUT_MIN_WIDTH { 4 } else { 12 };
        let [header, _, controls, hint, _, result] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(controls_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        self.render_header(header, buf);
        let (asset_area, period_area) = self.render_controls(controls, buf);
        self.render_hint(hint, buf);

        if let Some(prediction) = self.session.result() {
            let height = prediction_panel::required_height(result.width).min(result.height);
            let panel_area = Rect { height, ..result };
            PredictionPanel::new(prediction, &self.theme)
                .motion(self.reveal.motion())
                .stale(self.session.is_loading())
                .render(panel_area, buf);
        }

        // Open lists draw over everything below their trigger
        self.asset_picker.render_list(asset_area, inner, buf, &self.theme);
        self.period_picker.render_list(period_area, inner, buf, &self.theme);

        apply_opacity(buf, area, self.entrance.motion().opacity, &self.theme);
    }
}

impl ViewTrait for PredictorView {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw(area, frame.buffer_mut());
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<ViewAction> {
        // An open list gets every key first
        if let Some(picker) = self.open_picker() {
            let event = picker.handle_key(key);
            self.apply_pick(event);
            return Ok(ViewAction::Continue);
        }

        let action = match key {
            KeyCode::Char('q') | KeyCode::Esc => ViewAction::Quit,
            KeyCode::Tab | KeyCode::Right => {
                self.focus = self.focus.next();
                ViewAction::Continue
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.focus = self.focus.prev();
                ViewAction::Continue
            }
            KeyCode::Char('p') => self.try_predict(),
            KeyCode::Enter | KeyCode::Char(' ') if self.focus == Focus::Button => {
                self.try_predict()
            }
            _ => {
                if let Some(picker) = self.focused_picker() {
                    picker.handle_key(key);
                }
                ViewAction::Continue
            }
        };
        Ok(action)
    }

    fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.entrance.cleanup();
        self.reveal.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::sample;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn view() -> PredictorView {
        PredictorView::new(Theme::dark(), false)
    }

    fn press(view: &mut PredictorView, keys: &[KeyCode]) -> Vec<ViewAction> {
        keys.iter().map(|k| view.handle_key(*k).unwrap()).collect()
    }

    /// Select bitcoin and 24 Hours through the keyboard
    fn select_bitcoin_24h(view: &mut PredictorView) {
        press(
            view,
            &[
                KeyCode::Enter, // open asset list, bitcoin highlighted
                KeyCode::Enter, // commit bitcoin
                KeyCode::Tab,
                KeyCode::Enter, // open period list
                KeyCode::Down,
                KeyCode::Enter, // commit 24 Hours
                KeyCode::Tab,
            ],
        );
    }

    fn screen(view: &mut PredictorView, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                ViewTrait::render(view, f, area).unwrap();
            })
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_keyboard_selection_and_predict() {
        let mut view = view();
        select_bitcoin_24h(&mut view);

        assert_eq!(view.focus, Focus::Button);
        assert_eq!(view.session().asset().map(|a| a.id), Some("bitcoin"));
        assert_eq!(view.session().period().map(|p| p.value), Some("24h"));

        match view.handle_key(KeyCode::Enter).unwrap() {
            ViewAction::Predict(request) => {
                assert_eq!(request.asset.id, "bitcoin");
                assert_eq!(request.period.value, "24h");
            }
            other => panic!("expected Predict, got {:?}", other),
        }
        assert!(view.session().is_loading());
    }

    #[test]
    fn test_predict_without_selection_does_nothing() {
        let mut view = view();
        assert_eq!(view.handle_key(KeyCode::Char('p')).unwrap(), ViewAction::Continue);
        assert!(!view.session().is_loading());
        assert!(view.session().result().is_none());

        // Asset only
        press(&mut view, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(view.handle_key(KeyCode::Char('p')).unwrap(), ViewAction::Continue);
        assert!(!view.session().is_loading());
    }

    #[test]
    fn test_second_trigger_while_loading_is_ignored() {
        let mut view = view();
        select_bitcoin_24h(&mut view);
        assert!(matches!(view.handle_key(KeyCode::Char('p')).unwrap(), ViewAction::Predict(_)));
        assert_eq!(view.handle_key(KeyCode::Char('p')).unwrap(), ViewAction::Continue);
        assert_eq!(view.handle_key(KeyCode::Enter).unwrap(), ViewAction::Continue);
    }

    #[test]
    fn test_open_picker_swallows_quit() {
        let mut view = view();
        press(&mut view, &[KeyCode::Enter]);
        assert_eq!(view.handle_key(KeyCode::Char('q')).unwrap(), ViewAction::Continue);
        // Esc closes the list first, then quits
        assert_eq!(view.handle_key(KeyCode::Esc).unwrap(), ViewAction::Continue);
        assert_eq!(view.handle_key(KeyCode::Esc).unwrap(), ViewAction::Quit);
        assert!(view.session().asset().is_none());
    }

    #[test]
    fn test_focus_cycles() {
        let mut view = view();
        press(&mut view, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(view.focus, Focus::Asset);
        press(&mut view, &[KeyCode::BackTab]);
        assert_eq!(view.focus, Focus::Button);
        press(&mut view, &[KeyCode::Left]);
        assert_eq!(view.focus, Focus::Period);
    }

    #[test]
    fn test_render_idle_screen() {
        let mut view = view();
        let text = screen(&mut view, 100, 30);
        assert!(text.contains("Crypto Price Prediction"));
        assert!(text.contains("Choose crypto"));
        assert!(text.contains("Select period"));
        assert!(text.contains("Get Prediction"));
        assert!(text.contains("Choose a cryptocurrency to continue"));
        assert!(!text.contains("Prediction for"));
    }

    #[test]
    fn test_render_loading_then_result() {
        let mut view = view();
        select_bitcoin_24h(&mut view);
        let request = match view.handle_key(KeyCode::Char('p')).unwrap() {
            ViewAction::Predict(request) => request,
            other => panic!("expected Predict, got {:?}", other),
        };

        let loading = screen(&mut view, 100, 30);
        assert!(loading.contains("Analyzing..."));
        assert!(loading.contains("Bitcoin (BTC)"));

        let mut rng = StdRng::seed_from_u64(8);
        view.complete(sample(&mut rng, request));
        let shown = screen(&mut view, 100, 30);
        assert!(shown.contains("Prediction for Bitcoin"));
        assert!(shown.contains("SIMULATED"));
        assert!(shown.contains("Get Prediction"));
        assert!(shown.contains("• Market sentiment analysis"));
    }

    #[test]
    fn test_render_ready_hint_names_selection() {
        let mut view = view();
        select_bitcoin_24h(&mut view);
        let text = screen(&mut view, 100, 30);
        assert!(text.contains("Bitcoin (BTC) · 24 Hours"));
        assert!(text.contains("[Enter/p] Generate a simulated prediction"));
    }

    #[test]
    fn test_render_open_list() {
        let mut view = view();
        press(&mut view, &[KeyCode::Enter]);
        let text = screen(&mut view, 100, 30);
        assert!(text.contains("Ethereum (ETH)"));
    }

    #[test]
    fn test_render_narrow_terminal() {
        let mut view = view();
        let text = screen(&mut view, 50, 30);
        assert!(text.contains("Choose crypto"));
        assert!(text.contains("Get Prediction"));
    }
}
