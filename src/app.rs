//! Main application structure and event loop

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::prediction::{PredictionRequest, PredictionResult, Predictor};
use crate::themes::Theme;
use crate::ui::{HelpOverlay, StatusBar};
use crate::views::predictor::PredictorView;
use crate::views::{ViewAction, ViewTrait};

/// Poll interval when nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main application state
pub struct App {
    /// The prediction widget
    view: PredictorView,
    /// Theme
    theme: Theme,
    /// Help overlay
    help_overlay: HelpOverlay,
    /// Background prediction source
    predictor: Predictor,
    /// Finished predictions from background tasks
    results_tx: mpsc::UnboundedSender<PredictionResult>,
    results_rx: mpsc::UnboundedReceiver<PredictionResult>,
    /// Generations spawned but not yet received
    in_flight: usize,
    /// Event poll interval
    tick_rate: Duration,
    /// Should exit?
    should_quit: bool,
}

impl App {
    /// Create new app instance
    pub fn new(settings: &Settings) -> Self {
        let predictor = match settings.seed {
            Some(seed) => Predictor::seeded(settings.simulated_delay(), seed),
            None => Predictor::new(settings.simulated_delay()),
        };
        Self::with_predictor(settings, predictor)
    }

    /// Create an app around a given predictor
    pub fn with_predictor(settings: &Settings, predictor: Predictor) -> Self {
        info!(
            delay_ms = predictor.delay().as_millis() as u64,
            animations = settings.animations,
            "Initializing prediction widget"
        );
        let theme = Theme::default();
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        Self {
            view: PredictorView::new(theme.clone(), settings.animations),
            theme,
            help_overlay: HelpOverlay::new(),
            predictor,
            results_tx,
            results_rx,
            in_flight: 0,
            tick_rate: settings.tick_rate(),
            should_quit: false,
        }
    }

    /// Run a prediction on the runtime; the result comes back on the channel
    fn spawn_prediction(&mut self, request: PredictionRequest) {
        let predictor = self.predictor.clone();
        let tx = self.results_tx.clone();
        self.in_flight += 1;
        debug!(in_flight = self.in_flight, "Spawning prediction task");

        tokio::spawn(async move {
            let result = predictor.generate(request.asset, request.period).await;
            if tx.send(result).is_err() {
                // Receiver gone: the app is shutting down
                debug!("Prediction finished after shutdown");
            }
        });
    }

    /// Move finished predictions into the view
    pub fn drain_results(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.view.complete(result);
        }
    }

    /// Process a ViewAction returned by the view's key handler
    fn process_view_action(&mut self, action: ViewAction) {
        match action {
            ViewAction::Continue => {}
            ViewAction::Quit => {
                self.should_quit = true;
            }
            ViewAction::Predict(request) => {
                self.spawn_prediction(request);
            }
        }
    }

    /// Handle key press; returns true when the app should exit
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Result<bool> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('q') = key {
                self.should_quit = true;
                return Ok(true);
            }
        }

        // Any key closes the help overlay
        if self.help_overlay.visible {
            self.help_overlay.hide();
            return Ok(false);
        }

        if key == KeyCode::Char('?') {
            self.help_overlay.show();
            return Ok(false);
        }

        let action = self.view.handle_key(key)?;
        self.process_view_action(action);
        Ok(self.should_quit)
    }

    /// Draw one frame
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [content, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        if let Err(e) = ViewTrait::render(&mut self.view, frame, content) {
            warn!("View render error: {}", e);
        }

        let status_bar = StatusBar::new(&self.theme, self.view.session().phase())
            .hint("Tab", "Next")
            .hint("Enter", "Select")
            .hint("p", "Predict")
            .hint("?", "Help")
            .hint("q", "Quit");
        frame.render_widget(status_bar, status);

        self.help_overlay.render(area, frame.buffer_mut(), &self.theme);
    }

    /// Run the main event loop
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;

        loop {
            self.drain_results();
            self.view.tick();

            terminal.draw(|f| self.render(f))?;

            // Redraw fast only while something moves on screen
            let timeout = if self.view.is_animating() {
                self.tick_rate
            } else {
                IDLE_POLL
            };

            // Handle events
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key.code, key.modifiers)? {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("Exiting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;

    fn app() -> App {
        let settings = Settings {
            animations: false,
            ..Settings::default()
        };
        App::with_predictor(&settings, Predictor::seeded(Duration::from_millis(1500), 21))
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key, KeyModifiers::NONE).unwrap();
        }
    }

    fn select_bitcoin_24h(app: &mut App) {
        press(
            app,
            &[
                KeyCode::Enter,
                KeyCode::Enter,
                KeyCode::Tab,
                KeyCode::Enter,
                KeyCode::Down,
                KeyCode::Enter,
            ],
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_prediction_arrives_after_delay() {
        let mut app = app();
        select_bitcoin_24h(&mut app);

        press(&mut app, &[KeyCode::Char('p')]);
        assert_eq!(app.view.session().phase(), Phase::Loading);
        assert_eq!(app.in_flight, 1);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        app.drain_results();
        assert_eq!(app.view.session().phase(), Phase::Loading);

        tokio::time::sleep(Duration::from_millis(600)).await;
        app.drain_results();
        assert_eq!(app.view.session().phase(), Phase::Displayed);
        assert_eq!(app.in_flight, 0);

        let result = app.view.session().result().unwrap();
        assert_eq!(result.asset.id, "bitcoin");
        assert_eq!(result.period.value, "24h");
        assert_eq!(
            result.factors,
            vec![
                "Market sentiment analysis",
                "Technical indicators",
                "Trading volume patterns",
                "Historical price movements",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_one_generation_pending() {
        let mut app = app();
        select_bitcoin_24h(&mut app);

        press(&mut app, &[KeyCode::Char('p'), KeyCode::Char('p'), KeyCode::Char('p')]);
        assert_eq!(app.in_flight, 1);

        tokio::time::sleep(Duration::from_millis(1600)).await;
        app.drain_results();
        assert_eq!(app.in_flight, 0);

        // Re-trigger from Displayed
        press(&mut app, &[KeyCode::Char('p')]);
        assert_eq!(app.in_flight, 1);
        assert_eq!(app.view.session().phase(), Phase::Loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_without_selection_spawns_nothing() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('p')]);
        assert_eq!(app.in_flight, 0);
        assert_eq!(app.view.session().phase(), Phase::Idle);
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('?'), KeyModifiers::NONE).unwrap());
        // 'q' only closes the overlay
        assert!(!app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE).unwrap());
        assert!(app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE).unwrap());
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL).unwrap());
    }
}
