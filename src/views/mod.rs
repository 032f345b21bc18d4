//! View modules

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::prelude::*;

use crate::prediction::PredictionRequest;

pub mod predictor;

/// Action returned by a view's key handler
#[derive(Debug, PartialEq)]
pub enum ViewAction {
    /// Key handled, stay in current view
    Continue,
    /// Request to leave the application
    Quit,
    /// Start generating a prediction in the background
    Predict(PredictionRequest),
}

/// Trait for views that can be rendered
pub trait ViewTrait {
    /// Render the view
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;

    /// Handle key input
    fn handle_key(&mut self, _key: KeyCode) -> Result<ViewAction> {
        // Default: don't handle
        Ok(ViewAction::Continue)
    }

    /// Advance time-based state (spinners, animations)
    fn tick(&mut self) {}
}
