//! Widget modules for UI components

pub mod prediction_panel;
