//! Selection and prediction lifecycle
//!
//! Owns everything the widget remembers between frames: the two picks, the
//! loading flag and the last result. The phase goes `Idle -> Loading ->
//! Displayed` and re-enters `Loading` from `Displayed` on every new trigger.

use tracing::debug;

use crate::market::{Asset, Period};
use crate::prediction::{PredictionRequest, PredictionResult};

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing generated yet
    Idle,
    /// A generation is in flight
    Loading,
    /// A result is on screen
    Displayed,
}

/// Why the trigger is currently disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    MissingAsset,
    MissingPeriod,
    Loading,
}

impl Blocked {
    /// One-line hint shown under the controls
    pub fn hint(&self) -> &'static str {
        match self {
            Blocked::MissingAsset => "Choose a cryptocurrency to continue",
            Blocked::MissingPeriod => "Select a time period to continue",
            Blocked::Loading => "Analyzing market data...",
        }
    }
}

/// Widget state
#[derive(Debug, Clone)]
pub struct PredictionSession {
    asset: Option<&'static Asset>,
    period: Option<&'static Period>,
    loading: bool,
    result: Option<PredictionResult>,
}

impl PredictionSession {
    pub fn new() -> Self {
        Self {
            asset: None,
            period: None,
            loading: false,
            result: None,
        }
    }

    pub fn asset(&self) -> Option<&'static Asset> {
        self.asset
    }

    pub fn period(&self) -> Option<&'static Period> {
        self.period
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn select_asset(&mut self, asset: &'static Asset) {
        debug!(asset = asset.id, "Asset selected");
        self.asset = Some(asset);
    }

    pub fn select_period(&mut self, period: &'static Period) {
        debug!(period = period.value, "Period selected");
        self.period = Some(period);
    }

    /// Current phase, derived from the loading flag and stored result
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.result.is_some() {
            Phase::Displayed
        } else {
            Phase::Idle
        }
    }

    /// Reason a trigger would be refused right now, if any
    pub fn blocked(&self) -> Option<Blocked> {
        if self.asset.is_none() {
            Some(Blocked::MissingAsset)
        } else if self.period.is_none() {
            Some(Blocked::MissingPeriod)
        } else if self.loading {
            Some(Blocked::Loading)
        } else {
            None
        }
    }

    pub fn can_trigger(&self) -> bool {
        self.blocked().is_none()
    }

    /// Enter `Loading` and hand back the request to run.
    ///
    /// Refused (and the state left untouched) when a pick is missing or a
    /// generation is already pending. The stored result stays visible until
    /// the new one arrives.
    pub fn trigger(&mut self) -> Result<PredictionRequest, Blocked> {
        if let Some(reason) = self.blocked() {
            debug!(?reason, "Trigger refused");
            return Err(reason);
        }
        // blocked() returned None, so both picks are present
        let (Some(asset), Some(period)) = (self.asset, self.period) else {
            return Err(Blocked::MissingAsset);
        };
        self.loading = true;
        Ok(PredictionRequest { asset, period })
    }

    /// Store a finished result and leave `Loading`
    pub fn complete(&mut self, result: PredictionResult) {
        self.loading = false;
        self.result = Some(result);
    }
}

impl Default for PredictionSession {
    fn default() -> Self {
        Self::new()
    }
}
