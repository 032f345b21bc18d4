//! Mock price prediction generator
//!
//! There is no model behind this: prices, deltas and confidence are drawn
//! uniformly at random after a fixed delay. Every result is marked as
//! simulated so the UI can say so.

use std::ops::Range;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::market::{Asset, Period};

/// Range the current price is drawn from (USD)
pub const PRICE_RANGE: Range<f64> = 1000.0..51000.0;
/// Range the expected change is drawn from (percent)
pub const CHANGE_RANGE: Range<f64> = -10.0..10.0;
/// Range the confidence score is drawn from (percent)
pub const CONFIDENCE_RANGE: Range<f64> = 70.0..100.0;

/// Analysis factors attached to every prediction, in display order
pub const FACTORS: [&str; 4] = [
    "Market sentiment analysis",
    "Technical indicators",
    "Trading volume patterns",
    "Historical price movements",
];

/// Default simulated latency
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Asset/period pair captured when a prediction is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionRequest {
    pub asset: &'static Asset,
    pub period: &'static Period,
}

/// Output of one generation
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub asset: &'static Asset,
    pub period: &'static Period,
    pub current_price: f64,
    pub predicted_price: f64,
    pub change_percent: f64,
    pub confidence: f64,
    pub factors: Vec<String>,
    pub generated_at: DateTime<Local>,
    /// Always true for this generator
    pub simulated: bool,
}

impl PredictionResult {
    /// Sign of the change as displayed (two decimals); zero counts as a gain
    pub fn is_gain(&self) -> bool {
        (self.change_percent * 100.0).round() >= 0.0
    }
}

/// Draw one prediction from `rng`
pub fn sample<R: Rng + ?Sized>(rng: &mut R, request: PredictionRequest) -> PredictionResult {
    let current_price = rng.gen_range(PRICE_RANGE);
    let change_percent = rng.gen_range(CHANGE_RANGE);
    let confidence = rng.gen_range(CONFIDENCE_RANGE);

    PredictionResult {
        asset: request.asset,
        period: request.period,
        current_price,
        predicted_price: current_price * (1.0 + change_percent / 100.0),
        change_percent,
        confidence,
        factors: FACTORS.iter().map(|f| f.to_string()).collect(),
        generated_at: Local::now(),
        simulated: true,
    }
}

/// Simulated predictor with a fixed latency
///
/// Cheap to clone; clones share the same random source so a seeded
/// predictor stays reproducible across spawned tasks.
#[derive(Clone, Debug)]
pub struct Predictor {
    delay: Duration,
    rng: Arc<Mutex<StdRng>>,
}

impl Predictor {
    /// Predictor seeded from OS entropy
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    /// Predictor with a fixed seed
    pub fn seeded(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the simulated latency, then produce a prediction.
    ///
    /// Never fails and cannot be cancelled once awaited to completion.
    pub async fn generate(
        &self,
        asset: &'static Asset,
        period: &'static Period,
    ) -> PredictionResult {
        debug!(asset = asset.id, period = period.value, "Generating prediction");
        tokio::time::sleep(self.delay).await;

        let result = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            sample(&mut *rng, PredictionRequest { asset, period })
        };

        info!(
            asset = asset.id,
            period = period.value,
            change = result.change_percent,
            "Prediction ready"
        );
        result
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
