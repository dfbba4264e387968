use serde::Serialize;
use std::fmt;

use crate::config::SignalConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Get a human-readable description of this signal
    pub fn description(&self) -> &'static str {
        match self {
            Signal::Buy => "Price too low today, BUY time?",
            Signal::Sell => "Price too high today, SELL time?",
            Signal::Hold => "Moderate price today, Hold?",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
            Signal::Hold => write!(f, "HOLD"),
        }
    }
}

/// Signal plus the thresholds it was judged against (shown alongside it)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalDecision {
    pub signal: Signal,
    pub buy_threshold: f64,
    pub sell_threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalEvaluator {
    config: SignalConfig,
}

impl SignalEvaluator {
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    /// `predicted_price` must come from the model evaluated at the live price's date.
    pub fn evaluate(&self, live_price: f64, predicted_price: f64) -> SignalDecision {
        let buy_threshold = predicted_price * self.config.buy_multiplier;
        let sell_threshold = predicted_price * self.config.sell_multiplier;

        // Buy is checked first, so it wins if the thresholds ever cross
        let signal = if live_price < buy_threshold {
            Signal::Buy
        } else if live_price > sell_threshold {
            Signal::Sell
        } else {
            Signal::Hold
        };

        SignalDecision {
            signal,
            buy_threshold,
            sell_threshold,
        }
    }
}
