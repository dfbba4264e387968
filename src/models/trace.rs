use serde::{Deserialize, Serialize};
use std::fmt;

/// The curves drawn for every scale. Lookups go through this tag, never a
/// positional curve number.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum Trace {
    Observed,
    Predicted,
    PlusBand,
    MinusBand,
}

impl Trace {
    /// Label used in hover text. Observed values carry no label.
    pub fn hover_label(&self) -> Option<&'static str> {
        match self {
            Trace::Observed => None,
            Trace::Predicted => Some("pred"),
            Trace::PlusBand => Some("plus bias"),
            Trace::MinusBand => Some("minus bias"),
        }
    }
}

/// Axis scale of a chart
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
)]
pub enum Scale {
    /// Date vs price
    #[default]
    Linear,
    /// Date vs log2(price)
    Log2,
    /// dayth (log axis) vs log2(price)
    LogLog,
}

impl Scale {
    pub fn is_log_price(&self) -> bool {
        !matches!(self, Scale::Linear)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scale::Linear => write!(f, "Linear Scale"),
            Scale::Log2 => write!(f, "Log2 Scale"),
            Scale::LogLog => write!(f, "Log-Log Scale"),
        }
    }
}
