// Forecast models: pure functions of (date, parameters, config).
// Nothing in here touches disk or network.

pub mod bias_bands;
pub mod power_law;
pub mod series;
pub mod signal;
pub mod trace;

// Re-export key types for convenience
pub use bias_bands::{BiasBandCalculator, BiasBands};
pub use power_law::{ModelParameters, PowerLawModel, Prediction};
pub use series::{ForecastSeries, SeriesAssembler, SeriesRow};
pub use signal::{Signal, SignalDecision, SignalEvaluator};
pub use trace::{Scale, Trace};
