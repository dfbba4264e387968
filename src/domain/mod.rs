// Domain types and value objects
pub mod date_index;
pub mod errors;
pub mod price_point;

// Re-export commonly used types
pub use date_index::DateIndex;
pub use errors::{ErrorKind, ForecastError, checked_log2};
pub use price_point::{HistoryError, PriceHistory, PricePoint};
