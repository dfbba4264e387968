// Data loading and export. The only module that touches the filesystem.
pub mod export;
pub mod history;

// Re-export commonly used types
pub use export::{ExportFormat, save_series};
pub use history::{CsvHistory, JsonHistory, LoadPriceHistory, get_history_data, provider_for_path};
