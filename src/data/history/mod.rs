pub mod csv_version;
pub mod json_version;

use anyhow::{Result, anyhow};
use std::path::Path;

use crate::config::DEBUG_FLAGS;
use crate::domain::PriceHistory;

pub use csv_version::CsvHistory;
pub use json_version::JsonHistory;

pub trait LoadPriceHistory {
    // Either load an ordered history OR return an anyhow::error
    fn load_history(&self) -> Result<PriceHistory>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Try each provider in order and keep the first that succeeds.
pub fn get_history_data(
    implementations: &[Box<dyn LoadPriceHistory>],
) -> Result<(PriceHistory, &'static str)> {
    for imp in implementations {
        match imp.load_history() {
            Ok(history) => {
                let signature = imp.signature();
                if DEBUG_FLAGS.print_history_load {
                    log::info!(
                        "Loaded {} daily prices using: {}",
                        history.len(),
                        signature
                    );
                }
                let missing = history.missing_days();
                if missing > 0 {
                    log::warn!(
                        "History from {} has {} missing day(s) between {:?} and {:?}",
                        signature,
                        missing,
                        history.first_date(),
                        history.latest().map(|p| p.date)
                    );
                }
                return Ok((history, signature));
            }
            Err(e) => {
                log::info!("Error with history provider {}: {:#}", imp.signature(), e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All history providers failed to load data"))
}

/// Pick a provider from the file extension (`.json` -> JSON, anything else -> CSV)
pub fn provider_for_path(path: &Path) -> Box<dyn LoadPriceHistory> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Box::new(JsonHistory::new(path))
    } else {
        Box::new(CsvHistory::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::forecast::ymd;
    use crate::domain::PricePoint;

    struct Failing;
    impl LoadPriceHistory for Failing {
        fn load_history(&self) -> Result<PriceHistory> {
            Err(anyhow!("offline"))
        }
        fn signature(&self) -> &'static str {
            "Failing"
        }
    }

    struct Fixed;
    impl LoadPriceHistory for Fixed {
        fn load_history(&self) -> Result<PriceHistory> {
            Ok(PriceHistory::new(vec![PricePoint::new(ymd(2024, 1, 1), 42_000.0)])?)
        }
        fn signature(&self) -> &'static str {
            "Fixed"
        }
    }

    #[test]
    fn test_fallback_order() {
        let providers: Vec<Box<dyn LoadPriceHistory>> = vec![Box::new(Failing), Box::new(Fixed)];
        let (history, signature) = get_history_data(&providers).unwrap();
        assert_eq!(signature, "Fixed");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_all_fail() {
        let providers: Vec<Box<dyn LoadPriceHistory>> = vec![Box::new(Failing)];
        assert!(get_history_data(&providers).is_err());
        assert!(get_history_data(&[]).is_err());
    }

    #[test]
    fn test_provider_for_path() {
        assert_eq!(provider_for_path(Path::new("a/b.JSON")).signature(), "JSON file");
        assert_eq!(provider_for_path(Path::new("a/b.csv")).signature(), "CSV file");
        assert_eq!(provider_for_path(Path::new("noext")).signature(), "CSV file");
    }
}
