//! File locations and serialization settings

/// Where the history files live and what the exported series is called
pub struct PersistenceConfig {
    /// Runtime config (model coefficients + data paths)
    pub app_config_path: &'static str,
    /// Default location of the daily (Date, Open) history
    pub default_history_path: &'static str,
    /// Default stem for exported series (extension appended per format)
    pub export_filename_without_ext: &'static str,
    /// Start of the freshly fetched history, everything before comes from the legacy file
    pub default_start_date: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app_config_path: "configs.json",
    default_history_path: "data/btc_history.csv",
    export_filename_without_ext: "powerlaw_series",
    default_start_date: "2024-07-26",
};

/// Generate the export filename for a given format extension.
/// Example: "powerlaw_series.csv"
pub fn export_filename(extension: &str) -> String {
    format!("{}.{}", PERSISTENCE.export_filename_without_ext, extension)
}
