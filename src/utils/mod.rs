pub mod format_utils;
pub mod time_utils;

pub use time_utils::TimeUtils;
