//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit a line per provider attempt while loading history.
    pub print_history_load: bool,
    /// Emit assembly summaries (row counts, boundary dates).
    pub print_assembly: bool,
    /// Emit every single-date prediction query and its outcome.
    pub print_queries: bool,
    /// Emit export file details.
    pub print_export: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_history_load: false,
    print_assembly: false,
    print_queries: false,
    print_export: false,
};
