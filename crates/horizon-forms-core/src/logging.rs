//! Logging facilities for Horizon Forms.
//!
//! Horizon Forms uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_forms=debug")
//!     .init();
//! ```
//!
//! Every module logs under one of the [`targets`] below, so a host can turn
//! on a single widget without drowning in the others.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_forms_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_forms_core::signal";
    /// Deferred scheduler target.
    pub const SCHEDULER: &str = "horizon_forms_core::scheduler";
    /// Validation rule chain target.
    pub const VALIDATION: &str = "horizon_forms::validation";
    /// Input widget target.
    pub const INPUT: &str = "horizon_forms::input";
    /// Date picker target.
    pub const DATE_PICKER: &str = "horizon_forms::date_picker";
    /// Hour picker target.
    pub const HOUR_PICKER: &str = "horizon_forms::hour_picker";
    /// Translation catalog target.
    pub const I18N: &str = "horizon_forms::i18n";
    /// Initial data source target.
    pub const DATA: &str = "horizon_forms::data";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_forms::config";
}
