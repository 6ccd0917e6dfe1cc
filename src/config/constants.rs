//! Constants for blade-helpers

/// Config file looked up when `--config` is not given
pub const CONFIG_FILE: &str = "blade.json";

/// Environment variable read for the log filter
pub const LOG_ENV: &str = "RUST_LOG";

/// Log filter used when `LOG_ENV` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";
