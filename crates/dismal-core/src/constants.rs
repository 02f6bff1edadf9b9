/// Simulator version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Divisor turning a percent-output transform result into a multiplier.
pub const PERCENT_SCALE: f64 = 100.0;

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "DISMAL_LOG";
