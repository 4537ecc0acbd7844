//! Telemetry module
//!
//! Logging and sizing counters

mod counters;
mod logging;

pub use counters::{increment, CounterMetric};
pub(crate) use counters::{record_cancelled, record_min_volume_floor, record_plan};
pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)
}
