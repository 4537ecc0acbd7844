//! Configuration types for chart-risk

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::instrument::Instrument;
use crate::telemetry::LogFormat;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub risk: RiskConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub instruments: Vec<Instrument>,
}

/// Risk budget configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    /// Percent of balance that may be lost on one trade (0.5 = 0.5%)
    #[serde(default = "default_allowable_loss_rate")]
    pub allowable_loss_rate: Decimal,

    /// Distance from a marker that still counts as anchored, in pips
    #[serde(default = "default_threshold_pips")]
    pub threshold_pips: Decimal,
}

fn default_allowable_loss_rate() -> Decimal {
    Decimal::new(5, 1) // 0.5%
}
fn default_threshold_pips() -> Decimal {
    Decimal::new(10, 0)
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            allowable_loss_rate: default_allowable_loss_rate(),
            threshold_pips: default_threshold_pips(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every instrument definition
    pub fn validate(&self) -> anyhow::Result<()> {
        for instrument in &self.instruments {
            instrument.validate()?;
        }
        Ok(())
    }

    /// Look up an instrument by symbol (case-insensitive)
    pub fn instrument(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments
            .iter()
            .find(|i| i.symbol.eq_ignore_ascii_case(symbol))
    }
}
