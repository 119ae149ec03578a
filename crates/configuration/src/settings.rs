use crate::error::ConfigError;
use core_types::ExchangeRateTable;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so an absent `charts.toml` yields a usable configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub exchange_rates: ExchangeRates,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Checks the invariants that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.exchange_rates.to_table()?;

        if self.output.width == 0 || self.output.height == 0 {
            return Err(ConfigError::ValidationError(format!(
                "output size must be non-zero, got {}x{}",
                self.output.width, self.output.height
            )));
        }

        Ok(())
    }
}

/// Units of each currency per 1 EUR.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExchangeRates {
    pub eur: f64,
    pub usd: f64,
    pub yen: f64,
    pub yuan: f64,
}

impl ExchangeRates {
    pub fn to_table(&self) -> Result<ExchangeRateTable, ConfigError> {
        Ok(ExchangeRateTable::new(self.eur, self.usd, self.yen, self.yuan)?)
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        let table = ExchangeRateTable::DEFAULT;
        Self {
            eur: table.rate(core_types::CurrencyCode::Eur),
            usd: table.rate(core_types::CurrencyCode::Usd),
            yen: table.rate(core_types::CurrencyCode::Yen),
            yuan: table.rate(core_types::CurrencyCode::Yuan),
        }
    }
}

/// Image encoding of rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

/// Where and how chart images are written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub directory: PathBuf,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
}

impl OutputSettings {
    /// `<directory>/<stem>.<extension>` for the configured format.
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.directory
            .join(Path::new(stem).with_extension(self.format.extension()))
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            format: OutputFormat::Svg,
            width: 1920,
            height: 1080,
        }
    }
}

/// Log destinations. Console logging is always on; `directory` adds a daily-rolling file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "simcharts.log".to_string(),
        }
    }
}
