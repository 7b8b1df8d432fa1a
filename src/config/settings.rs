use crate::config::toml_config::TomlConfig;
use crate::domain::model::{Algorithm, ReportFormat};
use crate::domain::ports::BenchConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_ITERATIONS: u64 = 30_000_000;
pub const DEFAULT_INPUT_SIZE: usize = 97;

/// Largest element count a `Vec<i32>` can address.
pub const MAX_INPUT_SIZE: usize = isize::MAX as usize / std::mem::size_of::<i32>();

/// Fully resolved settings: defaults, then config file, then CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchSettings {
    pub iterations: u64,
    pub input_size: usize,
    pub algorithm: Algorithm,
    pub input_path: Option<PathBuf>,
    pub report: ReportFormat,
    pub monitor: bool,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            input_size: DEFAULT_INPUT_SIZE,
            algorithm: Algorithm::default(),
            input_path: None,
            report: ReportFormat::default(),
            monitor: false,
        }
    }
}

impl BenchSettings {
    pub fn merge_toml(mut self, config: &TomlConfig) -> Self {
        let benchmark = &config.benchmark;
        if let Some(iterations) = benchmark.iterations {
            self.iterations = iterations;
        }
        if let Some(input_size) = benchmark.input_size {
            self.input_size = input_size;
        }
        if let Some(algorithm) = benchmark.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(path) = config.input_path() {
            self.input_path = Some(path.to_path_buf());
        }
        if let Some(format) = config.report_format() {
            self.report = format;
        }
        if let Some(enabled) = config.monitoring_enabled() {
            self.monitor = enabled;
        }
        self
    }

    pub fn input_path(&self) -> Option<&Path> {
        self.input_path.as_deref()
    }
}

impl BenchConfig for BenchSettings {
    fn iterations(&self) -> u64 {
        self.iterations
    }

    fn input_size(&self) -> usize {
        self.input_size
    }

    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for BenchSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_range("input_size", self.input_size, 0, MAX_INPUT_SIZE)?;
        if let Some(path) = self.input_path() {
            validation::validate_path("input", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_benchmark() {
        let settings = BenchSettings::default();
        assert_eq!(settings.iterations, 30_000_000);
        assert_eq!(settings.input_size, 97);
        assert_eq!(settings.algorithm, Algorithm::Clamped);
        assert_eq!(settings.report, ReportFormat::None);
        assert!(settings.input_path().is_none());
        assert!(!settings.monitor);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_only_present_keys() {
        let config = TomlConfig::from_toml_str(
            r#"
[benchmark]
iterations = 5

[report]
format = "text"
"#,
        )
        .unwrap();

        let settings = BenchSettings::default().merge_toml(&config);
        assert_eq!(settings.iterations, 5);
        assert_eq!(settings.input_size, DEFAULT_INPUT_SIZE);
        assert_eq!(settings.report, ReportFormat::Text);
        assert!(!settings.monitor);
    }

    #[test]
    fn test_oversized_input_fails_validation() {
        let settings = BenchSettings {
            input_size: usize::MAX,
            ..BenchSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
