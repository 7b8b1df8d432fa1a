use crate::config::{BenchSettings, TomlConfig};
use crate::domain::model::{Algorithm, ReportFormat};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

// Flags left unset fall back to the config file, then to built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "kadane-bench")]
#[command(about = "Repeats a maximum-subarray-sum computation over integers read from stdin")]
pub struct CliConfig {
    /// Number of times the algorithm is run [default: 30000000]
    #[arg(short = 'n', long)]
    pub iterations: Option<u64>,

    /// Number of integers to read [default: 97]
    #[arg(short = 's', long)]
    pub input_size: Option<usize>,

    /// Maximum-subarray variant [default: clamped]
    #[arg(short, long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Read integers from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print a report to stdout after the run [default: none]
    #[arg(short, long, value_enum)]
    pub report: Option<ReportFormat>,

    /// Log process CPU and memory usage
    #[arg(long)]
    pub monitor: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn apply(&self, mut settings: BenchSettings) -> BenchSettings {
        if let Some(iterations) = self.iterations {
            settings.iterations = iterations;
        }
        if let Some(input_size) = self.input_size {
            settings.input_size = input_size;
        }
        if let Some(algorithm) = self.algorithm {
            settings.algorithm = algorithm;
        }
        if let Some(input) = &self.input {
            settings.input_path = Some(input.clone());
        }
        if let Some(report) = self.report {
            settings.report = report;
        }
        if self.monitor {
            settings.monitor = true;
        }
        settings
    }

    /// Defaults, then the `--config` file if given, then these flags.
    pub fn resolve(&self) -> Result<BenchSettings> {
        let mut settings = BenchSettings::default();
        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            settings = settings.merge_toml(&file_config);
        }
        let settings = self.apply(settings);
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "kadane-bench",
            "-n",
            "10",
            "--input-size",
            "4",
            "--algorithm",
            "classic",
            "--report",
            "json",
            "--monitor",
        ]);

        assert_eq!(cli.iterations, Some(10));
        assert_eq!(cli.input_size, Some(4));
        assert_eq!(cli.algorithm, Some(Algorithm::Classic));
        assert_eq!(cli.report, Some(ReportFormat::Json));
        assert!(cli.monitor);
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_no_flags_resolves_to_defaults() {
        let cli = CliConfig::parse_from(["kadane-bench"]);
        assert_eq!(cli.resolve().unwrap(), BenchSettings::default());
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[benchmark]\niterations = 100\ninput_size = 8\n\n[monitoring]\nenabled = true\n",
            )
            .unwrap();

        let cli = CliConfig {
            iterations: Some(3),
            config: Some(temp_file.path().to_path_buf()),
            ..CliConfig::default()
        };
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.iterations, 3);
        assert_eq!(settings.input_size, 8);
        assert!(settings.monitor);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            ..CliConfig::default()
        };
        let err = cli.resolve().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
    }
}
