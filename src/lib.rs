pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::input::ReaderInput;
pub use config::{BenchSettings, TomlConfig};
pub use crate::core::{
    bench::measure,
    engine::BenchEngine,
    kadane::{kadane, max_subarray_classic},
};
pub use domain::model::{Algorithm, BenchReport, ReportFormat, Samples};
pub use utils::error::{BenchError, Result};
