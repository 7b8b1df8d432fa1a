pub mod bench;
pub mod engine;
pub mod kadane;
pub mod report;

pub use crate::domain::model::{Algorithm, BenchReport, ReportFormat, Samples};
pub use crate::domain::ports::{BenchConfig, InputSource};
pub use crate::utils::error::Result;
