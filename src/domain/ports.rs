use crate::domain::model::{Algorithm, Samples};
use crate::utils::error::Result;

/// Where the benchmark integers come from.
pub trait InputSource {
    /// Human-readable origin, used in log lines.
    fn describe(&self) -> &str;

    /// Reads exactly `expected` integers. Fewer is an error; anything past
    /// `expected` is left unread or ignored.
    fn read_samples(&mut self, expected: usize) -> Result<Samples>;
}

pub trait BenchConfig {
    fn iterations(&self) -> u64;
    fn input_size(&self) -> usize;
    fn algorithm(&self) -> Algorithm;
    fn monitoring_enabled(&self) -> bool;
}
