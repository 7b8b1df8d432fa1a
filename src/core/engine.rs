use crate::core::bench::measure;
use crate::domain::model::BenchReport;
use crate::domain::ports::{BenchConfig, InputSource};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct BenchEngine<C: BenchConfig> {
    config: C,
    monitor: SystemMonitor,
}

impl<C: BenchConfig> BenchEngine<C> {
    pub fn new(config: C) -> Self {
        let monitor = SystemMonitor::new(config.monitoring_enabled());
        Self { config, monitor }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Loads the input, then runs the timed loop over it.
    pub fn run<S: InputSource>(&self, source: &mut S) -> Result<BenchReport> {
        let input_size = self.config.input_size();
        let iterations = self.config.iterations();
        let algorithm = self.config.algorithm();

        if self.monitor.is_enabled() {
            tracing::info!("🔍 System monitoring enabled");
        }

        tracing::info!("📥 Reading {} integers from {}", input_size, source.describe());
        let samples = source.read_samples(input_size)?;
        tracing::debug!("Input: {:?}", samples.as_slice());
        self.monitor.log_stats("Input loaded");

        tracing::info!(
            "⏱️  Running {} kadane {} times over {} integers",
            algorithm,
            iterations,
            samples.len()
        );
        let report = measure(algorithm, iterations, &samples);

        tracing::info!(
            "✅ Finished in {:?} ({:.2} ns/iteration)",
            report.elapsed,
            report.ns_per_iteration
        );
        tracing::debug!("Last result: {:?}", report.result);

        self.monitor.log_stats("Benchmark complete");
        self.monitor.log_final_stats();

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Algorithm, Samples};
    use crate::utils::error::BenchError;

    struct FixedConfig {
        iterations: u64,
        input_size: usize,
        algorithm: Algorithm,
    }

    impl BenchConfig for FixedConfig {
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
            false
        }
    }

    struct MockSource {
        values: Vec<i32>,
        reads: usize,
    }

    impl InputSource for MockSource {
        fn describe(&self) -> &str {
            "mock"
        }

        fn read_samples(&mut self, expected: usize) -> Result<Samples> {
            self.reads += 1;
            if self.values.len() < expected {
                return Err(BenchError::ShortInputError {
                    expected,
                    found: self.values.len(),
                });
            }
            Ok(Samples::from(self.values[..expected].to_vec()))
        }
    }

    #[test]
    fn test_engine_reads_once_and_reports() {
        let engine = BenchEngine::new(FixedConfig {
            iterations: 500,
            input_size: 4,
            algorithm: Algorithm::Clamped,
        });
        let mut source = MockSource {
            values: vec![3, -4, 5, 6, 100],
            reads: 0,
        };

        let report = engine.run(&mut source).unwrap();

        assert_eq!(source.reads, 1);
        assert_eq!(report.input_size, 4);
        assert_eq!(report.iterations, 500);
        assert_eq!(report.result, Some(11));
    }

    #[test]
    fn test_engine_propagates_short_input() {
        let engine = BenchEngine::new(FixedConfig {
            iterations: 10,
            input_size: 97,
            algorithm: Algorithm::Classic,
        });
        let mut source = MockSource {
            values: vec![1, 2],
            reads: 0,
        };

        let err = engine.run(&mut source).unwrap_err();
        assert!(matches!(
            err,
            BenchError::ShortInputError {
                expected: 97,
                found: 2
            }
        ));
    }
}
