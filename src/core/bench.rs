use crate::core::kadane::{kadane, max_subarray_classic};
use crate::domain::model::{Algorithm, BenchReport, Samples};
use chrono::Utc;
use std::hint::black_box;
use std::time::Instant;

/// Runs `algorithm` over `samples` `iterations` times and times the loop.
///
/// The variant is chosen once, outside the timed loop. Only the last
/// result is kept. Input and result both go through
/// `black_box` so the optimizer cannot hoist or drop the calls.
pub fn measure(algorithm: Algorithm, iterations: u64, samples: &Samples) -> BenchReport {
    let values = samples.as_slice();
    let started_at = Utc::now();
    let start = Instant::now();

    let mut result = None;
    match algorithm {
        Algorithm::Clamped => {
            for _ in 0..iterations {
                result = Some(black_box(kadane(black_box(values))));
            }
        }
        Algorithm::Classic => {
            for _ in 0..iterations {
                result = black_box(max_subarray_classic(black_box(values)));
            }
        }
    }

    let elapsed = start.elapsed();
    let ns_per_iteration = if iterations == 0 {
        0.0
    } else {
        elapsed.as_nanos() as f64 / iterations as f64
    };

    BenchReport {
        algorithm,
        input_size: samples.len(),
        iterations,
        result,
        elapsed,
        elapsed_secs: elapsed.as_secs_f64(),
        ns_per_iteration,
        started_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_keeps_last_result() {
        let samples = Samples::from(vec![2, -1, 2, 3, -9, 4]);
        let report = measure(Algorithm::Clamped, 1_000, &samples);

        assert_eq!(report.result, Some(6));
        assert_eq!(report.iterations, 1_000);
        assert_eq!(report.input_size, 6);
        assert!(report.ns_per_iteration >= 0.0);
        assert_eq!(report.elapsed_secs, report.elapsed.as_secs_f64());
    }

    #[test]
    fn test_zero_iterations_has_no_result() {
        let samples = Samples::from(vec![1, 2, 3]);
        let report = measure(Algorithm::Clamped, 0, &samples);

        assert_eq!(report.result, None);
        assert_eq!(report.ns_per_iteration, 0.0);
    }

    #[test]
    fn test_each_variant_runs_its_own_loop() {
        let samples = Samples::from(vec![-4, -2, -7]);
        assert_eq!(measure(Algorithm::Clamped, 5, &samples).result, Some(0));
        assert_eq!(measure(Algorithm::Classic, 5, &samples).result, Some(-2));
    }

    #[test]
    fn test_classic_on_empty_input() {
        let report = measure(Algorithm::Classic, 10, &Samples::default());
        assert_eq!(report.result, None);
        assert_eq!(report.input_size, 0);
    }
}
