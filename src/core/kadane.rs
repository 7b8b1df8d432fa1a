/// Maximum contiguous subarray sum with the running sum clamped at zero.
///
/// The running sum is reset whenever it drops below zero, so the result is
/// never negative: an empty or all-negative input yields `0`, not the
/// largest single element. Sums are accumulated in `i64`.
pub fn kadane(values: &[i32]) -> i64 {
    let mut max_sum: i64 = 0;
    let mut current_sum: i64 = 0;

    for &value in values {
        current_sum += i64::from(value);
        if current_sum < 0 {
            current_sum = 0;
        }
        if max_sum < current_sum {
            max_sum = current_sum;
        }
    }

    max_sum
}

/// Textbook maximum subarray sum over non-empty subarrays.
///
/// Returns `None` for an empty input.
pub fn max_subarray_classic(values: &[i32]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    let mut best = i64::from(first);
    let mut current = best;

    for &value in rest {
        let value = i64::from(value);
        current = value.max(current + value);
        best = best.max(current);
    }

    Some(best)
}
