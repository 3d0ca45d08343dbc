//! Summary statistics over speed samples.

/// Arithmetic mean of `samples`, or `None` when there are none.
///
/// # Examples
///
/// ```
/// use unzipbench_core::stats::average;
///
/// assert_eq!(average(&[2.0, 4.0, 6.0]), Some(4.0));
/// assert_eq!(average(&[]), None);
/// ```
#[must_use]
pub fn average(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Median of `samples`, or `None` when there are none.
///
/// The samples are sorted (on a copy) first, so callers can pass them in
/// processing order. An even count yields the mean of the two central
/// values.
///
/// # Examples
///
/// ```
/// use unzipbench_core::stats::median;
///
/// assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
#[must_use]
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(f64::midpoint(sorted[middle - 1], sorted[middle]))
    } else {
        Some(sorted[middle])
    }
}
