use ordered_float::OrderedFloat;
use std::collections::HashMap;

/// Arithmetic mean of the sample. NaN for an empty sample.
pub fn mean(nums: &[f64]) -> f64 {
    let total: f64 = nums.iter().sum();
    total / nums.len() as f64
}

/// Median of the sample. Sorts a private copy, so the input order is
/// preserved for the caller. Odd lengths take the exact middle element,
/// even lengths the mean of the two middle elements. NaN for an empty
/// sample.
pub fn median(nums: &[f64]) -> f64 {
    if nums.is_empty() {
        return f64::NAN;
    }

    let mut sorted = nums.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Most frequent value in the sample. When several values share the
/// highest frequency the one that appeared first in the input wins, so
/// `[1, 2, 2, 1]` yields 1. NaN for an empty sample.
pub fn mode(nums: &[f64]) -> f64 {
    // Frequency table keyed by value, also tracking where each value
    // first appeared.
    let mut counts: HashMap<OrderedFloat<f64>, (u64, usize)> = HashMap::new();
    for (position, &num) in nums.iter().enumerate() {
        counts.entry(OrderedFloat(num)).or_insert((0, position)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then_with(|| first_b.cmp(first_a))
        })
        .map(|(num, _)| num.into_inner())
        .unwrap_or(f64::NAN)
}
