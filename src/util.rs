// Small numeric helpers shared by the aggregator and the console output.
use num_format::{Locale, ToFormattedString};

/// Integer percentage of `count` over `total`, rounded half to even.
///
/// A zero `total` yields 0 instead of dividing by zero.
pub fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = (100.0 * count as f64 / total as f64).round_ties_even();
    pct.clamp(0.0, 100.0) as u32
}

/// Percentages for a group of counts that together make up `total`.
///
/// Each share is rounded like [`percent`]; when rounding pushes the sum past
/// 100, the shares that gained most from rounding give a point back.
pub fn shares(counts: &[usize], total: usize) -> Vec<u32> {
    let mut pcts: Vec<u32> = counts.iter().map(|&c| percent(c, total)).collect();
    if total == 0 {
        return pcts;
    }
    let exact = |i: usize| 100.0 * counts[i] as f64 / total as f64;
    let mut sum: u32 = pcts.iter().sum();
    while sum > 100 {
        let Some(i) = (0..pcts.len())
            .filter(|&i| pcts[i] > 0)
            .max_by(|&a, &b| {
                let gain_a = pcts[a] as f64 - exact(a);
                let gain_b = pcts[b] as f64 - exact(b);
                gain_a
                    .partial_cmp(&gain_b)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    // earlier entry wins a tie
                    .then(b.cmp(&a))
            })
        else {
            break;
        };
        pcts[i] -= 1;
        sum -= 1;
    }
    pcts
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Counts in console messages, e.g. `1,204 projects`.
    n.to_formatted_string(&Locale::en)
}
