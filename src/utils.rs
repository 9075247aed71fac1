use crate::constants::TIE_VALUE;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    items.join(", ")
}

/// Round a float to `precision` decimal places.
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

/// Shannon entropy (base 2) of a binary distribution given as counts.
/// Uses the convention `0 * log2(0) = 0`, an empty distribution has entropy 0.
#[inline]
pub fn binary_entropy(zeros: usize, ones: usize) -> f64 {
    let total = zeros + ones;
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    -(plogp(zeros as f64 / total) + plogp(ones as f64 / total))
}

#[inline]
fn plogp(p: f64) -> f64 {
    if p <= 0.0 {
        0.0
    } else {
        p * p.log2()
    }
}

/// Majority value of a binary distribution, ties go to `TIE_VALUE`.
#[inline]
pub fn majority(zeros: usize, ones: usize) -> u8 {
    match ones.cmp(&zeros) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => 0,
        std::cmp::Ordering::Equal => TIE_VALUE,
    }
}

/// Proportion of the dominant value, 0 for an empty distribution.
#[inline]
pub fn purity(zeros: usize, ones: usize) -> f64 {
    let total = zeros + ones;
    if total == 0 {
        return 0.0;
    }
    zeros.max(ones) as f64 / total as f64
}
