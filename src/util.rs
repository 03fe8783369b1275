/// Rounds to the nearest integer, ties to even
pub fn round_even(value: f64) -> u32 {
    let rounded = value.round_ties_even();
    if rounded.is_finite() && rounded > 0.0 {
        rounded as u32
    } else {
        0
    }
}

/// `part` as a whole-number percentage of `whole`; 0 when `whole` is 0
pub fn percent(part: usize, whole: usize) -> u32 {
    match whole {
        0 => 0,
        w => round_even(100.0 * part as f64 / w as f64),
    }
}
