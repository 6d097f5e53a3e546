/// Rounds halves towards +infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// `f64::round` rounds halves away from zero, which disagrees on negative halves.
/// Engagement values were always rounded this way, so keep it.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Clamp without the `min <= max` panic of `f64::clamp`; `max` wins on inversion.
#[inline]
pub fn clamp_to(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
