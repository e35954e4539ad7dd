//! Count-up easing for animated statistics

/// Quartic ease-out: fast start, slow finish
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Value shown by a counter `elapsed_ms` into a `duration_ms` animation
///
/// Intermediate frames floor the eased value; once progress reaches 1 the
/// exact target is returned.
pub fn counter_value(target: u64, elapsed_ms: u64, duration_ms: u64) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = elapsed_ms as f64 / duration_ms as f64;
    let eased = (target as f64 * ease_out_quart(progress)).floor() as u64;
    eased.min(target)
}
