//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Duration` inputs, making them straightforward to unit-test.

use std::time::Duration;

/// Cubic ease-out curve: fast start, gentle deceleration.
///
/// `t` should be in `[0, 1]`. Returns `1 - (1 - t)^3`.
///
/// Used by the camera intro for radius and height.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Symmetric cubic ease-in-out: slow start, fast middle, slow end.
///
/// Stands in for the CSS `ease-in-out` timing function on opacity fades.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Fraction of `duration` covered by `elapsed`, clamped to `[0, 1]`.
///
/// A zero `duration` counts as already finished.
pub fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Converts a configured length in seconds into a `Duration`.
///
/// Negative and NaN inputs give `Duration::ZERO`; values too large to
/// represent (including infinity) saturate at `Duration::MAX`.
pub fn secs_to_duration(secs: f32) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
}

/// Vertical field of view (radians) of a perspective camera that applies an
/// optical `zoom` factor on top of its nominal `fov_degrees`.
///
/// `zoom` values at or below zero are treated as `1.0`.
pub fn effective_fov(fov_degrees: f32, zoom: f32) -> f32 {
    let zoom = if zoom > 0.0 { zoom } else { 1.0 };
    let half = (fov_degrees.to_radians() / 2.0).tan() / zoom;
    2.0 * half.atan()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── ease_out_cubic ──────────────────────────────────────────────

    #[test]
    fn ease_at_zero_is_zero() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
    }

    #[test]
    fn ease_at_one_is_one() {
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_at_half_is_above_half() {
        // Ease-out should be ahead of linear at the midpoint.
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn ease_is_monotonically_increasing() {
        let steps: Vec<f32> = (0..=100)
            .map(|i| ease_out_cubic(i as f32 / 100.0))
            .collect();
        for w in steps.windows(2) {
            assert!(w[1] >= w[0], "ease_out_cubic must be non-decreasing");
        }
    }

    // ── ease_in_out_cubic ───────────────────────────────────────────

    #[test]
    fn in_out_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn in_out_clamps_out_of_range_input() {
        assert_eq!(ease_in_out_cubic(-0.5), 0.0);
        assert_eq!(ease_in_out_cubic(1.5), 1.0);
    }

    // ── normalized_progress ─────────────────────────────────────────

    #[test]
    fn progress_is_linear_inside_the_window() {
        let p = normalized_progress(Duration::from_millis(750), Duration::from_millis(3000));
        assert!((p - 0.25).abs() < 1e-6);
    }

    #[test]
    fn progress_clamps_to_one() {
        let p = normalized_progress(Duration::from_millis(4000), Duration::from_millis(3000));
        assert_eq!(p, 1.0);
    }

    #[test]
    fn zero_duration_is_finished() {
        assert_eq!(normalized_progress(Duration::ZERO, Duration::ZERO), 1.0);
    }

    // ── secs_to_duration ────────────────────────────────────────────

    #[test]
    fn secs_convert_exactly_in_range() {
        assert_eq!(secs_to_duration(0.2), Duration::from_secs_f32(0.2));
        assert_eq!(secs_to_duration(3.0), Duration::from_secs(3));
    }

    #[test]
    fn negative_and_nan_secs_are_zero() {
        assert_eq!(secs_to_duration(-1.0), Duration::ZERO);
        assert_eq!(secs_to_duration(f32::NEG_INFINITY), Duration::ZERO);
        assert_eq!(secs_to_duration(f32::NAN), Duration::ZERO);
    }

    #[test]
    fn huge_secs_saturate() {
        assert_eq!(secs_to_duration(f32::INFINITY), Duration::MAX);
        assert_eq!(secs_to_duration(1e30), Duration::MAX);
    }

    #[test]
    fn saturated_duration_never_finishes() {
        let p = normalized_progress(Duration::from_secs(3600), secs_to_duration(f32::INFINITY));
        assert!(p < 1e-6);
    }

    // ── effective_fov ───────────────────────────────────────────────

    #[test]
    fn unit_zoom_keeps_fov() {
        let fov = effective_fov(20.0, 1.0);
        assert!((fov - 20f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn zoom_narrows_fov() {
        let fov = effective_fov(20.0, 5.0);
        // 2·atan(tan(10°)/5) ≈ 4.04°
        assert!((fov.to_degrees() - 4.04).abs() < 0.01);
    }

    #[test]
    fn non_positive_zoom_is_ignored() {
        assert_eq!(effective_fov(20.0, 0.0), effective_fov(20.0, 1.0));
    }
}
