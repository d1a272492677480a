//! Input domain: deadzone filtering for analog samples.

use bevy::prelude::*;

/// Exponent applied to the post-deadzone magnitude. Values above 1 leave more
/// of the stick's travel for small magnitudes.
const CIRCULAR_POWER: f32 = 2.0;

/// Linearly remap `value` from `[from_min, from_max]` into `[to_min, to_max]`.
fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    to_min + (value - from_min) * (to_max - to_min) / (from_max - from_min)
}

/// Filter a raw stick sample so magnitudes ramp smoothly from zero at `inner`
/// to one at `outer`. The result never exceeds the unit circle.
pub fn apply_deadzone(raw: Vec2, inner: f32, outer: f32) -> Vec2 {
    let magnitude = raw.length();

    if magnitude < inner {
        return Vec2::ZERO;
    }
    if magnitude >= outer {
        return raw.normalize_or_zero();
    }

    let scaled = remap(magnitude, inner, outer, 0.0, 1.0);
    let shaped = raw.normalize_or_zero() * scaled.powf(CIRCULAR_POWER);

    shaped.clamp_length_max(1.0)
}

/// Same as [`apply_deadzone`], then reshapes the components so diagonals on a
/// square input device keep their expected magnitude.
pub fn apply_deadzone_circularized(raw: Vec2, inner: f32, outer: f32) -> Vec2 {
    let smoothed = apply_deadzone(raw, inner, outer);

    Vec2::new(
        smoothed.x * (1.0 - smoothed.y * smoothed.y / 2.0).sqrt(),
        smoothed.y * (1.0 - smoothed.x * smoothed.x / 2.0).sqrt(),
    )
}
