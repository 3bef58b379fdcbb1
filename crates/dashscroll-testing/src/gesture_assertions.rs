//! Assertions over recorded scroll offsets.

/// Panics unless `offset` lies in `[min - tolerance, max + tolerance]`.
pub fn assert_in_range(offset: f32, min: f32, max: f32, tolerance: f32) {
    assert!(
        offset >= min - tolerance && offset <= max + tolerance,
        "offset {offset} outside [{min}, {max}] (tolerance {tolerance})"
    );
}

/// Panics unless every offset in `offsets` is at least as close to `bound` as
/// the one before it and none of them crosses to the other side.
pub fn assert_monotonic_toward(offsets: &[f32], bound: f32) {
    let Some(first) = offsets.first() else {
        return;
    };
    let side = (first - bound).signum();
    let mut previous = (first - bound).abs();

    for (frame, offset) in offsets.iter().enumerate().skip(1) {
        let distance = offset - bound;
        assert!(
            distance == 0.0 || distance.signum() == side,
            "frame {frame}: offset {offset} crossed bound {bound}"
        );
        assert!(
            distance.abs() <= previous,
            "frame {frame}: distance to {bound} grew from {previous} to {}",
            distance.abs()
        );
        previous = distance.abs();
    }
}

/// Largest distance past `[min, max]` among `offsets`; 0 when all are in
/// range.
pub fn max_overshoot(offsets: &[f32], min: f32, max: f32) -> f32 {
    offsets
        .iter()
        .map(|&offset| {
            if offset > max {
                offset - max
            } else if offset < min {
                min - offset
            } else {
                0.0
            }
        })
        .fold(0.0, f32::max)
}
