// Host-side tests for the shape interpolator.

use app_core::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn approach_toward_tree_is_strictly_increasing_and_bounded() {
    let mut blend = ShapeBlend::new(0.0);
    let mut prev = blend.value();
    for _ in 0..200 {
        let v = blend.tick(TreeMode::TreeShape, DT);
        assert!(v > prev, "value did not increase: {prev} -> {v}");
        assert!(v <= 1.0, "value exceeded target: {v}");
        prev = v;
    }
}

#[test]
fn approach_toward_scattered_is_strictly_decreasing_and_bounded() {
    let mut blend = ShapeBlend::new(1.0);
    let mut prev = blend.value();
    for _ in 0..200 {
        let v = blend.tick(TreeMode::Scattered, DT);
        assert!(v < prev, "value did not decrease: {prev} -> {v}");
        assert!(v >= 0.0);
        prev = v;
    }
}

#[test]
fn zero_dt_leaves_the_value_untouched() {
    let mut blend = ShapeBlend::new(0.3);
    let v = blend.tick(TreeMode::TreeShape, 0.0);
    assert_eq!(v, 0.3);
    // Negative deltas are clamped the same way
    let v = blend.tick(TreeMode::TreeShape, -1.0);
    assert_eq!(v, 0.3);
}

#[test]
fn huge_dt_cannot_overshoot_the_target() {
    let mut blend = ShapeBlend::new(0.0);
    let v = blend.tick(TreeMode::TreeShape, 1e6);
    assert!(v <= 1.0);
    assert!(v > 0.999, "large dt should land arbitrarily close: {v}");

    let mut blend = ShapeBlend::new(1.0);
    let v = blend.tick(TreeMode::Scattered, 1e6);
    assert!(v >= 0.0);
    assert!(v < 0.001);
}

#[test]
fn target_flip_reverses_direction_without_overshoot() {
    let mut blend = ShapeBlend::new(0.0);
    for _ in 0..30 {
        blend.tick(TreeMode::TreeShape, DT);
    }
    let peak = blend.value();
    let mut prev = peak;
    for _ in 0..30 {
        let v = blend.tick(TreeMode::Scattered, DT);
        assert!(v < prev, "value should move toward 0 after the flip");
        assert!(v >= 0.0);
        prev = v;
    }
    // Flip back: moves toward 1 again, never past it
    let mut prev = blend.value();
    for _ in 0..400 {
        let v = blend.tick(TreeMode::TreeShape, DT);
        assert!(v >= prev);
        assert!(v <= 1.0);
        prev = v;
    }
}

#[test]
fn frame_rate_independence_of_the_smoothing() {
    // One 0.2s step lands at the same place as four 0.05s steps
    let mut coarse = ShapeBlend::new(0.0);
    coarse.tick(TreeMode::TreeShape, 0.2);

    let mut fine = ShapeBlend::new(0.0);
    for _ in 0..4 {
        fine.tick(TreeMode::TreeShape, 0.05);
    }
    assert!((coarse.value() - fine.value()).abs() < 1e-5);
}

#[test]
fn initial_value_is_clamped_to_unit_range() {
    assert_eq!(ShapeBlend::new(-2.0).value(), 0.0);
    assert_eq!(ShapeBlend::new(3.0).value(), 1.0);
}

#[test]
fn mode_toggle_and_targets() {
    assert_eq!(TreeMode::Scattered.target(), 0.0);
    assert_eq!(TreeMode::TreeShape.target(), 1.0);
    assert_eq!(TreeMode::Scattered.toggled(), TreeMode::TreeShape);
    assert_eq!(TreeMode::TreeShape.toggled(), TreeMode::Scattered);
}
