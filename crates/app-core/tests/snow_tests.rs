// Host-side tests for the ambient snow layer.

use app_core::*;

const SEED: u64 = 42;

#[test]
fn wrapped_vertical_position_stays_inside_the_volume() {
    let flakes = generate_snow(200, SEED);
    let half = SNOW_RANGE[1] * 0.5;
    let mut elapsed = 0.0;
    while elapsed < 120.0 {
        for f in &flakes {
            let pos = flake_position(f, elapsed);
            assert!(
                pos.y >= -half - 1e-4 && pos.y <= half + 1e-4,
                "wrapped y {} escaped the volume at t={elapsed}",
                pos.y
            );
        }
        elapsed += 1.7;
    }
}

#[test]
fn horizontal_drift_stays_near_the_footprint() {
    let flakes = generate_snow(100, SEED);
    for f in &flakes {
        let pos = flake_position(f, 33.3);
        assert!((pos.x - f.origin.x).abs() <= SNOW_DRIFT_AMP + 1e-5);
        assert!((pos.z - f.origin.z).abs() <= SNOW_DRIFT_AMP + 1e-5);
    }
}

#[test]
fn fall_is_continuous_across_the_wrap() {
    // Positions one small step apart either move by ~speed*dt or wrap by
    // the full volume height; nothing in between.
    let flakes = generate_snow(50, SEED);
    let dt = 0.01;
    let mut elapsed = 0.0;
    while elapsed < 60.0 {
        for f in &flakes {
            let a = flake_position(f, elapsed).y;
            let b = flake_position(f, elapsed + dt).y;
            let step = a - b;
            let fell = (step - f.speed * dt).abs() < 1e-3;
            let wrapped = (step - (f.speed * dt - SNOW_RANGE[1])).abs() < 1e-3;
            assert!(fell || wrapped, "unexpected vertical step {step}");
        }
        elapsed += 2.9;
    }
}

#[test]
fn opacity_masks_the_wrap_boundary() {
    let half = SNOW_RANGE[1] * 0.5;
    // Fully visible in the middle of the volume
    assert!((flake_opacity(0.0) - SNOW_BASE_OPACITY).abs() < 1e-6);
    // Fade begins at the configured fraction
    let fade_start = SNOW_RANGE[1] * SNOW_FADE_START_FRACTION;
    assert!((flake_opacity(fade_start) - SNOW_BASE_OPACITY).abs() < 1e-5);
    assert!(flake_opacity(fade_start + 0.5) < SNOW_BASE_OPACITY);
    // Zero (to within a hair) at both wrap boundaries
    assert!(flake_opacity(half) < 1e-5);
    assert!(flake_opacity(-half) < 1e-5);
}

#[test]
fn opacity_is_monotonically_fading_toward_the_boundary() {
    let mut prev = flake_opacity(0.0);
    let mut y = 0.0;
    while y < SNOW_RANGE[1] * 0.5 {
        let o = flake_opacity(y);
        assert!(o <= prev + 1e-6);
        prev = o;
        y += 0.1;
    }
}

#[test]
fn snow_generation_is_reproducible_and_bounded() {
    let a = generate_snow(300, SEED);
    let b = generate_snow(300, SEED);
    assert_eq!(a, b);
    for f in &a {
        assert!(f.origin.x.abs() <= SNOW_RANGE[0] * 0.5);
        assert!(f.origin.y.abs() <= SNOW_RANGE[1] * 0.5);
        assert!(f.origin.z.abs() <= SNOW_RANGE[2] * 0.5);
        assert!(f.speed >= SNOW_SPEED_MIN && f.speed <= SNOW_SPEED_MIN + SNOW_SPEED_SPAN);
    }
    assert!(generate_snow(0, SEED).is_empty());
}

#[test]
fn smoothstep_matches_the_wgsl_builtin_shape() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
}
