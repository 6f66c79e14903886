// Sanity checks on the scene constants and their relationships.

use app_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn counts_and_dimensions_are_positive() {
    assert!(FOLIAGE_COUNT > 0);
    assert!(ORNAMENT_COUNT > 0);
    assert!(GIFT_COUNT > 0);
    assert!(SNOW_COUNT > 0);

    assert!(FOLIAGE_CONE_HEIGHT > 0.0);
    assert!(FOLIAGE_CONE_RADIUS > 0.0);
    assert!(ORNAMENT_CONE_HEIGHT > 0.0);
    assert!(ORNAMENT_CONE_RADIUS > 0.0);
    assert!(GIFT_FOOTPRINT > 0.0);
    assert!(SHAPE_RATE_PER_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scatter_clouds_surround_the_tree() {
    // The scattered clouds must start outside the assembled silhouette so
    // dissolving visibly expands the scene
    assert!(FOLIAGE_SCATTER_MIN > FOLIAGE_CONE_RADIUS);
    assert!(ORNAMENT_SCATTER_MIN > ORNAMENT_CONE_RADIUS);
    assert!(GIFT_SCATTER_MIN > GIFT_FOOTPRINT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ornament_shell_nests_inside_the_foliage_cone() {
    assert!(ORNAMENT_CONE_HEIGHT <= FOLIAGE_CONE_HEIGHT);
    assert!(ORNAMENT_CONE_RADIUS <= FOLIAGE_CONE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn weights_and_probabilities_are_normalized() {
    assert!(ORNAMENT_WEIGHT > 0.0 && ORNAMENT_WEIGHT <= 1.0);
    assert!(GIFT_WEIGHT > 0.0 && GIFT_WEIGHT <= 1.0);
    // Gifts are the heavy layer
    assert!(GIFT_WEIGHT < ORNAMENT_WEIGHT);
    assert!(ORNAMENT_GOLD_PROBABILITY >= 0.0 && ORNAMENT_GOLD_PROBABILITY <= 1.0);
    assert!(GROUND_MAX_OPACITY >= 0.0 && GROUND_MAX_OPACITY <= 1.0);
    assert!(SNOW_BASE_OPACITY >= 0.0 && SNOW_BASE_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn snow_fade_band_sits_inside_the_volume() {
    assert!(SNOW_FADE_START_FRACTION < SNOW_FADE_END_FRACTION);
    // The fade must complete exactly at the wrap boundary (half height)
    assert!((SNOW_FADE_END_FRACTION - 0.5).abs() < 1e-6);
    assert!(SNOW_RANGE[1] > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_limits_have_logical_relationships() {
    assert!(CAMERA_MIN_DISTANCE < CAMERA_START_DISTANCE);
    assert!(CAMERA_START_DISTANCE < CAMERA_MAX_DISTANCE);
    assert!(CAMERA_MIN_POLAR < CAMERA_MAX_POLAR);
    assert!(CAMERA_MIN_POLAR > 0.0);
    assert!(CAMERA_MAX_POLAR < std::f32::consts::PI);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(AUTO_ROTATE_RAD_PER_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn the_star_sits_above_the_cone_tip() {
    let tip = TREE_BASE_Y + FOLIAGE_CONE_HEIGHT;
    assert!(STAR_Y >= tip);
    assert!(GROUND_Y < TREE_BASE_Y);
}

#[test]
fn palette_entries_are_valid_srgb() {
    let all = [
        COLOR_BACKGROUND,
        COLOR_EVERGREEN,
        COLOR_GOLD,
        COLOR_BRIGHT_GOLD,
        COLOR_DEEP_GREEN,
        COLOR_CRIMSON,
        COLOR_WHITE,
    ];
    for c in all.iter().chain(GIFT_PALETTE.iter()) {
        for ch in c {
            assert!(*ch >= 0.0 && *ch <= 1.0);
        }
    }
}
