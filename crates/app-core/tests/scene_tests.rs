// End-to-end simulation tests driving a full scene context frame by frame.

use app_core::*;

const SEED: u64 = 42;
const DT: f32 = 1.0 / 60.0;

fn make_scene() -> TreeScene {
    TreeScene::new(SEED, 16.0 / 9.0)
}

#[test]
fn scene_assembles_from_cold_start() {
    // Scenario: mode starts in tree shape; ~16s of simulated frames drive
    // the blend arbitrarily close to 1.
    let mut scene = make_scene();
    assert_eq!(scene.mode(), TreeMode::TreeShape);
    let mut elapsed = 0.0;
    for _ in 0..1000 {
        elapsed += DT;
        scene.update(elapsed, DT);
    }
    assert!(scene.blend_value() > 0.999, "blend = {}", scene.blend_value());
    assert!(scene.blend_value() <= 1.0);
}

#[test]
fn toggling_mid_flight_reverses_the_blend_next_tick() {
    let mut scene = make_scene();
    let mut elapsed = 0.0;
    for _ in 0..10 {
        elapsed += DT;
        scene.update(elapsed, DT);
    }
    let before = scene.blend_value();
    scene.toggle_mode();
    assert_eq!(scene.mode(), TreeMode::Scattered);
    elapsed += DT;
    scene.update(elapsed, DT);
    assert!(scene.blend_value() < before, "blend should start decreasing");
}

#[test]
fn camera_auto_rotates_only_while_assembled() {
    let mut scene = make_scene();
    let yaw0 = scene.camera.yaw;
    scene.update(DT, DT);
    assert!(scene.camera.yaw > yaw0, "assembled scene should auto-rotate");

    scene.set_mode(TreeMode::Scattered);
    let yaw1 = scene.camera.yaw;
    scene.update(2.0 * DT, DT);
    assert_eq!(scene.camera.yaw, yaw1, "scattered scene must not auto-rotate");
}

#[test]
fn a_granted_wish_forces_the_tree_shape() {
    let mut scene = make_scene();
    scene.set_mode(TreeMode::Scattered);

    let mut panel = OraclePanel::new();
    assert!(panel.begin_submit("emeralds"));
    let assemble = panel.finish(Ok(WishResponse::fallback()));
    if assemble {
        scene.assemble();
    }
    assert_eq!(scene.mode(), TreeMode::TreeShape);
}

#[test]
fn a_failed_wish_leaves_the_mode_untouched() {
    let mut scene = make_scene();
    scene.set_mode(TreeMode::Scattered);

    let mut panel = OraclePanel::new();
    assert!(panel.begin_submit("emeralds"));
    let assemble = panel.finish(Err(WishError::Generation("offline".into())));
    if assemble {
        scene.assemble();
    }
    assert_eq!(scene.mode(), TreeMode::Scattered);
}

#[test]
fn transform_buffers_track_the_field_sizes() {
    let mut scene = make_scene();
    scene.update(DT, DT);
    assert_eq!(scene.ornament_transforms().len(), scene.ornaments.len());
    assert_eq!(scene.gift_transforms().len(), scene.gifts.len());
    assert_eq!(scene.foliage.len(), FOLIAGE_COUNT);
    assert_eq!(scene.snow.len(), SNOW_COUNT);
}

#[test]
fn ground_opacity_tracks_the_blend() {
    let mut scene = make_scene();
    assert_eq!(scene.ground_opacity(), 0.0);
    let mut elapsed = 0.0;
    for _ in 0..600 {
        elapsed += DT;
        scene.update(elapsed, DT);
    }
    let expected = GROUND_MAX_OPACITY * scene.blend_value();
    assert!((scene.ground_opacity() - expected).abs() < 1e-6);
}

#[test]
fn orbit_and_zoom_respect_their_clamps() {
    let mut camera = OrbitCamera::new(1.5);
    camera.orbit(0.0, -10.0);
    assert!(camera.polar >= CAMERA_MIN_POLAR);
    camera.orbit(0.0, 10.0);
    assert!(camera.polar <= CAMERA_MAX_POLAR);
    camera.zoom(-100.0);
    assert_eq!(camera.distance, CAMERA_MIN_DISTANCE);
    camera.zoom(100.0);
    assert_eq!(camera.distance, CAMERA_MAX_DISTANCE);
}

#[test]
fn camera_eye_orbits_at_the_configured_distance() {
    let camera = OrbitCamera::new(1.0);
    let eye = camera.eye();
    assert!((eye.length() - CAMERA_START_DISTANCE).abs() < 1e-4);
    // Default orbit state looks down +Z toward the origin
    assert!((eye.z - CAMERA_START_DISTANCE).abs() < 1e-4);
    assert!(eye.x.abs() < 1e-4);
}
