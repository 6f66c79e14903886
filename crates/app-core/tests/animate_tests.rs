// Host-side tests for the per-layer animation formulas.

use app_core::*;
use glam::Vec3;

const SEED: u64 = 42;

fn sample_ornament() -> InstanceDatum {
    generate_ornaments(10, SEED)[3].clone()
}

fn sample_gift() -> InstanceDatum {
    generate_gifts(10, SEED)[3].clone()
}

#[test]
fn scattered_foliage_sits_at_scatter_plus_full_jitter() {
    let foliage = generate_foliage(50, SEED);
    let elapsed = 2.75;
    for p in &foliage {
        let pos = foliage_position(p, 0.0, elapsed);
        let jitter = (elapsed * FOLIAGE_JITTER_RATE + p.phase).sin() * FOLIAGE_JITTER_AMP;
        let expected = p.scatter + Vec3::splat(jitter);
        assert!((pos - expected).length() < 1e-5);
    }
}

#[test]
fn assembled_foliage_sits_exactly_on_target() {
    // At t = 1 the (1 - t) factor forces the idle term to exact zero
    let foliage = generate_foliage(50, SEED);
    for p in &foliage {
        let pos = foliage_position(p, 1.0, 123.4);
        assert!((pos - p.target).length() < 1e-4);
    }
}

#[test]
fn foliage_glow_stays_in_unit_range() {
    let foliage = generate_foliage(20, SEED);
    let mut elapsed = 0.0;
    while elapsed < 10.0 {
        for p in &foliage {
            let glow = foliage_glow(p, elapsed);
            assert!((0.0..=1.0).contains(&glow));
        }
        elapsed += 0.37;
    }
}

#[test]
fn ornament_idle_motion_damps_with_blend_and_weight() {
    let d = sample_ornament();
    let elapsed = 1.2;

    let scattered = ornament_transform(&d, 0.0, elapsed);
    let dx = (scattered.position.x - d.scatter.x).abs();
    let dy = (scattered.position.y - d.scatter.y).abs();
    // Full amplitude while scattered
    assert!((dx - ((elapsed + d.phase).sin().abs() * d.weight)).abs() < 1e-5);
    assert!(
        (dy - ((elapsed * ORNAMENT_BOB_RATE + d.phase).cos().abs() * d.weight)).abs() < 1e-5
    );

    // Zero amplitude once assembled
    let assembled = ornament_transform(&d, 1.0, elapsed);
    assert!((assembled.position - d.target).length() < 1e-4);
    assert_eq!(assembled.rotation, Vec3::ZERO);
}

#[test]
fn ornament_scale_pulses_around_its_base_scale() {
    let d = sample_ornament();
    let mut elapsed = 0.0;
    while elapsed < 5.0 {
        let tr = ornament_transform(&d, 0.5, elapsed);
        assert!(tr.scale >= d.scale * (1.0 - ORNAMENT_PULSE_AMOUNT) - 1e-6);
        assert!(tr.scale <= d.scale * (1.0 + ORNAMENT_PULSE_AMOUNT) + 1e-6);
        elapsed += 0.21;
    }
}

#[test]
fn gift_bobs_vertically_only_and_spins_with_weight() {
    let d = sample_gift();
    let elapsed = 3.3;

    let scattered = gift_transform(&d, 0.0, elapsed);
    assert_eq!(scattered.position.x, d.scatter.x);
    assert_eq!(scattered.position.z, d.scatter.z);
    let bob = (elapsed * GIFT_BOB_RATE + d.phase).sin() * d.weight;
    assert!((scattered.position.y - (d.scatter.y + bob)).abs() < 1e-5);

    // Rotation is continuous and proportional to elapsed time and weight
    assert!((scattered.rotation.x - elapsed * GIFT_SPIN_RATE_X * d.weight).abs() < 1e-6);
    assert!((scattered.rotation.y - elapsed * GIFT_SPIN_RATE_Y * d.weight).abs() < 1e-6);
    assert_eq!(scattered.rotation.z, 0.0);
    assert_eq!(scattered.scale, d.scale);

    let assembled = gift_transform(&d, 1.0, elapsed);
    assert!((assembled.position - d.target).length() < 1e-4);
}

#[test]
fn star_scale_follows_the_blend_value() {
    assert_eq!(star_scale(0.0), 0.0);
    assert_eq!(star_scale(1.0), 1.0);
    assert_eq!(star_scale(0.25), 0.25);
    // Out-of-range inputs clamp
    assert_eq!(star_scale(-0.5), 0.0);
    assert_eq!(star_scale(1.5), 1.0);
}

#[test]
fn star_transform_is_anchored_at_the_apex() {
    let tr = star_transform(1.0, 0.0);
    assert_eq!(tr.position.x, 0.0);
    assert_eq!(tr.position.z, 0.0);
    assert!((tr.position.y - STAR_Y).abs() <= STAR_FLOAT_AMP + 1e-6);
    assert_eq!(tr.scale, STAR_RADIUS);
    // Scattered scene hides the star entirely
    assert_eq!(star_transform(0.0, 5.0).scale, 0.0);
}

#[test]
fn ground_glow_fades_in_with_the_shape() {
    assert_eq!(ground_glow_opacity(0.0), 0.0);
    assert!((ground_glow_opacity(1.0) - GROUND_MAX_OPACITY).abs() < 1e-6);
    assert!(ground_glow_opacity(0.5) < GROUND_MAX_OPACITY);
}
