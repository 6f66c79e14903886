//! Per-layer animation formulas.
//!
//! Pure functions `(datum, t, elapsed) -> transform` so the blend and idle
//! motion are testable without a rendering backend. The web renderer
//! evaluates the foliage formula in its vertex shader; the functions here
//! are the reference semantics either way.

use crate::constants::*;
use crate::field::{FoliageParticle, InstanceDatum};
use glam::Vec3;

/// Derived per-frame placement of a mesh instance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

/// Foliage point position: scatter/target blend plus a breathing jitter
/// whose amplitude damps to zero as the shape assembles.
pub fn foliage_position(p: &FoliageParticle, t: f32, elapsed: f32) -> Vec3 {
    let base = p.scatter.lerp(p.target, t);
    let jitter = (elapsed * FOLIAGE_JITTER_RATE + p.phase).sin() * FOLIAGE_JITTER_AMP * (1.0 - t);
    base + Vec3::splat(jitter)
}

/// Glow intensity in [0, 1] driving shader brightness.
pub fn foliage_glow(p: &FoliageParticle, elapsed: f32) -> f32 {
    (elapsed * FOLIAGE_GLOW_RATE + p.phase).sin() * 0.5 + 0.5
}

/// Ornaments float on both axes while scattered and pulse slightly in scale.
pub fn ornament_transform(d: &InstanceDatum, t: f32, elapsed: f32) -> InstanceTransform {
    let mut position = d.scatter.lerp(d.target, t);
    let drift = (1.0 - t) * d.weight;
    position.x += (elapsed + d.phase).sin() * drift;
    position.y += (elapsed * ORNAMENT_BOB_RATE + d.phase).cos() * drift;
    InstanceTransform {
        position,
        rotation: Vec3::ZERO,
        scale: d.scale
            * (1.0 + (elapsed * ORNAMENT_PULSE_RATE + d.phase).sin() * ORNAMENT_PULSE_AMOUNT),
    }
}

/// Gifts bob vertically only and carry a slow continuous spin proportional
/// to their weight.
pub fn gift_transform(d: &InstanceDatum, t: f32, elapsed: f32) -> InstanceTransform {
    let mut position = d.scatter.lerp(d.target, t);
    position.y += (elapsed * GIFT_BOB_RATE + d.phase).sin() * (1.0 - t) * d.weight;
    InstanceTransform {
        position,
        rotation: Vec3::new(
            elapsed * GIFT_SPIN_RATE_X * d.weight,
            elapsed * GIFT_SPIN_RATE_Y * d.weight,
            0.0,
        ),
        scale: d.scale,
    }
}

/// The apex star grows with the blend value and is absent while scattered.
#[inline]
pub fn star_scale(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Star bobbing/spin float, always active once the star is visible.
pub fn star_transform(t: f32, elapsed: f32) -> InstanceTransform {
    InstanceTransform {
        position: Vec3::new(
            0.0,
            STAR_Y + (elapsed * STAR_FLOAT_RATE).sin() * STAR_FLOAT_AMP,
            0.0,
        ),
        rotation: Vec3::new(0.0, elapsed * STAR_SPIN_RATE, 0.0),
        scale: STAR_RADIUS * star_scale(t),
    }
}

/// Ground glow fades in with the assembled shape.
#[inline]
pub fn ground_glow_opacity(t: f32) -> f32 {
    GROUND_MAX_OPACITY * t.clamp(0.0, 1.0)
}
