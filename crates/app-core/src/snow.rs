//! Ambient snow layer: stateless looping fall, independent of the shape
//! interpolator.

use crate::constants::*;
use crate::field::{layer_rng, LAYER_SNOW};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Snowflake {
    pub origin: Vec3,
    pub speed: f32,
    pub phase: f32,
}

pub fn generate_snow(count: usize, seed: u64) -> Vec<Snowflake> {
    let mut rng = layer_rng(seed, LAYER_SNOW);
    (0..count)
        .map(|_| Snowflake {
            origin: Vec3::new(
                (rng.gen::<f32>() - 0.5) * SNOW_RANGE[0],
                (rng.gen::<f32>() - 0.5) * SNOW_RANGE[1],
                (rng.gen::<f32>() - 0.5) * SNOW_RANGE[2],
            ),
            speed: SNOW_SPEED_MIN + rng.gen::<f32>() * SNOW_SPEED_SPAN,
            phase: rng.gen::<f32>() * TAU,
        })
        .collect()
}

/// Hermite smoothstep, matching the WGSL builtin so host tests and the snow
/// shader agree on the fade curve.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Flake position at `elapsed` seconds: continuous downward drift wrapped
/// into the volume height (centered on y = 0), plus sinusoidal horizontal
/// drift. The wrap itself is masked by [`flake_opacity`].
pub fn flake_position(f: &Snowflake, elapsed: f32) -> Vec3 {
    let height = SNOW_RANGE[1];
    let y = (f.origin.y - elapsed * f.speed).rem_euclid(height) - height * 0.5;
    Vec3::new(
        f.origin.x + (elapsed * SNOW_DRIFT_RATE_X + f.phase).sin() * SNOW_DRIFT_AMP,
        y,
        f.origin.z + (elapsed * SNOW_DRIFT_RATE_Z + f.phase).cos() * SNOW_DRIFT_AMP,
    )
}

/// Opacity for a wrapped vertical position: full inside the volume, ramping
/// to zero before either wrap boundary.
pub fn flake_opacity(y: f32) -> f32 {
    let height = SNOW_RANGE[1];
    let fade = 1.0
        - smoothstep(
            height * SNOW_FADE_START_FRACTION,
            height * SNOW_FADE_END_FRACTION,
            y.abs(),
        );
    fade * SNOW_BASE_OPACITY
}
