//! Particle field generation.
//!
//! Every layer gets two precomputed position sets per particle: a scattered
//! position (diffuse cloud around the eventual shape) and a target position
//! (a point of the assembled tree). Fields are generated once from an
//! explicit seed so tests can reproduce them exactly; nothing here mutates
//! after generation.

use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Fine foliage point. Rendered as a glowing billboard; the scatter/target
/// blend for this layer happens in the vertex shader.
#[derive(Clone, Debug, PartialEq)]
pub struct FoliageParticle {
    pub scatter: Vec3,
    pub target: Vec3,
    pub phase: f32,
    pub size: f32,
}

/// Ornament or gift instance. The datum itself is immutable; a derived
/// transform is recomputed from it every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceDatum {
    pub scatter: Vec3,
    pub target: Vec3,
    pub scale: f32,
    pub weight: f32,
    pub color: [f32; 3],
    pub phase: f32,
}

// Layer indices for seed derivation
pub(crate) const LAYER_FOLIAGE: u64 = 0;
pub(crate) const LAYER_ORNAMENTS: u64 = 1;
pub(crate) const LAYER_GIFTS: u64 = 2;
pub(crate) const LAYER_SNOW: u64 = 3;

/// Derive a per-layer RNG from the base seed so layers can be regenerated
/// independently without correlating.
pub(crate) fn layer_rng(seed: u64, layer: u64) -> StdRng {
    let mix = seed ^ layer.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mix)
}

/// Uniform random direction on the unit sphere.
fn unit_direction(rng: &mut StdRng) -> Vec3 {
    let y = rng.gen::<f32>() * 2.0 - 1.0;
    let theta = rng.gen::<f32>() * TAU;
    let r = (1.0 - y * y).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), y, r * theta.sin())
}

fn scatter_point(min_radius: f32, radius_span: f32, rng: &mut StdRng) -> Vec3 {
    unit_direction(rng) * (min_radius + rng.gen::<f32>() * radius_span)
}

/// Sample a point of the tree cone. With `fill` the point lands anywhere in
/// the cone interior; without it the point sits exactly on the surface
/// radius for its height, giving a thin shell.
pub fn cone_point(height: f32, radius: f32, fill: bool, rng: &mut StdRng) -> Vec3 {
    let h = rng.gen::<f32>() * height;
    let shell = (1.0 - h / height) * radius;
    let r = if fill { shell * rng.gen::<f32>() } else { shell };
    let theta = rng.gen::<f32>() * TAU;
    Vec3::new(theta.cos() * r, TREE_BASE_Y + h, theta.sin() * r)
}

pub fn generate_foliage(count: usize, seed: u64) -> Vec<FoliageParticle> {
    let mut rng = layer_rng(seed, LAYER_FOLIAGE);
    (0..count)
        .map(|_| FoliageParticle {
            scatter: scatter_point(FOLIAGE_SCATTER_MIN, FOLIAGE_SCATTER_SPAN, &mut rng),
            target: cone_point(FOLIAGE_CONE_HEIGHT, FOLIAGE_CONE_RADIUS, true, &mut rng),
            phase: rng.gen::<f32>() * TAU,
            size: FOLIAGE_SIZE_MIN + rng.gen::<f32>() * FOLIAGE_SIZE_SPAN,
        })
        .collect()
}

pub fn generate_ornaments(count: usize, seed: u64) -> Vec<InstanceDatum> {
    let mut rng = layer_rng(seed, LAYER_ORNAMENTS);
    (0..count)
        .map(|_| {
            let color = if rng.gen::<f32>() < ORNAMENT_GOLD_PROBABILITY {
                COLOR_BRIGHT_GOLD
            } else {
                COLOR_WHITE
            };
            InstanceDatum {
                scatter: scatter_point(ORNAMENT_SCATTER_MIN, ORNAMENT_SCATTER_SPAN, &mut rng),
                target: cone_point(ORNAMENT_CONE_HEIGHT, ORNAMENT_CONE_RADIUS, false, &mut rng),
                scale: ORNAMENT_SCALE_MIN + rng.gen::<f32>() * ORNAMENT_SCALE_SPAN,
                weight: ORNAMENT_WEIGHT,
                color,
                phase: rng.gen::<f32>() * TAU,
            }
        })
        .collect()
}

pub fn generate_gifts(count: usize, seed: u64) -> Vec<InstanceDatum> {
    let mut rng = layer_rng(seed, LAYER_GIFTS);
    (0..count)
        .map(|_| {
            let target = Vec3::new(
                (rng.gen::<f32>() - 0.5) * GIFT_FOOTPRINT,
                TREE_BASE_Y,
                (rng.gen::<f32>() - 0.5) * GIFT_FOOTPRINT,
            );
            InstanceDatum {
                scatter: scatter_point(GIFT_SCATTER_MIN, GIFT_SCATTER_SPAN, &mut rng),
                target,
                scale: GIFT_SCALE_MIN + rng.gen::<f32>() * GIFT_SCALE_SPAN,
                weight: GIFT_WEIGHT,
                color: GIFT_PALETTE[rng.gen_range(0..GIFT_PALETTE.len())],
                phase: rng.gen::<f32>() * TAU,
            }
        })
        .collect()
}
