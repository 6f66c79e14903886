//! Simulation context for one mounted scene.
//!
//! All per-frame animation state lives in an explicit [`TreeScene`] value
//! advanced by a single `update` call, so there is no ambient mutable state
//! and the whole core runs under host tests.

use crate::animate::{gift_transform, ground_glow_opacity, ornament_transform, InstanceTransform};
use crate::blend::{ShapeBlend, TreeMode};
use crate::constants::*;
use crate::field::{generate_foliage, generate_gifts, generate_ornaments, FoliageParticle, InstanceDatum};
use crate::snow::{generate_snow, Snowflake};
use crate::state::OrbitCamera;

pub struct TreeScene {
    mode: TreeMode,
    blend: ShapeBlend,
    pub foliage: Vec<FoliageParticle>,
    pub ornaments: Vec<InstanceDatum>,
    pub gifts: Vec<InstanceDatum>,
    pub snow: Vec<Snowflake>,
    pub camera: OrbitCamera,
    // Reused each frame to avoid per-frame allocation
    ornament_transforms: Vec<InstanceTransform>,
    gift_transforms: Vec<InstanceTransform>,
}

impl TreeScene {
    pub fn new(seed: u64, aspect: f32) -> Self {
        let ornaments = generate_ornaments(ORNAMENT_COUNT, seed);
        let gifts = generate_gifts(GIFT_COUNT, seed);
        Self {
            mode: TreeMode::TreeShape,
            blend: ShapeBlend::new(0.0),
            foliage: generate_foliage(FOLIAGE_COUNT, seed),
            ornament_transforms: vec![InstanceTransform::default(); ornaments.len()],
            gift_transforms: vec![InstanceTransform::default(); gifts.len()],
            ornaments,
            gifts,
            snow: generate_snow(SNOW_COUNT, seed),
            camera: OrbitCamera::new(aspect),
        }
    }

    #[inline]
    pub fn mode(&self) -> TreeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TreeMode) {
        if self.mode != mode {
            log::info!("scene mode -> {:?}", mode);
        }
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Hook for the oracle: a granted wish assembles the tree.
    pub fn assemble(&mut self) {
        self.set_mode(TreeMode::TreeShape);
    }

    /// Advance one frame. `elapsed_sec` is time since scene start,
    /// `dt_sec` the delta since the previous frame (no fixed cadence is
    /// assumed). Returns the blend value for this frame; every layer reads
    /// the same snapshot.
    pub fn update(&mut self, elapsed_sec: f32, dt_sec: f32) -> f32 {
        let t = self.blend.tick(self.mode, dt_sec);
        if self.mode == TreeMode::TreeShape {
            self.camera.auto_rotate(dt_sec);
        }
        for (out, datum) in self.ornament_transforms.iter_mut().zip(&self.ornaments) {
            *out = ornament_transform(datum, t, elapsed_sec);
        }
        for (out, datum) in self.gift_transforms.iter_mut().zip(&self.gifts) {
            *out = gift_transform(datum, t, elapsed_sec);
        }
        t
    }

    #[inline]
    pub fn blend_value(&self) -> f32 {
        self.blend.value()
    }

    #[inline]
    pub fn ground_opacity(&self) -> f32 {
        ground_glow_opacity(self.blend.value())
    }

    #[inline]
    pub fn ornament_transforms(&self) -> &[InstanceTransform] {
        &self.ornament_transforms
    }

    #[inline]
    pub fn gift_transforms(&self) -> &[InstanceTransform] {
        &self.gift_transforms
    }
}
