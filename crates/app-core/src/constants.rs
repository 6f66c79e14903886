//! Scene tuning constants shared by the simulation core and the web frontend.
//!
//! These constants express intended behavior (counts, shape dimensions, rate
//! constants) and keep magic numbers out of the code.

use std::f32::consts::PI;

// Layer population counts
pub const FOLIAGE_COUNT: usize = 8000;
pub const ORNAMENT_COUNT: usize = 150;
pub const GIFT_COUNT: usize = 30;
pub const SNOW_COUNT: usize = 1500;

// Tree cone geometry. Foliage fills the cone volume; ornaments sit on a
// slightly tighter shell so they read as hanging from the surface.
pub const FOLIAGE_CONE_HEIGHT: f32 = 6.0;
pub const FOLIAGE_CONE_RADIUS: f32 = 3.0;
pub const ORNAMENT_CONE_HEIGHT: f32 = 5.8;
pub const ORNAMENT_CONE_RADIUS: f32 = 2.9;
pub const TREE_BASE_Y: f32 = -2.5;

// Gifts scatter on a square footprint under the tree rather than on the cone
pub const GIFT_FOOTPRINT: f32 = 4.0;

// Scattered-cloud radius ranges (min + rand * span) per layer
pub const FOLIAGE_SCATTER_MIN: f32 = 10.0;
pub const FOLIAGE_SCATTER_SPAN: f32 = 8.0;
pub const ORNAMENT_SCATTER_MIN: f32 = 12.0;
pub const ORNAMENT_SCATTER_SPAN: f32 = 5.0;
pub const GIFT_SCATTER_MIN: f32 = 8.0;
pub const GIFT_SCATTER_SPAN: f32 = 4.0;

// Per-particle size/scale ranges
pub const FOLIAGE_SIZE_MIN: f32 = 0.05;
pub const FOLIAGE_SIZE_SPAN: f32 = 0.15;
pub const ORNAMENT_SCALE_MIN: f32 = 0.05;
pub const ORNAMENT_SCALE_SPAN: f32 = 0.1;
pub const GIFT_SCALE_MIN: f32 = 0.2;
pub const GIFT_SCALE_SPAN: f32 = 0.3;

// Idle-motion weights (inverse heaviness; lighter items drift further)
pub const ORNAMENT_WEIGHT: f32 = 0.6;
pub const GIFT_WEIGHT: f32 = 0.2;

// Shape interpolation rate constant (per second) for the exponential
// approach toward the mode target
pub const SHAPE_RATE_PER_SEC: f32 = 1.5;

// Foliage idle motion and glow
pub const FOLIAGE_JITTER_RATE: f32 = 1.5;
pub const FOLIAGE_JITTER_AMP: f32 = 0.15;
pub const FOLIAGE_GLOW_RATE: f32 = 2.0;

// Ornament idle motion
pub const ORNAMENT_BOB_RATE: f32 = 0.8; // vertical bob runs slower than the sway
pub const ORNAMENT_PULSE_RATE: f32 = 3.0;
pub const ORNAMENT_PULSE_AMOUNT: f32 = 0.1;

// Gift idle motion and spin
pub const GIFT_BOB_RATE: f32 = 0.5;
pub const GIFT_SPIN_RATE_X: f32 = 0.1;
pub const GIFT_SPIN_RATE_Y: f32 = 0.2;

// Apex star
pub const STAR_Y: f32 = 3.5;
pub const STAR_RADIUS: f32 = 0.5;
pub const STAR_FLOAT_RATE: f32 = 4.0;
pub const STAR_FLOAT_AMP: f32 = 0.1;
pub const STAR_SPIN_RATE: f32 = 1.5;
pub const STAR_LIGHT_INTENSITY: f32 = 20.0;

// Ground glow disc
pub const GROUND_Y: f32 = -2.6;
pub const GROUND_EXTENT: f32 = 12.0;
pub const GROUND_MAX_OPACITY: f32 = 0.2;

// Snow volume (width, height, depth) and motion
pub const SNOW_RANGE: [f32; 3] = [30.0, 20.0, 30.0];
pub const SNOW_SPEED_MIN: f32 = 0.5;
pub const SNOW_SPEED_SPAN: f32 = 1.5;
pub const SNOW_DRIFT_AMP: f32 = 0.5;
pub const SNOW_DRIFT_RATE_X: f32 = 0.5;
pub const SNOW_DRIFT_RATE_Z: f32 = 0.3;
// Fade band near the wrap boundary, as fractions of the volume height:
// opacity ramps to zero between 0.4*H and 0.5*H of |y| so the wrap is masked
pub const SNOW_FADE_START_FRACTION: f32 = 0.4;
pub const SNOW_FADE_END_FRACTION: f32 = 0.5;
pub const SNOW_BASE_OPACITY: f32 = 0.6;
pub const SNOW_FLAKE_SIZE: f32 = 0.05;

// Ornament color split: gold with this probability, otherwise white
pub const ORNAMENT_GOLD_PROBABILITY: f32 = 0.7;

// Palette (normalized sRGB)
pub const COLOR_BACKGROUND: [f32; 3] = [0.000, 0.031, 0.024]; // deep green-black
pub const COLOR_EVERGREEN: [f32; 3] = [0.016, 0.224, 0.153];
pub const COLOR_GOLD: [f32; 3] = [0.831, 0.686, 0.216];
pub const COLOR_BRIGHT_GOLD: [f32; 3] = [1.0, 0.843, 0.0];
pub const COLOR_DEEP_GREEN: [f32; 3] = [0.102, 0.278, 0.165];
pub const COLOR_CRIMSON: [f32; 3] = [0.545, 0.0, 0.0];
pub const COLOR_WHITE: [f32; 3] = [1.0, 1.0, 1.0];

pub const GIFT_PALETTE: [[f32; 3]; 4] = [
    COLOR_EVERGREEN,
    COLOR_GOLD,
    COLOR_DEEP_GREEN,
    COLOR_CRIMSON,
];

// Camera
pub const CAMERA_FOV_Y: f32 = 35.0 * PI / 180.0;
pub const CAMERA_START_DISTANCE: f32 = 14.0;
pub const CAMERA_MIN_DISTANCE: f32 = 8.0;
pub const CAMERA_MAX_DISTANCE: f32 = 25.0;
// Polar angle measured from +Y; matches the orbit-control clamp range
pub const CAMERA_MIN_POLAR: f32 = PI / 6.0;
pub const CAMERA_MAX_POLAR: f32 = PI / 1.6;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
// One full orbit roughly every two minutes while the tree is assembled
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = 0.052;

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 2.5;
pub const BLOOM_THRESHOLD: f32 = 0.2;
pub const VIGNETTE_OFFSET: f32 = 0.1;
pub const VIGNETTE_DARKNESS: f32 = 1.3;
pub const NOISE_OPACITY: f32 = 0.05;
pub const ABERRATION_OFFSET: f32 = 0.001;
