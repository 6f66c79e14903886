// Frontend interaction and lighting tuning constants

// Pointer orbit sensitivity (radians per CSS pixel of drag)
pub const ORBIT_SENSITIVITY: f32 = 0.005;

// Wheel zoom sensitivity (world units per wheel delta unit)
pub const ZOOM_SENSITIVITY: f32 = 0.01;

// Warm key light placement and strength for the mesh layers
pub const KEY_LIGHT_POS: [f32; 3] = [20.0, 20.0, 20.0];
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;

// Emissive boost for the apex star so the bloom pass picks it up
pub const STAR_EMISSIVE: f32 = 8.0;

// Field generation seed for the mounted scene
pub const SCENE_SEED: u64 = 42;

// Generative-text service used by the gift oracle
pub const WISH_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const WISH_MODEL: &str = "gemini-3-flash-preview";
