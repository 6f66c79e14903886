pub mod animate;
pub mod blend;
pub mod constants;
pub mod field;
pub mod oracle;
pub mod scene;
pub mod snow;
pub mod state;

// Shaders bundled as string constants
pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");
pub static FOLIAGE_WGSL: &str = include_str!("../shaders/foliage.wgsl");
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static SNOW_WGSL: &str = include_str!("../shaders/snow.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use animate::*;
pub use blend::*;
pub use constants::*;
pub use field::*;
pub use oracle::*;
pub use scene::*;
pub use snow::*;
pub use state::*;
