pub mod backdrop;
pub mod particles;
pub mod scene;
pub mod session;
pub mod text;
pub mod transition;

pub use backdrop::*;
pub use particles::*;
pub use scene::*;
pub use session::*;
pub use text::*;
pub use transition::*;

// Shaders bundled as string constants
pub static BACKGROUND_WGSL: &str = include_str!("../../shaders/background.wgsl");
pub static BACKDROP_WGSL: &str = include_str!("../../shaders/backdrop.wgsl");
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
