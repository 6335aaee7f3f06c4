//! Raylib-based GPU side: mesh upload, textures, the block shader and the
//! drawable instances.
// Unsafe is required for raylib mesh upload and raw texture slot binding.

pub mod conv;
pub mod instance;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use instance::{BlockInstance, Instance};
pub use mesh::{GpuMesh, upload_mesh};
pub use shader::{ShaderError, ShaderProgram, UniformLocations};
pub use texture::{Texture, TextureFilterMode};
