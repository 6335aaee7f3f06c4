//! Asset loaders: Wavefront OBJ meshes and PNG images.
#![forbid(unsafe_code)]

pub mod obj;
pub mod texture;

pub use obj::{ObjError, ObjMesh};
pub use texture::{RgbaImage, TextureError};
