//! Triangle meshes and the Wavefront OBJ loader
//!
//! A model is loaded once and stays read-only while the render passes
//! walk its faces.

mod mesh;
mod obj;

pub use mesh::*;
pub use obj::*;
