//! Import and export of triangle meshes.

pub use self::wavefront::ObjLoadError;

mod wavefront;
