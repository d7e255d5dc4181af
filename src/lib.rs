/*!
shatter3d
========

**shatter3d** is a 3-dimensional mesh destruction library written with
the rust programming language. It bisects a closed, roughly convex triangle
mesh with a plane, producing up to two closed fragments that are capped,
recentered on their own centroid, and tagged with an outward impulse so a
physics layer can spawn them as independent bodies.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![doc(html_root_url = "https://docs.rs/shatter3d/0.1.0")]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
#[cfg(feature = "wavefront")]
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
