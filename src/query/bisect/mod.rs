//! Bisection of a triangle mesh by a plane.

pub use self::bisect::{
    bisect, Bisect, BisectError, BisectOptions, Bisection, CanonicalBisect, Fragment,
};

mod bisect;
mod bisect_trimesh;
