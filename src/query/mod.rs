//! Non-persistent geometric queries.
//!
//! The main operation provided by this module is [`bisect::bisect()`], which
//! splits a triangle mesh in two along a plane and caps both halves so they
//! stay closed. The [`bisect::Bisect`] and [`bisect::CanonicalBisect`] traits
//! expose the same operation with the plane given as a unit axis and a bias,
//! which is convenient when the plane is already expressed that way.

pub use self::bisect::{
    bisect, Bisect, BisectError, BisectOptions, Bisection, CanonicalBisect, Fragment,
};

pub mod bisect;
