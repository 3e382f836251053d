//! Analytic primitives. Each shape owns its Phong material and
//! emission; checked constructors reject degenerate geometry.

pub mod cylinder;
pub mod plane;
pub mod sphere;
pub mod triangle;
pub mod tube;
