//! # rs_whitted
//!
//! [Rust][rust] crate implementing a Whitted-style recursive ray
//! tracer: analytic ray/primitive intersection for spheres, planes,
//! triangles, tubes and cylinders, a Phong local illumination model
//! with directional, point and spot lights, partial shadows through
//! transparent occluders, and recursive reflection and refraction with
//! an energy-based recursion cutoff.
//!
//! The sole shading entry point is
//! [`WhittedIntegrator::trace_ray`](integrators/whitted/struct.WhittedIntegrator.html#method.trace_ray):
//! callers supply one ray per pixel and receive one color per call,
//! with no ordering constraint between calls.
//!
//! [rust]: https://www.rust-lang.org

#[macro_use]
extern crate impl_ops;

pub mod cameras;
pub mod core;
pub mod integrators;
pub mod lights;
pub mod shapes;
