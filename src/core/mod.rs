//! The core of the tracer: math types, spectra, materials, the
//! `Shape` and `Light` seams, the scene aggregate, and the film.

pub mod error;
pub mod film;
pub mod geometry;
pub mod light;
pub mod material;
pub mod scene;
pub mod shape;
pub mod spectrum;
pub mod util;
