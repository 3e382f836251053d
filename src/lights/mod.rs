//! Concrete light sources. The shared trait lives in
//! [`core::light`](../core/light/index.html).

pub mod directional;
pub mod point;
pub mod spot;
