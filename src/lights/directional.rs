// crate
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::light::Light;
use crate::core::util::{Float, Spectrum};

/// Light at infinity: uniform intensity, fixed direction, and no
/// meaningful distance, so every occluder in front of the shaded
/// point casts a shadow.
pub struct DirectionalLight {
    intensity: Spectrum,
    direction: Vector3f,
}

impl DirectionalLight {
    pub fn new(intensity: Spectrum, direction: Vector3f) -> Self {
        DirectionalLight {
            intensity,
            direction: direction.normalize(),
        }
    }
}

impl Light for DirectionalLight {
    fn intensity(&self, _p: &Point3f) -> Spectrum {
        self.intensity
    }

    fn direction(&self, _p: &Point3f) -> Vector3f {
        self.direction
    }

    fn distance(&self, _p: &Point3f) -> Float {
        Float::INFINITY
    }
}
