// crate
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::util::{Float, Spectrum};

/// A light source queried per shaded point. `direction` follows the
/// *light-to-point* convention throughout the crate: the returned
/// unit vector points from the source towards the shaded point.
pub trait Light: Send + Sync {
    /// Radiance arriving at `p`.
    fn intensity(&self, p: &Point3f) -> Spectrum;
    /// Unit vector from the light towards `p`.
    fn direction(&self, p: &Point3f) -> Vector3f;
    /// Distance from the light to `p`; infinite for lights at
    /// infinity. Occluders beyond this distance cast no shadow.
    fn distance(&self, p: &Point3f) -> Float;
}

/// Uniform base illumination, added exactly once per primary ray.
/// Not a [`Light`]: it has no direction and casts no shadows.
///
/// [`Light`]: trait.Light.html
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct AmbientLight {
    intensity: Spectrum,
}

impl AmbientLight {
    /// Effective intensity is the raw intensity `ia` scaled by the
    /// attenuation factor `ka` (scalar or per-channel).
    pub fn new<S: Into<Spectrum>>(ia: Spectrum, ka: S) -> Self {
        AmbientLight {
            intensity: ia * ka.into(),
        }
    }
    pub fn intensity(&self) -> Spectrum {
        self.intensity
    }
}
