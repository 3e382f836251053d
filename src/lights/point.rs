// crate
use crate::core::geometry::{pnt3_distance, Point3f, Vector3f};
use crate::core::light::Light;
use crate::core::util::{Float, Spectrum};

/// Isotropic light at a position, attenuated with distance by the
/// usual constant/linear/quadratic factors. The defaults (`kc` = 1,
/// `kl` = `kq` = 0) give no falloff.
pub struct PointLight {
    intensity: Spectrum,
    position: Point3f,
    kc: Float,
    kl: Float,
    kq: Float,
}

impl PointLight {
    pub fn new(intensity: Spectrum, position: Point3f) -> Self {
        PointLight {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }
    pub fn set_kc(mut self, kc: Float) -> Self {
        self.kc = kc;
        self
    }
    pub fn set_kl(mut self, kl: Float) -> Self {
        self.kl = kl;
        self
    }
    pub fn set_kq(mut self, kq: Float) -> Self {
        self.kq = kq;
        self
    }
}

impl Light for PointLight {
    fn intensity(&self, p: &Point3f) -> Spectrum {
        let distance: Float = pnt3_distance(&self.position, p);
        self.intensity / (self.kc + self.kl * distance + self.kq * distance * distance)
    }

    fn direction(&self, p: &Point3f) -> Vector3f {
        (p - self.position).normalize()
    }

    fn distance(&self, p: &Point3f) -> Float {
        pnt3_distance(&self.position, p)
    }
}
