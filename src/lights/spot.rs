// crate
use crate::core::geometry::{vec3_dot, Point3f, Vector3f};
use crate::core::light::Light;
use crate::core::util::{Float, Spectrum};
use crate::lights::point::PointLight;

/// A point light with a beam axis: the attenuated intensity is scaled
/// by the cosine between the beam and the light-to-point direction,
/// clamped at zero, so points behind the beam receive nothing.
pub struct SpotLight {
    point: PointLight,
    direction: Vector3f,
}

impl SpotLight {
    pub fn new(intensity: Spectrum, position: Point3f, direction: Vector3f) -> Self {
        SpotLight {
            point: PointLight::new(intensity, position),
            direction: direction.normalize(),
        }
    }
    pub fn set_kc(mut self, kc: Float) -> Self {
        self.point = self.point.set_kc(kc);
        self
    }
    pub fn set_kl(mut self, kl: Float) -> Self {
        self.point = self.point.set_kl(kl);
        self
    }
    pub fn set_kq(mut self, kq: Float) -> Self {
        self.point = self.point.set_kq(kq);
        self
    }
}

impl Light for SpotLight {
    fn intensity(&self, p: &Point3f) -> Spectrum {
        let beam: Float = vec3_dot(&self.direction, &self.point.direction(p)).max(0.0);
        self.point.intensity(p) * beam
    }

    fn direction(&self, p: &Point3f) -> Vector3f {
        self.point.direction(p)
    }

    fn distance(&self, p: &Point3f) -> Float {
        self.point.distance(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spectrum::RGBSpectrum;

    #[test]
    fn on_axis_point_gets_full_intensity() {
        let light = SpotLight::new(RGBSpectrum::new(2.0), Point3f::ORIGIN, Vector3f::AXIS_Z);
        assert_eq!(
            light.intensity(&Point3f::new(0.0, 0.0, 5.0)),
            RGBSpectrum::new(2.0)
        );
    }

    #[test]
    fn behind_the_beam_gets_nothing() {
        let light = SpotLight::new(RGBSpectrum::new(2.0), Point3f::ORIGIN, Vector3f::AXIS_Z);
        assert!(light.intensity(&Point3f::new(0.0, 0.0, -5.0)).is_black());
    }

    #[test]
    fn off_axis_scales_by_cosine() {
        let light = SpotLight::new(RGBSpectrum::new(1.0), Point3f::ORIGIN, Vector3f::AXIS_Z);
        // 45 degrees off axis
        let p = Point3f::new(0.0, 1.0, 1.0);
        let expected = 1.0 / (2.0 as Float).sqrt();
        assert!((light.intensity(&p)[0] - expected).abs() < 1.0e-12);
    }
}
