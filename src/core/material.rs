// crate
use crate::core::util::Spectrum;

/// Phong material parameters. All coefficients are per-channel
/// attenuation factors in `[0, 1]`; `kt` doubles as the transmission
/// factor of the surface when it occludes a light.
///
/// The default material is fully opaque, non-reflective black.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Material {
    /// diffuse reflection
    pub kd: Spectrum,
    /// specular reflection
    pub ks: Spectrum,
    /// transparency (refraction / transmission)
    pub kt: Spectrum,
    /// mirror reflection
    pub kr: Spectrum,
    /// Phong specular exponent
    pub shininess: i32,
}

impl Material {
    pub fn new() -> Self {
        Material::default()
    }
    pub fn set_kd<S: Into<Spectrum>>(mut self, kd: S) -> Self {
        self.kd = kd.into();
        self
    }
    pub fn set_ks<S: Into<Spectrum>>(mut self, ks: S) -> Self {
        self.ks = ks.into();
        self
    }
    pub fn set_kt<S: Into<Spectrum>>(mut self, kt: S) -> Self {
        self.kt = kt.into();
        self
    }
    pub fn set_kr<S: Into<Spectrum>>(mut self, kr: S) -> Self {
        self.kr = kr.into();
        self
    }
    pub fn set_shininess(mut self, shininess: i32) -> Self {
        self.shininess = shininess;
        self
    }
}
