// std
use std::sync::Arc;
// crate
use crate::core::light::{AmbientLight, Light};
use crate::core::shape::ShapeList;
use crate::core::util::Spectrum;

/// Passive container for everything a ray can meet: geometry, light
/// sources, the ambient term and the background color returned for
/// rays that escape the scene. The scene holds no tracing logic.
pub struct Scene {
    pub name: String,
    pub background: Spectrum,
    pub ambient: AmbientLight,
    pub geometries: ShapeList,
    pub lights: Vec<Arc<dyn Light>>,
}

impl Scene {
    /// An empty, black scene with the given name.
    pub fn new(name: &str) -> Self {
        Scene {
            name: String::from(name),
            background: Spectrum::default(),
            ambient: AmbientLight::default(),
            geometries: ShapeList::new(),
            lights: Vec::new(),
        }
    }
    pub fn set_background(mut self, background: Spectrum) -> Self {
        self.background = background;
        self
    }
    pub fn set_ambient(mut self, ambient: AmbientLight) -> Self {
        self.ambient = ambient;
        self
    }
    pub fn set_geometries(mut self, geometries: ShapeList) -> Self {
        self.geometries = geometries;
        self
    }
    pub fn add_light(mut self, light: Arc<dyn Light>) -> Self {
        self.lights.push(light);
        self
    }
}
