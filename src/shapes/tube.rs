//! Tubes: infinite cylinders around an axis ray.

// crate
use crate::core::error::Error;
use crate::core::geometry::{vec3_dot, Point3f, Ray, Vector3f};
use crate::core::material::Material;
use crate::core::shape::{GeoPoint, Intersections, Shape};
use crate::core::util::{align_zero, is_zero, quadratic, Float, Spectrum};

pub struct Tube {
    axis: Ray,
    radius: Float,
    material: Material,
    emission: Spectrum,
}

impl Tube {
    pub fn new(axis: Ray, radius: Float) -> Result<Self, Error> {
        if radius <= 0.0 {
            return Err(Error::NonPositiveRadius(radius));
        }
        Ok(Tube {
            axis,
            radius,
            material: Material::default(),
            emission: Spectrum::default(),
        })
    }
    pub fn set_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }
    pub fn set_emission(mut self, emission: Spectrum) -> Self {
        self.emission = emission;
        self
    }

    /// Parametric distances of the lateral-surface hits, ascending.
    /// Shared with the finite cylinder, which additionally bounds the
    /// axial extent.
    pub(crate) fn lateral_hits(&self, ray: &Ray) -> Option<(Float, Float)> {
        // work in the components perpendicular to the axis
        let d_axial: Float = vec3_dot(&ray.d, &self.axis.d);
        let d_perp: Vector3f = ray.d - self.axis.d * d_axial;
        let delta: Vector3f = ray.o - self.axis.o;
        let delta_axial: Float = vec3_dot(&delta, &self.axis.d);
        let delta_perp: Vector3f = delta - self.axis.d * delta_axial;

        let a: Float = d_perp.length_squared();
        // parallel to the axis: no lateral crossing
        if is_zero(a) {
            return None;
        }
        let b: Float = 2.0 * vec3_dot(&d_perp, &delta_perp);
        let c: Float = delta_perp.length_squared() - self.radius * self.radius;
        quadratic(a, b, c)
    }

    pub(crate) fn axis(&self) -> &Ray {
        &self.axis
    }
    pub(crate) fn radius(&self) -> Float {
        self.radius
    }
}

impl Shape for Tube {
    fn intersect<'a>(&'a self, ray: &Ray) -> Option<Intersections<'a>> {
        let (t0, t1) = self.lateral_hits(ray)?;
        let mut hits: Intersections<'a> = Intersections::new();
        for t in [t0, t1] {
            if align_zero(t) > 0.0 {
                hits.push(GeoPoint::new(self, ray.position(t)));
            }
        }
        if hits.is_empty() {
            None
        } else {
            Some(hits)
        }
    }

    /// Normal through the axis: project the point onto the axis and
    /// point away from the projection. A point level with the axis
    /// origin projects onto the origin itself.
    fn normal(&self, p: &Point3f) -> Vector3f {
        let to_point: Vector3f = p - self.axis.o;
        let t: Float = vec3_dot(&self.axis.d, &to_point);
        if is_zero(t) {
            return to_point.normalize();
        }
        (p - self.axis.position(t)).normalize()
    }

    fn material(&self) -> Material {
        self.material
    }

    fn emission(&self) -> Spectrum {
        self.emission
    }
}
