//! Spheres, defined by center and radius.

// others
use smallvec::smallvec;
// crate
use crate::core::error::Error;
use crate::core::geometry::{vec3_dot, Point3f, Ray, Vector3f};
use crate::core::material::Material;
use crate::core::shape::{GeoPoint, Intersections, Shape};
use crate::core::util::{align_zero, Float, Spectrum};

pub struct Sphere {
    center: Point3f,
    radius: Float,
    material: Material,
    emission: Spectrum,
}

impl Sphere {
    pub fn new(center: Point3f, radius: Float) -> Result<Self, Error> {
        if radius <= 0.0 {
            return Err(Error::NonPositiveRadius(radius));
        }
        Ok(Sphere {
            center,
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
}

impl Shape for Sphere {
    /// Geometric sphere intersection: project the center onto the
    /// ray, compare the perpendicular distance against the radius. A
    /// grazing ray (perpendicular distance equal to the radius within
    /// tolerance) is a miss.
    fn intersect<'a>(&'a self, ray: &Ray) -> Option<Intersections<'a>> {
        // ray through the center has no usable projection; it exits
        // at exactly one radius along the direction
        if ray.o == self.center {
            return Some(smallvec![GeoPoint::new(
                self,
                self.center + ray.d * self.radius
            )]);
        }

        let u: Vector3f = self.center - ray.o;
        let tm: Float = vec3_dot(&ray.d, &u);
        let d_squared: Float = u.length_squared() - tm * tm;
        let r_squared: Float = self.radius * self.radius;
        if align_zero(d_squared - r_squared) >= 0.0 {
            return None;
        }

        let th: Float = (r_squared - d_squared).sqrt();
        let t1: Float = tm - th;
        let t2: Float = tm + th;

        let mut hits: Intersections<'a> = Intersections::new();
        if align_zero(t1) > 0.0 {
            hits.push(GeoPoint::new(self, ray.position(t1)));
        }
        if align_zero(t2) > 0.0 {
            hits.push(GeoPoint::new(self, ray.position(t2)));
        }
        if hits.is_empty() {
            None
        } else {
            Some(hits)
        }
    }

    fn normal(&self, p: &Point3f) -> Vector3f {
        (p - self.center).normalize()
    }

    fn material(&self) -> Material {
        self.material
    }

    fn emission(&self) -> Spectrum {
        self.emission
    }
}
