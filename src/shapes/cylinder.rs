//! Finite cylinders: a tube bounded by two cap disks.

// others
use smallvec::SmallVec;
// crate
use crate::core::error::Error;
use crate::core::geometry::{pnt3_distance_squared, vec3_dot, Point3f, Ray, Vector3f};
use crate::core::material::Material;
use crate::core::shape::{GeoPoint, Intersections, Shape};
use crate::core::util::{align_zero, is_zero, Float, Spectrum};
use crate::shapes::tube::Tube;

pub struct Cylinder {
    tube: Tube,
    height: Float,
}

impl Cylinder {
    /// The axis origin is the center of the bottom cap; the top cap
    /// sits `height` along the axis direction.
    pub fn new(axis: Ray, radius: Float, height: Float) -> Result<Self, Error> {
        if height <= 0.0 {
            return Err(Error::NonPositiveHeight(height));
        }
        Ok(Cylinder {
            tube: Tube::new(axis, radius)?,
            height,
        })
    }
    pub fn set_material(mut self, material: Material) -> Self {
        self.tube = self.tube.set_material(material);
        self
    }
    pub fn set_emission(mut self, emission: Spectrum) -> Self {
        self.tube = self.tube.set_emission(emission);
        self
    }

    /// Forward hit with the cap disk centered at `center`, open: the
    /// rim circle is excluded.
    fn cap_hit(&self, ray: &Ray, center: Point3f) -> Option<Float> {
        let n: Vector3f = self.tube.axis().d;
        let denominator: Float = vec3_dot(&n, &ray.d);
        if is_zero(denominator) {
            return None;
        }
        let t: Float = vec3_dot(&n, &(center - ray.o)) / denominator;
        if align_zero(t) <= 0.0 {
            return None;
        }
        let q: Point3f = ray.position(t);
        let r_squared: Float = self.tube.radius() * self.tube.radius();
        if align_zero(pnt3_distance_squared(&q, &center) - r_squared) < 0.0 {
            Some(t)
        } else {
            None
        }
    }
}

impl Shape for Cylinder {
    fn intersect<'a>(&'a self, ray: &Ray) -> Option<Intersections<'a>> {
        let axis: &Ray = self.tube.axis();
        let mut ts: SmallVec<[Float; 4]> = SmallVec::new();

        // lateral surface, restricted to the open axial extent
        if let Some((t0, t1)) = self.tube.lateral_hits(ray) {
            for t in [t0, t1] {
                if align_zero(t) > 0.0 {
                    let m: Float = align_zero(vec3_dot(&axis.d, &(ray.position(t) - axis.o)));
                    if m > 0.0 && align_zero(m - self.height) < 0.0 {
                        ts.push(t);
                    }
                }
            }
        }

        let top: Point3f = axis.o + axis.d * self.height;
        if let Some(t) = self.cap_hit(ray, axis.o) {
            ts.push(t);
        }
        if let Some(t) = self.cap_hit(ray, top) {
            ts.push(t);
        }

        if ts.is_empty() {
            return None;
        }
        ts.sort_by(|a, b| a.total_cmp(b));
        Some(
            ts.iter()
                .map(|&t| GeoPoint::new(self, ray.position(t)))
                .collect(),
        )
    }

    /// Cap points (projection at or beyond either end) take the axial
    /// normal; anything else is lateral. The bottom cap, including
    /// the axis origin itself, faces against the axis direction.
    fn normal(&self, p: &Point3f) -> Vector3f {
        let axis: &Ray = self.tube.axis();
        let t: Float = align_zero(vec3_dot(&axis.d, &(p - axis.o)));
        if t <= 0.0 {
            return -axis.d;
        }
        if align_zero(t - self.height) >= 0.0 {
            return axis.d;
        }
        (p - axis.position(t)).normalize()
    }

    fn material(&self) -> Material {
        self.tube.material()
    }

    fn emission(&self) -> Spectrum {
        self.tube.emission()
    }
}
