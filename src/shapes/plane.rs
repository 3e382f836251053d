//! Infinite planes, defined by a reference point and a unit normal.

// others
use smallvec::smallvec;
// crate
use crate::core::error::Error;
use crate::core::geometry::{vec3_cross, vec3_dot, Point3f, Ray, Vector3f};
use crate::core::material::Material;
use crate::core::shape::{GeoPoint, Intersections, Shape};
use crate::core::util::{align_zero, is_zero, Float, Spectrum};

pub struct Plane {
    point: Point3f,
    normal: Vector3f,
    material: Material,
    emission: Spectrum,
}

impl Plane {
    pub fn new(point: Point3f, normal: Vector3f) -> Result<Self, Error> {
        if normal.x == 0.0 && normal.y == 0.0 && normal.z == 0.0 {
            return Err(Error::ZeroVector);
        }
        Ok(Plane {
            point,
            normal: normal.normalize(),
            material: Material::default(),
            emission: Spectrum::default(),
        })
    }

    /// Plane through three points; the normal orientation follows the
    /// right-hand rule over `p2 - p1` and `p3 - p1`.
    pub fn from_points(p1: Point3f, p2: Point3f, p3: Point3f) -> Result<Self, Error> {
        if p1 == p2 || p1 == p3 || p2 == p3 {
            return Err(Error::DuplicatePoints);
        }
        let u: Vector3f = p2 - p1;
        let v: Vector3f = p3 - p1;
        let cross = vec3_cross(&u, &v).map_err(|_| Error::CollinearPoints)?;
        Ok(Plane {
            point: p1,
            normal: cross.normalize(),
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

    /// Parametric distance to the plane along the ray, if the ray
    /// crosses it strictly in front of the origin. Rays in the plane,
    /// parallel to it, or starting at the reference point are misses.
    pub(crate) fn hit_distance(&self, ray: &Ray) -> Option<Float> {
        if self.point == ray.o {
            return None;
        }
        let denominator: Float = vec3_dot(&self.normal, &ray.d);
        if is_zero(denominator) {
            return None;
        }
        let numerator: Float = vec3_dot(&self.normal, &(self.point - ray.o));
        let t: Float = numerator / denominator;
        if align_zero(t) <= 0.0 {
            None
        } else {
            Some(t)
        }
    }
}

impl Shape for Plane {
    fn intersect<'a>(&'a self, ray: &Ray) -> Option<Intersections<'a>> {
        self.hit_distance(ray)
            .map(|t| smallvec![GeoPoint::new(self, ray.position(t))])
    }

    /// The normal is constant over the surface.
    fn normal(&self, _p: &Point3f) -> Vector3f {
        self.normal
    }

    fn material(&self) -> Material {
        self.material
    }

    fn emission(&self) -> Spectrum {
        self.emission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_plane() -> Plane {
        Plane::new(Point3f::ORIGIN, Vector3f::AXIS_Z).unwrap()
    }

    #[test]
    fn from_points_rejects_degenerate_input() {
        let p = Point3f::new(1.0, 0.0, 0.0);
        let q = Point3f::new(0.0, 1.0, 0.0);
        assert_eq!(
            Plane::from_points(p, p, q).err(),
            Some(Error::DuplicatePoints)
        );
        assert_eq!(
            Plane::from_points(
                Point3f::new(1.0, 1.0, 1.0),
                Point3f::new(2.0, 2.0, 2.0),
                Point3f::new(3.0, 3.0, 3.0),
            )
            .err(),
            Some(Error::CollinearPoints)
        );
    }

    #[test]
    fn from_points_normal_is_unit_and_perpendicular() {
        let plane = Plane::from_points(
            Point3f::ORIGIN,
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        let n = plane.normal(&Point3f::ORIGIN);
        assert!((n.length() - 1.0).abs() < 1.0e-12);
        assert_eq!(n, Vector3f::AXIS_Z);
    }

    #[test]
    fn crossing_ray_hits_once() {
        let plane = xy_plane();
        let ray = Ray::new(
            Point3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, -1.0).unwrap(),
        );
        let hits = plane.intersect(&ray).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].point, Point3f::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn receding_ray_misses() {
        let plane = xy_plane();
        let ray = Ray::new(
            Point3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 1.0).unwrap(),
        );
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn parallel_rays_miss() {
        let plane = xy_plane();
        // above the plane
        let ray = Ray::new(Point3f::new(0.0, 0.0, 1.0), Vector3f::AXIS_X);
        assert!(plane.intersect(&ray).is_none());
        // contained in the plane
        let ray = Ray::new(Point3f::new(1.0, 2.0, 0.0), Vector3f::AXIS_X);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn ray_starting_on_plane_misses() {
        let plane = xy_plane();
        let ray = Ray::new(
            Point3f::new(1.0, 1.0, 0.0),
            Vector3f::new(0.0, 1.0, 1.0).unwrap(),
        );
        assert!(plane.intersect(&ray).is_none());
        // origin exactly at the reference point
        let ray = Ray::new(Point3f::ORIGIN, Vector3f::new(0.0, 1.0, 1.0).unwrap());
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn orthogonal_ray_before_plane_hits() {
        let plane = xy_plane();
        let ray = Ray::new(Point3f::new(2.0, 3.0, -5.0), Vector3f::AXIS_Z);
        let hits = plane.intersect(&ray).unwrap();
        assert_eq!(hits[0].point, Point3f::new(2.0, 3.0, 0.0));
        // starting beyond the plane
        let ray = Ray::new(Point3f::new(2.0, 3.0, 5.0), Vector3f::AXIS_Z);
        assert!(plane.intersect(&ray).is_none());
    }
}
