//! Triangles. The interior test fans three cross products around the
//! ray origin; the boundary (edges and vertices) is excluded.

// others
use smallvec::smallvec;
// crate
use crate::core::error::Error;
use crate::core::geometry::{vec3_cross, vec3_dot, Point3f, Ray, Vector3f};
use crate::core::material::Material;
use crate::core::shape::{GeoPoint, Intersections, Shape};
use crate::core::util::{align_zero, Float, Spectrum};
use crate::shapes::plane::Plane;

pub struct Triangle {
    vertices: [Point3f; 3],
    plane: Plane,
    material: Material,
    emission: Spectrum,
}

impl Triangle {
    /// Fails like [`Plane::from_points`] when the vertices coincide
    /// or are collinear.
    ///
    /// [`Plane::from_points`]: ../plane/struct.Plane.html#method.from_points
    pub fn new(v1: Point3f, v2: Point3f, v3: Point3f) -> Result<Self, Error> {
        let plane = Plane::from_points(v1, v2, v3)?;
        Ok(Triangle {
            vertices: [v1, v2, v3],
            plane,
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

fn same_sign(s1: Float, s2: Float) -> bool {
    (s1 > 0.0 && s2 > 0.0) || (s1 < 0.0 && s2 < 0.0)
}

impl Shape for Triangle {
    fn intersect<'a>(&'a self, ray: &Ray) -> Option<Intersections<'a>> {
        let t = self.plane.hit_distance(ray)?;
        let p = ray.position(t);

        // fan the vertices around the ray origin; the plane hit is
        // inside the triangle iff the ray direction sees all three
        // edge planes from the same side
        let v1: Vector3f = self.vertices[0] - ray.o;
        let v2: Vector3f = self.vertices[1] - ray.o;
        let v3: Vector3f = self.vertices[2] - ray.o;

        // a degenerate cross means the origin lies in an edge plane;
        // the hit is on the boundary, which does not count
        let n1 = vec3_cross(&v1, &v2).ok()?.normalize();
        let n2 = vec3_cross(&v2, &v3).ok()?.normalize();
        let n3 = vec3_cross(&v3, &v1).ok()?.normalize();

        let sign1: Float = align_zero(vec3_dot(&ray.d, &n1));
        let sign2: Float = align_zero(vec3_dot(&ray.d, &n2));
        let sign3: Float = align_zero(vec3_dot(&ray.d, &n3));

        if same_sign(sign1, sign2) && same_sign(sign1, sign3) {
            Some(smallvec![GeoPoint::new(self, p)])
        } else {
            None
        }
    }

    fn normal(&self, p: &Point3f) -> Vector3f {
        self.plane.normal(p)
    }

    fn material(&self) -> Material {
        self.material
    }

    fn emission(&self) -> Spectrum {
        self.emission
    }
}
