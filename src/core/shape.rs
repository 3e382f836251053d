//! The intersection seam between rays and surfaces.
//!
//! Every primitive implements [`Shape`]; a hit is reported as a
//! [`GeoPoint`] that borrows the shape it lies on, so the shader can
//! ask the *hit surface* for its normal, material and emission
//! without any lookup. A shape reports **all** of its forward hits
//! (nearest first); picking the closest one across shapes is the
//! ray's job, see [`Ray::closest_hit`].
//!
//! [`Shape`]: trait.Shape.html
//! [`GeoPoint`]: struct.GeoPoint.html
//! [`Ray::closest_hit`]: ../geometry/struct.Ray.html#method.closest_hit

// std
use std::fmt;
use std::sync::Arc;
// others
use smallvec::SmallVec;
// crate
use crate::core::geometry::{pnt3_distance, Point3f, Ray, Vector3f};
use crate::core::material::Material;
use crate::core::util::{Float, Spectrum};

/// Hits a single shape can produce for one ray; convex primitives
/// yield at most two, so the vector almost never spills to the heap.
pub type Intersections<'a> = SmallVec<[GeoPoint<'a>; 2]>;

pub trait Shape: Send + Sync {
    /// All intersection points with positive parametric distance,
    /// ordered nearest first, or `None` when the ray misses. Points
    /// exactly on a boundary or tangent to the surface are misses.
    fn intersect<'a>(&'a self, ray: &Ray) -> Option<Intersections<'a>>;
    /// Outward unit normal at a point assumed to lie on the surface.
    fn normal(&self, p: &Point3f) -> Vector3f;
    fn material(&self) -> Material;
    fn emission(&self) -> Spectrum;
}

/// An intersection point paired with the shape it lies on.
#[derive(Copy, Clone)]
pub struct GeoPoint<'a> {
    pub shape: &'a dyn Shape,
    pub point: Point3f,
}

impl<'a> GeoPoint<'a> {
    pub fn new(shape: &'a dyn Shape, point: Point3f) -> Self {
        GeoPoint { shape, point }
    }
}

impl<'a> PartialEq for GeoPoint<'a> {
    /// Same shape (by identity, not by value) and same point.
    fn eq(&self, rhs: &GeoPoint<'a>) -> bool {
        std::ptr::eq(
            self.shape as *const dyn Shape as *const (),
            rhs.shape as *const dyn Shape as *const (),
        ) && self.point == rhs.point
    }
}

impl<'a> fmt::Debug for GeoPoint<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GeoPoint")
            .field("point", &self.point)
            .finish()
    }
}

impl Ray {
    /// The hit nearest to the ray origin, or `None` for an empty
    /// slice. Among equidistant hits the first one in slice order
    /// wins; callers must not rely on which that is.
    pub fn closest_hit<'a>(&self, hits: &[GeoPoint<'a>]) -> Option<GeoPoint<'a>> {
        let mut closest: Option<GeoPoint<'a>> = None;
        let mut closest_distance: Float = Float::INFINITY;
        for gp in hits {
            let distance = pnt3_distance(&self.o, &gp.point);
            if distance < closest_distance {
                closest_distance = distance;
                closest = Some(*gp);
            }
        }
        closest
    }
}

/// A flat collection of shapes queried as one. The list is *not*
/// itself a [`Shape`]; it has no surface of its own, so it only
/// concatenates the member hit lists (in member order, unsorted).
///
/// [`Shape`]: trait.Shape.html
#[derive(Default)]
pub struct ShapeList {
    shapes: Vec<Arc<dyn Shape>>,
}

impl ShapeList {
    pub fn new() -> Self {
        ShapeList { shapes: Vec::new() }
    }
    pub fn add(&mut self, shape: Arc<dyn Shape>) {
        self.shapes.push(shape);
    }
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
    /// Concatenated hits of every member, or `None` when no member
    /// reports any.
    pub fn intersect<'a>(&'a self, ray: &Ray) -> Option<Intersections<'a>> {
        let mut all: Option<Intersections<'a>> = None;
        for shape in &self.shapes {
            if let Some(hits) = shape.intersect(ray) {
                all.get_or_insert_with(Intersections::new).extend(hits);
            }
        }
        all
    }
}

impl From<Vec<Arc<dyn Shape>>> for ShapeList {
    fn from(shapes: Vec<Arc<dyn Shape>>) -> Self {
        ShapeList { shapes }
    }
}
