//! Points, vectors and rays in three-dimensional Cartesian space.
//!
//! **Points** are locations, **vectors** are displacements with a
//! non-zero invariant: the public [`Vector3f::new`] constructor and
//! the checked [`vec3_cross`] helper refuse to produce the zero
//! vector, so a value of type `Vector3f` obtained through the checked
//! surface always has a direction. The arithmetic operators remain
//! unchecked; intermediate sums inside the tracer may pass through
//! zero and are re-validated at the point of use.
//!
//! [`Vector3f::new`]: struct.Vector3f.html#method.new
//! [`vec3_cross`]: fn.vec3_cross.html

// std
use std::ops;
// crate
use crate::core::error::Error;
use crate::core::util::{is_zero, Float};

/// Distance a secondary or shadow ray origin is pushed along the
/// surface normal to escape self-intersection with its own surface.
pub const DELTA: Float = 0.1;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
    pub const ORIGIN: Point3f = Point3f {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Point3f { x, y, z }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    pub const AXIS_X: Vector3f = Vector3f {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const AXIS_Y: Vector3f = Vector3f {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const AXIS_Z: Vector3f = Vector3f {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Checked constructor; fails on the exact zero triple.
    pub fn new(x: Float, y: Float, z: Float) -> Result<Self, Error> {
        if x == 0.0 && y == 0.0 && z == 0.0 {
            Err(Error::ZeroVector)
        } else {
            Ok(Vector3f { x, y, z })
        }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    /// Compute a new vector pointing in the same direction but with unit
    /// length.
    pub fn normalize(&self) -> Vector3f {
        *self / self.length()
    }
    /// Checked scalar multiplication; fails when the factor is within
    /// tolerance of zero (the result would violate the non-zero
    /// invariant).
    pub fn scale(&self, s: Float) -> Result<Vector3f, Error> {
        if is_zero(s) {
            Err(Error::ZeroScale(s))
        } else {
            Ok(*self * s)
        }
    }
}

impl_op!(-|a: Vector3f| -> Vector3f {
    Vector3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});

impl_op_ex!(+|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(*|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(/|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f {
        x: a.x / b,
        y: a.y / b,
        z: a.z / b,
    }
});

impl_op!(+= |a: &mut Vector3f, b: Vector3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_op_ex!(+|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Point3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

/// Product of the *Euclidean magnitudes* of the two vectors and the
/// cosine of the angle between them.
pub fn vec3_dot(v1: &Vector3f, v2: &Vector3f) -> Float {
    v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

/// Given two vectors in 3D, the cross product is a vector that is
/// perpendicular to both of them; fails when the operands are
/// parallel (the result would be the zero vector).
pub fn vec3_cross(v1: &Vector3f, v2: &Vector3f) -> Result<Vector3f, Error> {
    let x = v1.y * v2.z - v1.z * v2.y;
    let y = v1.z * v2.x - v1.x * v2.z;
    let z = v1.x * v2.y - v1.y * v2.x;
    if x == 0.0 && y == 0.0 && z == 0.0 {
        Err(Error::DegenerateCross)
    } else {
        Ok(Vector3f { x, y, z })
    }
}

pub fn pnt3_distance_squared(p1: &Point3f, p2: &Point3f) -> Float {
    (p1 - p2).length_squared()
}

pub fn pnt3_distance(p1: &Point3f, p2: &Point3f) -> Float {
    (p1 - p2).length()
}

/// A semi-infinite line with origin `o` and **unit** direction `d`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Ray {
    pub o: Point3f,
    pub d: Vector3f,
}

impl Ray {
    /// The direction is normalized on construction; all parametric
    /// distances along the ray are therefore Euclidean distances.
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Ray {
            o,
            d: d.normalize(),
        }
    }

    /// Construct a ray whose origin is pushed [`DELTA`] along the
    /// surface normal `n`, on the side of the surface the direction
    /// `d` leaves through. When `d` is perpendicular to `n` the
    /// origin is left in place.
    ///
    /// [`DELTA`]: constant.DELTA.html
    pub fn offset(head: Point3f, d: Vector3f, n: &Vector3f) -> Self {
        let nd: Float = vec3_dot(n, &d);
        let o = if is_zero(nd) {
            head
        } else if nd > 0.0 {
            head + *n * DELTA
        } else {
            head - *n * DELTA
        };
        Ray::new(o, d)
    }

    /// Point at parametric distance `t` along the ray; `t` within
    /// tolerance of zero returns the origin exactly.
    pub fn position(&self, t: Float) -> Point3f {
        if is_zero(t) {
            self.o
        } else {
            self.o + self.d * t
        }
    }
}
