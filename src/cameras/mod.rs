//! Pinhole camera behind a rectangular view plane.
//!
//! The camera sits at a location with an orthonormal basis `v_to`
//! (viewing direction), `v_up` and the derived `v_right`; the view
//! plane hangs `distance` in front of it. [`Camera::construct_ray`]
//! maps pixel `(j, i)` of an `nx` by `ny` grid to the ray through the
//! pixel center, with row 0 at the top and column 0 on the left.
//!
//! [`Camera::construct_ray`]: struct.Camera.html#method.construct_ray

// crate
use crate::core::error::Error;
use crate::core::geometry::{vec3_cross, vec3_dot, Point3f, Ray, Vector3f};
use crate::core::util::{align_zero, is_zero, Float};

pub struct Camera {
    location: Point3f,
    v_to: Vector3f,
    v_up: Vector3f,
    v_right: Vector3f,
    width: Float,
    height: Float,
    distance: Float,
}

impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    /// Ray from the camera location through the center of pixel
    /// `(j, i)` on the view plane.
    pub fn construct_ray(&self, nx: u32, ny: u32, j: u32, i: u32) -> Ray {
        let pc: Point3f = self.location + self.v_to * self.distance;
        let ry: Float = self.height / ny as Float;
        let rx: Float = self.width / nx as Float;

        let y_i: Float = align_zero(-(i as Float - (ny as Float - 1.0) / 2.0) * ry);
        let x_j: Float = align_zero((j as Float - (nx as Float - 1.0) / 2.0) * rx);

        let mut p_ij: Point3f = pc;
        if x_j != 0.0 {
            p_ij = p_ij + self.v_right * x_j;
        }
        if y_i != 0.0 {
            p_ij = p_ij + self.v_up * y_i;
        }

        Ray::new(self.location, p_ij - self.location)
    }
}

/// Accumulates camera parameters; [`build`] validates that the basis
/// is orthogonal and the view plane has positive extent and distance.
///
/// [`build`]: struct.CameraBuilder.html#method.build
#[derive(Default)]
pub struct CameraBuilder {
    location: Option<Point3f>,
    v_to: Option<Vector3f>,
    v_up: Option<Vector3f>,
    width: Float,
    height: Float,
    distance: Float,
}

impl CameraBuilder {
    pub fn set_location(mut self, location: Point3f) -> Self {
        self.location = Some(location);
        self
    }
    pub fn set_direction(mut self, v_to: Vector3f, v_up: Vector3f) -> Self {
        self.v_to = Some(v_to);
        self.v_up = Some(v_up);
        self
    }
    pub fn set_vp_size(mut self, width: Float, height: Float) -> Self {
        self.width = width;
        self.height = height;
        self
    }
    pub fn set_vp_distance(mut self, distance: Float) -> Self {
        self.distance = distance;
        self
    }

    pub fn build(self) -> Result<Camera, Error> {
        let location = self.location.ok_or(Error::MissingParameter("location"))?;
        let v_to = self.v_to.ok_or(Error::MissingParameter("direction"))?;
        let v_up = self.v_up.ok_or(Error::MissingParameter("direction"))?;
        if !is_zero(vec3_dot(&v_to, &v_up)) {
            return Err(Error::NonOrthogonalBasis);
        }
        if align_zero(self.width) <= 0.0
            || align_zero(self.height) <= 0.0
            || align_zero(self.distance) <= 0.0
        {
            return Err(Error::InvalidViewPlane);
        }
        let v_to = v_to.normalize();
        let v_up = v_up.normalize();
        let v_right = vec3_cross(&v_to, &v_up)?.normalize();
        Ok(Camera {
            location,
            v_to,
            v_up,
            v_right,
            width: self.width,
            height: self.height,
            distance: self.distance,
        })
    }
}
