use thiserror::Error;

use crate::core::util::Float;

/// Errors reported by the checked constructors. Construction is the
/// only fallible surface; degeneracies that arise *during* tracing
/// (grazing rays, boundary hits) are plain misses, not errors.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("the zero vector is not a valid direction")]
    ZeroVector,
    #[error("scaling by {0} would produce the zero vector")]
    ZeroScale(Float),
    #[error("cross product of parallel vectors is degenerate")]
    DegenerateCross,
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(Float),
    #[error("height must be positive, got {0}")]
    NonPositiveHeight(Float),
    #[error("two or more defining points coincide")]
    DuplicatePoints,
    #[error("defining points are collinear")]
    CollinearPoints,
    #[error("camera basis vectors are not orthogonal")]
    NonOrthogonalBasis,
    #[error("view plane dimensions and distance must be positive")]
    InvalidViewPlane,
    #[error("camera is missing required parameter `{0}`")]
    MissingParameter(&'static str),
}
