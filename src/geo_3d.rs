//! Coordinate conversion and rigid rotation of 3D point sets and vector fields.
//!
//! Everything here is a pure function of in-memory arrays: inputs are borrowed as views and
//! a freshly allocated array is returned.

mod proc_errors;
mod vector;
mod cylindrical;
mod rotation;
pub mod matrix_utils;

use ndarray::{
    Array2,
    ArrayView2,
};

// Re-export errors
pub use proc_errors::{
    GeoError,
    GeoResult,
};
// Re-export the vector type
pub use vector::GeoVector;
// Re-export the transforms
pub use cylindrical::{
    cylindrical_to_cartesian,
    cartesian_to_cylindrical,
    cylindrical_to_cartesian as cyl2cart,
    cartesian_to_cylindrical as cart2cyl,
};
pub use rotation::{
    DEFAULT_PARALLEL_TOL,
    rotation_matrix_from_normals,
    rotation_matrix_from_normals_with_tol,
    rotate_points_from_normals,
    rotate_points_from_normals_with_tol,
    rotate_vectors_from_normals,
    rotate_vectors_from_normals_with_tol,
};
pub use matrix_utils::VectorField;

crate::deprecate_function!(
    /// Deprecated alias of [`rotation_matrix_from_normals`].
    pub fn rotationMatrixFromNormals(v0: &[f64], v1: &[f64]) -> GeoResult<Array2<f64>>
        => rotation_matrix_from_normals,
    removal_version = "1.0.0",
    note = "use `rotation_matrix_from_normals`, this alias is removed in 1.0.0",
);

crate::deprecate_function!(
    /// Deprecated alias of [`rotate_points_from_normals`].
    pub fn rotatePointsFromNormals(
        xyz: ArrayView2<f64>,
        v0: &[f64],
        v1: &[f64],
        x0: Option<&[f64]>,
    ) -> GeoResult<Array2<f64>> => rotate_points_from_normals,
    removal_version = "1.0.0",
    note = "use `rotate_points_from_normals`, this alias is removed in 1.0.0",
);
