use ndarray::{
    Array2,
    ArrayView2,
};

use crate::geo_3d::matrix_utils::VectorField;
use crate::geo_3d::proc_errors::{
    GeoResult,
    err_shape,
};
use crate::geo_3d::vector::GeoVector;

/// Cross-product magnitude below which two normals are treated as parallel.
pub const DEFAULT_PARALLEL_TOL: f64 = 1e-20;

/// Rotation matrix taking the direction of `v0` onto the direction of `v1`.
/// Uses [`DEFAULT_PARALLEL_TOL`]; see [`rotation_matrix_from_normals_with_tol`].
pub fn rotation_matrix_from_normals(v0: &[f64], v1: &[f64]) -> GeoResult<Array2<f64>> {
    rotation_matrix_from_normals_with_tol(v0, v1, DEFAULT_PARALLEL_TOL)
}

/// Rotation matrix taking the direction of `v0` onto the direction of `v1`, by Rodrigues' formula:
///
/// `R = I + sin(t) K + (1 - cos(t)) K^2`
///
/// where `K` is the cross-product matrix of the unit rotation axis `v0 x v1`.
/// Only directions matter, both vectors are normalized first.
///
/// If the cross product of the two unit normals is shorter than `tol`, the identity is returned.
/// That covers already aligned normals, but also exactly opposite ones: an antiparallel pair is
/// NOT turned by 180 degrees.
///
/// Fails with `GeoError::InvalidLength` if either vector does not have 3 components.
pub fn rotation_matrix_from_normals_with_tol(v0: &[f64], v1: &[f64], tol: f64) -> GeoResult<Array2<f64>> {
    let n0 = GeoVector::from_slice("v0", v0)?.normalize();
    let n1 = GeoVector::from_slice("v1", v1)?.normalize();

    let n0_dot_n1 = n0.dot(&n1);

    // The rotation axis is the cross product of the two normals
    let rot_axis = n0.cross(&n1);
    if rot_axis.norm() < tol {
        log::debug!("Normals {} and {} are parallel, using the identity", n0, n1);
        return Ok(Array2::eye(3));
    }
    let rot_axis = rot_axis.normalize();

    let cos_t = n0_dot_n1 / (n0.norm() * n1.norm());
    // Angle between two vectors is in [0, pi], so sin(t) >= 0
    let sin_t = (1.0 - n0_dot_n1 * n0_dot_n1).max(0.0).sqrt();

    let k = rot_axis.cross_matrix();
    let k_sq = k.dot(&k);

    Ok(Array2::<f64>::eye(3) + k * sin_t + k_sq * (1.0 - cos_t))
}

/// Rotate Cartesian points about `x0` by the rotation taking `v0` onto `v1`.
/// Each row `p` of `xyz` becomes `R (p - x0) + x0`; `x0` defaults to the origin.
pub fn rotate_points_from_normals(
    xyz: ArrayView2<f64>,
    v0: &[f64],
    v1: &[f64],
    x0: Option<&[f64]>,
) -> GeoResult<Array2<f64>> {
    rotate_points_from_normals_with_tol(xyz, v0, v1, x0, DEFAULT_PARALLEL_TOL)
}

/// [`rotate_points_from_normals`] with an explicit parallel tolerance.
///
/// Errors, in the order they are checked:
/// `v0` or `v1` not of length 3, `xyz` not `(n, 3)`, `x0` not of length 3.
pub fn rotate_points_from_normals_with_tol(
    xyz: ArrayView2<f64>,
    v0: &[f64],
    v1: &[f64],
    x0: Option<&[f64]>,
    tol: f64,
) -> GeoResult<Array2<f64>> {
    let rot = rotation_matrix_from_normals_with_tol(v0, v1, tol)?;

    if xyz.ncols() != 3 {
        return err_shape("xyz", &format!("grid of points should be n x 3, found {:?}", xyz.shape()));
    }
    let x0 = match x0 {
        Some(x0) => GeoVector::from_slice("x0", x0)?,
        None => GeoVector::zero(),
    }.to_array();

    // Rows are points, so R (p - x0) is (p - x0) R^T
    let centered = &xyz - &x0;
    Ok(centered.dot(&rot.t()) + &x0)
}

/// Rotate a vector field by the rotation taking `v0` onto `v1`.
/// Vectors are free, so there is no pivot. The field may be stacked `(n, 3)` or packed.
pub fn rotate_vectors_from_normals(vec: VectorField, v0: &[f64], v1: &[f64]) -> GeoResult<Array2<f64>> {
    rotate_vectors_from_normals_with_tol(vec, v0, v1, DEFAULT_PARALLEL_TOL)
}

/// [`rotate_vectors_from_normals`] with an explicit parallel tolerance.
pub fn rotate_vectors_from_normals_with_tol(
    vec: VectorField,
    v0: &[f64],
    v1: &[f64],
    tol: f64,
) -> GeoResult<Array2<f64>> {
    let rot = rotation_matrix_from_normals_with_tol(v0, v1, tol)?;

    if vec.len() % 3 != 0 {
        return err_shape("vec", &format!("{} values do not make whole 3D vectors", vec.len()));
    }
    let vec = vec.unpack(vec.len() / 3, 3)?;

    Ok(vec.dot(&rot.t()))
}
