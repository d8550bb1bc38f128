use ndarray::{
    Array2,
    ArrayView2,
    Zip,
};

use crate::geo_3d::matrix_utils::{
    hstack,
    VectorField,
};
use crate::geo_3d::proc_errors::{
    GeoResult,
    err_shape,
};

/// Transform a grid or a vector field from cylindrical `(r, theta, z)` to Cartesian `(x, y, z)`.
///
/// Without `vec`, the rows of `grid` are converted as locations and an `(n, 3)` array is returned.
/// With `vec`, the field is rotated into the Cartesian basis using the local basis at the azimuth
/// of each grid row; `grid` may then have 2 or 3 columns and the output matches its width.
/// A packed `vec` is unpacked to the shape of `grid` first (see [`VectorField`]).
pub fn cylindrical_to_cartesian(grid: ArrayView2<f64>, vec: Option<VectorField>) -> GeoResult<Array2<f64>> {
    let n_cols = grid.ncols();

    let vec = match vec {
        None => {
            if n_cols != 3 {
                return err_shape("grid", &format!("locations need 3 columns (r, theta, z), found {}", n_cols));
            }
            let r = grid.column(0);
            let theta = grid.column(1);
            let x = &r * &theta.mapv(f64::cos);
            let y = &r * &theta.mapv(f64::sin);
            return hstack(&[x.view(), y.view(), grid.column(2)]);
        },
        Some(vec) => vec,
    };

    if n_cols != 2 && n_cols != 3 {
        return err_shape("grid", &format!("expected 2 or 3 columns, found {}", n_cols));
    }
    let vec = vec.unpack(grid.nrows(), n_cols)?;

    let theta = grid.column(1);
    let cos_t = theta.mapv(f64::cos);
    let sin_t = theta.mapv(f64::sin);

    let x = &vec.column(0) * &cos_t - &vec.column(1) * &sin_t;
    let y = &vec.column(0) * &sin_t + &vec.column(1) * &cos_t;

    let mut columns = vec![x.view(), y.view()];
    if n_cols == 3 {
        columns.push(vec.column(2));
    }
    hstack(&columns)
}

/// Transform a grid or a vector field from Cartesian `(x, y, z)` to cylindrical `(r, theta, z)`.
///
/// The azimuth of every row is `atan2(y, x)` of `grid`, whether or not `vec` is given; a point on
/// the z-axis gets `theta = 0`. Without `vec`, the locations of `grid` are returned as
/// `(r, theta, z)`. With `vec`, its `(n, 3)` rows are rotated into the local `(r, theta, z)` basis.
pub fn cartesian_to_cylindrical(grid: ArrayView2<f64>, vec: Option<VectorField>) -> GeoResult<Array2<f64>> {
    let n_cols = grid.ncols();
    if n_cols < 2 {
        return err_shape("grid", &format!("expected at least 2 columns (x, y), found {}", n_cols));
    }

    let theta = Zip::from(grid.column(1))
        .and(grid.column(0))
        .map_collect(|y, x| y.atan2(*x));
    let cos_t = theta.mapv(f64::cos);
    let sin_t = theta.mapv(f64::sin);

    match vec {
        None => {
            if n_cols != 3 {
                return err_shape("grid", &format!("locations need 3 columns (x, y, z), found {}", n_cols));
            }
            let r = &cos_t * &grid.column(0) + &sin_t * &grid.column(1);
            hstack(&[r.view(), theta.view(), grid.column(2)])
        },
        Some(vec) => {
            let vec = vec.unpack(grid.nrows(), 3)?;
            let v_r = &cos_t * &vec.column(0) + &sin_t * &vec.column(1);
            let v_t = -&sin_t * &vec.column(0) + &cos_t * &vec.column(1);
            hstack(&[v_r.view(), v_t.view(), vec.column(2)])
        },
    }
}
