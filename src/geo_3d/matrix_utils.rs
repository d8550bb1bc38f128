//! Small array helpers shared by the coordinate and rotation routines.
//!
//! Vector fields can be handed over either stacked, as an `(n, k)` array with one row per point,
//! or packed, as a flat array of length `k * n` in column-major order: all first components,
//! then all second components, and so on. An `(k * n, 1)` column counts as packed.
//! Everything is unpacked to the stacked layout before any arithmetic happens.

use ndarray::{
    concatenate,
    Array1,
    Array2,
    ArrayView1,
    ArrayView2,
    Axis,
    ShapeBuilder,
};

use crate::geo_3d::proc_errors::{
    GeoError,
    GeoResult,
    err_shape,
};

/// Reshape a 1D sequence into an `(n, 1)` column.
pub fn mkvc(x: ArrayView1<f64>) -> Array2<f64> {
    x.to_owned().insert_axis(Axis(1))
}

/// Stack 1D sequences of equal length side by side as the columns of an `(n, k)` array.
pub fn hstack(columns: &[ArrayView1<f64>]) -> GeoResult<Array2<f64>> {
    let columns: Vec<Array2<f64>> = columns.iter().map(|c| mkvc(*c)).collect();
    let views: Vec<ArrayView2<f64>> = columns.iter().map(|c| c.view()).collect();
    concatenate(Axis(1), &views).map_err(|error| GeoError::InvalidShape{
        name: "columns",
        detail: error.to_string(),
    })
}

/// Promote a single point to a `(1, k)` grid.
pub fn atleast_2d(point: ArrayView1<f64>) -> ArrayView2<f64> {
    point.insert_axis(Axis(0))
}

/// A vector field attached one-to-one to the rows of a grid.
#[derive(Debug, Clone, Copy)]
pub enum VectorField<'a> {
    /// One row per point, `(n, k)`.
    Stacked(ArrayView2<'a, f64>),
    /// Flat column-major packing of length `k * n`.
    Packed(ArrayView1<'a, f64>),
}
impl<'a> VectorField<'a> {
    /// Unpack into an owned `(n_rows, n_cols)` array.
    /// Fails with `GeoError::InvalidShape` if the field does not hold exactly that many values.
    pub fn unpack(&self, n_rows: usize, n_cols: usize) -> GeoResult<Array2<f64>> {
        match self {
            VectorField::Stacked(values) if values.ncols() == 1 && n_cols != 1 => {
                unpack_column_major(values.column(0), n_rows, n_cols)
            },
            VectorField::Stacked(values) => {
                if values.dim() != (n_rows, n_cols) {
                    return err_shape("vec", &format!(
                        "expected ({}, {}), found {:?}", n_rows, n_cols, values.shape()
                    ));
                }
                Ok(values.to_owned())
            },
            VectorField::Packed(values) => unpack_column_major(*values, n_rows, n_cols),
        }
    }

    /// Number of scalar values held by the field.
    pub fn len(&self) -> usize {
        match self {
            VectorField::Stacked(values) => values.len(),
            VectorField::Packed(values) => values.len(),
        }
    }

    /// True if the field holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
impl<'a> From<ArrayView2<'a, f64>> for VectorField<'a> {
    fn from(values: ArrayView2<'a, f64>) -> Self {
        VectorField::Stacked(values)
    }
}
impl<'a> From<ArrayView1<'a, f64>> for VectorField<'a> {
    fn from(values: ArrayView1<'a, f64>) -> Self {
        VectorField::Packed(values)
    }
}
impl<'a> From<&'a Array2<f64>> for VectorField<'a> {
    fn from(values: &'a Array2<f64>) -> Self {
        VectorField::Stacked(values.view())
    }
}
impl<'a> From<&'a Array1<f64>> for VectorField<'a> {
    fn from(values: &'a Array1<f64>) -> Self {
        VectorField::Packed(values.view())
    }
}

fn unpack_column_major(packed: ArrayView1<f64>, n_rows: usize, n_cols: usize) -> GeoResult<Array2<f64>> {
    if packed.len() != n_rows * n_cols {
        return err_shape("vec", &format!(
            "packed field of length {} cannot be unpacked to ({}, {})", packed.len(), n_rows, n_cols
        ));
    }
    Array2::from_shape_vec((n_rows, n_cols).f(), packed.to_vec()).map_err(|error| GeoError::InvalidShape{
        name: "vec",
        detail: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn mkvc_makes_a_column() {
        let col = mkvc(array![1.0, 2.0, 3.0].view());
        assert_eq!(col, array![[1.0], [2.0], [3.0]]);
    }

    #[test]
    fn hstack_joins_columns() {
        let a = array![1.0, 2.0];
        let b = array![3.0, 4.0];
        assert_eq!(hstack(&[a.view(), b.view()]).unwrap(), array![[1.0, 3.0], [2.0, 4.0]]);
    }

    #[test]
    fn hstack_rejects_ragged_columns() {
        let a = array![1.0, 2.0];
        let b = array![3.0];
        assert!(matches!(hstack(&[a.view(), b.view()]), Err(GeoError::InvalidShape{..})));
    }

    #[test]
    fn packed_field_unpacks_column_major() {
        // Two points: (1, 2, 3) and (4, 5, 6)
        let packed = array![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let unpacked = VectorField::from(&packed).unpack(2, 3).unwrap();
        assert_eq!(unpacked, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn single_column_field_counts_as_packed() {
        let column = array![[1.0], [4.0], [2.0], [5.0], [3.0], [6.0]];
        let unpacked = VectorField::from(&column).unpack(2, 3).unwrap();
        assert_eq!(unpacked, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn wrong_sizes_are_shape_errors() {
        let packed = array![1.0, 2.0, 3.0, 4.0];
        assert!(matches!(VectorField::from(&packed).unpack(2, 3), Err(GeoError::InvalidShape{..})));

        let stacked = array![[1.0, 2.0, 3.0]];
        assert!(matches!(VectorField::from(&stacked).unpack(2, 3), Err(GeoError::InvalidShape{..})));
    }

    #[test]
    fn atleast_2d_promotes_a_point() {
        let point = array![1.0, 0.5, 2.0];
        assert_eq!(atleast_2d(point.view()).shape(), &[1, 3]);
    }
}
