use ndarray::{
    Array2,
    ArrayView2,
};
use serde::{Serialize, Deserialize};

use crate::transform;
use crate::geo_3d::{
    DEFAULT_PARALLEL_TOL,
    rotate_points_from_normals_with_tol,
    rotate_vectors_from_normals_with_tol,
    VectorField,
};
use transform::methods;

/// Rotate From Normals method struct.
/// Rotates points about `pivot` by the rotation taking the direction of `v0` onto that of `v1`.
/// Vector fields are rotated without the pivot.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Method {
    #[serde(alias = "from")]
    v0: Vec<f64>,
    #[serde(alias = "to")]
    v1: Vec<f64>,
    #[serde(default, alias = "x0")]
    pivot: Option<Vec<f64>>,
    #[serde(default = "Method::default_tol")]
    tol: f64,
}
impl Method {
    pub fn default_tol() -> f64 {
        DEFAULT_PARALLEL_TOL
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            v0: vec![0.0, 0.0, 1.0],
            v1: vec![0.0, 0.0, 1.0],
            pivot: Some(vec![0.0, 0.0, 0.0]),
            tol: Method::default_tol(),
        }
    }
}

impl methods::MethodTrait for Method {
    fn get_method_name(&self) -> &'static str {
        "Rotate From Normals"
    }

    fn do_transform(&self, points: ArrayView2<f64>, vectors: Option<VectorField>) -> transform::ProcResult<Array2<f64>> {
        match vectors {
            Some(vectors) => {
                log::info!("Rotating a vector field at {} points...", points.nrows());
                if self.pivot.is_some() {
                    log::debug!("Pivot is ignored for vector fields");
                }
                // One vector per point
                let vectors = vectors.unpack(points.nrows(), 3)?;
                Ok(rotate_vectors_from_normals_with_tol(vectors.view().into(), &self.v0, &self.v1, self.tol)?)
            },
            None => {
                log::info!("Rotating {} points...", points.nrows());
                Ok(rotate_points_from_normals_with_tol(points, &self.v0, &self.v1, self.pivot.as_deref(), self.tol)?)
            },
        }
    }
}
