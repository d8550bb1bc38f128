use ndarray::{
    Array2,
    ArrayView2,
};
use serde::{Serialize, Deserialize};

use crate::transform;
use crate::geo_3d::{
    cartesian_to_cylindrical,
    VectorField,
};
use transform::methods;

/// Cartesian to cylindrical method struct.
/// Points are read as `(x, y, z)` rows; a vector field is projected onto the local
/// `(r, theta, z)` basis of each point.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Method {
    // No fields
}

impl methods::MethodTrait for Method {
    fn get_method_name(&self) -> &'static str {
        "Cartesian To Cylindrical"
    }

    fn do_transform(&self, points: ArrayView2<f64>, vectors: Option<VectorField>) -> transform::ProcResult<Array2<f64>> {
        if vectors.is_some() {
            log::info!("Converting a vector field at {} points...", points.nrows());
        } else {
            log::info!("Converting {} points...", points.nrows());
        }
        Ok(cartesian_to_cylindrical(points, vectors)?)
    }
}
