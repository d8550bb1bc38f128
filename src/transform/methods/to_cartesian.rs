use ndarray::{
    Array2,
    ArrayView2,
};
use serde::{Serialize, Deserialize};

use crate::transform;
use crate::geo_3d::{
    cylindrical_to_cartesian,
    VectorField,
};
use transform::methods;

/// Cylindrical to Cartesian method struct.
/// Points are read as `(r, theta, z)` rows; a vector field is read in the local basis of each point.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Method {
    // No fields
}

impl methods::MethodTrait for Method {
    fn get_method_name(&self) -> &'static str {
        "Cylindrical To Cartesian"
    }

    fn do_transform(&self, points: ArrayView2<f64>, vectors: Option<VectorField>) -> transform::ProcResult<Array2<f64>> {
        if vectors.is_some() {
            log::info!("Converting a vector field at {} points...", points.nrows());
        } else {
            log::info!("Converting {} points...", points.nrows());
        }
        Ok(cylindrical_to_cartesian(points, vectors)?)
    }
}
