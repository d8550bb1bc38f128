mod proc_errors;
mod cfg;
mod methods;

use ndarray::Array2;

use crate::geo_3d::VectorField;

// Re-export errors
pub use proc_errors::{
    TransformError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::TransformTarget;
// Re-export transform methods
pub use methods::{
    MethodEnum,
    MethodTrait,
};

/// Run the transform process.
/// Loads the points (and the vector field, if any), then applies the target's method.
/// Returns a `ProcResult` with the transformed rows or an `Err`.
pub fn do_transform(transform_target: &TransformTarget) -> ProcResult<Array2<f64>> {
    let method = &transform_target.method;

    log::info!("Loading points from {}...", transform_target.input_path);
    let points = crate::io::read_points(&transform_target.input_path)?;
    if points.ncols() != 2 && points.ncols() != 3 {
        err_str(&format!("Points must have 2 or 3 columns, found {}", points.ncols()))?;
    }

    let vectors = match transform_target.vector_path.as_ref() {
        Some(vector_path) => {
            log::info!("Loading vector field from {}...", vector_path);
            Some(crate::io::read_points(vector_path)?)
        },
        None => None,
    };

    log::info!("Running transform method: {}...", method.get_method_name());
    method.do_transform(points.view(), vectors.as_ref().map(VectorField::from))
}

/// Save the transformed rows, to a file or to stdout.
pub fn save_output(output: &Array2<f64>, output_path: Option<&str>, precision: usize) -> ProcResult<()> {
    if let Some(output_path) = output_path {
        log::info!("Saving {} rows to {}...", output.nrows(), output_path);
    }
    crate::io::write_points(output_path, output, precision)?;
    Ok(())
}
