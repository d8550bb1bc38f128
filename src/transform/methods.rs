/*!
 * This is the transform methods module.
 * Adding new methods should be done here.
 *
 * New methods need:
 * - A struct implementing `MethodTrait` (and `Default`, for the example configs)
 * - An enum variant containing that struct in `MethodEnum`
 *
 */

use enum_dispatch::enum_dispatch;
use ndarray::{
    Array2,
    ArrayView2,
};
use serde::{Serialize, Deserialize};
use strum::{
    EnumIter,
    IntoEnumIterator,
    IntoStaticStr,
};

use crate::{
    args,
    transform,
};
use crate::geo_3d::VectorField;

//
// ------------------------------------------------------------
// Code that requires modification to add a new transform method
//      |
//      V
//

// Source files for the transform methods
mod to_cartesian;
mod to_cylindrical;
mod rotate_normals;

/// Transform methods enum.
/// To add a new method:
/// include it here,
/// and implement the `MethodTrait` trait for it.
/// The snake_case variant name is the `name` tag used in config files.
#[derive(Debug, Clone, Serialize, Deserialize, EnumIter, IntoStaticStr)]
#[serde(tag = "name", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[enum_dispatch(MethodTrait)]
pub enum MethodEnum {
    /// Cylindrical to Cartesian conversion of locations or vector fields.
    ToCartesian(to_cartesian::Method),
    /// Cartesian to cylindrical conversion of locations or vector fields.
    ToCylindrical(to_cylindrical::Method),
    /// Rotation taking one normal onto another, about a pivot.
    RotateNormals(rotate_normals::Method),
}

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new transform method
//      |
//      V
//

/// Transform method trait.
/// This trait defines the functions that all transform methods must implement.
#[enum_dispatch]
pub trait MethodTrait {
    /// Get the display name of the transform method.
    fn get_method_name(&self) -> &'static str;

    /// Run the transform on a set of points, or on a vector field attached to them.
    /// Returns a `ProcResult` with the transformed rows or an `Err`.
    fn do_transform(&self, points: ArrayView2<f64>, vectors: Option<VectorField>) -> transform::ProcResult<Array2<f64>>;
}

//
// ------------------------------------------------------------
// Functions with no modification or reference needed
//      |
//      V
//

impl MethodEnum {
    /// Name of the method as used in config files.
    pub fn arg_name(&self) -> &'static str {
        self.into()
    }

    /// Names of all available methods.
    pub fn arg_names() -> Vec<&'static str> {
        MethodEnum::iter().map(|method| method.arg_name()).collect()
    }

    /// Construct a transform method with default arguments from its config name.
    pub fn from_name(arg_name: &str) -> args::ProcResult<Self> {
        if let Some(method) = MethodEnum::iter().find(|method| method.arg_name() == arg_name) {
            return Ok(method);
        }

        let mut error_str = format!("Transform method not found: {arg_name}\n");
        error_str.push_str("Available methods:\n");
        for name in MethodEnum::arg_names() {
            error_str.push_str(&format!("    {}\n", name));
        }
        args::err_str(&error_str)
    }
}
