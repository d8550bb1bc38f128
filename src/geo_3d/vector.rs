use std::ops::{
    Sub,
    Mul,
    Div,
};
use std::fmt;
use ndarray::{
    array,
    Array1,
    Array2,
};

use crate::geo_3d::proc_errors::{
    GeoResult,
    err_length,
};

/// A direction vector in 3D space.
/// Used for the normals handed to the rotation routines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        GeoVector{x, y, z}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Build a vector from a slice, which must have exactly 3 components.
    /// `name` is used to label the length error.
    pub fn from_slice(name: &'static str, values: &[f64]) -> GeoResult<Self> {
        match values {
            [x, y, z] => Ok(GeoVector{x: *x, y: *y, z: *z}),
            _ => err_length(name, 3, values.len()),
        }
    }

    /// Normalize and return a new vector.
    pub fn normalize(&self) -> Self {
        *self / self.norm()
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &GeoVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors.
    pub fn cross(&self, other: &GeoVector) -> GeoVector {
        GeoVector{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Skew-symmetric cross-product matrix `K`, such that `K.dot(v) == self x v`.
    pub fn cross_matrix(&self) -> Array2<f64> {
        array![
            [0.0, -self.z, self.y],
            [self.z, 0.0, -self.x],
            [-self.y, self.x, 0.0],
        ]
    }

    /// Copy the components into an owned 1D array.
    pub fn to_array(&self) -> Array1<f64> {
        array![self.x, self.y, self.z]
    }
}
impl Sub for GeoVector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        GeoVector{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
impl Mul<f64> for GeoVector {
    type Output = GeoVector;

    fn mul(self, other: f64) -> GeoVector {
        GeoVector{
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
impl Div<f64> for GeoVector {
    type Output = GeoVector;

    fn div(self, other: f64) -> GeoVector {
        GeoVector{
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}
impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
