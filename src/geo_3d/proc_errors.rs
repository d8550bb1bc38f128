/// Geometry argument error type.
/// Raised before any output is produced; there is no partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// A direction vector or pivot without the expected number of components.
    InvalidLength {
        name: &'static str,
        expected: usize,
        found: usize,
    },
    /// A point array or vector field with the wrong shape.
    InvalidShape {
        name: &'static str,
        detail: String,
    },
}
impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::InvalidLength{name, expected, found} =>
                write!(f, "- Length of {} should be {}, found {}", name, expected, found),
            GeoError::InvalidShape{name, detail} =>
                write!(f, "- Invalid shape for {}: {}", name, detail),
        }
    }
}
impl std::error::Error for GeoError {}

/// Result type for the `geo_3d` module.
pub type GeoResult<T> = std::result::Result<T, GeoError>;

/// Create a `GeoError::InvalidLength` result.
pub fn err_length<T>(name: &'static str, expected: usize, found: usize) -> GeoResult<T> {
    Err(GeoError::InvalidLength{name, expected, found})
}

/// Create a `GeoError::InvalidShape` result.
pub fn err_shape<T>(name: &'static str, detail: &str) -> GeoResult<T> {
    Err(GeoError::InvalidShape{name, detail: detail.to_string()})
}
