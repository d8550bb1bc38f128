use crate::geo_3d::GeoError;

/// Transform process error type.
#[derive(Debug)]
pub enum TransformError {
    /// IO error.
    IoError(crate::io::IoError),
    /// Geometry argument error.
    GeoError(GeoError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            TransformError::GeoError(error) => write!(f, "- Geometry Error:\n{}", error),
            TransformError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<crate::io::IoError> for TransformError {
    fn from(error: crate::io::IoError) -> Self {
        TransformError::IoError(error)
    }
}
impl From<GeoError> for TransformError {
    fn from(error: GeoError) -> Self {
        TransformError::GeoError(error)
    }
}
impl From<String> for TransformError {
    fn from(error: String) -> Self {
        TransformError::StringOnly(error)
    }
}

/// Result type for the `transform` module.
pub type ProcResult<T> = std::result::Result<T, TransformError>;

/// Create a `TransformError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(TransformError::StringOnly(error_str.to_string()))
}
