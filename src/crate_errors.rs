use crate::{
    args,
    transform,
    io,
};

/// Error-type enum for the `reframe` crate.
/// Wraps the errors of the argument/config handling, the transform process and IO.
#[derive(Debug)]
pub enum ReframeError {
    ArgError(args::ArgError),
    TransformError(transform::TransformError),
    IoError(io::IoError),
    StringOnly(String),
}
impl std::fmt::Display for ReframeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReframeError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            ReframeError::TransformError(error) => write!(f, "! TRANSFORM ERROR:\n{}", error),
            ReframeError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            ReframeError::StringOnly(error) => write!(f, "! REFRAME ERROR:\n- {}", error),
        }
    }
}
impl From<String> for ReframeError {
    fn from(error: String) -> Self {
        ReframeError::StringOnly(error)
    }
}
impl From<args::ArgError> for ReframeError {
    fn from(error: args::ArgError) -> Self {
        ReframeError::ArgError(error)
    }
}
impl From<transform::TransformError> for ReframeError {
    fn from(error: transform::TransformError) -> Self {
        ReframeError::TransformError(error)
    }
}
impl From<io::IoError> for ReframeError {
    fn from(error: io::IoError) -> Self {
        ReframeError::IoError(error)
    }
}

/// Result type for the `reframe` crate.
pub type ReframeResult<T> = std::result::Result<T, ReframeError>;

/// Create a `ReframeResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::ReframeError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> ReframeResult<T> {
    Err(ReframeError::StringOnly(error_str.to_string()))
}
