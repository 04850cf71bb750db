use crate::{
    figs,
    io,
};

/// Error-type enum for the `texfigs` crate.
/// Wraps the figure compiler and IO module errors.
#[derive(Debug)]
pub enum TexfigsError {
    FigsError(figs::FigsError),
    IoError(io::IoError),
    StringOnly(String),
}
impl std::fmt::Display for TexfigsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TexfigsError::FigsError(error) => write!(f, "! FIGURE COMPILER ERROR:\n{}", error),
            TexfigsError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            TexfigsError::StringOnly(error) => write!(f, "! TEXFIGS ERROR:\n- {}", error),
        }
    }
}
impl From<String> for TexfigsError {
    fn from(error: String) -> Self {
        TexfigsError::StringOnly(error)
    }
}
impl From<figs::FigsError> for TexfigsError {
    fn from(error: figs::FigsError) -> Self {
        TexfigsError::FigsError(error)
    }
}
impl From<io::IoError> for TexfigsError {
    fn from(error: io::IoError) -> Self {
        TexfigsError::IoError(error)
    }
}

/// Result type for the `texfigs` crate.
pub type TexfigsResult<T> = std::result::Result<T, TexfigsError>;

/// Create a `TexfigsResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::TexfigsError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> TexfigsResult<T> {
    Err(TexfigsError::StringOnly(error_str.to_string()))
}
