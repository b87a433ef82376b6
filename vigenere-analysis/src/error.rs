//! Error types for the cryptanalysis engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Symbol '{0}' is outside the alphabet of size {1}")]
    InvalidSymbol(char, u8),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
