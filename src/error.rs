use thiserror::Error;

/// Custom error types for envpick
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a picker cannot be constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("options should not be an empty list")]
    EmptyOptions,

    #[error("default index {index} is out of range for {len} options")]
    DefaultIndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
