use thiserror::Error;

/// Custom error types for toast-provider
#[derive(Debug, Error)]
pub enum ToastError {
    #[error("ToastProvider requires a `component` render function")]
    MissingComponent,

    #[error("ToastProvider requires `children` to wrap")]
    MissingChildren,

    #[error("Invalid toast configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
