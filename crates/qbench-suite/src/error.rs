//! Error types for the benchmark suite.

use qbench_ir::IrError;
use thiserror::Error;

/// Errors raised by the registry and circuit generators.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuiteError {
    /// An argument is outside the range a generator or the registry accepts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A second benchmark tried to register under an existing identifier.
    #[error("Benchmark '{0}' is already registered")]
    DuplicateRegistration(String),

    /// No benchmark is registered under the identifier.
    #[error("No benchmark registered with identifier '{0}'")]
    NotFound(String),

    /// Circuit construction failed.
    #[error("Circuit error: {0}")]
    Ir(#[from] IrError),
}

/// Result type for suite operations.
pub type SuiteResult<T> = Result<T, SuiteError>;
