//! Error types for the QASM3 emitter.

use qbench_ir::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur during emission.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Qasm3Error {
    /// An instruction references a qubit the circuit does not declare.
    #[error("Instruction '{op}' references undeclared qubit {qubit}")]
    UndeclaredQubit {
        /// Operation name.
        op: String,
        /// The missing qubit.
        qubit: QubitId,
    },

    /// An instruction references a classical bit the circuit does not declare.
    #[error("Instruction '{op}' references undeclared classical bit {clbit}")]
    UndeclaredClbit {
        /// Operation name.
        op: String,
        /// The missing bit.
        clbit: ClbitId,
    },
}

/// Result type for emission.
pub type Qasm3Result<T> = Result<T, Qasm3Error>;
