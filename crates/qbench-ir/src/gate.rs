//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// Single-qubit gates with known semantics.
///
/// Angles are in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Z gate.
    Z,
    /// Phase gate `diag(1, e^{iθ})`.
    P(f64),
    /// Rotation around Z axis.
    Rz(f64),
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Z => "z",
            StandardGate::P(_) => "p",
            StandardGate::Rz(_) => "rz",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        1
    }

    /// The rotation angle, for parametrized gates.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::P(theta) | StandardGate::Rz(theta) => Some(*theta),
            StandardGate::H | StandardGate::X | StandardGate::Z => None,
        }
    }

    /// Check if this gate carries a parameter.
    pub fn is_parameterized(&self) -> bool {
        self.angle().is_some()
    }
}

/// A gate as stored in an instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: StandardGate,
}

impl Gate {
    /// Create a new gate from a standard gate.
    pub fn standard(gate: StandardGate) -> Self {
        Self { kind: gate }
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::standard(gate)
    }
}
