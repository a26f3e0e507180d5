//! Named quantum and classical registers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Which kind of slot a register holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterKind {
    /// Qubits.
    Quantum,
    /// Classical bits.
    Classical,
}

/// A named, contiguous block of slots within a circuit.
///
/// Registers own the flat index range `offset..offset + size`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Register {
    /// Register name, e.g. `"q"`.
    pub name: String,
    /// Slot kind.
    pub kind: RegisterKind,
    /// Number of slots.
    pub size: u32,
    /// First flat index owned by this register.
    pub offset: u32,
}

impl Register {
    /// Create a quantum register.
    pub fn quantum(name: impl Into<String>, size: u32, offset: u32) -> Self {
        Self {
            name: name.into(),
            kind: RegisterKind::Quantum,
            size,
            offset,
        }
    }

    /// Create a classical register.
    pub fn classical(name: impl Into<String>, size: u32, offset: u32) -> Self {
        Self {
            name: name.into(),
            kind: RegisterKind::Classical,
            size,
            offset,
        }
    }

    /// Flat indices owned by this register.
    pub fn indices(&self) -> Range<u32> {
        self.offset..self.offset + self.size
    }

    /// Map a flat index back to an index within this register.
    pub fn local_index(&self, flat: u32) -> Option<u32> {
        self.indices().contains(&flat).then(|| flat - self.offset)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RegisterKind::Quantum => write!(f, "qreg {}[{}]", self.name, self.size),
            RegisterKind::Classical => write!(f, "creg {}[{}]", self.name, self.size),
        }
    }
}
