//! Circuit instructions combining operations with operands.

use serde::{Deserialize, Serialize};

use crate::gate::{Gate, StandardGate};
use crate::qubit::{ClbitId, QubitId};

/// Guard of a conditional block: "classical bit `clbit` equals `value`".
///
/// The guard is evaluated when the circuit runs, after the bit has been
/// written by an earlier measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicalCondition {
    /// The classical bit tested.
    pub clbit: ClbitId,
    /// The value the bit must hold for the block to run.
    pub value: bool,
}

impl ClassicalCondition {
    /// Create a new classical condition.
    pub fn new(clbit: ClbitId, value: bool) -> Self {
        Self { clbit, value }
    }

    /// Condition that holds when `clbit` reads 1.
    pub fn is_set(clbit: ClbitId) -> Self {
        Self::new(clbit, true)
    }
}

/// The kind of instruction in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A quantum gate operation.
    Gate(Gate),
    /// Measurement of qubits into classical bits, pairwise.
    Measure,
    /// Barrier (synchronization point).
    Barrier,
    /// Block of instructions executed only when `condition` holds at run time.
    IfTest {
        /// Guard on a single classical bit.
        condition: ClassicalCondition,
        /// Guarded instructions, in order.
        body: Vec<Instruction>,
    },
}

/// A complete instruction with operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
    /// Classical bits this instruction reads or writes.
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate.into()),
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a measurement instruction.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    /// Create a barrier instruction.
    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Barrier,
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Create a conditional block.
    ///
    /// The operands of the block are the union of its body's operands plus
    /// the guard bit, sorted.
    pub fn if_test(condition: ClassicalCondition, body: Vec<Instruction>) -> Self {
        let mut qubits: Vec<QubitId> = body.iter().flat_map(|i| i.qubits.iter().copied()).collect();
        qubits.sort_unstable();
        qubits.dedup();

        let mut clbits: Vec<ClbitId> = body
            .iter()
            .flat_map(|i| i.clbits.iter().copied())
            .chain(std::iter::once(condition.clbit))
            .collect();
        clbits.sort_unstable();
        clbits.dedup();

        Self {
            kind: InstructionKind::IfTest { condition, body },
            qubits,
            clbits,
        }
    }

    /// Check if this is a gate instruction.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, InstructionKind::Measure)
    }

    /// Check if this is a barrier.
    pub fn is_barrier(&self) -> bool {
        matches!(self.kind, InstructionKind::Barrier)
    }

    /// Check if this is a conditional block.
    pub fn is_conditional(&self) -> bool {
        matches!(self.kind, InstructionKind::IfTest { .. })
    }

    /// Get the gate if this is a gate instruction.
    pub fn as_gate(&self) -> Option<&Gate> {
        match &self.kind {
            InstructionKind::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// Guard of a conditional block.
    pub fn condition(&self) -> Option<&ClassicalCondition> {
        match &self.kind {
            InstructionKind::IfTest { condition, .. } => Some(condition),
            _ => None,
        }
    }

    /// Body of a conditional block.
    pub fn body(&self) -> Option<&[Instruction]> {
        match &self.kind {
            InstructionKind::IfTest { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(g) => g.name(),
            InstructionKind::Measure => "measure",
            InstructionKind::Barrier => "barrier",
            InstructionKind::IfTest { .. } => "if_else",
        }
    }
}
