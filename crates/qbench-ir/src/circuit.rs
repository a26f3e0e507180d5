//! High-level circuit builder API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{ClassicalCondition, Instruction, InstructionKind};
use crate::qubit::{Clbit, ClbitId, Qubit, QubitId};
use crate::register::Register;

/// Gate-level builder methods shared by [`Circuit`] and [`ConditionalScope`].
///
/// Implementors only provide [`GateBuilder::append`], which validates and
/// records one instruction.
pub trait GateBuilder: Sized {
    /// Validate and record an instruction.
    fn append(&mut self, instruction: Instruction) -> IrResult<()>;

    /// Apply Hadamard gate.
    fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::H, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::X, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Z, qubit))?;
        Ok(self)
    }

    /// Apply phase gate.
    fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::P(theta), qubit))?;
        Ok(self)
    }

    /// Apply Rz rotation gate.
    fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Rz(theta), qubit))?;
        Ok(self)
    }

    /// Measure a qubit to a classical bit.
    fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.append(Instruction::measure(qubit, clbit))?;
        Ok(self)
    }

    /// Apply a barrier to specified qubits.
    fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.append(Instruction::barrier(qubits))?;
        Ok(self)
    }
}

/// A quantum circuit.
///
/// Holds named registers and an ordered instruction list. Conditional blocks
/// are stored as [`InstructionKind::IfTest`] and are never evaluated while
/// building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Quantum registers, in declaration order.
    qregs: Vec<Register>,
    /// Classical registers, in declaration order.
    cregs: Vec<Register>,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Classical bits in the circuit.
    clbits: Vec<Clbit>,
    /// Top-level instructions.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qregs: vec![],
            cregs: vec![],
            qubits: vec![],
            clbits: vec![],
            instructions: vec![],
        }
    }

    /// Create a circuit with a quantum register `q` and a classical register `c`.
    ///
    /// A zero size skips the corresponding register.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> IrResult<Self> {
        let mut circuit = Self::new(name);
        if num_qubits > 0 {
            circuit.add_qreg("q", num_qubits)?;
        }
        if num_clbits > 0 {
            circuit.add_creg("c", num_clbits)?;
        }
        Ok(circuit)
    }

    /// Add a quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> IrResult<Vec<QubitId>> {
        let name = name.into();
        self.check_register_name(&name, size)?;

        let offset = self.qubits.len() as u32;
        let ids: Vec<_> = (0..size).map(|i| QubitId(offset + i)).collect();
        self.qubits.extend(
            ids.iter()
                .zip(0..size)
                .map(|(&id, i)| Qubit::new(id, name.as_str(), i)),
        );
        self.qregs.push(Register::quantum(name, size, offset));
        Ok(ids)
    }

    /// Add a classical register with multiple bits.
    pub fn add_creg(&mut self, name: impl Into<String>, size: u32) -> IrResult<Vec<ClbitId>> {
        let name = name.into();
        self.check_register_name(&name, size)?;

        let offset = self.clbits.len() as u32;
        let ids: Vec<_> = (0..size).map(|i| ClbitId(offset + i)).collect();
        self.clbits.extend(
            ids.iter()
                .zip(0..size)
                .map(|(&id, i)| Clbit::new(id, name.as_str(), i)),
        );
        self.cregs.push(Register::classical(name, size, offset));
        Ok(ids)
    }

    /// Open a block guarded by `condition` and fill it with `build`.
    ///
    /// The block is appended only if `build` succeeds; on error the circuit
    /// is left unchanged.
    ///
    /// ```rust
    /// use qbench_ir::{Circuit, ClassicalCondition, ClbitId, GateBuilder, QubitId};
    ///
    /// let mut circuit = Circuit::with_size("teleport_fixup", 2, 1).unwrap();
    /// circuit.measure(QubitId(0), ClbitId(0)).unwrap();
    /// circuit
    ///     .if_test(ClassicalCondition::is_set(ClbitId(0)), |body| {
    ///         body.x(QubitId(1))?;
    ///         Ok(())
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(circuit.count_ops()["if_else"], 1);
    /// ```
    pub fn if_test<F>(&mut self, condition: ClassicalCondition, build: F) -> IrResult<&mut Self>
    where
        F: FnOnce(&mut ConditionalScope<'_>) -> IrResult<()>,
    {
        let body = self.build_block(condition, build)?;
        self.instructions.push(Instruction::if_test(condition, body));
        Ok(self)
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = self.qubits.iter().map(|q| q.id).collect();
        self.barrier(qubits)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantum registers in declaration order.
    pub fn qregs(&self) -> &[Register] {
        &self.qregs
    }

    /// Classical registers in declaration order.
    pub fn cregs(&self) -> &[Register] {
        &self.cregs
    }

    /// Look up a quantum register by name.
    pub fn qreg(&self, name: &str) -> Option<&Register> {
        self.qregs.iter().find(|r| r.name == name)
    }

    /// Look up a classical register by name.
    pub fn creg(&self, name: &str) -> Option<&Register> {
        self.cregs.iter().find(|r| r.name == name)
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the classical bits in the circuit.
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Top-level instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of top-level instructions. A conditional block counts once.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Count top-level instructions by name.
    pub fn count_ops(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for inst in &self.instructions {
            *counts.entry(inst.name().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Count instructions by name, including the bodies of conditional blocks.
    pub fn count_ops_recursive(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for (_, inst) in self.iter_flat() {
            *counts.entry(inst.name().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Depth-first walk over all instructions, including block bodies.
    ///
    /// Each item carries the guard of the innermost enclosing block, or
    /// `None` for top-level instructions. A block itself is yielded before
    /// its body.
    pub fn iter_flat(&self) -> FlatInstructions<'_> {
        FlatInstructions {
            stack: vec![(None, self.instructions.iter())],
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn check_register_name(&self, name: &str, size: u32) -> IrResult<()> {
        if size == 0 {
            return Err(IrError::EmptyRegister(name.to_string()));
        }
        if self.qreg(name).is_some() || self.creg(name).is_some() {
            return Err(IrError::DuplicateRegister(name.to_string()));
        }
        Ok(())
    }

    fn check_qubit(&self, qubit: QubitId, op_name: &str) -> IrResult<()> {
        if (qubit.0 as usize) < self.qubits.len() {
            Ok(())
        } else {
            Err(IrError::QubitNotFound {
                qubit,
                op_name: Some(op_name.to_string()),
            })
        }
    }

    fn check_clbit(&self, clbit: ClbitId, op_name: &str) -> IrResult<()> {
        if (clbit.0 as usize) < self.clbits.len() {
            Ok(())
        } else {
            Err(IrError::ClbitNotFound {
                clbit,
                op_name: Some(op_name.to_string()),
            })
        }
    }

    /// Check that every operand of `instruction` exists in this circuit.
    fn validate(&self, instruction: &Instruction) -> IrResult<()> {
        let name = instruction.name();
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let got = instruction.qubits.len() as u32;
                if got != gate.num_qubits() {
                    return Err(IrError::QubitCountMismatch {
                        gate_name: gate.name().to_string(),
                        expected: gate.num_qubits(),
                        got,
                    });
                }
            }
            InstructionKind::Measure => {
                if instruction.qubits.len() != instruction.clbits.len() {
                    return Err(IrError::MeasureArity {
                        qubits: instruction.qubits.len(),
                        clbits: instruction.clbits.len(),
                    });
                }
            }
            InstructionKind::Barrier => {}
            InstructionKind::IfTest { condition, body } => {
                self.check_clbit(condition.clbit, name)?;
                for inner in body {
                    self.validate(inner)?;
                }
            }
        }

        for &qubit in &instruction.qubits {
            self.check_qubit(qubit, name)?;
        }
        for &clbit in &instruction.clbits {
            self.check_clbit(clbit, name)?;
        }
        Ok(())
    }

    fn build_block<F>(&self, condition: ClassicalCondition, build: F) -> IrResult<Vec<Instruction>>
    where
        F: FnOnce(&mut ConditionalScope<'_>) -> IrResult<()>,
    {
        self.check_clbit(condition.clbit, "if_else")?;
        let mut scope = ConditionalScope {
            circuit: self,
            body: vec![],
        };
        build(&mut scope)?;
        Ok(scope.body)
    }
}

impl GateBuilder for Circuit {
    fn append(&mut self, instruction: Instruction) -> IrResult<()> {
        self.validate(&instruction)?;
        self.instructions.push(instruction);
        Ok(())
    }
}

/// Builder for the body of a conditional block.
///
/// Operands are validated against the enclosing circuit.
pub struct ConditionalScope<'a> {
    circuit: &'a Circuit,
    body: Vec<Instruction>,
}

impl ConditionalScope<'_> {
    /// Open a nested block guarded by `condition`.
    pub fn if_test<F>(&mut self, condition: ClassicalCondition, build: F) -> IrResult<&mut Self>
    where
        F: FnOnce(&mut ConditionalScope<'_>) -> IrResult<()>,
    {
        let body = self.circuit.build_block(condition, build)?;
        self.body.push(Instruction::if_test(condition, body));
        Ok(self)
    }

    /// Instructions recorded so far.
    pub fn body(&self) -> &[Instruction] {
        &self.body
    }
}

impl GateBuilder for ConditionalScope<'_> {
    fn append(&mut self, instruction: Instruction) -> IrResult<()> {
        self.circuit.validate(&instruction)?;
        self.body.push(instruction);
        Ok(())
    }
}

/// Iterator returned by [`Circuit::iter_flat`].
pub struct FlatInstructions<'a> {
    stack: Vec<(
        Option<&'a ClassicalCondition>,
        std::slice::Iter<'a, Instruction>,
    )>,
}

impl<'a> Iterator for FlatInstructions<'a> {
    type Item = (Option<&'a ClassicalCondition>, &'a Instruction);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (guard, next) = {
                let (guard, iter) = self.stack.last_mut()?;
                (*guard, iter.next())
            };

            match next {
                Some(inst) => {
                    if let InstructionKind::IfTest { condition, body } = &inst.kind {
                        self.stack.push((Some(condition), body.iter()));
                    }
                    return Some((guard, inst));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
