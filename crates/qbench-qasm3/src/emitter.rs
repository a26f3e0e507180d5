//! QASM3 emitter for serializing circuits.

use std::f64::consts::PI;

use qbench_ir::{Circuit, ClbitId, Instruction, InstructionKind, QubitId};

use crate::error::{Qasm3Error, Qasm3Result};

/// Emit a circuit as QASM3 source code.
pub fn emit(circuit: &Circuit) -> Qasm3Result<String> {
    let mut emitter = Emitter::new(circuit);
    emitter.emit_circuit()
}

/// Render an angle, using `pi/2^k` notation for exact binary fractions of π.
pub fn format_angle(theta: f64) -> String {
    let sign = if theta.is_sign_negative() { "-" } else { "" };
    let magnitude = theta.abs();

    if magnitude == PI {
        return format!("{sign}pi");
    }
    for k in 1..=63u32 {
        let denominator = 1u64 << k;
        if magnitude == PI / denominator as f64 {
            return format!("{sign}pi/{denominator}");
        }
    }
    format!("{theta}")
}

/// QASM3 emitter.
struct Emitter<'a> {
    circuit: &'a Circuit,
    output: String,
    indent: usize,
}

impl<'a> Emitter<'a> {
    fn new(circuit: &'a Circuit) -> Self {
        Self {
            circuit,
            output: String::new(),
            indent: 0,
        }
    }

    fn emit_circuit(&mut self) -> Qasm3Result<String> {
        let circuit = self.circuit;

        self.writeln("OPENQASM 3.0;");
        self.writeln("include \"stdgates.inc\";");
        self.writeln("");

        for qreg in circuit.qregs() {
            self.writeln(&format!("qubit[{}] {};", qreg.size, qreg.name));
        }
        for creg in circuit.cregs() {
            self.writeln(&format!("bit[{}] {};", creg.size, creg.name));
        }
        if !circuit.qregs().is_empty() || !circuit.cregs().is_empty() {
            self.writeln("");
        }

        for instruction in circuit.instructions() {
            self.emit_instruction(instruction)?;
        }

        Ok(std::mem::take(&mut self.output))
    }

    fn emit_instruction(&mut self, instruction: &Instruction) -> Qasm3Result<()> {
        let op = instruction.name();
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let qubits = self.emit_qubits(op, &instruction.qubits)?;
                // stdgates.inc spells every gate in the IR set the same way.
                match gate.kind.angle() {
                    Some(theta) => {
                        self.writeln(&format!("{op}({}) {qubits};", format_angle(theta)));
                    }
                    None => self.writeln(&format!("{op} {qubits};")),
                }
            }

            InstructionKind::Measure => {
                for (&q, &c) in instruction.qubits.iter().zip(&instruction.clbits) {
                    let qubit = self.qubit(op, q)?;
                    let clbit = self.clbit(op, c)?;
                    self.writeln(&format!("{clbit} = measure {qubit};"));
                }
            }

            InstructionKind::Barrier => {
                let qubits = self.emit_qubits(op, &instruction.qubits)?;
                if qubits.is_empty() {
                    self.writeln("barrier;");
                } else {
                    self.writeln(&format!("barrier {qubits};"));
                }
            }

            InstructionKind::IfTest { condition, body } => {
                let clbit = self.clbit(op, condition.clbit)?;
                let value = u8::from(condition.value);
                self.writeln(&format!("if ({clbit} == {value}) {{"));
                self.indent += 1;
                for inner in body {
                    self.emit_instruction(inner)?;
                }
                self.indent -= 1;
                self.writeln("}");
            }
        }

        Ok(())
    }

    fn qubit(&self, op: &str, id: QubitId) -> Qasm3Result<String> {
        self.circuit
            .qubits()
            .get(id.0 as usize)
            .map(ToString::to_string)
            .ok_or_else(|| Qasm3Error::UndeclaredQubit {
                op: op.to_string(),
                qubit: id,
            })
    }

    fn clbit(&self, op: &str, id: ClbitId) -> Qasm3Result<String> {
        self.circuit
            .clbits()
            .get(id.0 as usize)
            .map(ToString::to_string)
            .ok_or_else(|| Qasm3Error::UndeclaredClbit {
                op: op.to_string(),
                clbit: id,
            })
    }

    fn emit_qubits(&self, op: &str, qubits: &[QubitId]) -> Qasm3Result<String> {
        let names = qubits
            .iter()
            .map(|&q| self.qubit(op, q))
            .collect::<Qasm3Result<Vec<_>>>()?;
        Ok(names.join(", "))
    }

    fn writeln(&mut self, line: &str) {
        if !line.is_empty() {
            self.output.push_str(&"    ".repeat(self.indent));
        }
        self.output.push_str(line);
        self.output.push('\n');
    }
}
