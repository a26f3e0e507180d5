//! qbench Circuit Representation
//!
//! This crate provides the data structures for quantum circuits produced by
//! the qbench generators. Besides plain unitary gates it models mid-circuit
//! measurement and classically controlled blocks explicitly, so consumers can
//! inspect every guarded operation without evaluating anything.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] flat indices, and
//!   [`Register`] for the named blocks that own them
//! - **Gates**: [`StandardGate`] for the single-qubit gate set
//! - **Instructions**: [`Instruction`] combining an [`InstructionKind`] with its
//!   operands, including [`InstructionKind::IfTest`] conditional blocks
//! - **Circuit**: [`Circuit`] builder and introspection API, with gate methods
//!   provided by the [`GateBuilder`] trait
//!
//! # Example: Measurement-Controlled Phase
//!
//! ```rust
//! use qbench_ir::{Circuit, ClassicalCondition, GateBuilder};
//! use std::f64::consts::PI;
//!
//! let mut circuit = Circuit::new("feed_forward");
//! let q = circuit.add_qreg("q", 2).unwrap();
//! let c = circuit.add_creg("c", 2).unwrap();
//!
//! circuit.h(q[0]).unwrap();
//! circuit.measure(q[0], c[0]).unwrap();
//! circuit
//!     .if_test(ClassicalCondition::is_set(c[0]), |body| {
//!         body.p(PI / 2.0, q[1])?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(circuit.num_ops(), 3);
//! assert_eq!(circuit.count_ops_recursive()["p"], 1);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;
pub mod register;

pub use circuit::{Circuit, ConditionalScope, FlatInstructions, GateBuilder};
pub use error::{IrError, IrResult};
pub use gate::{Gate, StandardGate};
pub use instruction::{ClassicalCondition, Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
pub use register::{Register, RegisterKind};
