//! `OpenQASM` 3 Emitter for qbench
//!
//! Serializes [`qbench_ir::Circuit`] values to `OpenQASM` 3.0 so generated
//! benchmarks can be handed to external toolchains.
//!
//! # Supported Features
//!
//! | Feature | Example |
//! |---------|---------|
//! | Register declarations | `qubit[5] q;`, `bit[5] c;` |
//! | Standard gates | `h q[0];`, `x q[1];` |
//! | Parameterized gates | `p(pi/4) q[0];` |
//! | Mid-circuit measurement | `c[0] = measure q[0];` |
//! | Classical control | `if (c[0] == 1) { p(pi/2) q[1]; }` |
//! | Barriers | `barrier q[0], q[1];` |
//!
//! # Example
//!
//! ```rust
//! use qbench_ir::{Circuit, ClassicalCondition, ClbitId, GateBuilder, QubitId};
//! use qbench_qasm3::emit;
//!
//! let mut circuit = Circuit::with_size("feed_forward", 2, 1).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//! circuit.measure(QubitId(0), ClbitId(0)).unwrap();
//! circuit
//!     .if_test(ClassicalCondition::is_set(ClbitId(0)), |body| {
//!         body.x(QubitId(1))?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let qasm = emit(&circuit).unwrap();
//! assert!(qasm.contains("c[0] = measure q[0];"));
//! assert!(qasm.contains("if (c[0] == 1) {"));
//! ```

mod emitter;
mod error;

pub use emitter::{emit, format_angle};
pub use error::{Qasm3Error, Qasm3Result};
