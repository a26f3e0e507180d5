//! Property-based tests for QASM3 emission.
//!
//! Tests that emitted programs mirror the circuit structure: one statement per
//! operation, balanced conditional blocks, and register-qualified operands.

use proptest::prelude::*;
use qbench_ir::{Circuit, ClassicalCondition, ClbitId, GateBuilder, QubitId};
use qbench_qasm3::emit;

/// Operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum Op {
    H(u32),
    P(u32, i32),
    Measure(u32),
    Guarded(u32, Vec<(u32, i32)>),
}

impl Op {
    fn apply(self, circuit: &mut Circuit) {
        match self {
            Op::H(q) => {
                let _ = circuit.h(QubitId(q));
            }
            Op::P(q, k) => {
                let _ = circuit.p(std::f64::consts::PI / 2f64.powi(k), QubitId(q));
            }
            Op::Measure(q) => {
                let _ = circuit.measure(QubitId(q), ClbitId(q));
            }
            Op::Guarded(c, phases) => {
                let _ = circuit.if_test(ClassicalCondition::is_set(ClbitId(c)), |body| {
                    for (q, k) in phases {
                        body.p(std::f64::consts::PI / 2f64.powi(k), QubitId(q))?;
                    }
                    Ok(())
                });
            }
        }
    }
}

fn arb_op(num_qubits: u32) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..num_qubits).prop_map(Op::H),
        (0..num_qubits, 1_i32..8).prop_map(|(q, k)| Op::P(q, k)),
        (0..num_qubits).prop_map(Op::Measure),
        (
            0..num_qubits,
            prop::collection::vec((0..num_qubits, 1_i32..8), 0..4)
        )
            .prop_map(|(c, phases)| Op::Guarded(c, phases)),
    ]
}

fn arb_dynamic_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=6).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_op(num_qubits), 0..=12).prop_map(move |ops| {
            let mut circuit = Circuit::with_size("prop", num_qubits, num_qubits).unwrap();
            for op in ops {
                op.apply(&mut circuit);
            }
            circuit
        })
    })
}

proptest! {
    #[test]
    fn statement_count_matches_ops(circuit in arb_dynamic_circuit()) {
        let qasm = emit(&circuit).unwrap();
        let counts = circuit.count_ops_recursive();

        let count_lines = |prefix: &str| {
            qasm.lines().filter(|l| l.trim_start().starts_with(prefix)).count()
        };

        prop_assert_eq!(count_lines("h "), counts.get("h").copied().unwrap_or(0));
        prop_assert_eq!(count_lines("p("), counts.get("p").copied().unwrap_or(0));
        prop_assert_eq!(count_lines("if ("), counts.get("if_else").copied().unwrap_or(0));
        prop_assert_eq!(
            qasm.lines().filter(|l| l.contains("= measure")).count(),
            counts.get("measure").copied().unwrap_or(0)
        );
    }

    #[test]
    fn blocks_are_balanced(circuit in arb_dynamic_circuit()) {
        let qasm = emit(&circuit).unwrap();
        prop_assert_eq!(qasm.matches('{').count(), qasm.matches('}').count());
    }

    #[test]
    fn operands_are_register_qualified(circuit in arb_dynamic_circuit()) {
        let qasm = emit(&circuit).unwrap();
        for line in qasm.lines().skip(6).filter(|l| !l.trim().is_empty() && l.trim() != "}") {
            prop_assert!(line.contains("q[") || line.contains("c["), "line: {}", line);
        }
    }
}
