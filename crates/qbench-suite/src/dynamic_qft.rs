//! Dynamic Quantum Fourier Transform benchmark.
//!
//! Replaces the controlled-phase network of the textbook QFT with mid-circuit
//! measurements whose outcomes classically control the following phase gates
//! (Phys. Rev. Lett. 133, 150602 (2024)). By deferred measurement the result
//! matches QFT followed by measurement, but every rotation goes through the
//! classical-control path of the target backend.
//!
//! For each qubit `i`:
//!
//! ```text
//! h q[i];
//! c[i] = measure q[i];
//! if (c[i] == 1) {
//!     p(pi/2)   q[i+1];
//!     p(pi/4)   q[i+2];
//!     ...
//!     p(pi/2^j) q[i+j];   // j = n-i-1
//! }
//! ```

use std::f64::consts::PI;

use qbench_ir::{Circuit, ClassicalCondition, GateBuilder};
use tracing::{debug, trace};

use crate::error::{SuiteError, SuiteResult};

/// Registry identifier.
pub const IDENTIFIER: &str = "dynamic_qft";

/// Registry description.
pub const DESCRIPTION: &str = "Dynamic Quantum Fourier Transformation and Measurement (DQFT + M)";

/// Largest supported qubit count.
pub const MAX_QUBITS: i64 = 60;

/// Build the dynamic QFT circuit on `num_qubits` qubits.
///
/// The circuit is named `dynamic_qft` and has a quantum register `q` and a
/// classical register `c`, both of size `num_qubits`.
///
/// # Errors
///
/// Returns [`SuiteError::InvalidArgument`] unless `1 <= num_qubits <= 60`.
pub fn create_circuit(num_qubits: i64) -> SuiteResult<Circuit> {
    let n = validate_num_qubits(num_qubits)?;

    let mut circuit = Circuit::new(IDENTIFIER);
    let q = circuit.add_qreg("q", n)?;
    let c = circuit.add_creg("c", n)?;

    for (i, (&qubit, &clbit)) in q.iter().zip(&c).enumerate() {
        circuit.h(qubit)?;
        circuit.measure(qubit, clbit)?;
        circuit.if_test(ClassicalCondition::is_set(clbit), |body| {
            for (j, &target) in q[i + 1..].iter().enumerate() {
                body.p(phase_angle(j as i32 + 1), target)?;
            }
            Ok(())
        })?;
        trace!("dynamic_qft: qubit {} controls {} phase gates", i, q.len() - i - 1);
    }

    debug!(
        "Built dynamic_qft on {} qubits ({} top-level ops)",
        n,
        circuit.num_ops()
    );
    Ok(circuit)
}

/// Rotation applied `distance` slots after the measured qubit: `π / 2^distance`.
pub fn phase_angle(distance: i32) -> f64 {
    PI / 2f64.powi(distance)
}

fn validate_num_qubits(num_qubits: i64) -> SuiteResult<u32> {
    if num_qubits <= 0 {
        return Err(SuiteError::InvalidArgument(format!(
            "{IDENTIFIER} requires a positive number of qubits, got {num_qubits}"
        )));
    }
    if num_qubits > MAX_QUBITS {
        return Err(SuiteError::InvalidArgument(format!(
            "{IDENTIFIER} supports at most {MAX_QUBITS} qubits, got {num_qubits}"
        )));
    }
    // Bounded by MAX_QUBITS above.
    Ok(num_qubits as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbench_ir::{ClbitId, InstructionKind, QubitId, StandardGate};

    /// `(guard bit, target qubit, angle)` for every conditional phase gate.
    fn conditional_phases(circuit: &Circuit) -> Vec<(u32, u32, f64)> {
        circuit
            .iter_flat()
            .filter_map(|(guard, inst)| {
                let guard = guard?;
                match inst.as_gate()?.kind {
                    StandardGate::P(theta) => Some((guard.clbit.0, inst.qubits[0].0, theta)),
                    _ => None,
                }
            })
            .collect()
    }

    #[test]
    fn test_single_qubit() {
        let circuit = create_circuit(1).unwrap();
        let counts = circuit.count_ops_recursive();

        assert_eq!(counts.get("h"), Some(&1));
        assert_eq!(counts.get("measure"), Some(&1));
        assert_eq!(counts.get("p"), None);
        assert!(conditional_phases(&circuit).is_empty());
    }

    #[test]
    fn test_three_qubits() {
        let circuit = create_circuit(3).unwrap();
        assert_eq!(
            conditional_phases(&circuit),
            vec![(0, 1, PI / 2.0), (0, 2, PI / 4.0), (1, 2, PI / 2.0)]
        );
    }

    #[test]
    fn test_operation_order() {
        let circuit = create_circuit(2).unwrap();
        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            vec!["h", "measure", "if_else", "h", "measure", "if_else"]
        );

        match &circuit.instructions()[5].kind {
            InstructionKind::IfTest { condition, body } => {
                assert_eq!(*condition, ClassicalCondition::is_set(ClbitId(1)));
                assert!(body.is_empty());
            }
            other => panic!("Expected IfTest, got {other:?}"),
        }
    }

    #[test]
    fn test_registers() {
        let circuit = create_circuit(4).unwrap();
        assert_eq!(circuit.name(), "dynamic_qft");
        assert_eq!(circuit.qreg("q").map(|r| r.size), Some(4));
        assert_eq!(circuit.creg("c").map(|r| r.size), Some(4));
        assert_eq!(circuit.qregs().len(), 1);
        assert_eq!(circuit.cregs().len(), 1);
    }

    #[test]
    fn test_measurements_map_slot_to_slot() {
        let circuit = create_circuit(5).unwrap();
        let pairs: Vec<_> = circuit
            .instructions()
            .iter()
            .filter(|i| i.is_measure())
            .map(|i| (i.qubits[0], i.clbits[0]))
            .collect();
        let expected: Vec<_> = (0..5).map(|i| (QubitId(i), ClbitId(i))).collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_invalid_sizes() {
        for n in [0, -1, MAX_QUBITS + 1, i64::MIN] {
            assert!(
                matches!(create_circuit(n), Err(SuiteError::InvalidArgument(_))),
                "size {n} should be rejected"
            );
        }
    }

    #[test]
    fn test_capacity_limit() {
        let circuit = create_circuit(MAX_QUBITS).unwrap();
        assert_eq!(circuit.num_qubits(), 60);
        let smallest = conditional_phases(&circuit)
            .into_iter()
            .map(|(_, _, theta)| theta)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(smallest, PI / 2f64.powi(59));
        assert!(smallest > 0.0);
    }

    #[test]
    fn test_phase_angle() {
        assert_eq!(phase_angle(1), PI / 2.0);
        assert_eq!(phase_angle(3), PI / 8.0);
    }
}
