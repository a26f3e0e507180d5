//! Benchmark circuit suite for qbench.
//!
//! Provides the benchmark registry and the circuit generators registered in
//! it:
//! - **Dynamic QFT** (`dynamic_qft`): QFT + measurement where every controlled
//!   phase is replaced by a phase gate conditioned on a mid-circuit
//!   measurement outcome
//!
//! Drivers normally go through the process-wide [`registry()`]:
//!
//! ```rust
//! let circuit = qbench_suite::registry().create("dynamic_qft", 4).unwrap();
//! assert_eq!(circuit.num_qubits(), 4);
//!
//! let catalog = qbench_suite::registry().catalog();
//! assert!(catalog.iter().any(|(id, _)| *id == "dynamic_qft"));
//! ```

pub mod dynamic_qft;
pub mod error;
pub mod registry;

use std::sync::LazyLock;

pub use error::{SuiteError, SuiteResult};
pub use registry::{BenchmarkDescriptor, BenchmarkRegistry, CircuitFactory};

static REGISTRY: LazyLock<BenchmarkRegistry> = LazyLock::new(|| {
    let mut registry = BenchmarkRegistry::new();
    if let Err(e) = register_builtin_benchmarks(&mut registry) {
        panic!("benchmark registry initialization failed: {e}");
    }
    registry
});

/// Register every built-in benchmark into `registry`.
pub fn register_builtin_benchmarks(registry: &mut BenchmarkRegistry) -> SuiteResult<()> {
    registry.register(
        dynamic_qft::IDENTIFIER,
        dynamic_qft::DESCRIPTION,
        dynamic_qft::create_circuit,
    )?;
    Ok(())
}

/// The process-wide benchmark registry.
///
/// Built on first access and read-only afterwards.
///
/// # Panics
///
/// Panics on first access if two built-in benchmarks share an identifier.
pub fn registry() -> &'static BenchmarkRegistry {
    &REGISTRY
}
