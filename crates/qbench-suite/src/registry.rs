//! Benchmark registry mapping identifiers to circuit factories.
//!
//! The [`BenchmarkRegistry`] is the single lookup point the driver uses to
//! discover benchmarks and build their circuits. Registration is explicit and
//! refuses to overwrite an existing identifier.

use rustc_hash::FxHashMap;
use tracing::debug;

use qbench_ir::Circuit;

use crate::error::{SuiteError, SuiteResult};

/// Factory building a benchmark circuit for a requested qubit count.
///
/// The count is signed so that non-positive requests reach the factory and
/// are rejected there.
pub type CircuitFactory = fn(i64) -> SuiteResult<Circuit>;

/// Registry entry for one benchmark.
#[derive(Debug, Clone)]
pub struct BenchmarkDescriptor {
    identifier: String,
    description: String,
    factory: CircuitFactory,
}

impl BenchmarkDescriptor {
    /// Unique identifier, e.g. `"dynamic_qft"`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The registered factory.
    pub fn factory(&self) -> CircuitFactory {
        self.factory
    }

    /// Build the circuit for `num_qubits`.
    pub fn create(&self, num_qubits: i64) -> SuiteResult<Circuit> {
        (self.factory)(num_qubits)
    }
}

/// Central registry of benchmark generators.
#[derive(Debug, Default)]
pub struct BenchmarkRegistry {
    benchmarks: FxHashMap<String, BenchmarkDescriptor>,
}

impl BenchmarkRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `identifier`.
    ///
    /// Returns the factory unchanged so registration can sit next to the
    /// factory's definition without changing how it is called.
    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        description: impl Into<String>,
        factory: CircuitFactory,
    ) -> SuiteResult<CircuitFactory> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(SuiteError::InvalidArgument(
                "benchmark identifier must not be empty".into(),
            ));
        }
        if self.benchmarks.contains_key(&identifier) {
            return Err(SuiteError::DuplicateRegistration(identifier));
        }

        debug!("Registering benchmark: {}", identifier);
        self.benchmarks.insert(
            identifier.clone(),
            BenchmarkDescriptor {
                identifier,
                description: description.into(),
                factory,
            },
        );
        Ok(factory)
    }

    /// Look up a benchmark by identifier.
    pub fn lookup(&self, identifier: &str) -> SuiteResult<&BenchmarkDescriptor> {
        self.benchmarks
            .get(identifier)
            .ok_or_else(|| SuiteError::NotFound(identifier.to_string()))
    }

    /// Look up a benchmark and build its circuit.
    pub fn create(&self, identifier: &str, num_qubits: i64) -> SuiteResult<Circuit> {
        let descriptor = self.lookup(identifier)?;
        debug!(
            "Creating benchmark '{}' with {} qubits",
            identifier, num_qubits
        );
        descriptor.create(num_qubits)
    }

    /// Check if a benchmark is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.benchmarks.contains_key(identifier)
    }

    /// All registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.benchmarks.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// All descriptors, sorted by identifier.
    pub fn descriptors(&self) -> Vec<&BenchmarkDescriptor> {
        let mut descriptors: Vec<_> = self.benchmarks.values().collect();
        descriptors.sort_unstable_by(|a, b| a.identifier.cmp(&b.identifier));
        descriptors
    }

    /// `(identifier, description)` pairs for listing, sorted by identifier.
    pub fn catalog(&self) -> Vec<(&str, &str)> {
        self.descriptors()
            .into_iter()
            .map(|d| (d.identifier(), d.description()))
            .collect()
    }

    /// Number of registered benchmarks.
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}
