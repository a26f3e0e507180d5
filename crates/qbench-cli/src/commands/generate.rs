//! Generate command implementation.

use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use tracing::info;

use qbench_ir::Circuit;
use qbench_qasm3::emit;
use qbench_suite::registry;

/// Output format for `qbench generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// OpenQASM 3 program
    Qasm3,
    /// Serialized circuit IR
    Json,
    /// Register sizes and operation counts
    Summary,
}

/// Execute the generate command.
pub fn execute(
    benchmark: &str,
    qubits: i64,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<()> {
    info!("Generating {} on {} qubits", benchmark, qubits);

    let circuit = registry()
        .create(benchmark, qubits)
        .with_context(|| format!("Failed to generate '{benchmark}' with {qubits} qubits"))?;

    let content = render(&circuit, format)?;

    match output {
        Some(path) => {
            fs::write(path, &content).with_context(|| format!("Failed to write file: {path}"))?;
            println!(
                "{} Wrote {} ({} qubits, {} ops) to {}",
                style("✓").green().bold(),
                style(circuit.name()).cyan(),
                circuit.num_qubits(),
                circuit.num_ops(),
                style(path).green()
            );
        }
        None => print!("{content}"),
    }

    Ok(())
}

/// Render a circuit in the requested format.
fn render(circuit: &Circuit, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Qasm3 => emit(circuit).map_err(|e| anyhow::anyhow!("Emit error: {e}")),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(circuit).context("Failed to serialize circuit")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Summary => Ok(summary(circuit)),
    }
}

fn summary(circuit: &Circuit) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", circuit.name());
    for reg in circuit.qregs().iter().chain(circuit.cregs()) {
        let _ = writeln!(out, "  {reg}");
    }
    let _ = writeln!(out, "  ops:");
    for (name, count) in circuit.count_ops_recursive() {
        let _ = writeln!(out, "    {name:<10} {count}");
    }
    out
}
