//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - benchmark circuit generation",
        style("qbench").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qbench-ir      Circuit intermediate representation");
    println!("  qbench-qasm3   OpenQASM 3 emitter");
    println!("  qbench-suite   Benchmark registry and circuit generators");
    println!("  qbench-cli     Command-line interface");
    println!();
    println!(
        "Benchmarks: {}",
        style(qbench_suite::registry().len()).bold()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
