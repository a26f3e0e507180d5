//! List command implementation.

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use serde::Serialize;

use qbench_suite::registry;

/// Output format for `qbench list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned identifier and description columns
    Table,
    /// Array of `{identifier, description}` objects
    Json,
}

#[derive(Serialize)]
struct Entry<'a> {
    identifier: &'a str,
    description: &'a str,
}

/// Execute the list command.
pub fn execute(format: ListFormat) -> Result<()> {
    let catalog = registry().catalog();
    match format {
        ListFormat::Table => {
            println!("{} Registered benchmarks:\n", style("qbench").cyan().bold());
            let width = catalog.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
            for (identifier, description) in &catalog {
                println!(
                    "  {} {}",
                    style(format!("{identifier:<width$}")).bold(),
                    style(description).dim()
                );
            }
        }
        ListFormat::Json => println!("{}", render_json(&catalog)?),
    }
    Ok(())
}

fn render_json(catalog: &[(&str, &str)]) -> Result<String> {
    let entries: Vec<_> = catalog
        .iter()
        .map(|&(identifier, description)| Entry {
            identifier,
            description,
        })
        .collect();
    serde_json::to_string_pretty(&entries).context("Failed to serialize benchmark list")
}
