//! CLI command parsing and end-to-end flow tests.
//!
//! Argument parsing is checked with clap `try_parse_from` against a mirror of
//! the binary's `Cli` struct; the generate flow is exercised through the
//! library crates the binary calls into.

// ============================================================================
// Clap argument parsing (test via try_parse_from on equivalent structs)
// ============================================================================

mod clap_parsing {
    use clap::{Parser, Subcommand, ValueEnum};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    enum ListFormat {
        Table,
        Json,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    enum OutputFormat {
        Qasm3,
        Json,
        Summary,
    }

    // Mirror the CLI struct for testing (since main.rs is a binary).
    // Env fallbacks are left out so the ambient environment cannot leak in.
    #[derive(Parser)]
    #[command(name = "qbench")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        List {
            #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
            format: ListFormat,
        },
        Generate {
            benchmark: String,
            #[arg(short = 'n', long, allow_negative_numbers = true)]
            qubits: i64,
            #[arg(short, long, value_enum, default_value_t = OutputFormat::Qasm3)]
            format: OutputFormat,
            #[arg(short, long)]
            output: Option<String>,
        },
        Version,
    }

    // --- List command ---

    #[test]
    fn test_parse_list_default() {
        let cli = TestCli::try_parse_from(["qbench", "list"]).unwrap();
        match cli.command {
            TestCommands::List { format } => assert_eq!(format, ListFormat::Table),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_list_json() {
        let cli = TestCli::try_parse_from(["qbench", "list", "--format", "json"]).unwrap();
        match cli.command {
            TestCommands::List { format } => assert_eq!(format, ListFormat::Json),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_list_unknown_format() {
        assert!(TestCli::try_parse_from(["qbench", "list", "-f", "yaml"]).is_err());
    }

    // --- Generate command ---

    #[test]
    fn test_parse_generate_minimal() {
        let cli =
            TestCli::try_parse_from(["qbench", "generate", "dynamic_qft", "--qubits", "5"]).unwrap();
        match cli.command {
            TestCommands::Generate {
                benchmark,
                qubits,
                format,
                output,
            } => {
                assert_eq!(benchmark, "dynamic_qft");
                assert_eq!(qubits, 5);
                assert_eq!(format, OutputFormat::Qasm3);
                assert!(output.is_none());
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_parse_generate_all_options() {
        let cli = TestCli::try_parse_from([
            "qbench",
            "-vv",
            "generate",
            "dynamic_qft",
            "-n",
            "12",
            "-f",
            "summary",
            "-o",
            "out.txt",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            TestCommands::Generate {
                qubits,
                format,
                output,
                ..
            } => {
                assert_eq!(qubits, 12);
                assert_eq!(format, OutputFormat::Summary);
                assert_eq!(output.as_deref(), Some("out.txt"));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_parse_generate_negative_qubits_reaches_library() {
        // Range checking belongs to the generator, not to clap.
        let cli =
            TestCli::try_parse_from(["qbench", "generate", "dynamic_qft", "--qubits", "-3"]).unwrap();
        match cli.command {
            TestCommands::Generate { qubits, .. } => assert_eq!(qubits, -3),
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_parse_generate_missing_qubits() {
        assert!(TestCli::try_parse_from(["qbench", "generate", "dynamic_qft"]).is_err());
    }

    #[test]
    fn test_parse_generate_non_numeric_qubits() {
        assert!(
            TestCli::try_parse_from(["qbench", "generate", "dynamic_qft", "-n", "many"]).is_err()
        );
    }

    #[test]
    fn test_parse_generate_unknown_format() {
        assert!(
            TestCli::try_parse_from([
                "qbench",
                "generate",
                "dynamic_qft",
                "-n",
                "3",
                "--format",
                "qasm2"
            ])
            .is_err()
        );
    }

    // --- Misc ---

    #[test]
    fn test_parse_version() {
        let cli = TestCli::try_parse_from(["qbench", "version"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Version));
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = TestCli::try_parse_from(["qbench", "list", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_no_subcommand() {
        assert!(TestCli::try_parse_from(["qbench"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(TestCli::try_parse_from(["qbench", "compile"]).is_err());
    }
}

// ============================================================================
// Generate flow
// ============================================================================

mod generate_flow {
    use std::fs;

    use qbench_qasm3::emit;
    use qbench_suite::{SuiteError, registry};

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dqft_5.qasm");

        let circuit = registry().create("dynamic_qft", 5).unwrap();
        fs::write(&path, emit(&circuit).unwrap()).unwrap();

        let source = fs::read_to_string(&path).unwrap();
        assert!(source.contains("qubit[5] q;"));
        assert!(source.contains("bit[5] c;"));
        assert_eq!(source.matches("measure").count(), 5);
        assert_eq!(source.matches("if (").count(), 5);
    }

    #[test]
    fn test_generate_json() {
        let circuit = registry().create("dynamic_qft", 2).unwrap();
        let json = serde_json::to_string_pretty(&circuit).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "dynamic_qft");
    }

    #[test]
    fn test_generate_json_reads_back_at_every_size() {
        let mismatched: Vec<i64> = (1..=60)
            .filter(|&n| {
                let circuit = registry().create("dynamic_qft", n).unwrap();
                let json = serde_json::to_string_pretty(&circuit).unwrap();
                serde_json::from_str::<qbench_ir::Circuit>(&json).unwrap() != circuit
            })
            .collect();
        assert!(mismatched.is_empty(), "sizes not read back exactly: {mismatched:?}");
    }

    #[test]
    fn test_generate_errors_render_with_context() {
        let err = registry().create("dynamic_qft", 0).unwrap_err();
        assert!(matches!(err, SuiteError::InvalidArgument(_)));

        let err = anyhow::Error::new(err).context("Failed to generate 'dynamic_qft' with 0 qubits");
        let msg = format!("{err:#}");
        assert!(msg.starts_with("Failed to generate 'dynamic_qft' with 0 qubits: "));
    }
}
