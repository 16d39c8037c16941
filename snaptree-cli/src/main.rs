// Command-line interface for snaptree
//
// This binary prints JSON-encoded ASTs (the output shape of espree,
// typescript-estree and friends) as deterministic snapshot text, using the
// snaptree-print library. It is mainly a debugging and fixture-authoring aid:
// the same rendering the test-time serializer produces, available from a shell.
//
// Usage:
//  snaptree <input.json> [-o <file>] [--indent <str>] [--config <path>]
//  snaptree print <input.json> ...       - Same as above (explicit)
//  snaptree --list-serializers           - List registered serializers
//
// Input is a single JSON document; pass '-' to read from stdin. Output goes to
// stdout unless -o is given. Configuration follows the snaptree-config layering:
// embedded defaults, then ./snaptree.toml if present, then --config, then flags.

use clap::{Arg, ArgAction, Command, ValueHint};
use snaptree_config::{Loader, SnaptreeConfig};
use snaptree_print::{Printer, Value};
use std::fs;
use std::io::Read;

fn build_cli() -> Command {
    Command::new("snaptree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print JSON ASTs as deterministic snapshot text")
        .long_about(
            "snaptree renders JSON-encoded ASTs as the stable multi-line text used\n\
            in snapshot tests.\n\n\
            Nodes (objects with a string 'type' field) render as '<Type> { ... }'\n\
            blocks with a canonical field order; everything else uses a generic\n\
            block rendering.\n\n\
            Examples:\n  \
            snaptree ast.json                    # Print snapshot text to stdout\n  \
            snaptree ast.json -o node.snap       # Write to a file\n  \
            snaptree ast.json --indent '    '    # Four-space indentation\n  \
            espree-dump src.js | snaptree -      # Read the AST from stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-serializers")
                .long("list-serializers")
                .help("List registered serializers")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a snaptree.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("print")
                .about("Print a JSON AST as snapshot text (default command)")
                .arg(
                    Arg::new("input")
                        .help("Path to the AST JSON file, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .help("Indentation unit, overriding the configuration")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "print"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A bare input path (or '-') means the implicit print command
            let first = args.get(1).map(String::as_str);
            let looks_like_input = matches!(
                first,
                Some(f) if f != "print" && f != "help" && (f == "-" || !f.starts_with('-'))
            );
            if looks_like_input {
                let mut new_args = vec![args[0].clone(), "print".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-serializers") {
        handle_list_serializers_command();
        return;
    }

    match matches.subcommand() {
        Some(("print", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let indent = sub_matches.get_one::<String>("indent").map(|s| s.as_str());
            let config = load_cli_config(
                matches.get_one::<String>("config").map(|s| s.as_str()),
                indent,
            );
            handle_print_command(input, output, &config);
        }
        _ => {
            // arg_required_else_help covers the empty invocation
        }
    }
}

fn handle_list_serializers_command() {
    for name in Printer::default().list_serializers() {
        println!("{name}");
    }
}

/// Layer configuration: embedded defaults, ./snaptree.toml if present, an
/// explicit --config file, then flag overrides.
fn load_cli_config(config_path: Option<&str>, indent: Option<&str>) -> SnaptreeConfig {
    let mut loader = Loader::new().with_optional_file("snaptree.toml");
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(indent) = indent {
        loader = match loader.set_override("printer.indent_string", indent) {
            Ok(loader) => loader,
            Err(e) => {
                eprintln!("Error: invalid --indent value: {e}");
                std::process::exit(1);
            }
        };
    }
    match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: could not load configuration: {e}");
            std::process::exit(1);
        }
    }
}

fn handle_print_command(input: &str, output: Option<&str>, config: &SnaptreeConfig) {
    let source = if input == "-" {
        let mut buffer = String::new();
        match std::io::stdin().read_to_string(&mut buffer) {
            Ok(_) => buffer,
            Err(e) => {
                eprintln!("Error: could not read stdin: {e}");
                std::process::exit(1);
            }
        }
    } else {
        match fs::read_to_string(input) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: could not read '{input}': {e}");
                std::process::exit(1);
            }
        }
    };

    let json: serde_json::Value = match serde_json::from_str(&source) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: '{input}' is not valid JSON: {e}");
            std::process::exit(1);
        }
    };

    let printer = Printer::with_defaults((&config.printer).into());
    let mut text = match printer.print(&Value::from(json)) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if config.snapshot.trailing_newline {
        text.push('\n');
    }

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                eprintln!("Error: could not write '{path}': {e}");
                std::process::exit(1);
            }
        }
        None => print!("{text}"),
    }
}
