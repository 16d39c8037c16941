use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI surface from src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("snaptree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print JSON ASTs as deterministic snapshot text")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the AST JSON file, or '-' for stdin")
                .required_unless_present("list-serializers")
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
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a snaptree.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-serializers")
                .long("list-serializers")
                .help("List registered serializers")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "snaptree", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "snaptree", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "snaptree", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
