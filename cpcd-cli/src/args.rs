// Command-line definition, shared with build.rs for shell completions.

use clap::{Arg, ArgAction, Command, ValueHint};

/// Build the `cpcd` command
pub fn build_cli() -> Command {
    Command::new("cpcd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate, parse, and extract physical constant sets from the Community Physical Constant Dictionary")
        .arg_required_else_help(true)
        .after_help(
            "Exit status:\n 0 if successful, 1 if an error occurs.\n\n\
             For bugs reporting, please visit:\n<https://github.com/ESCOMP/PhysicalConstantsDictionary>",
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('d')
                .value_name("YAML_FILE")
                .help("Use YAML_FILE as dictionary")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("request")
                .long("request")
                .short('r')
                .value_name("YAML_FILE")
                .help("Extract constants listed in YAML_FILE")
                .value_hint(ValueHint::FilePath)
                .conflicts_with("request-inline"),
        )
        .arg(
            Arg::new("request-inline")
                .long("request-inline")
                .value_name("YAML")
                .help("Extract constants listed in YAML text (e.g. 'earth: [g]')"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Save Fortran output to FILE")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_name("NAME")
                .help("Output format: fortran (default) or yaml"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("TOML_FILE")
                .help("Layer TOML_FILE over the built-in configuration")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("validate")
                .long("validate")
                .short('x')
                .help("Validate dictionary file and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("With --validate, also report dictionary keys required by the schema but missing")
                .requires("validate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .short('p')
                .help("Print the dictionary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Use verbose output")
                .action(ArgAction::SetTrue),
        )
}
