//! Command-line interface for cpcd
//! Reads a physical constants dictionary, optionally validates it, and writes the requested
//! constants as a Fortran module.
//!
//! Usage:
//!   cpcd -d `<pcd.yaml>` -r `<req.yaml>` -o `<cpcd_mod.F90>`   - Extract and emit constants
//!   cpcd -d `<pcd.yaml>` --validate                          - Validate the dictionary only
//!
//! Defaults come from the embedded configuration, then `cpcd.toml` in the working directory,
//! then `--config`, then flags.

mod args;

use clap::error::ErrorKind;
use clap::ArgMatches;
use cpcd::{CpcdError, Pipeline, PipelineOptions, RequestSource};
use cpcd_config::{CpcdConfig, Loader, PROJECT_CONFIG_FILE};
use std::process;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

fn main() {
    let matches = match args::build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_FAILURE,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    init_logging(matches.get_flag("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        process::exit(EXIT_FAILURE);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[derive(Debug)]
enum CliError {
    Config(cpcd_config::ConfigError),
    Run(CpcdError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "configuration: {}", err),
            CliError::Run(err) => write!(f, "{}", err),
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches).map_err(CliError::Config)?;
    let options = pipeline_options(matches, config);

    let stdout = std::io::stdout();
    let mut report = stdout.lock();
    Pipeline::new(options)
        .run(&mut report)
        .map_err(CliError::Run)?;
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<CpcdConfig, cpcd_config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let strict = matches.get_flag("strict").then_some(true);
    loader
        .set_override_option("paths.dictionary", matches.get_one::<String>("dictionary").cloned())?
        .set_override_option("paths.request", matches.get_one::<String>("request").cloned())?
        .set_override_option("paths.output", matches.get_one::<String>("output").cloned())?
        .set_override_option("emit.format", matches.get_one::<String>("format").cloned())?
        .set_override_option("validation.strict", strict)?
        .build()
}

fn pipeline_options(matches: &ArgMatches, config: CpcdConfig) -> PipelineOptions {
    let request = match matches.get_one::<String>("request-inline") {
        Some(text) => RequestSource::Inline(text.clone()),
        None => RequestSource::File(config.paths.request),
    };
    PipelineOptions {
        dictionary: config.paths.dictionary,
        request,
        output: config.paths.output,
        validate_only: matches.get_flag("validate"),
        strict: config.validation.strict,
        print: matches.get_flag("print"),
        verbose: matches.get_flag("verbose"),
        format: config.emit.format,
        fortran: config.emit.fortran,
    }
}
