//! End-to-end run: read, validate or extract, emit
//!
//! The order is fixed:
//!
//!     read dictionary → [print] → validate (validate-only mode stops here)
//!     read request → normalize → [show request/query] → extract → emit → write output
//!
//! Any error stops the run. The output file is written last, so a failed run never leaves a
//! partial module behind.

use crate::error::CpcdError;
use crate::session::Session;
use cpcd_babel::{FormatRegistry, FortranOptions};
use cpcd_parser::Validator;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

const RULE: &str = "================";

/// Where the request comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSource {
    File(PathBuf),
    Inline(String),
}

/// Everything a run needs, already resolved from configuration and flags
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub dictionary: PathBuf,
    pub request: RequestSource,
    pub output: PathBuf,
    /// Validate the dictionary and stop
    pub validate_only: bool,
    /// Report schema keys absent from the dictionary
    pub strict: bool,
    /// Write the dictionary to the report stream after loading it
    pub print: bool,
    /// Write the request, the query and the extraction result to the report stream
    pub verbose: bool,
    pub format: String,
    pub fortran: FortranOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("pcd.yaml"),
            request: RequestSource::File(PathBuf::from("req.yaml")),
            output: PathBuf::from("cpcd_mod.F90"),
            validate_only: false,
            strict: false,
            print: false,
            verbose: false,
            format: "fortran".to_string(),
            fortran: FortranOptions::default(),
        }
    }
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Validate-only mode, dictionary passed
    Validated,
    /// Constants were written to `output`
    Emitted {
        output: PathBuf,
        groups: usize,
        constants: usize,
    },
}

pub struct Pipeline {
    options: PipelineOptions,
    registry: FormatRegistry,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        let registry = FormatRegistry::with_options(options.fortran.clone());
        Self { options, registry }
    }

    /// Run the pipeline, writing progress and reports to `report`
    pub fn run<W: Write>(&self, report: &mut W) -> Result<Outcome, CpcdError> {
        let options = &self.options;
        let format = self.registry.get(&options.format)?;

        let mut session = Session::new();
        session.read(&options.dictionary)?;

        if options.print {
            session.write_dictionary(report)?;
        }

        if options.validate_only {
            write!(report, "\nValidating physical constant dictionary ... ")?;
            let validator = Validator::new().strict(options.strict);
            return match session.validate_with(validator) {
                Ok(()) => {
                    writeln!(report, "passed")?;
                    Ok(Outcome::Validated)
                }
                Err(err) => {
                    writeln!(report, "FAILED")?;
                    Err(err)
                }
            };
        }

        match &options.request {
            RequestSource::File(path) => session.read_request(path)?,
            RequestSource::Inline(text) => session.load_request(text)?,
        }

        if options.verbose {
            writeln!(report, "{}\nUser request:\n{}", RULE, RULE)?;
            session.write_request(report)?;
            writeln!(report, "{}\n\nActual query:\n{}", RULE, RULE)?;
            session.write_query(report)?;
            writeln!(report, "{}\n", RULE)?;
        }

        let result = session.extract()?;
        if options.verbose {
            writeln!(report, "Parsing ...")?;
            write!(report, "{}", self.registry.serialize(&result, "yaml")?)?;
        }

        let text = format.serialize(&result)?;
        fs::write(&options.output, text).map_err(|e| CpcdError::Output {
            path: options.output.clone(),
            message: e.to_string(),
        })?;
        info!(
            "wrote {} constants from {} sets to {}",
            result.len(),
            result.group_count(),
            options.output.display()
        );

        Ok(Outcome::Emitted {
            output: options.output.clone(),
            groups: result.group_count(),
            constants: result.len(),
        })
    }
}
