//! End-to-end conversion run.
//!
//! A [`Runner`] takes a validated [`Config`] and drives the whole pipeline:
//!
//! ```text
//! input file -> parse -> assemble -> print | write | compile
//! ```
//!
//! The input is parsed completely before anything is emitted, so a malformed
//! record never leaves half of the output behind. Units are then emitted one
//! at a time, in input order.

use crate::compiler::Compiler;
use crate::config::Config;
use crate::document::{assemble, OutputUnit};
use crate::error::{Error, Result};
use crate::parser::RecordParser;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of sentences read
    pub sentences: usize,
    /// Files written or compiled, in order
    pub outputs: Vec<PathBuf>,
}

/// Drives one conversion.
pub struct Runner {
    config: Config,
    compiler: Option<Box<dyn Compiler>>,
}

impl Runner {
    /// Create a runner, rejecting invalid option combinations.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let compiler = config.compiler();
        Ok(Self { config, compiler })
    }

    /// Replace the external tool, e.g. with an in-process one.
    pub fn with_compiler(mut self, compiler: Box<dyn Compiler>) -> Self {
        self.compiler = Some(compiler);
        self
    }

    /// Convert the file at `input`; printed units go to `out`.
    pub fn run_file(&self, input: &Path, out: &mut dyn Write) -> Result<RunSummary> {
        let source = fs::read_to_string(input).map_err(|source| Error::Io {
            path: input.to_path_buf(),
            source,
        })?;
        self.run_source(&source, out)
    }

    /// Convert CoNLL text; printed units go to `out`.
    pub fn run_source(&self, source: &str, out: &mut dyn Write) -> Result<RunSummary> {
        let document = RecordParser::new(self.config.parse_options()).parse(source)?;
        let units = assemble(
            &document,
            self.config.mode,
            &self.config.render_options(),
            self.config.output_path.as_deref(),
        );

        let mut summary = RunSummary {
            sentences: document.len(),
            outputs: Vec::new(),
        };
        for unit in units {
            if let Some(path) = self.emit(unit, out)? {
                summary.outputs.push(path);
            }
        }
        Ok(summary)
    }

    fn emit(&self, unit: OutputUnit, out: &mut dyn Write) -> Result<Option<PathBuf>> {
        let Some(path) = unit.path else {
            writeln!(out, "{}", unit.code).map_err(|source| Error::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
            return Ok(None);
        };

        match &self.compiler {
            Some(compiler) => compiler.compile(&unit.code, &path)?,
            None => {
                log::info!("writing {}", path.display());
                fs::write(&path, &unit.code).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
            }
        }
        Ok(Some(path))
    }
}
