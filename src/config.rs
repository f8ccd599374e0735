//! Run configuration.
//!
//! A [`Config`] gathers every option of a conversion run. It is validated
//! before the input is even opened, so an impossible request (compiling
//! without anywhere to put the result) fails without side effects.

use crate::compiler::{Compiler, GraphvizCompiler, LatexCompiler, DEFAULT_IMG_FORMAT};
use crate::error::ConfigError;
use crate::parser::{ParseOptions, PosColumn};
use crate::render::{Mode, RenderOptions};
use std::path::PathBuf;

/// Options of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output notation
    pub mode: Mode,
    /// Destination file; `None` prints to stdout
    pub output_path: Option<PathBuf>,
    /// Show morphological features in the trees
    pub include_features: bool,
    /// Run the external tool on the generated code
    pub compile: bool,
    /// External tool; defaults to the mode's usual tool
    pub command: Option<String>,
    /// Graphviz output format when compiling
    pub img_format: String,
    /// Skip multi-word token records (`4-5`)
    pub ignore_double_indices: bool,
    /// Column feeding the part-of-speech tag
    pub pos_column: PosColumn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            output_path: None,
            include_features: false,
            compile: false,
            command: None,
            img_format: DEFAULT_IMG_FORMAT.to_string(),
            ignore_double_indices: false,
            pos_column: PosColumn::default(),
        }
    }
}

impl Config {
    /// Check option combinations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.compile && self.output_path.is_none() {
            return Err(ConfigError::CompileWithoutOutput);
        }
        Ok(())
    }

    /// The external tool to run, falling back to `lualatex` or `dot`.
    pub fn command(&self) -> &str {
        self.command
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.mode.default_command())
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            ignore_double_indices: self.ignore_double_indices,
            pos_column: self.pos_column,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_features: self.include_features,
        }
    }

    /// The compiler for this run, if compilation was requested.
    pub fn compiler(&self) -> Option<Box<dyn Compiler>> {
        if !self.compile {
            return None;
        }
        let compiler: Box<dyn Compiler> = match self.mode {
            Mode::Latex => Box::new(LatexCompiler::new(self.command())),
            Mode::Graphviz => Box::new(GraphvizCompiler::new(self.command(), &self.img_format)),
        };
        Some(compiler)
    }
}
