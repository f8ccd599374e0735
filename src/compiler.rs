//! External renderer invocation.
//!
//! Generated code is handed to a [`Compiler`] together with its destination.
//! The two tools are driven differently:
//!
//! - [`GraphvizCompiler`] pipes the DOT code into `dot -T<format>` and writes
//!   whatever the process prints to the destination.
//! - [`LatexCompiler`] writes the `.tex` file first, then runs
//!   `lualatex <file>` on it.
//!
//! A missing executable or a non-zero exit status is an error; nothing is
//! retried.

use crate::error::CompileError;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

/// Image format passed to Graphviz when none is configured.
pub const DEFAULT_IMG_FORMAT: &str = "svg";

/// Produces the final artifact for one output unit.
pub trait Compiler {
    fn compile(&self, code: &str, output: &Path) -> Result<(), CompileError>;
}

/// Runs Graphviz on DOT code read from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphvizCompiler {
    command: String,
    img_format: String,
}

impl GraphvizCompiler {
    pub fn new(command: impl Into<String>, img_format: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            img_format: img_format.into(),
        }
    }

    fn args(&self) -> Vec<String> {
        vec![format!("-T{}", self.img_format)]
    }
}

impl Compiler for GraphvizCompiler {
    fn compile(&self, code: &str, output: &Path) -> Result<(), CompileError> {
        let args = self.args();
        log::info!("running command `{} {}`", self.command, args.join(" "));

        let spawn_error = |source| CompileError::Spawn {
            command: self.command.clone(),
            source,
        };

        let mut child = Command::new(&self.command)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // Feed stdin from its own thread while stdout is drained here, so a
        // tool that writes before it has read everything cannot stall us.
        let stdin = child.stdin.take();
        let result = thread::scope(|scope| {
            if let Some(mut stdin) = stdin {
                scope.spawn(move || {
                    // The tool may exit early on bad input; its status reports that.
                    if let Err(e) = stdin.write_all(code.as_bytes()) {
                        log::debug!("`{}` closed its input early: {}", self.command, e);
                    }
                });
            }
            child.wait_with_output()
        })
        .map_err(spawn_error)?;
        if !result.status.success() {
            return Err(CompileError::Failed {
                command: self.command.clone(),
                status: result.status,
            });
        }

        log::info!("writing {}", output.display());
        fs::write(output, &result.stdout).map_err(|source| CompileError::Io {
            path: output.to_path_buf(),
            source,
        })
    }
}

/// Writes a LaTeX file and compiles it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexCompiler {
    command: String,
}

impl LatexCompiler {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Compiler for LatexCompiler {
    fn compile(&self, code: &str, output: &Path) -> Result<(), CompileError> {
        log::info!("writing {}", output.display());
        fs::write(output, code).map_err(|source| CompileError::Io {
            path: output.to_path_buf(),
            source,
        })?;

        log::info!("running command `{} {}`", self.command, output.display());
        let status = Command::new(&self.command)
            .arg(output)
            .status()
            .map_err(|source| CompileError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CompileError::Failed {
                command: self.command.clone(),
                status,
            })
        }
    }
}
