//! Command-line interface for dependency2tree.
//!
//! Converts the CoNLL output of a dependency parser into LaTeX or Graphviz
//! trees, and optionally compiles them.
//!
//! Usage:
//!   dependency2tree `<input.conll>`                          - print one DOT graph per sentence
//!   dependency2tree -o out.svg -c `<input.conll>`            - out-001.svg, out-002.svg, ...
//!   dependency2tree -l -o trees.tex -c `<input.conll>`       - one PDF, one tree per page

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use dependency2tree::{Config, Error, ErrorReporter, Mode, PosColumn, Runner};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const LONG_ABOUT: &str = "\
Convert CoNLL output of a dependency parser into a LaTeX or Graphviz tree.

In Graphviz mode (the default) each sentence goes to its own file: with
`-o out.gv` you get out-001.gv, out-002.gv, ... Compile them yourself with
`dot -Tsvg out-001.gv > out-001.svg`, or pass -c with an image extension
(`-o out.svg -c`, `-o out.png -c -f png`) to let dot do it.

In LaTeX mode (-l or -m latex) all sentences go to one .tex file, one tree per
page. With -c the file is compiled with lualatex (or --cmd).";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Latex,
    Graphviz,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Latex => Mode::Latex,
            ModeArg::Graphviz => Mode::Graphviz,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "dependency2tree", version, about, long_about = LONG_ABOUT)]
struct Cli {
    /// CoNLL file
    input_file: PathBuf,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output notation
    #[arg(short, long, value_enum, default_value_t = ModeArg::Graphviz)]
    mode: ModeArg,

    /// Shortcut for '-m latex'
    #[arg(short, long)]
    latex: bool,

    /// Include features
    #[arg(long)]
    feats: bool,

    /// Compile using --cmd
    #[arg(short, long)]
    compile: bool,

    /// Ignore tokens with a hyphen in the index (multi-word tokens in some corpora)
    #[arg(long)]
    ignore_double_indices: bool,

    /// Command used to compile; default is 'dot' in graphviz mode, 'lualatex' in latex mode
    #[arg(long = "cmd", value_name = "COMMAND")]
    command: Option<String>,

    /// Image format used when compiling with graphviz
    #[arg(short = 'f', long, default_value = "svg")]
    img_format: String,

    /// Take the part-of-speech from the coarse (4th) column instead of the 5th
    #[arg(long)]
    coarse_pos: bool,

    /// Log debug information
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            mode: if self.latex {
                Mode::Latex
            } else {
                self.mode.into()
            },
            output_path: self.output.clone(),
            include_features: self.feats,
            compile: self.compile,
            command: self.command.clone(),
            img_format: self.img_format.clone(),
            ignore_double_indices: self.ignore_double_indices,
            pos_column: if self.coarse_pos {
                PosColumn::Coarse
            } else {
                PosColumn::Fine
            },
        }
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let runner = Runner::new(cli.config())?;

    let source = fs::read_to_string(&cli.input_file)
        .with_context(|| format!("cannot read {}", cli.input_file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match runner.run_source(&source, &mut out) {
        Ok(summary) => {
            log::debug!(
                "{} sentence(s) converted, {} file(s) produced",
                summary.sentences,
                summary.outputs.len()
            );
            Ok(())
        }
        Err(Error::Format(err)) => {
            let name = cli.input_file.display().to_string();
            ErrorReporter::new(name.as_str(), &source).report_format_error(&err);
            Err(anyhow!("{} is not a valid CoNLL file", name))
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn config(args: &[&str]) -> Config {
        let mut argv = vec!["dependency2tree"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().config()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = config(&["in.conll"]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_latex_shortcut() {
        assert_eq!(config(&["-l", "in.conll"]).mode, Mode::Latex);
        assert_eq!(config(&["-m", "latex", "in.conll"]).mode, Mode::Latex);
        assert_eq!(config(&["-m", "graphviz", "in.conll"]).mode, Mode::Graphviz);
    }

    #[test]
    fn test_all_options() {
        let config = config(&[
            "-o",
            "out.png",
            "-c",
            "-f",
            "png",
            "--feats",
            "--ignore-double-indices",
            "--cmd",
            "/usr/local/bin/dot",
            "--coarse-pos",
            "in.conll",
        ]);
        assert_eq!(
            config,
            Config {
                mode: Mode::Graphviz,
                output_path: Some(PathBuf::from("out.png")),
                include_features: true,
                compile: true,
                command: Some("/usr/local/bin/dot".to_string()),
                img_format: "png".to_string(),
                ignore_double_indices: true,
                pos_column: PosColumn::Coarse,
            }
        );
        assert_eq!(config.command(), "/usr/local/bin/dot");
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["dependency2tree", "-m", "svg", "in.conll"]).is_err());
    }

    #[test]
    fn test_compile_without_output_fails_before_reading() {
        let cli = Cli::try_parse_from(["dependency2tree", "-c", "does-not-exist.conll"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert_eq!(
            err.to_string(),
            "you need to specify an output file when compiling"
        );
    }
}
