//! Command-line surface: load a parsed document, cast it, render the tree.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use miette::Report;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::ast::Document;
use crate::cast::cast_document;
use crate::error::{CastError, RenderError};
use crate::value::Value;

// ============================================================================
// CLI ARGUMENTS
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "treecast",
    version,
    about = "Casts a parsed API description document into its canonical value tree."
)]
pub struct CastArgs {
    /// The document AST, in the parser's JSON wire form.
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output format for the canonical tree.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the rendered tree to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// The text formats the tree can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    fn label(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

// clap needs Display for default_value_t; the labels double as the
// accepted argument values.
impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// PIPELINE - load, cast, render
// ============================================================================

/// Runs the full pipeline for one invocation.
pub fn run(args: &CastArgs) -> Result<(), CastError> {
    let document = load_document(&args.input)?;
    let tree = cast_document(&document);
    let rendered = render(&tree, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|source| CastError::Write {
                path: path.clone(),
                source,
            })?;
            announce_written(path, args.format, rendered.len());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Loads a document AST from its JSON wire form.
pub fn load_document(path: &Path) -> Result<Document, CastError> {
    let text = fs::read_to_string(path).map_err(|source| CastError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| CastError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders a value tree in the requested text format.
pub fn render(tree: &Value, format: OutputFormat) -> Result<String, CastError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(tree).map_err(RenderError::from),
        OutputFormat::Yaml => serde_yaml::to_string(tree).map_err(RenderError::from),
    };

    rendered.map_err(|source| CastError::Render {
        format: format.label(),
        source,
    })
}

// ============================================================================
// REPORTING
// ============================================================================

/// Prints a CastError with full miette diagnostics.
pub fn print_error(error: CastError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}

/// Confirms a file write on stderr, colored when stderr is a terminal.
fn announce_written(path: &Path, format: OutputFormat, bytes: usize) {
    let choice = if atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);

    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = write!(stderr, "cast");
    let _ = stderr.reset();
    let _ = writeln!(
        stderr,
        ": wrote {} ({}, {} bytes)",
        path.display(),
        format.label(),
        bytes
    );
}
