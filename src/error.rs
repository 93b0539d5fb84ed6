//! Errors at the I/O edge.
//!
//! The casting layer itself is total and never fails; errors only exist
//! where the CLI touches the outside world: reading the input file,
//! decoding the parser's wire form, rendering and writing the output.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Anything that can go wrong between the filesystem and the cast.
#[derive(Debug, Error, Diagnostic)]
pub enum CastError {
    #[error("failed to read document AST from {}", path.display())]
    #[diagnostic(
        code(treecast::read),
        help("check that the path exists and is readable")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed document AST in {}", path.display())]
    #[diagnostic(
        code(treecast::parse),
        help("the input must be a document AST in the parser's JSON wire form")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render the value tree as {format}")]
    #[diagnostic(code(treecast::render))]
    Render {
        format: &'static str,
        #[source]
        source: RenderError,
    },

    #[error("failed to write output to {}", path.display())]
    #[diagnostic(code(treecast::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Renderer-specific failure, wrapped by [`CastError::Render`].
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
