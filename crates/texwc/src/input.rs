//! Document input: a named file or stdin

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use texwc_core::{Result, TexwcError};
use tracing::debug;

const PASTE_PROMPT: &str = "Please paste your LaTeX code below and press Ctrl-D when you're done.";

/// Read the whole document. `None` or `-` reads stdin.
///
/// Emptiness is not checked here; the counter rejects blank documents.
///
/// # Errors
///
/// Returns [`TexwcError::FileNotFound`] for a missing file and
/// [`TexwcError::Io`] for any other read failure.
pub fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => read_stdin(),
    }
}

fn read_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| TexwcError::from_read(e, path))?;
    debug!(path = %path.display(), bytes = content.len(), "read document");
    Ok(content)
}

fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("{PASTE_PROMPT}");
    }
    let mut content = String::new();
    stdin.read_to_string(&mut content)?;
    debug!(bytes = content.len(), "read document from stdin");
    Ok(content)
}
