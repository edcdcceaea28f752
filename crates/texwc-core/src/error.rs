//! Error types for word counting.
//!
//! Malformed LaTeX is never an error: the cleaner strips what it can and the
//! counter reports whatever words remain. The variants here only cover input
//! that could not be obtained at all.

use std::path::PathBuf;
use thiserror::Error;

/// Error types that can occur while obtaining or counting a document.
///
/// # Examples
///
/// ```rust
/// use texwc_core::{count_document, TexwcError};
///
/// match count_document("   \n\t") {
///     Err(TexwcError::EmptyInput) => eprintln!("nothing to count"),
///     Err(e) => eprintln!("other error: {e}"),
///     Ok(count) => println!("{} words", count.total_words()),
/// }
/// ```
#[derive(Error, Debug)]
pub enum TexwcError {
    /// The document was empty or contained only whitespace.
    #[error("No input received.")]
    EmptyInput,

    /// The supplied path does not resolve to a readable file.
    #[error("File not found at {}", path.display())]
    FileNotFound {
        /// Path that was attempted
        path: PathBuf,
    },

    /// Any other read failure (permissions, invalid UTF-8, broken pipe).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl TexwcError {
    /// Map an I/O error raised while opening `path` to the matching variant.
    #[must_use]
    pub fn from_read(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path: path.into() }
        } else {
            Self::Io(err)
        }
    }
}

/// Type alias for [`Result<T, TexwcError>`].
pub type Result<T> = std::result::Result<T, TexwcError>;
