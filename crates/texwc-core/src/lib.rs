//! # texwc-core
//!
//! Hierarchical word counting for LaTeX documents.
//!
//! The crate turns one document string into a [`WordCount`]: either a flat
//! token count for plain text, or a tree of preamble, sections and
//! subsections for LaTeX. It performs no I/O.
//!
//! ## Pipeline
//!
//! 1. **Validation**: whitespace-only input is rejected with [`TexwcError::EmptyInput`]
//! 2. **Mode detection**: [`Mode::detect`] looks for `\section`, `\subsection`
//!    or `\documentclass`
//! 3. **Splitting**: the raw text is cut at `\section` headers, then each
//!    section body at `\subsection` headers
//! 4. **Cleaning**: every fragment is stripped of comments, skipped
//!    environments, math and commands by [`clean_latex`]
//! 5. **Aggregation**: counts are summed bottom-up into a [`SectionedCount`]
//!
//! ## Quick Start
//!
//! ```rust
//! use texwc_core::{count_document, WordCount};
//!
//! let tex = r"\section{Intro} Hello world. \subsection{Background} Some background text here.";
//! let count = count_document(tex)?;
//! assert_eq!(count.total_words(), 6);
//!
//! if let WordCount::Latex(tree) = count {
//!     assert_eq!(tree.sections[0].title, "Intro");
//!     assert_eq!(tree.sections[0].subsections[0].word_count, 4);
//! }
//! # Ok::<(), texwc_core::TexwcError>(())
//! ```
//!
//! ## Skipped Environments
//!
//! | Environment | Starred form |
//! |-------------|--------------|
//! | `equation` | `equation*` |
//! | `figure` | `figure*` |
//! | `table` | `table*` |
//! | `tabular` | `tabular*` |
//! | `thebibliography` | `thebibliography*` |
//! | `verbatim` | `verbatim*` |
//! | `tikzpicture` | `tikzpicture*` |
//!
//! ## Limitations
//!
//! Everything is pattern matching, so the following are counted imprecisely
//! rather than rejected:
//!
//! - **Nested braces**: titles and command arguments end at the first `}`
//! - **Nested environments**: a skipped environment ends at the first matching `\end`
//! - **Unbalanced `$`**: partial inline-math removal
//! - **Custom macros**: never expanded
//! - **Chapters**: a document using only `\chapter` is counted as plain text

pub mod cleaner;
pub mod error;
pub mod mode;
pub mod report;
pub mod sections;

pub use cleaner::{clean_latex, cleaned_word_count, count_words, SKIPPED_ENVIRONMENTS};
pub use error::{Result, TexwcError};
pub use mode::{Mode, ModeOverride};
pub use report::{Preamble, Section, SectionedCount, Subsection, WordCount};
pub use sections::count_sections;

use tracing::info;

/// Count a document, detecting its mode.
///
/// # Errors
///
/// Returns [`TexwcError::EmptyInput`] when `document` is empty or only whitespace.
pub fn count_document(document: &str) -> Result<WordCount> {
    count_document_as(document, ModeOverride::Auto)
}

/// Count a document in the given mode (`Auto` detects it).
///
/// # Errors
///
/// Returns [`TexwcError::EmptyInput`] when `document` is empty or only whitespace.
pub fn count_document_as(document: &str, mode: ModeOverride) -> Result<WordCount> {
    if document.trim().is_empty() {
        return Err(TexwcError::EmptyInput);
    }

    let resolved = mode.resolve(document);
    let count = match resolved {
        Mode::PlainText => WordCount::Plain {
            total_words: count_words(document),
        },
        Mode::Latex => WordCount::Latex(count_sections(document)),
    };

    info!(
        requested = %mode,
        mode = ?resolved,
        total_words = count.total_words(),
        "counted document"
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scenario() {
        let count = count_document("Just plain text with five words").unwrap();
        assert_eq!(count, WordCount::Plain { total_words: 6 });
    }

    #[test]
    fn test_plain_text_is_not_cleaned() {
        // No markers, so the markup tokens count as words
        let count = count_document(r"\textbf{Bold} claim $x$").unwrap();
        assert_eq!(count.total_words(), 3);
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert!(matches!(
            count_document("  \n\t  "),
            Err(TexwcError::EmptyInput)
        ));
        assert!(matches!(count_document(""), Err(TexwcError::EmptyInput)));
    }

    #[test]
    fn test_latex_detected() {
        let count = count_document(r"\section{A} one two").unwrap();
        assert_eq!(count.mode(), Mode::Latex);
        assert_eq!(count.total_words(), 2);
    }

    #[test]
    fn test_forced_latex_mode() {
        let count = count_document_as(r"\textbf{Bold} claim", ModeOverride::Latex).unwrap();
        match count {
            WordCount::Latex(tree) => {
                assert!(tree.sections.is_empty());
                assert_eq!(tree.preamble_words(), 1);
            }
            WordCount::Plain { .. } => panic!("Expected LaTeX count"),
        }
    }

    #[test]
    fn test_forced_plain_mode() {
        let count = count_document_as(r"\section{A} one two", ModeOverride::Plain).unwrap();
        assert_eq!(count, WordCount::Plain { total_words: 3 });
    }

    #[test]
    fn test_markup_only_latex_is_not_empty_input() {
        // Non-blank input that cleans to nothing is a zero count, not an error
        let count = count_document(r"\documentclass{article}").unwrap();
        assert_eq!(count.total_words(), 0);
    }
}
