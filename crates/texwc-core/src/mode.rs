//! Plain-text vs LaTeX classification.
//!
//! This is a closed heuristic, not a grammar check: a document is LaTeX when it
//! mentions one of [`LATEX_MARKERS`]. Documents that only use `\chapter` (or no
//! sectioning commands at all) are classified as plain text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Substrings whose presence marks a document as LaTeX.
pub const LATEX_MARKERS: [&str; 3] = [r"\section", r"\subsection", r"\documentclass"];

/// How a document is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Whitespace tokens of the raw text
    PlainText,
    /// Cleaned and split into preamble, sections and subsections
    Latex,
}

impl Mode {
    /// Classify a document.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if LATEX_MARKERS.iter().any(|marker| text.contains(marker)) {
            Self::Latex
        } else {
            Self::PlainText
        }
    }
}

/// Caller-selected mode; `Auto` defers to [`Mode::detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeOverride {
    #[default]
    Auto,
    Latex,
    Plain,
}

impl ModeOverride {
    /// Resolve the mode used for `text`.
    #[must_use]
    pub fn resolve(self, text: &str) -> Mode {
        match self {
            Self::Auto => Mode::detect(text),
            Self::Latex => Mode::Latex,
            Self::Plain => Mode::PlainText,
        }
    }
}

impl fmt::Display for ModeOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Latex => "latex",
            Self::Plain => "plain",
        })
    }
}

impl FromStr for ModeOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "latex" | "tex" => Ok(Self::Latex),
            "plain" | "text" => Ok(Self::Plain),
            other => Err(format!(
                "unknown mode '{other}': expected auto, latex or plain"
            )),
        }
    }
}
