//! Word count results.
//!
//! A LaTeX document produces a [`SectionedCount`] tree: an optional preamble
//! followed by sections, each holding the subsections that had words. Counts
//! are aggregated bottom-up when the tree is built and never change afterwards.

use crate::mode::Mode;
use serde::{Deserialize, Serialize};

/// Words before the first `\section` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preamble {
    pub word_count: usize,
}

/// A `\subsection` and the words of its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    /// Title exactly as written between the braces
    pub title: String,
    pub word_count: usize,
}

/// A `\section` with its own words and its non-empty subsections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Title exactly as written between the braces
    pub title: String,
    /// Own words plus every retained subsection
    pub word_count: usize,
    /// Words between the header and the first subsection
    pub intro_words: usize,
    pub subsections: Vec<Subsection>,
}

impl Section {
    /// Build a section, aggregating the subsection counts into `word_count`.
    ///
    /// Subsections with zero words are dropped here.
    #[must_use]
    pub fn new(title: impl Into<String>, intro_words: usize, subsections: Vec<Subsection>) -> Self {
        let subsections: Vec<Subsection> = subsections
            .into_iter()
            .filter(|sub| sub.word_count > 0)
            .collect();
        let word_count = intro_words + subsections.iter().map(|sub| sub.word_count).sum::<usize>();
        Self {
            title: title.into(),
            word_count,
            intro_words,
            subsections,
        }
    }
}

/// Result tree for a LaTeX document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionedCount {
    pub total_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<Preamble>,
    pub sections: Vec<Section>,
}

impl SectionedCount {
    /// Build the tree; a zero-word preamble is omitted and the total is summed.
    #[must_use]
    pub fn new(preamble_words: usize, sections: Vec<Section>) -> Self {
        let preamble = (preamble_words > 0).then_some(Preamble {
            word_count: preamble_words,
        });
        let total_words =
            preamble_words + sections.iter().map(|section| section.word_count).sum::<usize>();
        Self {
            total_words,
            preamble,
            sections,
        }
    }

    /// Preamble words, 0 when the preamble was omitted
    #[inline]
    #[must_use]
    pub fn preamble_words(&self) -> usize {
        self.preamble.map_or(0, |p| p.word_count)
    }
}

/// Outcome of counting one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum WordCount {
    /// Plain-text mode: raw whitespace tokens
    Plain { total_words: usize },
    /// LaTeX mode: the section tree
    Latex(SectionedCount),
}

impl WordCount {
    /// Total words regardless of mode.
    #[inline]
    #[must_use]
    pub fn total_words(&self) -> usize {
        match self {
            Self::Plain { total_words } => *total_words,
            Self::Latex(tree) => tree.total_words,
        }
    }

    /// Mode that produced this count.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Plain { .. } => Mode::PlainText,
            Self::Latex(_) => Mode::Latex,
        }
    }
}
