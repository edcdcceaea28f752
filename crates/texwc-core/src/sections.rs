//! Sectional counting for LaTeX documents.
//!
//! The document is split twice with the same boundary rule: first at
//! `\section` headers, then each section body at `\subsection` headers. Every
//! leaf fragment is cleaned and counted on its own.
//!
//! Splitting happens on the raw text, before any cleaning. A header-like
//! string inside a skipped environment (say a `\section{...}` inside a
//! `tabular`) still splits the document, and the environment's halves are then
//! cleaned separately.

use crate::cleaner::cleaned_word_count;
use crate::report::{Section, SectionedCount, Subsection};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Title: one or more non-`}` chars, verbatim. No brace balancing.
static RE_SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\section\*?\{([^}]+)\}").expect("valid section regex"));
static RE_SUBSECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\subsection\*?\{([^}]+)\}").expect("valid subsection regex")
});

/// A header and the text it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headed<'a> {
    pub title: &'a str,
    /// Text from the end of the header to the next header or end of input
    pub body: &'a str,
}

/// A fragment split at one level of headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    /// Text before the first header (the whole input when there is none)
    pub lead: &'a str,
    pub headed: Vec<Headed<'a>>,
}

/// Split `text` at every match of `header`, whose group 1 is the title.
///
/// Matches are found left to right and never overlap; each body runs up to
/// the start of the next match.
#[must_use]
pub fn split_at_headers<'a>(text: &'a str, header: &Regex) -> Split<'a> {
    let mut headed = Vec::new();
    let mut lead_end = text.len();
    // (title, body start) of the header still waiting for its end
    let mut open: Option<(&'a str, usize)> = None;

    for cap in header.captures_iter(text) {
        let (Some(whole), Some(title)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        match open.take() {
            Some((prev_title, body_start)) => headed.push(Headed {
                title: prev_title,
                body: &text[body_start..whole.start()],
            }),
            None => lead_end = whole.start(),
        }
        open = Some((title.as_str(), whole.end()));
    }

    if let Some((title, body_start)) = open {
        headed.push(Headed {
            title,
            body: &text[body_start..],
        });
    }

    Split {
        lead: &text[..lead_end],
        headed,
    }
}

/// Split a document at `\section` / `\section*` headers.
#[must_use]
pub fn split_sections(text: &str) -> Split<'_> {
    split_at_headers(text, &RE_SECTION_HEADER)
}

/// Split a section body at `\subsection` / `\subsection*` headers.
#[must_use]
pub fn split_subsections(body: &str) -> Split<'_> {
    split_at_headers(body, &RE_SUBSECTION_HEADER)
}

/// Count one section: its intro plus each non-empty subsection.
fn count_section(headed: &Headed<'_>) -> Section {
    let split = split_subsections(headed.body);
    let intro_words = cleaned_word_count(split.lead);
    debug!(section = headed.title, intro_words, "counted section intro");

    let subsections = split
        .headed
        .iter()
        .map(|sub| {
            let word_count = cleaned_word_count(sub.body);
            debug!(
                section = headed.title,
                subsection = sub.title,
                raw_len = sub.body.len(),
                word_count,
                "counted subsection"
            );
            Subsection {
                title: sub.title.to_string(),
                word_count,
            }
        })
        .collect();

    Section::new(headed.title, intro_words, subsections)
}

/// Build the section tree for a LaTeX document.
///
/// A document without any `\section` header yields an empty section list and
/// all of its words land in the preamble.
#[must_use]
pub fn count_sections(document: &str) -> SectionedCount {
    let split = split_sections(document);

    let preamble_words = cleaned_word_count(split.lead);
    debug!(
        raw_len = split.lead.len(),
        preamble_words, "counted preamble"
    );

    let sections = split.headed.iter().map(count_section).collect();
    SectionedCount::new(preamble_words, sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_without_headers() {
        let split = split_sections("no headers here");
        assert_eq!(split.lead, "no headers here");
        assert!(split.headed.is_empty());
    }

    #[test]
    fn test_split_lead_and_bodies() {
        let split = split_sections(r"pre \section{A} one \section*{B} two");
        assert_eq!(split.lead, "pre ");
        assert_eq!(
            split.headed,
            vec![
                Headed {
                    title: "A",
                    body: " one ",
                },
                Headed {
                    title: "B",
                    body: " two",
                },
            ]
        );
    }

    #[test]
    fn test_section_pattern_ignores_subsections() {
        let split = split_sections(r"\subsection{Only} text");
        assert!(split.headed.is_empty());
        assert_eq!(split.lead, r"\subsection{Only} text");
    }

    #[test]
    fn test_subsection_pattern_ignores_subsubsections() {
        let split = split_subsections(r"\subsubsection{Deep} text");
        assert!(split.headed.is_empty());
    }

    #[test]
    fn test_title_kept_verbatim() {
        let split = split_sections(r"\section{  Spaced Title }body");
        assert_eq!(split.headed[0].title, "  Spaced Title ");
    }

    #[test]
    fn test_title_truncates_at_first_brace() {
        // \section{The {\em} End}: title stops at the first `}`
        let split = split_sections(r"\section{The {\em} End} rest");
        assert_eq!(split.headed[0].title, r"The {\em");
        assert_eq!(split.headed[0].body, " End} rest");
    }

    #[test]
    fn test_empty_title_is_not_a_header() {
        let split = split_sections(r"\section{} text");
        assert!(split.headed.is_empty());
    }

    #[test]
    fn test_scenario_intro_and_subsection() {
        let tree = count_sections(
            r"\section{Intro} Hello world. \subsection{Background} Some background text here.",
        );
        assert!(tree.preamble.is_none());
        assert_eq!(tree.sections.len(), 1);
        let section = &tree.sections[0];
        assert_eq!(section.title, "Intro");
        assert_eq!(section.intro_words, 2);
        assert_eq!(section.word_count, 6);
        assert_eq!(
            section.subsections,
            vec![Subsection {
                title: "Background".to_string(),
                word_count: 4,
            }]
        );
        assert_eq!(tree.total_words, 6);
    }

    #[test]
    fn test_scenario_inline_math() {
        let tree = count_sections(r"\section{A} $x^2 + y^2 = z^2$ done");
        assert_eq!(tree.sections[0].word_count, 1);
        assert_eq!(tree.total_words, 1);
    }

    #[test]
    fn test_scenario_equation() {
        let tree = count_sections(r"\section{A}\begin{equation}E=mc^2\end{equation}text after");
        assert_eq!(tree.sections[0].word_count, 2);
    }

    #[test]
    fn test_preamble_counted_when_present() {
        let doc = "\\documentclass{article}\n\\begin{document}\nA short abstract.\n\\section{Body}\nText.";
        let tree = count_sections(doc);
        assert_eq!(tree.preamble_words(), 3);
        assert_eq!(tree.total_words, 4);
    }

    #[test]
    fn test_no_sections_all_in_preamble() {
        let tree = count_sections("\\documentclass{article}\nJust an abstract here.");
        assert!(tree.sections.is_empty());
        assert_eq!(tree.preamble_words(), 4);
        assert_eq!(tree.total_words, 4);
    }

    #[test]
    fn test_empty_subsection_dropped_section_kept() {
        let tree = count_sections(r"\section{Empty}\subsection{Nothing}\label{x}\section{Next} word");
        assert_eq!(tree.sections.len(), 2);
        assert_eq!(tree.sections[0].word_count, 0);
        assert!(tree.sections[0].subsections.is_empty());
        assert_eq!(tree.sections[1].word_count, 1);
    }

    #[test]
    fn test_subsections_stay_in_their_section() {
        let doc = r"\section{A} a \subsection{A1} x y \section{B} b \subsection{B1} z";
        let tree = count_sections(doc);
        assert_eq!(tree.sections[0].subsections[0].title, "A1");
        assert_eq!(tree.sections[0].word_count, 3);
        assert_eq!(tree.sections[1].subsections[0].title, "B1");
        assert_eq!(tree.sections[1].word_count, 2);
        assert_eq!(tree.total_words, 5);
    }

    #[test]
    fn test_split_happens_before_cleaning() {
        // The header inside the tabular still splits; each half of the
        // environment is then cleaned without its partner delimiter.
        let doc = r"\section{A} kept \begin{tabular}{c} cell \section{Inside} more \end{tabular} tail";
        let tree = count_sections(doc);
        assert_eq!(tree.sections.len(), 2);
        assert_eq!(tree.sections[1].title, "Inside");
        // The unmatched \begin{tabular} is stripped as a plain command, leaving
        // "kept", the column spec "c" and "cell" in A
        assert_eq!(tree.sections[0].word_count, 3);
        // "more" + "tail" survive in Inside
        assert_eq!(tree.sections[1].word_count, 2);
    }
}
