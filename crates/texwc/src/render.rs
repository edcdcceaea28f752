//! Output rendering for word count results

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use texwc_core::WordCount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented text tree (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Indented text tree, in the layout the tool has always printed.
///
/// ```text
/// Total Word Count: 6
///
/// - Section 1: Intro (6 words)
///   - Subsection 1.1: Background (4 words)
/// ```
pub struct TextReport<'a>(pub &'a WordCount);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Word Count: {}", self.0.total_words())?;

        let WordCount::Latex(tree) = self.0 else {
            return Ok(());
        };

        writeln!(f)?;
        if let Some(preamble) = tree.preamble {
            writeln!(f, "- Preamble/Abstract: {} words", preamble.word_count)?;
        }
        for (i, section) in tree.sections.iter().enumerate() {
            let i = i + 1;
            writeln!(
                f,
                "- Section {i}: {} ({} words)",
                section.title, section.word_count
            )?;
            for (j, sub) in section.subsections.iter().enumerate() {
                writeln!(
                    f,
                    "  - Subsection {i}.{}: {} ({} words)",
                    j + 1,
                    sub.title,
                    sub.word_count
                )?;
            }
        }
        Ok(())
    }
}

/// Render a count in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(count: &WordCount, format: OutputFormat, compact: bool) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(TextReport(count).to_string()),
        OutputFormat::Json if compact => serde_json::to_string(count).map(|s| s + "\n"),
        OutputFormat::Json => serde_json::to_string_pretty(count).map(|s| s + "\n"),
    }
}

/// Render a count and write it to `out`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails (a closed pipe
/// included).
pub fn write_report<W: Write>(
    out: &mut W,
    count: &WordCount,
    format: OutputFormat,
    compact: bool,
) -> io::Result<()> {
    out.write_all(render(count, format, compact)?.as_bytes())?;
    out.flush()
}
