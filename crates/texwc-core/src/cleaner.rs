//! LaTeX fragment cleaning
//!
//! Strategy:
//! 1. Regex passes over the raw fragment, in a fixed order
//! 2. Each pass assumes the earlier ones already removed interfering syntax
//!    (comments before math, environments before commands, commands before braces)
//! 3. Whatever survives is counted as words
//!
//! Note: fragments come from header splitting, not a real parser, so they may
//! hold half an environment or an unbalanced brace. Every pass degrades to
//! partial removal in that case; nothing here fails.

use regex::Regex;
use std::sync::LazyLock;

/// Environments whose content is never counted. Starred variants are removed too.
pub const SKIPPED_ENVIRONMENTS: [&str; 7] = [
    "equation",
    "figure",
    "table",
    "tabular",
    "thebibliography",
    "verbatim",
    "tikzpicture",
];

// =============================================================================
// Pre-compiled regex patterns, applied in declaration order
// =============================================================================

// `%` to end of line unless escaped by an odd run of backslashes (`\%`, but
// not the line break `\\%`). Groups 1 and 2 keep the preceding text.
static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(^|[^\\])((?:\\\\)*)%.*$").expect("valid comment regex")
});

// One pattern per environment name: plain form first, then the starred form
static RE_ENVIRONMENTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SKIPPED_ENVIRONMENTS
        .iter()
        .flat_map(|env| [(*env).to_string(), format!("{env}*")])
        .map(|name| {
            let name = regex::escape(&name);
            Regex::new(&format!(r"(?s)\\begin\{{{name}\}}.*?\\end\{{{name}\}}"))
                .expect("valid environment regex")
        })
        .collect()
});

// -- Math patterns --
static RE_DISPLAY_DOLLARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$.*?\$\$").expect("valid display math regex"));
static RE_DISPLAY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\\\[.*?\\\]").expect("valid bracket math regex"));
static RE_INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$.*?\$").expect("valid inline math regex"));

// -- Command patterns --
// Optional [option] and {argument}; the argument ends at the first `}` on the line
static RE_CMD_WITH_ARGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\[a-zA-Z]+(?:\[.*?\])?(?:\{.*?\})?").expect("valid cmd with args regex")
});
static RE_BARE_CMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+").expect("valid bare cmd regex"));

// Braces together with the backslashes escaping them, so `\{alpha` cannot
// turn into the command `\alpha`
static RE_BRACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\*[{}]").expect("valid brace regex"));

/// Clean a LaTeX fragment down to countable plain text.
///
/// Line structure is preserved: every line is trimmed, blank lines stay as
/// empty lines.
#[must_use]
pub fn clean_latex(text: &str) -> String {
    let mut result = RE_COMMENT.replace_all(text, "${1}${2}").into_owned();

    for env in RE_ENVIRONMENTS.iter() {
        result = env.replace_all(&result, "").into_owned();
    }

    result = RE_DISPLAY_DOLLARS.replace_all(&result, "").into_owned();
    result = RE_DISPLAY_BRACKETS.replace_all(&result, "").into_owned();
    result = RE_INLINE_MATH.replace_all(&result, "").into_owned();

    result = RE_CMD_WITH_ARGS.replace_all(&result, "").into_owned();
    result = RE_BARE_CMD.replace_all(&result, "").into_owned();

    result = RE_BRACES.replace_all(&result, "").into_owned();

    // split('\n') rather than lines(): a trailing empty line must survive a second pass
    result.split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

/// Number of whitespace-separated tokens in `text`.
#[inline]
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Clean a fragment and count what remains.
#[inline]
#[must_use]
pub fn cleaned_word_count(fragment: &str) -> usize {
    count_words(&clean_latex(fragment))
}
