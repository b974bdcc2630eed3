//! Whitespace normalization applied to selected text before it is sent.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+").expect("valid regex"));
static STRUCTURAL_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_\n\r\t*]").expect("valid regex"));
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("valid regex"));

/// Splits camel-case words, turns `- _ * \n \r \t` into spaces and collapses
/// runs of spaces. `"HelloWorld"` becomes `"Hello World"`.
pub fn normalize(input: &str) -> String {
    let split = CAPITALIZED_WORD.replace_all(input, |caps: &Captures<'_>| {
        let word = &caps[0];
        match caps.get(0) {
            Some(m) if m.start() > 0 => format!(" {word}"),
            _ => word.to_owned(),
        }
    });
    let spaced = STRUCTURAL_CHAR.replace_all(&split, " ");
    SPACE_RUN.replace_all(&spaced, " ").into_owned()
}
