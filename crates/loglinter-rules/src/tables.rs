//! Character and keyword tables used by the message checks.
//!
//! Range tables are sorted and non-overlapping so lookups can binary search.
//! Letter case and script use the `regex` Unicode classes.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Inclusive code point range.
pub type CharRange = (char, char);

/// Emoji, pictographs, and the joiners and selectors used to compose them.
pub const EMOJI: &[CharRange] = &[
    ('\u{200D}', '\u{200D}'),
    ('\u{20E3}', '\u{20E3}'),
    ('\u{231A}', '\u{231B}'),
    ('\u{23E9}', '\u{23F3}'),
    ('\u{23F8}', '\u{23FA}'),
    ('\u{2600}', '\u{26FF}'),
    ('\u{2700}', '\u{27BF}'),
    ('\u{2B1B}', '\u{2B1C}'),
    ('\u{2B50}', '\u{2B50}'),
    ('\u{2B55}', '\u{2B55}'),
    ('\u{FE00}', '\u{FE0F}'),
    ('\u{1F000}', '\u{1F02F}'),
    ('\u{1F0A0}', '\u{1F0FF}'),
    ('\u{1F170}', '\u{1F1FF}'),
    ('\u{1F200}', '\u{1F2FF}'),
    ('\u{1F300}', '\u{1F5FF}'),
    ('\u{1F600}', '\u{1F64F}'),
    ('\u{1F680}', '\u{1F6FF}'),
    ('\u{1F780}', '\u{1F7FF}'),
    ('\u{1F900}', '\u{1F9FF}'),
    ('\u{1FA70}', '\u{1FAFF}'),
    ('\u{E0020}', '\u{E007F}'),
];

/// Punctuation and symbols rejected in log messages by default.
pub const FORBIDDEN_PUNCTUATION: &[char] = &[
    '!', '?', '¡', '¿', '…', '‼', '⁇', '⁈', '⁉', '«', '»', '•', '§', '¶', '†', '‡', '※',
];

/// Lowercase substrings that mark a message as carrying credentials.
pub const SENSITIVE_KEYWORDS: &[&str] = &[
    "password",
    "passwd",
    "secret",
    "token",
    "apikey",
    "api key",
    "api_key",
    "api-key",
    "private key",
    "private_key",
    "access key",
    "access_key",
    "credential",
];

/// A long key-like run following a credential keyword, e.g. `bearer eyJhbGciOi..`.
pub const KEY_LIKE_PATTERN: &str = r"(?i)\b(?:bearer|key|auth)\b\s*[:=]?\s*[a-z0-9_\-]{16,}";

/// Any letter (`L*` category) that is not in the Latin script.
pub const NON_LATIN_LETTER_PATTERN: &str = r"[\p{L}--\p{sc=Latin}]";

/// An uppercase letter (`Lu` category) as the first code point.
pub const UPPERCASE_START_PATTERN: &str = r"\A\p{Lu}";

static KEY_LIKE: OnceLock<Regex> = OnceLock::new();
static NON_LATIN_LETTER: OnceLock<Regex> = OnceLock::new();
static UPPERCASE_START: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)]
fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("valid regex"))
}

/// Compiled [`KEY_LIKE_PATTERN`].
pub fn key_like_pattern() -> &'static Regex {
    compiled(&KEY_LIKE, KEY_LIKE_PATTERN)
}

/// Compiled [`NON_LATIN_LETTER_PATTERN`].
pub fn non_latin_letter() -> &'static Regex {
    compiled(&NON_LATIN_LETTER, NON_LATIN_LETTER_PATTERN)
}

/// Compiled [`UPPERCASE_START_PATTERN`].
pub fn uppercase_start() -> &'static Regex {
    compiled(&UPPERCASE_START, UPPERCASE_START_PATTERN)
}

/// Returns true if `c` falls inside one of the ranges of `table`.
#[must_use]
pub fn in_table(table: &[CharRange], c: char) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                Ordering::Less
            } else if lo > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Returns true for emoji and emoji modifiers.
#[must_use]
pub fn is_emoji(c: char) -> bool {
    in_table(EMOJI, c)
}
