//! Alphabets and symbol validation.
//!
//! Symbols are single characters. An alphabet is kept sorted and free of
//! duplicates so that set comparisons and summaries are stable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker for the empty word.
///
/// Never a legal symbol in a transition; also used as the label of an
/// empty alphabet and of an empty input in traces.
pub const EMPTY_WORD: char = 'ϵ';

/// Sort and deduplicate the characters of `symbols`.
///
/// # Example
///
/// ```rust
/// use dfakit::core::normalize;
///
/// assert_eq!(normalize("1010"), "01");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(symbols: &str) -> String {
    let mut chars: Vec<char> = symbols.chars().collect();
    chars.sort_unstable();
    chars.dedup();
    chars.into_iter().collect()
}

/// Check that every character of `symbols` belongs to `alphabet`.
///
/// The empty string is trivially a subset.
///
/// # Example
///
/// ```rust
/// use dfakit::core::is_subset;
///
/// assert!(is_subset("0110", "01"));
/// assert!(!is_subset("02", "01"));
/// assert!(is_subset("", "01"));
/// ```
pub fn is_subset(symbols: &str, alphabet: &str) -> bool {
    symbols.chars().all(|c| alphabet.contains(c))
}

/// Ordered, deduplicated set of input symbols.
///
/// Construction always normalizes, so an `Alphabet` never holds duplicates
/// and never holds [`EMPTY_WORD`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Alphabet {
    symbols: String,
}

impl Alphabet {
    /// Build an alphabet from `symbols`, dropping the empty-word marker.
    pub fn new(symbols: &str) -> Self {
        Self {
            symbols: normalize(symbols)
                .chars()
                .filter(|c| *c != EMPTY_WORD)
                .collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(symbol)
    }

    /// Check whether `input` is made only of symbols of this alphabet.
    pub fn accepts_word(&self, input: &str) -> bool {
        is_subset(input, &self.symbols)
    }

    /// First character of `input` outside this alphabet, if any.
    pub fn first_foreign(&self, input: &str) -> Option<char> {
        input.chars().find(|c| !self.contains(*c))
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.chars()
    }

    pub fn len(&self) -> usize {
        self.symbols.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<String> for Alphabet {
    fn from(symbols: String) -> Self {
        Self::new(&symbols)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

/// Renders as a brace-delimited list, `{ϵ}` when empty.
impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{{{EMPTY_WORD}}}");
        }
        let listed: Vec<String> = self.symbols().map(String::from).collect();
        write!(f, "{{{}}}", listed.join(","))
    }
}
