//! Tokenization and shallow normalization for Hindi word counting.
//!
//! This is deliberately not a lemmatizer. A token is lower-cased, stripped of
//! anything that is neither a word character nor Devanagari, and then has at
//! most one known suffix removed:
//!
//! 1. Walk the suffix table in order.
//! 2. The first suffix the word ends with wins, even if a longer one would
//!    also match later in the table.
//! 3. The strip is only taken when at least two characters remain; otherwise
//!    the word is kept as filtered.
//!
//! Lengths are measured in `char`s, so a Devanagari vowel sign or nukta counts
//! as one character just like a consonant does.
//!
//! Word characters are letters, numbers (including superscripts and other
//! `No` digits) and `_`. Combining marks, connector punctuation other than
//! `_`, and the zero-width joiner/non-joiner are not word characters unless
//! they sit inside the Devanagari block, so a ZWJ or ZWNJ between two
//! conjuncts splits them into separate tokens.
//!
//! # Example
//! ```rust
//! use liwc_morph::{SuffixStripper, StripSource, tokenize};
//!
//! let tokens: Vec<&str> = tokenize("घर, और बगीचा!").collect();
//! assert_eq!(tokens, ["घर", "और", "बगीचा"]);
//!
//! let stripper = SuffixStripper::hindi();
//! let norm = stripper.normalize_detailed("बगीचा");
//! assert_eq!(norm.base, "बगीच");
//! assert_eq!(norm.source, StripSource::Suffix("ा"));
//! ```

use std::sync::LazyLock;

use liwc_types::DEVANAGARI;
use regex::Regex;

/// Plural, case, and verb-ending suffixes, in match-priority order.
///
/// Order matters: `याँ` precedes `ियाँ`, and `ा` precedes `ता`/`ना`, so the
/// longer forms only win when the shorter ones do not apply.
pub const HINDI_SUFFIXES: &[&str] = &[
    "याँ", "ें", "ों", "ाएं", "ियाँ", "ीयाँ", "यी", "ी", "ा", "े", "ो", "ता", "ते", "ती", "ना",
    "ने",
];

/// Minimum number of characters a strip must leave behind.
pub const MIN_STEM_CHARS: usize = 2;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{}]+", word_class())).expect("token pattern is valid")
});

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[^{}]", word_class())).expect("filter pattern is valid")
});

static HINDI: LazyLock<SuffixStripper> = LazyLock::new(SuffixStripper::hindi);

/// Letters, numbers, `_`, and the whole Devanagari block, as a class body.
///
/// Regex `\w` is not used: it also admits combining marks, `Join_Control`
/// and connector punctuation outside Devanagari.
fn word_class() -> String {
    format!(
        r"\p{{L}}\p{{N}}_\x{{{:04X}}}-\x{{{:04X}}}",
        u32::from(*DEVANAGARI.start()),
        u32::from(*DEVANAGARI.end())
    )
}

/// Split text into maximal runs of word characters and Devanagari.
///
/// Everything else (punctuation, whitespace, symbols) separates tokens and is
/// dropped. Tokens borrow from `text` and come out left to right.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}

/// Lower-case `token` and drop every character that is neither a word
/// character nor Devanagari.
pub fn filter_word_chars(token: &str) -> String {
    NON_WORD_RE
        .replace_all(&token.to_lowercase(), "")
        .into_owned()
}

/// Normalize with the default Hindi suffix table. May return an empty string.
pub fn normalize(token: &str) -> String {
    HINDI.normalize(token)
}

/// Normalize a token stream with the default table, skipping empty results.
pub fn normalize_tokens<I>(tokens: I) -> impl Iterator<Item = String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    HINDI.normalize_tokens(tokens)
}

/// How a base form was derived from its token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StripSource<'a> {
    /// No suffix applied; the base is the filtered token.
    Unchanged,
    /// The named suffix was removed.
    Suffix(&'a str),
}

/// A base form together with its provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Normalized<'a> {
    pub base: String,
    pub source: StripSource<'a>,
}

#[derive(Clone, Debug)]
struct Suffix {
    text: String,
    chars: usize,
}

/// Ordered first-match suffix stripper.
#[derive(Clone, Debug)]
pub struct SuffixStripper {
    suffixes: Vec<Suffix>,
}

impl Default for SuffixStripper {
    fn default() -> Self {
        Self::hindi()
    }
}

impl SuffixStripper {
    /// Stripper over [`HINDI_SUFFIXES`].
    pub fn hindi() -> Self {
        Self::with_suffixes(HINDI_SUFFIXES.iter().copied())
    }

    /// Stripper over a caller-supplied table, tried in iteration order.
    ///
    /// Empty and repeated suffixes are dropped; neither could change which
    /// suffix matches first.
    pub fn with_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table: Vec<Suffix> = Vec::new();
        for suffix in suffixes {
            let text = suffix.into();
            if text.is_empty() || table.iter().any(|s| s.text == text) {
                continue;
            }
            let chars = text.chars().count();
            table.push(Suffix { text, chars });
        }
        Self { suffixes: table }
    }

    /// The table in match order.
    pub fn suffixes(&self) -> impl Iterator<Item = &str> + '_ {
        self.suffixes.iter().map(|s| s.text.as_str())
    }

    /// Filter and strip a token, returning only the base form.
    pub fn normalize(&self, token: &str) -> String {
        self.normalize_detailed(token).base
    }

    /// Filter and strip a token, keeping track of which suffix was removed.
    pub fn normalize_detailed(&self, token: &str) -> Normalized<'_> {
        self.strip(filter_word_chars(token))
    }

    /// Remove the first matching suffix from an already filtered word.
    pub fn strip(&self, word: String) -> Normalized<'_> {
        let len = word.chars().count();
        for suffix in &self.suffixes {
            if len >= suffix.chars + MIN_STEM_CHARS
                && let Some(stem) = word.strip_suffix(suffix.text.as_str())
            {
                return Normalized {
                    base: stem.to_string(),
                    source: StripSource::Suffix(suffix.text.as_str()),
                };
            }
        }
        Normalized {
            base: word,
            source: StripSource::Unchanged,
        }
    }

    /// Normalize every token, dropping those that filter down to nothing.
    pub fn normalize_tokens<I>(&self, tokens: I) -> impl Iterator<Item = String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(move |token| self.normalize(token.as_ref()))
            .filter(|base| !base.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        let tokens: Vec<&str> = tokenize("घर, और बगीचा!").collect();
        assert_eq!(tokens, vec!["घर", "और", "बगीचा"]);

        let mixed: Vec<&str> = tokenize("hello_world -- 42\tनमस्ते.").collect();
        assert_eq!(mixed, vec!["hello_world", "42", "नमस्ते"]);
    }

    #[test]
    fn joiners_outside_devanagari_split_tokens() {
        let zwj: Vec<&str> = tokenize("क्\u{200D}ष").collect();
        assert_eq!(zwj, vec!["क्", "ष"]);
        let zwnj: Vec<&str> = tokenize("क\u{200C}ष").collect();
        assert_eq!(zwnj, vec!["क", "ष"]);
    }

    #[test]
    fn latin_combining_marks_are_separators() {
        let tokens: Vec<&str> = tokenize("a\u{301}b").collect();
        assert_eq!(tokens, vec!["a", "b"]);
        let tokens: Vec<&str> = tokenize("x\u{203F}y").collect();
        assert_eq!(tokens, vec!["x", "y"]);
    }

    #[test]
    fn other_number_digits_are_word_chars() {
        let tokens: Vec<&str> = tokenize("x² ½").collect();
        assert_eq!(tokens, vec!["x²", "½"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" ,.!? ").count(), 0);
    }

    #[test]
    fn strips_plural_marker() {
        let stripper = SuffixStripper::hindi();
        let norm = stripper.normalize_detailed("लड़कों");
        assert_eq!(norm.base, "लड़क");
        assert_eq!(norm.source, StripSource::Suffix("ों"));
    }

    #[test]
    fn keeps_short_words_intact() {
        // Three chars with a two-char suffix would leave a single char.
        let stripper = SuffixStripper::hindi();
        let norm = stripper.normalize_detailed("कों");
        assert_eq!(norm.base, "कों");
        assert_eq!(norm.source, StripSource::Unchanged);
    }

    #[test]
    fn first_listed_suffix_wins_over_longest() {
        // "याँ" is listed before "ियाँ".
        assert_eq!(normalize("लड़कियाँ"), "लड़कि");
        // "ा" is listed before "ना".
        assert_eq!(normalize("सोचना"), "सोचन");
    }

    #[test]
    fn lowercases_and_filters() {
        assert_eq!(normalize("HELLO"), "hello");
        assert_eq!(normalize("घर!"), "घर");
        assert_eq!(normalize("2024"), "2024");
        assert_eq!(normalize("?!"), "");
    }

    #[test]
    fn filter_drops_joiners_and_foreign_marks() {
        assert_eq!(filter_word_chars("क\u{200C}ष"), "कष");
        assert_eq!(filter_word_chars("क्\u{200D}ष"), "क्ष");
        assert_eq!(filter_word_chars("E\u{301}"), "e");
        assert_eq!(normalize("क\u{200C}ष"), "कष");
    }

    #[test]
    fn custom_table_respects_order() {
        let stripper = SuffixStripper::with_suffixes(["s", "", "es", "s"]);
        assert_eq!(stripper.suffixes().collect::<Vec<_>>(), vec!["s", "es"]);
        assert_eq!(stripper.normalize("boxes"), "boxe");
        assert_eq!(stripper.normalize("is"), "is");
    }

    #[test]
    fn normalize_tokens_skips_empty_bases() {
        let bases: Vec<String> = normalize_tokens(["घर", "…", "लड़कों"]).collect();
        assert_eq!(bases, vec!["घर".to_string(), "लड़क".to_string()]);
    }

    #[test]
    fn default_table_has_no_duplicates() {
        let stripper = SuffixStripper::default();
        assert_eq!(stripper.suffixes().count(), HINDI_SUFFIXES.len());
    }
}
