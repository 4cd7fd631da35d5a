use std::borrow::Cow;
use std::fmt;

/// Converts input text into the script the lexicon is keyed in.
///
/// Implementations must be total: every input maps to some output string and
/// nothing is allowed to fail. Returning `Cow::Borrowed` lets pass-through
/// implementations avoid a copy.
pub trait Transliterator: fmt::Debug + Send + Sync {
    fn transliterate<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Passes text through untouched.
///
/// Romanized Hindi is therefore counted only where the lexicon happens to
/// carry Latin-script keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityTransliterator;

impl Transliterator for IdentityTransliterator {
    fn transliterate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}
