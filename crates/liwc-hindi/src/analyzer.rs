use std::fmt;
use std::sync::Arc;

use liwc_lexicon::Resources;
use liwc_morph::{SuffixStripper, tokenize};
use liwc_types::CategoryCounts;
use tracing::trace;

use crate::transliterate::{IdentityTransliterator, Transliterator};

/// Counts from one pass plus how much of the text the lexicon covered.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Profile {
    /// Tokens produced by the tokenizer.
    pub tokens: usize,
    /// Tokens whose base form was found in the lexicon.
    pub matched: usize,
    pub counts: CategoryCounts,
}

/// Transliterate, tokenize, normalize, look up, and count.
///
/// Holds its resources behind `Arc`s, so clones are cheap and can be handed
/// to other threads; nothing is mutated after construction.
#[derive(Clone)]
pub struct Analyzer {
    resources: Arc<Resources>,
    stripper: Arc<SuffixStripper>,
    transliterator: Arc<dyn Transliterator>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("lexicon_entries", &self.resources.lexicon().len())
            .field("categories", &self.resources.categories().len())
            .field("transliterator", &self.transliterator)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Analyzer over `resources` with the Hindi suffix table and no transliteration.
    pub fn new(resources: Arc<Resources>) -> Self {
        Self {
            resources,
            stripper: Arc::new(SuffixStripper::hindi()),
            transliterator: Arc::new(IdentityTransliterator),
        }
    }

    pub fn with_transliterator(mut self, transliterator: Arc<dyn Transliterator>) -> Self {
        self.transliterator = transliterator;
        self
    }

    pub fn with_stripper(mut self, stripper: SuffixStripper) -> Self {
        self.stripper = Arc::new(stripper);
        self
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Category counts for `text`. Empty or unmatched text yields an empty map.
    pub fn analyze(&self, text: &str) -> CategoryCounts {
        self.profile(text).counts
    }

    /// Like [`analyze`](Self::analyze), also reporting token coverage.
    pub fn profile(&self, text: &str) -> Profile {
        let text = self.transliterator.transliterate(text);
        let lexicon = self.resources.lexicon();
        let mut profile = Profile::default();

        for token in tokenize(&text) {
            profile.tokens += 1;
            let norm = self.stripper.normalize_detailed(token);
            if norm.base.is_empty() {
                continue;
            }
            let Some(categories) = lexicon.categories_for(&norm.base) else {
                trace!(token, base = %norm.base, "lexicon miss");
                continue;
            };
            trace!(token, base = %norm.base, source = ?norm.source, "lexicon hit");
            profile.matched += 1;
            // Repeated labels within one entry each count.
            for category in categories {
                profile.counts.increment(category);
            }
        }

        profile
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use liwc_lexicon::{CategoryRegistry, Lexicon};

    use super::*;

    fn analyzer(entries: Vec<(&str, Vec<&str>)>) -> Analyzer {
        let resources = Resources::new(
            Lexicon::from_entries(entries),
            CategoryRegistry::default(),
        );
        Analyzer::new(Arc::new(resources))
    }

    #[derive(Debug)]
    struct Romanized;

    impl Transliterator for Romanized {
        fn transliterate<'a>(&self, text: &'a str) -> Cow<'a, str> {
            Cow::Owned(text.replace("ghar", "घर"))
        }
    }

    #[test]
    fn counts_each_category_of_a_hit() {
        let a = analyzer(vec![("घर", vec!["home", "family"])]);
        let counts = a.analyze("घर");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("home"), 1);
        assert_eq!(counts.get("family"), 1);
    }

    #[test]
    fn profile_reports_coverage() {
        let a = analyzer(vec![("घर", vec!["home"])]);
        let profile = a.profile("घर, और बगीचा! घर");
        assert_eq!(profile.tokens, 4);
        assert_eq!(profile.matched, 2);
        assert_eq!(profile.counts.get("home"), 2);
    }

    #[test]
    fn custom_transliterator_runs_first() {
        let a = analyzer(vec![("घर", vec!["home"])]);
        assert!(a.analyze("ghar").is_empty());

        let a = a.with_transliterator(Arc::new(Romanized));
        assert_eq!(a.analyze("ghar").get("home"), 1);
    }

    #[test]
    fn custom_stripper_replaces_hindi_table() {
        let a = analyzer(vec![("walk", vec!["motion"])])
            .with_stripper(SuffixStripper::with_suffixes(["ing"]));
        assert_eq!(a.analyze("Walking").get("motion"), 1);
    }
}
