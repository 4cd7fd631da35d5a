//! Load the word-to-category lexicon and the category registry.
//!
//! Both resources are JSON objects mapping a string key to an array of
//! strings:
//!
//! ```json
//! { "घर": ["home", "family"], "खुश": ["affect", "posemo"] }
//! ```
//!
//! The lexicon maps normalized base forms to the category labels they count
//! towards; the registry maps a category label to its sub-categories. Both
//! are loaded once and are read-only afterwards, so a [`Resources`] value can
//! be wrapped in an `Arc` and shared across threads without locking.
//!
//! Any failure to open, read, or parse a file is returned as an error; there
//! is no partially loaded state.
//!
//! # Example
//! ```no_run
//! use liwc_lexicon::Resources;
//!
//! # fn main() -> anyhow::Result<()> {
//! let res = Resources::load_dir("/path/to/data")?;
//! if let Some(categories) = res.lexicon().categories_for("घर") {
//!     println!("घर -> {categories:?}");
//! }
//! println!("affect contains {:?}", res.categories().subcategories("affect"));
//! # Ok(()) }
//! ```

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use liwc_types::CategoryCounts;

/// File name of the lexicon inside a data directory.
pub const LEXICON_FILE: &str = "lexicon.json";
/// File name of the category registry inside a data directory.
pub const CATEGORIES_FILE: &str = "categories.json";

type Entries = HashMap<String, Vec<String>>;

/// Base form -> ordered category labels.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    entries: Entries,
}

impl Lexicon {
    /// Load a lexicon JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = read_file(path)?;
        let entries = parse_entries(&bytes)
            .with_context(|| format!("parse lexicon {}", path.display()))?;
        Ok(Self { entries })
    }

    /// Parse a lexicon from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            entries: parse_entries(bytes)?,
        })
    }

    /// Build a lexicon from in-memory entries. Later duplicates replace earlier ones.
    pub fn from_entries<I, K, C, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            entries: collect_entries(entries),
        }
    }

    /// Category labels for an exact base form, in file order.
    pub fn categories_for(&self, base: &str) -> Option<&[String]> {
        self.entries.get(base).map(Vec::as_slice)
    }

    pub fn contains(&self, base: &str) -> bool {
        self.entries.contains_key(base)
    }

    /// Number of base forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(base form, labels)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(base, labels)| (base.as_str(), labels.as_slice()))
    }
}

/// Category label -> sub-category labels, with the reverse edges precomputed.
///
/// The registry is descriptive metadata. Counting never consults it; callers
/// opt into hierarchical totals with [`rollup`](Self::rollup).
#[derive(Clone, Debug, Default)]
pub struct CategoryRegistry {
    children: BTreeMap<String, Vec<String>>,
    parents: HashMap<String, Vec<String>>,
}

impl CategoryRegistry {
    /// Load a category registry JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = read_file(path)?;
        let entries = parse_entries(&bytes)
            .with_context(|| format!("parse categories {}", path.display()))?;
        Ok(Self::from_children(entries.into_iter().collect()))
    }

    /// Parse a registry from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_children(
            parse_entries(bytes)?.into_iter().collect(),
        ))
    }

    /// Build a registry from in-memory `(category, sub-categories)` pairs.
    pub fn from_entries<I, K, C, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self::from_children(collect_entries(entries).into_iter().collect())
    }

    fn from_children(children: BTreeMap<String, Vec<String>>) -> Self {
        let mut parents: HashMap<String, Vec<String>> = HashMap::new();
        for (parent, subs) in &children {
            for sub in subs {
                let entry = parents.entry(sub.clone()).or_default();
                if !entry.contains(parent) {
                    entry.push(parent.clone());
                }
            }
        }
        Self { children, parents }
    }

    /// Direct sub-categories of `label`, or an empty slice.
    pub fn subcategories(&self, label: &str) -> &[String] {
        self.children.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories that list `label` as a direct sub-category.
    pub fn parents_of(&self, label: &str) -> &[String] {
        self.parents.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every transitive ancestor of `label`, nearest first, each listed once.
    ///
    /// Cycles in the registry are tolerated; `label` itself is never returned.
    pub fn ancestors(&self, label: &str) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::from([label]);
        let mut queue: VecDeque<&str> = VecDeque::from([label]);
        let mut out = Vec::new();
        while let Some(current) = queue.pop_front() {
            for parent in self.parents_of(current) {
                if seen.insert(parent.as_str()) {
                    out.push(parent.as_str());
                    queue.push_back(parent.as_str());
                }
            }
        }
        out
    }

    /// Fold counts upward: each ancestor gains the count of every descendant hit.
    ///
    /// Returns a new map; the input is left untouched, so plain counting stays
    /// non-hierarchical unless a caller asks for this explicitly.
    pub fn rollup(&self, counts: &CategoryCounts) -> CategoryCounts {
        let mut out = counts.clone();
        for (label, n) in counts.iter() {
            for ancestor in self.ancestors(label) {
                out.add(ancestor, n);
            }
        }
        out
    }

    /// Top-level keys, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.children.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Borrow the registry as it appeared in the source file, sorted by key.
    pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.children
    }
}

/// Lexicon and category registry loaded together.
#[derive(Clone, Debug, Default)]
pub struct Resources {
    lexicon: Lexicon,
    categories: CategoryRegistry,
}

impl Resources {
    pub fn new(lexicon: Lexicon, categories: CategoryRegistry) -> Self {
        Self {
            lexicon,
            categories,
        }
    }

    /// Load both resource files. Either one failing fails the whole load.
    pub fn load(
        lexicon_path: impl AsRef<Path>,
        categories_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let lexicon = Lexicon::load(lexicon_path)?;
        let categories = CategoryRegistry::load(categories_path)?;
        Ok(Self::new(lexicon, categories))
    }

    /// Load `lexicon.json` and `categories.json` from one directory.
    pub fn load_dir(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        for name in [LEXICON_FILE, CATEGORIES_FILE] {
            let path = dir.join(name);
            if !path.exists() {
                anyhow::bail!("missing required resource file: {}", path.display());
            }
        }
        Self::load(dir.join(LEXICON_FILE), dir.join(CATEGORIES_FILE))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn parse_entries(bytes: &[u8]) -> Result<Entries> {
    let bytes = strip_bom(bytes);
    let entries: Entries =
        serde_json::from_slice(bytes).context("expected a JSON object of string arrays")?;
    Ok(entries)
}

fn collect_entries<I, K, C, L>(entries: I) -> Entries
where
    I: IntoIterator<Item = (K, C)>,
    K: Into<String>,
    C: IntoIterator<Item = L>,
    L: Into<String>,
{
    entries
        .into_iter()
        .map(|(key, labels)| (key.into(), labels.into_iter().map(Into::into).collect()))
        .collect()
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}
