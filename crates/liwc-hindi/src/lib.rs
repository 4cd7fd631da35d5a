//! Lexicon-based psycholinguistic word counting for Hindi text.
//!
//! Text flows through a [`Transliterator`], is split by
//! [`liwc_morph::tokenize`], reduced to base forms by a
//! [`liwc_morph::SuffixStripper`], and looked up in the lexicon carried by
//! [`liwc_lexicon::Resources`]. Every category listed for a matching base form
//! is counted once per listing.
//!
//! ```no_run
//! use liwc_hindi::{Analyzer, ResourceConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let resources = ResourceConfig::from_env().load()?;
//! let analyzer = Analyzer::new(resources);
//! for (category, n) in analyzer.analyze("मेरा घर और मेरे दोस्त").iter() {
//!     println!("{category}: {n}");
//! }
//! # Ok(()) }
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod logging;
pub mod transliterate;

pub use analyzer::{Analyzer, Profile};
pub use config::ResourceConfig;
pub use transliterate::{IdentityTransliterator, Transliterator};
