use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use liwc_lexicon::{CATEGORIES_FILE, LEXICON_FILE, Resources};
use tracing::info;

const DEFAULT_DATA_DIR: &str = "data";
const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Where the lexicon and category registry live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceConfig {
    pub lexicon_path: PathBuf,
    pub categories_path: PathBuf,
}

impl ResourceConfig {
    /// Resolve from `LIWC_*` environment variables.
    pub fn from_env() -> Self {
        Self::resolve(|key| env::var(key).ok())
    }

    /// Resolve paths through `lookup`, falling back to the default data dir.
    ///
    /// `LIWC_LEXICON` / `LIWC_CATEGORIES` name files directly and take
    /// precedence over anything derived from `LIWC_DATA_DIR`.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("LIWC_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let lexicon_path = lookup("LIWC_LEXICON")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(LEXICON_FILE));
        let categories_path = lookup("LIWC_CATEGORIES")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(CATEGORIES_FILE));

        Self {
            lexicon_path,
            categories_path,
        }
    }

    /// Load both resources, logging sizes and timing.
    pub fn load(&self) -> Result<Arc<Resources>> {
        info!("using lexicon at {}", self.lexicon_path.display());
        info!("using categories at {}", self.categories_path.display());

        let start = Instant::now();
        let resources = Resources::load(&self.lexicon_path, &self.categories_path)?;
        info!(
            "loaded {} lexicon entries and {} categories in {} ms",
            resources.lexicon().len(),
            resources.categories().len(),
            start.elapsed().as_millis()
        );
        Ok(Arc::new(resources))
    }
}

fn default_data_dir() -> PathBuf {
    let local = PathBuf::from(DEFAULT_DATA_DIR);
    if local.join(LEXICON_FILE).exists() {
        return local;
    }
    Path::new(BUNDLED_DATA_DIR).to_path_buf()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn data_dir_feeds_both_paths() {
        let cfg = ResourceConfig::resolve(lookup(&[("LIWC_DATA_DIR", "/srv/liwc")]));
        assert_eq!(cfg.lexicon_path, PathBuf::from("/srv/liwc/lexicon.json"));
        assert_eq!(cfg.categories_path, PathBuf::from("/srv/liwc/categories.json"));
    }

    #[test]
    fn explicit_files_beat_data_dir() {
        let vars = lookup(&[
            ("LIWC_DATA_DIR", "/srv/liwc"),
            ("LIWC_LEXICON", "/tmp/lex.json"),
        ]);
        let cfg = ResourceConfig::resolve(vars);
        assert_eq!(cfg.lexicon_path, PathBuf::from("/tmp/lex.json"));
        assert_eq!(cfg.categories_path, PathBuf::from("/srv/liwc/categories.json"));
    }

    #[test]
    fn unset_environment_uses_a_data_dir_with_a_lexicon() {
        let cfg = ResourceConfig::resolve(|_| None);
        assert_eq!(cfg.lexicon_path.file_name().unwrap(), LEXICON_FILE);
        assert!(cfg.lexicon_path.exists());
    }

    #[test]
    fn load_reports_the_missing_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let dir = tempdir.path().display().to_string();
        let cfg = ResourceConfig::resolve(lookup(&[("LIWC_DATA_DIR", dir.as_str())]));
        let err = cfg.load().unwrap_err();
        assert!(format!("{err:#}").contains(LEXICON_FILE));
    }
}
