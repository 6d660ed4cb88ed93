use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AnalysisError, Result};
use crate::models::Category;

/// Polarity bounds for lexicon entries
pub const MIN_POLARITY: i32 = -3;
pub const MAX_POLARITY: i32 = 3;

/// Sentiment weight and protocol category for one normalized word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
pub struct LexiconEntry {
    pub polarity: i32,
    pub category: Category,
}

/// Wire shape of a lexicon value. Legacy files stored a bare polarity
/// integer; those upgrade to category OTHER on load.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Full { polarity: i32, category: Category },
    Legacy(i32),
}

impl From<RawEntry> for LexiconEntry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Full { polarity, category } => Self { polarity, category },
            RawEntry::Legacy(polarity) => Self {
                polarity,
                category: Category::Other,
            },
        }
    }
}

impl LexiconEntry {
    pub fn new(polarity: i32, category: Category) -> Result<Self> {
        if !(MIN_POLARITY..=MAX_POLARITY).contains(&polarity) {
            return Err(AnalysisError::InvalidArgument(format!(
                "polarity {} outside [{}, {}]",
                polarity, MIN_POLARITY, MAX_POLARITY
            )));
        }
        Ok(Self { polarity, category })
    }
}

/// Persistent word -> (polarity, category) mapping
///
/// The only stateful component of the pipeline. Mutation goes through
/// `merge`, which rewrites the whole file atomically; a half-written
/// lexicon can never be observed on disk.
#[derive(Debug)]
pub struct LexiconStore {
    path: PathBuf,
    entries: BTreeMap<String, LexiconEntry>,
}

impl LexiconStore {
    /// Load the lexicon at `path`, creating an empty one if absent
    ///
    /// Malformed content surfaces as `CorruptLexicon`; a damaged store is
    /// never silently replaced with an empty map.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Lexicon not found, creating empty store at {:?}", path);
            let store = Self {
                path: path.to_path_buf(),
                entries: BTreeMap::new(),
            };
            store.save()?;
            return Ok(store);
        }

        let content = std::fs::read_to_string(path)?;
        let entries: BTreeMap<String, LexiconEntry> = serde_json::from_str(&content)
            .map_err(|source| AnalysisError::CorruptLexicon {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Loaded {} lexicon entries from {:?}", entries.len(), path);
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// An in-memory store that is never persisted (tests, dry runs)
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            entries: BTreeMap::new(),
        }
    }

    /// Exact lookup on the normalized (lowercased) form
    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Upsert a batch of entries, then persist the whole map atomically
    ///
    /// Rejects out-of-range polarities before touching any state, so a bad
    /// batch leaves both memory and disk untouched.
    pub fn merge<I>(&mut self, updates: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, LexiconEntry)>,
    {
        let updates: Vec<(String, LexiconEntry)> = updates.into_iter().collect();
        for (word, entry) in &updates {
            if !(MIN_POLARITY..=MAX_POLARITY).contains(&entry.polarity) {
                return Err(AnalysisError::InvalidArgument(format!(
                    "polarity {} for {:?} outside [{}, {}]",
                    entry.polarity, word, MIN_POLARITY, MAX_POLARITY
                )));
            }
        }

        let count = updates.len();
        for (word, entry) in updates {
            self.entries.insert(word.to_lowercase(), entry);
        }
        self.save()?;
        info!("Merged {} entries into lexicon ({} total)", count, self.entries.len());
        Ok(())
    }

    /// Write the full map to a temp file in the target directory, then
    /// rename over the destination
    fn save(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let persist = || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
            serde_json::to_writer_pretty(&mut tmp, &self.entries)
                .map_err(std::io::Error::other)?;
            tmp.write_all(b"\n")?;
            tmp.persist(&self.path).map_err(|e| e.error)?;
            Ok(())
        };

        persist().map_err(|source| AnalysisError::PersistenceFailure {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_missing_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");

        let store = LexiconStore::load(&path).unwrap();

        assert!(store.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_legacy_bare_integer_entries_upgrade() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, r#"{"excelente": 2, "pesimo": {"polarity": -3, "category": "OTHER"}}"#)
            .unwrap();

        let store = LexiconStore::load(&path).unwrap();

        let legacy = store.lookup("excelente").unwrap();
        assert_eq!(legacy.polarity, 2);
        assert_eq!(legacy.category, Category::Other);
        assert_eq!(store.lookup("pesimo").unwrap().polarity, -3);
    }

    #[test]
    fn test_corrupt_lexicon_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, "not json at all {{{").unwrap();

        let err = LexiconStore::load(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::CorruptLexicon { .. }));
    }

    #[test]
    fn test_merge_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");

        let mut store = LexiconStore::load(&path).unwrap();
        store
            .merge(vec![(
                "gracias".to_string(),
                LexiconEntry::new(1, Category::Farewell).unwrap(),
            )])
            .unwrap();

        let reloaded = LexiconStore::load(&path).unwrap();
        let entry = reloaded.lookup("gracias").unwrap();
        assert_eq!(entry.polarity, 1);
        assert_eq!(entry.category, Category::Farewell);
    }

    #[test]
    fn test_merge_overwrites_existing_entry() {
        let mut store = LexiconStore::in_memory();
        store
            .merge(vec![(
                "bueno".to_string(),
                LexiconEntry::new(1, Category::Other).unwrap(),
            )])
            .unwrap();
        store
            .merge(vec![(
                "bueno".to_string(),
                LexiconEntry::new(3, Category::Greeting).unwrap(),
            )])
            .unwrap();

        let entry = store.lookup("bueno").unwrap();
        assert_eq!(entry.polarity, 3);
        assert_eq!(entry.category, Category::Greeting);
    }

    #[test]
    fn test_merge_rejects_out_of_range_polarity() {
        let mut store = LexiconStore::in_memory();
        let err = store
            .merge(vec![(
                "malo".to_string(),
                LexiconEntry {
                    polarity: -7,
                    category: Category::Other,
                },
            )])
            .unwrap_err();

        assert!(matches!(err, AnalysisError::InvalidArgument(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_lookup_normalizes_case() {
        let mut store = LexiconStore::in_memory();
        store
            .merge(vec![(
                "Hola".to_string(),
                LexiconEntry::new(1, Category::Greeting).unwrap(),
            )])
            .unwrap();

        assert!(store.lookup("HOLA").is_some());
        assert!(store.lookup("hola").is_some());
    }
}
