//! Loading word lists from disk and merging them into one vocabulary.

use derive_more::{Display, Error};
use kelime_rules::Dictionary;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Extension of the raw word-list files a vocabulary directory holds.
pub const LIST_EXTENSION: &str = "list";

/// Where a dictionary is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// A JSON array of strings.
    JsonArray(PathBuf),
    /// One word per line.
    ListFile(PathBuf),
    /// Every `*.list` file in a directory.
    Directory(PathBuf),
}

impl DictionarySource {
    /// Picks the source kind from what is at `path`.
    ///
    /// Directories are scanned, `.json` files are parsed as arrays, and
    /// anything else is read as a line list.
    pub fn detect(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() {
            DictionarySource::Directory(path)
        } else if path.extension().and_then(|s| s.to_str()) == Some("json") {
            DictionarySource::JsonArray(path)
        } else {
            DictionarySource::ListFile(path)
        }
    }

    /// The path this source reads.
    pub fn path(&self) -> &Path {
        match self {
            DictionarySource::JsonArray(path)
            | DictionarySource::ListFile(path)
            | DictionarySource::Directory(path) => path,
        }
    }

    /// Reads every word the source holds, trimmed, without blanks, sorted
    /// and deduplicated.
    #[instrument(skip(self), fields(path = %self.path().display()))]
    pub fn read_words(&self) -> Result<BTreeSet<String>, DictionaryError> {
        match self {
            DictionarySource::JsonArray(path) => read_json_words(path),
            DictionarySource::ListFile(path) => read_list_words(path),
            DictionarySource::Directory(path) => merge_list_directory(path),
        }
    }

    /// Loads the source into a [`Dictionary`].
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if the source cannot be read or parsed,
    /// or holds no words.
    #[instrument(skip(self), fields(path = %self.path().display()))]
    pub fn load(&self) -> Result<Dictionary, DictionaryError> {
        let words = self.read_words()?;
        if words.is_empty() {
            return Err(DictionaryError::new(format!(
                "No words loaded from {}",
                self.path().display()
            )));
        }

        let dictionary = Dictionary::from_words(&words);
        info!(words = dictionary.len(), "Dictionary loaded");
        Ok(dictionary)
    }
}

/// Detects the source kind at `path` and loads it.
pub fn load_dictionary(path: impl Into<PathBuf>) -> Result<Dictionary, DictionaryError> {
    DictionarySource::detect(path).load()
}

fn clean<I: IntoIterator<Item = String>>(words: I) -> BTreeSet<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

fn read_text(path: &Path) -> Result<String, DictionaryError> {
    std::fs::read_to_string(path)
        .map_err(|e| DictionaryError::new(format!("Failed to read {}: {}", path.display(), e)))
}

/// Reads a JSON array of strings.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn read_json_words(path: &Path) -> Result<BTreeSet<String>, DictionaryError> {
    let content = read_text(path)?;
    let words: Vec<String> = serde_json::from_str(&content).map_err(|e| {
        DictionaryError::new(format!("Failed to parse word array in {}: {}", path.display(), e))
    })?;
    debug!(entries = words.len(), "Read JSON word array");
    Ok(clean(words))
}

/// Reads a file holding one word per line.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn read_list_words(path: &Path) -> Result<BTreeSet<String>, DictionaryError> {
    let content = read_text(path)?;
    let words = clean(content.lines().map(str::to_string));
    debug!(words = words.len(), "Read word list");
    Ok(words)
}

/// Merges every `*.list` file in `dir`.
///
/// Other entries are skipped. A `.list` file that cannot be read fails the
/// whole merge.
///
/// # Errors
///
/// Returns [`DictionaryError`] if the directory is missing, is not a
/// directory, or one of its list files cannot be read.
#[instrument(skip(dir), fields(path = %dir.display()))]
pub fn merge_list_directory(dir: &Path) -> Result<BTreeSet<String>, DictionaryError> {
    if !dir.is_dir() {
        return Err(DictionaryError::new(format!(
            "Vocabulary directory not found: {}",
            dir.display()
        )));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| {
        DictionaryError::new(format!("Failed to read directory {}: {}", dir.display(), e))
    })?;

    let mut words = BTreeSet::new();
    let mut files = 0usize;

    for entry_result in entries {
        let entry = entry_result
            .map_err(|e| DictionaryError::new(format!("Failed to read directory entry: {}", e)))?;
        let entry_path = entry.path();

        if !entry_path.is_file() {
            debug!(path = %entry_path.display(), "Skipping non-file entry");
            continue;
        }

        if entry_path.extension().and_then(|s| s.to_str()) != Some(LIST_EXTENSION) {
            debug!(path = %entry_path.display(), "Skipping non-list file");
            continue;
        }

        let found = read_list_words(&entry_path)?;
        debug!(path = %entry_path.display(), words = found.len(), "Merged list file");
        words.extend(found);
        files += 1;
    }

    info!(files, words = words.len(), "Vocabulary merged");
    Ok(words)
}

/// Writes `words` as a pretty-printed JSON array, in iteration order.
#[instrument(skip(words, path), fields(path = %path.display(), words = words.len()))]
pub fn write_json_words(words: &BTreeSet<String>, path: &Path) -> Result<(), DictionaryError> {
    let json = serde_json::to_string_pretty(words)
        .map_err(|e| DictionaryError::new(format!("Failed to serialize vocabulary: {}", e)))?;
    std::fs::write(path, json + "\n")
        .map_err(|e| DictionaryError::new(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Vocabulary written");
    Ok(())
}

/// Dictionary loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Dictionary error: {} at {}:{}", message, file, line)]
pub struct DictionaryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DictionaryError {
    /// Creates a new dictionary error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
