// File: src/dictionary.rs
use crate::core::types::{Locale, Word};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Supplies the ordered word list for a locale.
pub trait WordListProvider {
    fn load(&self, locale: Locale) -> Result<Vec<Word>>;
}

/// Splits a word file into entries: one per line, trailing `\r` stripped,
/// order and duplicates kept. The empty tail after a final newline is dropped.
pub fn split_words(text: &str) -> Vec<Word> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
        .into_iter()
        .map(|line| Word::from(line.trim_end_matches('\r')))
        .collect()
}

/// Reads `<dir>/<locale word file>` from disk.
#[derive(Debug, Clone)]
pub struct FileWordProvider {
    dir: PathBuf,
}

impl FileWordProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, locale: Locale) -> PathBuf {
        self.dir.join(locale.word_file())
    }
}

impl WordListProvider for FileWordProvider {
    fn load(&self, locale: Locale) -> Result<Vec<Word>> {
        let path = self.path_for(locale);
        let text = fs::read_to_string(&path)?;
        let words = split_words(&text);
        info!(locale = locale.code(), path = %path.display(), words = words.len(), "loaded word list");
        Ok(words)
    }
}

/// The serializable snapshot of one parsed word list.
/// `source_len`/`source_mtime` identify the file it was parsed from.
#[derive(Clone, Serialize, Deserialize)]
struct WordListSnapshot {
    locale: Locale,
    source_len: u64,
    source_mtime: u128,
    words: Vec<Word>,
}

/// Wraps a [`FileWordProvider`] with a per-locale bincode snapshot, so large
/// dictionaries are parsed once and reloaded from the cache afterwards.
pub struct CachedWordProvider {
    inner: FileWordProvider,
    cache_dir: PathBuf,
}

impl CachedWordProvider {
    pub fn new(inner: FileWordProvider, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_path(&self, locale: Locale) -> PathBuf {
        self.cache_dir.join(format!("{}.words.bin", locale.code()))
    }

    fn read_snapshot(path: &Path) -> Result<WordListSnapshot> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(bincode::deserialize_from(reader)?)
    }

    fn write_snapshot(path: &Path, snapshot: &WordListSnapshot) -> Result<()> {
        let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, snapshot)?;
        writer.flush()?;
        drop(writer);

        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// `(len, mtime nanoseconds)` of a file.
fn source_stamp(path: &Path) -> Result<(u64, u128)> {
    let meta = fs::metadata(path)?;
    let mtime = meta
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    Ok((meta.len(), mtime))
}

impl WordListProvider for CachedWordProvider {
    fn load(&self, locale: Locale) -> Result<Vec<Word>> {
        let source = self.inner.path_for(locale);
        let (source_len, source_mtime) = source_stamp(&source)?;
        let cache = self.cache_path(locale);

        match Self::read_snapshot(&cache) {
            Ok(snapshot)
                if snapshot.locale == locale
                    && snapshot.source_len == source_len
                    && snapshot.source_mtime == source_mtime =>
            {
                info!(locale = locale.code(), words = snapshot.words.len(), "word list served from cache");
                return Ok(snapshot.words);
            }
            Ok(_) => info!(locale = locale.code(), "word list cache is stale"),
            Err(_) => {}
        }

        let words = self.inner.load(locale)?;
        let snapshot = WordListSnapshot {
            locale,
            source_len,
            source_mtime,
            words,
        };
        // Write failures only cost a reparse next time.
        if let Err(e) = Self::write_snapshot(&cache, &snapshot) {
            warn!(path = %cache.display(), error = %e, "could not write word list cache");
        }
        Ok(snapshot.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn strs(words: &[Word]) -> Vec<&str> {
        words.iter().map(|w| &**w).collect()
    }

    #[test]
    fn split_strips_carriage_returns() {
        let words = split_words("alpha\r\nbeta\r\ngamma");
        assert_eq!(strs(&words), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn split_keeps_duplicates_and_order() {
        let words = split_words("b\na\nb\n");
        assert_eq!(strs(&words), ["b", "a", "b"]);
    }

    #[test]
    fn split_empty_text() {
        assert!(split_words("").is_empty());
    }

    #[test]
    fn file_provider_reads_locale_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hebrew_words.txt"), "שלום\nספר\n").unwrap();
        let provider = FileWordProvider::new(dir.path());
        let words = provider.load(Locale::He).unwrap();
        assert_eq!(strs(&words), ["שלום", "ספר"]);
        assert!(provider.load(Locale::En).is_err());
    }

    #[test]
    fn cached_provider_writes_and_reuses_snapshot() {
        let dict = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();
        fs::write(dict.path().join("words.txt"), "one\ntwo\n").unwrap();

        let provider = CachedWordProvider::new(FileWordProvider::new(dict.path()), cache.path());
        assert_eq!(strs(&provider.load(Locale::En).unwrap()), ["one", "two"]);
        assert!(provider.cache_path(Locale::En).exists());

        // Served from the snapshot on the second load.
        assert_eq!(strs(&provider.load(Locale::En).unwrap()), ["one", "two"]);
    }

    #[test]
    fn cached_provider_ignores_corrupt_snapshot() {
        let dict = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();
        fs::write(dict.path().join("words.txt"), "one\n").unwrap();

        let provider = CachedWordProvider::new(FileWordProvider::new(dict.path()), cache.path());
        fs::write(provider.cache_path(Locale::En), b"not bincode").unwrap();
        assert_eq!(strs(&provider.load(Locale::En).unwrap()), ["one"]);
    }

    #[test]
    fn cached_provider_refreshes_when_source_changes() {
        let dict = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();
        let source = dict.path().join("words.txt");
        fs::write(&source, "one\n").unwrap();

        let provider = CachedWordProvider::new(FileWordProvider::new(dict.path()), cache.path());
        provider.load(Locale::En).unwrap();

        // Different length invalidates the snapshot even within the same second.
        fs::write(&source, "one\ntwo\nthree\n").unwrap();
        assert_eq!(strs(&provider.load(Locale::En).unwrap()), ["one", "two", "three"]);
    }

    #[test]
    fn cached_provider_sees_same_length_edits() {
        let dict = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();
        let source = dict.path().join("words.txt");
        fs::write(&source, "one
").unwrap();
        let first_mtime = fs::metadata(&source).unwrap().modified().unwrap();

        let provider = CachedWordProvider::new(FileWordProvider::new(dict.path()), cache.path());
        provider.load(Locale::En).unwrap();

        // Same length, mtime a millisecond later: still inside the same second.
        fs::write(&source, "two
").unwrap();
        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(first_mtime + Duration::from_millis(1))
            .unwrap();
        assert_eq!(strs(&provider.load(Locale::En).unwrap()), ["two"]);
    }
}
