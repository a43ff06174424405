// File: src/config.rs
use crate::core::pattern::Dialect;
use crate::core::types::Locale;
use crate::dictionary::{CachedWordProvider, FileWordProvider, WordListProvider};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

const APP_DIR: &str = "dictionary-regex";

/// User settings, read from `config.json` in the platform config directory.
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: Locale,
    pub dialect: Dialect,
    pub colorize: bool,
    /// Where `words.txt` / `hebrew_words.txt` live.
    pub dictionary_dir: PathBuf,
    /// Where parsed word-list snapshots are kept. `None` disables the cache.
    pub cache_dir: Option<PathBuf>,
    pub log_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            dialect: Dialect::Ecma,
            colorize: false,
            dictionary_dir: PathBuf::from("."),
            cache_dir: dirs::cache_dir().map(|dir| dir.join(APP_DIR)),
            log_path: PathBuf::from("target").join("dictregex.log"),
        }
    }
}

impl AppConfig {
    /// `<config_dir>/dictionary-regex/config.json`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
    }

    /// Defaults, then the config file, then environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// A missing file yields the defaults; a malformed one is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                info!(path = %path.display(), "loaded configuration");
                Ok(serde_json::from_str(&text)?)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Applies `DICTREGEX_LOCALE`, `DICTREGEX_DIALECT` and `DICTREGEX_DICT_DIR`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(locale) = var("DICTREGEX_LOCALE") {
            self.locale = Locale::from_code(&locale);
        }
        if let Some(dialect) = var("DICTREGEX_DIALECT") {
            self.dialect = dialect.parse()?;
        }
        if let Some(dir) = var("DICTREGEX_DICT_DIR") {
            self.dictionary_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// The word-list provider these settings describe.
    pub fn word_provider(&self) -> Box<dyn WordListProvider> {
        let files = FileWordProvider::new(&self.dictionary_dir);
        match &self.cache_dir {
            Some(cache_dir) => Box::new(CachedWordProvider::new(files, cache_dir)),
            None => Box::new(files),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
