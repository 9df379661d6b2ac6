//! Translation lookup.
//!
//! Widgets never format user-facing text themselves: they ask a
//! [`Translator`] to resolve a message key. [`Catalog`] is the bundled
//! implementation, backed by a JSON document laid out the way web translation
//! loaders expect (`assets/i18n/<lang>.json`), where nested objects flatten
//! to dotted keys:
//!
//! ```
//! use horizon_forms::i18n::{Catalog, Translator};
//!
//! let catalog = Catalog::from_json(r#"{
//!     "number-form-validation": "Add a digit",
//!     "form": { "title": "Sign up" }
//! }"#).unwrap();
//!
//! assert_eq!(catalog.lookup("number-form-validation"), "Add a digit");
//! assert_eq!(catalog.lookup("form.title"), "Sign up");
//! // Unknown keys resolve to themselves.
//! assert_eq!(catalog.lookup("missing-key"), "missing-key");
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use horizon_forms_core::logging::targets;
use horizon_forms_core::Signal;
use parking_lot::RwLock;
use serde_json::Value;

use crate::error::{Error, Result};

/// Message keys the widgets resolve.
pub mod keys {
    /// Prefix of the minimum length message; the widget appends the count.
    pub const MIN_LENGTH: &str = "minimal-required-length-form-validation";
    /// Missing uppercase letter.
    pub const UPPERCASE: &str = "uppercase-letter-form-validation";
    /// Missing lowercase letter.
    pub const LOWERCASE: &str = "lowercase-letter-form-validation";
    /// Missing digit.
    pub const NUMBER: &str = "number-form-validation";
    /// Missing special character.
    pub const SPECIAL_CHARACTER: &str = "special-character-form-validation";
    /// Malformed email address.
    pub const INVALID_EMAIL: &str = "please-enter-a-valid-email";
    /// Malformed phone number.
    pub const INVALID_PHONE: &str = "please-enter-a-valid-phone-number";
}

/// Resolves message keys to display strings.
pub trait Translator: Send + Sync {
    /// Resolve `key`. Implementations return the key itself when they have no
    /// translation for it.
    fn lookup(&self, key: &str) -> String;
}

impl<T: Translator + ?Sized> Translator for Arc<T> {
    fn lookup(&self, key: &str) -> String {
        (**self).lookup(key)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn lookup(&self, key: &str) -> String {
        (**self).lookup(key)
    }
}

/// A translator that echoes keys back, for hosts without a catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn lookup(&self, key: &str) -> String {
        key.to_string()
    }
}

/// An in-memory translation table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON document.
    ///
    /// String leaves become entries; nested objects contribute dotted keys.
    /// Non-string leaves are ignored.
    pub fn from_json(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        let mut catalog = Self::new();
        catalog.flatten_into("", &value);
        tracing::debug!(target: targets::I18N, entries = catalog.len(), "parsed translation catalog");
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&source)
    }

    /// Add or replace a translation.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Add a translation using builder pattern.
    pub fn with_entry(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Get a translation if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flatten_into(&mut self, prefix: &str, value: &Value) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    self.flatten_into(&path, child);
                }
            }
            Value::String(text) if !prefix.is_empty() => {
                self.entries.insert(prefix.to_string(), text.clone());
            }
            _ => {}
        }
    }
}

impl Translator for Catalog {
    fn lookup(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(target: targets::I18N, key, "missing translation");
                key.to_string()
            }
        }
    }
}

/// A set of per-language catalogs with a switchable current language.
///
/// Lookups resolve in the current language, then the default language, then
/// fall back to the key itself. The service is shared between widgets behind
/// an `Arc`; switching language takes effect on the next lookup.
///
/// ```
/// use std::sync::Arc;
/// use horizon_forms::i18n::{Catalog, TranslationService, Translator};
///
/// let service = Arc::new(TranslationService::new("en"));
/// service.add_catalog("en", Catalog::new().with_entry("greeting", "Hello"));
/// service.add_catalog("pl", Catalog::new().with_entry("greeting", "Cześć"));
///
/// assert_eq!(service.lookup("greeting"), "Hello");
/// assert!(service.use_language("pl"));
/// assert_eq!(service.lookup("greeting"), "Cześć");
/// ```
pub struct TranslationService {
    catalogs: RwLock<HashMap<String, Catalog>>,
    default_language: String,
    current_language: RwLock<String>,
    /// Emitted with the new language code after a successful switch.
    pub language_changed: Signal<String>,
}

impl TranslationService {
    /// Create a service whose default and current language is `default_language`.
    pub fn new(default_language: impl Into<String>) -> Self {
        let default_language = default_language.into();
        Self {
            catalogs: RwLock::new(HashMap::new()),
            current_language: RwLock::new(default_language.clone()),
            default_language,
            language_changed: Signal::new(),
        }
    }

    /// Load every `<lang>.json` file in `dir` as the catalog for `<lang>`.
    pub fn load_dir(dir: impl AsRef<Path>, default_language: impl Into<String>) -> Result<Self> {
        let dir = dir.as_ref();
        let service = Self::new(default_language);

        let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
        for entry in entries {
            let path = entry.map_err(|e| Error::io(dir, e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(language) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            service.add_catalog(language, Catalog::load(&path)?);
        }

        tracing::debug!(target: targets::I18N, languages = ?service.languages(), "loaded translations");
        Ok(service)
    }

    /// Add or replace the catalog for `language`.
    pub fn add_catalog(&self, language: impl Into<String>, catalog: Catalog) {
        self.catalogs.write().insert(language.into(), catalog);
    }

    /// Languages with a catalog, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.catalogs.read().keys().cloned().collect();
        languages.sort();
        languages
    }

    /// The fallback language.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// The language lookups resolve in first.
    pub fn current_language(&self) -> String {
        self.current_language.read().clone()
    }

    /// Switch to `language`. Returns `false` if it has no catalog.
    pub fn use_language(&self, language: &str) -> bool {
        if !self.catalogs.read().contains_key(language) {
            tracing::debug!(target: targets::I18N, language, "unknown language");
            return false;
        }
        *self.current_language.write() = language.to_string();
        tracing::debug!(target: targets::I18N, language, "language switched");
        self.language_changed.emit(language.to_string());
        true
    }
}

impl Translator for TranslationService {
    fn lookup(&self, key: &str) -> String {
        let catalogs = self.catalogs.read();
        let current = self.current_language.read();
        [current.as_str(), self.default_language.as_str()]
            .into_iter()
            .filter_map(|language| catalogs.get(language))
            .find_map(|catalog| catalog.get(key))
            .map(str::to_string)
            .unwrap_or_else(|| {
                tracing::debug!(target: targets::I18N, key, language = %current, "missing translation");
                key.to_string()
            })
    }
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("languages", &self.languages())
            .field("default_language", &self.default_language)
            .field("current_language", &*self.current_language.read())
            .finish()
    }
}

static_assertions::assert_impl_all!(TranslationService: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_catalog() {
        let catalog = Catalog::from_json(r#"{"a": "A", "b": "B"}"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("a"), "A");
        assert_eq!(catalog.get("c"), None);
    }

    #[test]
    fn test_nested_keys_flatten() {
        let catalog =
            Catalog::from_json(r#"{"form": {"errors": {"email": "Bad email"}}, "n": 3}"#).unwrap();
        assert_eq!(catalog.lookup("form.errors.email"), "Bad email");
        // Numbers are not translations.
        assert_eq!(catalog.get("n"), None);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_missing_key_echoes() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.lookup(keys::NUMBER), keys::NUMBER);
        assert_eq!(KeyTranslator.lookup("x"), "x");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Catalog::from_json("{not json"), Err(Error::Catalog(_))));
    }

    #[test]
    fn test_shared_translator() {
        let catalog: Arc<dyn Translator> =
            Arc::new(Catalog::new().with_entry(keys::UPPERCASE, "Add an uppercase letter"));
        assert_eq!(catalog.lookup(keys::UPPERCASE), "Add an uppercase letter");
    }

    #[test]
    fn test_bundled_english_catalog() {
        let catalog = Catalog::from_json(include_str!("../assets/i18n/en.json")).unwrap();
        for key in [
            keys::MIN_LENGTH,
            keys::UPPERCASE,
            keys::LOWERCASE,
            keys::NUMBER,
            keys::SPECIAL_CHARACTER,
            keys::INVALID_EMAIL,
            keys::INVALID_PHONE,
        ] {
            assert!(catalog.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_translation_service_fallbacks() {
        let service = TranslationService::new("en");
        service.add_catalog("en", Catalog::new().with_entry("a", "A").with_entry("b", "B"));
        service.add_catalog("pl", Catalog::new().with_entry("a", "Ą"));

        assert!(service.use_language("pl"));
        assert_eq!(service.current_language(), "pl");
        assert_eq!(service.lookup("a"), "Ą");
        // Falls back to the default language, then to the key.
        assert_eq!(service.lookup("b"), "B");
        assert_eq!(service.lookup("c"), "c");

        assert!(!service.use_language("de"));
        assert_eq!(service.current_language(), "pl");
        assert_eq!(service.languages(), vec!["en", "pl"]);
    }

    #[test]
    fn test_translation_service_language_signal() {
        let service = TranslationService::new("en");
        service.add_catalog("pl", Catalog::new());
        let switched = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let switched_clone = switched.clone();
        service
            .language_changed
            .connect(move |language| switched_clone.lock().push(language.clone()));

        service.use_language("pl");
        service.use_language("xx");
        assert_eq!(*switched.lock(), vec!["pl"]);
    }

    #[test]
    fn test_translation_service_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), include_str!("../assets/i18n/en.json")).unwrap();
        std::fs::write(dir.path().join("pl.json"), include_str!("../assets/i18n/pl.json")).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let service = TranslationService::load_dir(dir.path(), "en").unwrap();
        assert_eq!(service.languages(), vec!["en", "pl"]);
        let english = service.lookup(keys::INVALID_PHONE);
        service.use_language("pl");
        assert_ne!(service.lookup(keys::INVALID_PHONE), english);
        assert_ne!(service.lookup(keys::INVALID_PHONE), keys::INVALID_PHONE);
    }

    #[test]
    fn test_translation_service_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            TranslationService::load_dir(&missing, "en"),
            Err(Error::Io { .. })
        ));
    }
}
