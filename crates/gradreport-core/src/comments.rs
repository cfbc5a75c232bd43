//! Comment persistence
//!
//! Editable comment regions are saved to a flat key-value store under
//! `prefix + data-key`, last write wins. The browser binding is
//! `localStorage`; tests use [`MemoryStore`].

use std::collections::HashMap;

use crate::error::StorageError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct CommentStore<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> CommentStore<S> {
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    pub fn storage_key(&self, region: &str) -> String {
        format!("{}{}", self.prefix, region)
    }

    /// Saved text for a region. Empty values count as absent so the
    /// authored default stays in place.
    pub fn restore(&self, region: &str) -> Option<String> {
        self.store
            .get(&self.storage_key(region))
            .filter(|text| !text.is_empty())
    }

    pub fn save(&mut self, region: &str, text: &str) -> Result<(), StorageError> {
        let key = self.storage_key(region);
        self.store.set(&key, text)
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Dimmed hint text shown in an empty comment box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPlaceholder {
    text: String,
}

impl CommentPlaceholder {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether `content` is the placeholder rather than user text
    pub fn is_showing(&self, content: &str) -> bool {
        content == self.text
    }

    /// Text to display at setup, if the box is blank
    pub fn on_init(&self, content: &str) -> Option<&str> {
        content.trim().is_empty().then_some(self.text.as_str())
    }

    /// Clear the box on focus if it only shows the placeholder
    pub fn on_focus(&self, content: &str) -> Option<&'static str> {
        self.is_showing(content).then_some("")
    }

    /// Put the placeholder back on blur if the box was left blank
    pub fn on_blur(&self, content: &str) -> Option<&str> {
        self.on_init(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_restore() {
        let mut comments = CommentStore::new(MemoryStore::new(), "comment_");
        comments.save("q1", "abc").unwrap();

        // a fresh store over the same backing data, as after a reload
        let reloaded = CommentStore::new(comments.into_inner(), "comment_");
        assert_eq!(reloaded.restore("q1"), Some("abc".to_string()));
    }

    #[test]
    fn test_absent_or_empty_keeps_authored_text() {
        let mut comments = CommentStore::new(MemoryStore::new(), "comment_");
        assert_eq!(comments.restore("q2"), None);

        comments.save("q2", "").unwrap();
        assert_eq!(comments.restore("q2"), None);
    }

    #[test]
    fn test_last_write_wins_and_namespacing() {
        let mut comments = CommentStore::new(MemoryStore::new(), "comment_");
        comments.save("q1", "first").unwrap();
        comments.save("q1", "second").unwrap();
        assert_eq!(comments.restore("q1"), Some("second".to_string()));

        let store = comments.into_inner();
        assert_eq!(store.get("comment_q1"), Some("second".to_string()));
        assert_eq!(store.get("q1"), None);
    }

    #[test]
    fn test_placeholder_cycle() {
        let hint = CommentPlaceholder::new("Nhập nhận xét...");

        assert_eq!(hint.on_init("   "), Some("Nhập nhận xét..."));
        assert_eq!(hint.on_init("authored"), None);

        assert_eq!(hint.on_focus("Nhập nhận xét..."), Some(""));
        assert_eq!(hint.on_focus("user text"), None);

        assert_eq!(hint.on_blur(""), Some("Nhập nhận xét..."));
        assert_eq!(hint.on_blur("kept"), None);
    }
}
