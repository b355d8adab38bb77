//! Persisted per-project identifier.

use std::fs;
use std::io;
use std::path::PathBuf;
use uuid::Uuid;

/// Filename of the identifier file inside the cache directory.
pub const UUID_FILE: &str = "uuid.json";

/// Store for the persisted DevTools project identifier.
///
/// The identifier is the sole contents of `uuid.json` under the cache
/// directory: created once, reused for the lifetime of the cache directory,
/// regenerated only if the stored value fails format validation. The file is
/// re-read on each invocation; two near-simultaneous first requests may both
/// write it, which is benign since either value is valid.
#[derive(Clone, Debug)]
pub struct UuidStore {
    cache_dir: PathBuf,
}

impl UuidStore {
    /// Create a store bound to a cache directory.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Path of the identifier file.
    pub fn uuid_path(&self) -> PathBuf {
        self.cache_dir.join(UUID_FILE)
    }

    /// Return the persisted identifier, creating it if absent or invalid.
    ///
    /// An explicit value short-circuits everything: it is returned verbatim
    /// without validation and the filesystem is left untouched. A missing or
    /// corrupt file is self-healing; only mkdir/write failures surface as
    /// errors, since the plugin cannot function without a writable cache
    /// location.
    pub fn get_or_create(&self, explicit: Option<&str>) -> io::Result<String> {
        if let Some(uuid) = explicit {
            return Ok(uuid.to_string());
        }

        let path = self.uuid_path();
        if let Ok(contents) = fs::read_to_string(&path) {
            let stored = contents.trim();
            if is_canonical_uuid(stored) {
                return Ok(stored.to_string());
            }
        }

        fs::create_dir_all(&self.cache_dir)?;
        let uuid = Uuid::new_v4().to_string();
        fs::write(&path, &uuid)?;
        tracing::debug!(
            %uuid,
            path = %path.display(),
            "generated UUID for DevTools project settings"
        );
        Ok(uuid)
    }
}

/// Validate the canonical hyphenated UUID form (case-insensitive).
///
/// Simple, braced, and URN renditions are rejected so the on-disk value stays
/// in the one format DevTools is given.
fn is_canonical_uuid(value: &str) -> bool {
    Uuid::try_parse(value)
        .map(|parsed| parsed.to_string().eq_ignore_ascii_case(value))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn first_call_creates_second_call_reuses() {
        let temp = tempdir().unwrap();
        let store = UuidStore::new(temp.path());

        let first = store.get_or_create(None).unwrap();
        assert!(is_canonical_uuid(&first));
        assert_eq!(fs::read_to_string(store.uuid_path()).unwrap(), first);

        let second = store.get_or_create(None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_contents_are_regenerated() {
        let temp = tempdir().unwrap();
        let store = UuidStore::new(temp.path());
        fs::write(store.uuid_path(), "not-a-uuid").unwrap();

        let uuid = store.get_or_create(None).unwrap();
        assert!(is_canonical_uuid(&uuid));

        let stored = fs::read_to_string(store.uuid_path()).unwrap();
        assert_ne!(stored, "not-a-uuid");
        assert_eq!(stored, uuid);
    }

    #[test]
    fn simple_form_counts_as_invalid() {
        let temp = tempdir().unwrap();
        let store = UuidStore::new(temp.path());
        // Parses as a UUID but is not the canonical hyphenated rendition.
        fs::write(store.uuid_path(), "67e5504410b1426f9247bb680e5fe0c8").unwrap();

        let uuid = store.get_or_create(None).unwrap();
        assert!(is_canonical_uuid(&uuid));
        assert_ne!(uuid, "67e5504410b1426f9247bb680e5fe0c8");
    }

    #[test]
    fn stored_value_is_trimmed() {
        let temp = tempdir().unwrap();
        let store = UuidStore::new(temp.path());
        fs::write(
            store.uuid_path(),
            "  67e55044-10b1-426f-9247-bb680e5fe0c8\n",
        )
        .unwrap();

        let uuid = store.get_or_create(None).unwrap();
        assert_eq!(uuid, "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn explicit_value_leaves_filesystem_untouched() {
        let temp = tempdir().unwrap();
        let cache_dir = temp.path().join("never-created");
        let store = UuidStore::new(&cache_dir);

        let uuid = store.get_or_create(Some("anything-goes")).unwrap();
        assert_eq!(uuid, "anything-goes");
        assert!(!cache_dir.exists());
    }

    #[test]
    fn cache_dir_is_created_recursively() {
        let temp = tempdir().unwrap();
        let cache_dir = temp.path().join("a").join("b").join("c");
        let store = UuidStore::new(&cache_dir);

        let uuid = store.get_or_create(None).unwrap();
        assert!(is_canonical_uuid(&uuid));
        assert!(store.uuid_path().exists());
    }

    #[test]
    fn uppercase_canonical_form_is_accepted() {
        let temp = tempdir().unwrap();
        let store = UuidStore::new(temp.path());
        fs::write(store.uuid_path(), "67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();

        let uuid = store.get_or_create(None).unwrap();
        assert_eq!(uuid, "67E55044-10B1-426F-9247-BB680E5FE0C8");
    }
}
