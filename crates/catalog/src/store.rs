//! Profile storage: where preferences and likes come from.
//!
//! Signed-in users keep their profile in the remote database and anonymous
//! users keep it on the device. Both sit behind [`ProfileStore`], so whoever
//! resolves the session hands the feed code an already-chosen store.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Storage key for the onboarding preference record
pub const PREFERENCES_KEY: &str = "user_preferences";

/// Storage key for the liked product ids
pub const LIKED_IDS_KEY: &str = "liked_ids";

/// Read/write access to one user's preferences and likes.
pub trait ProfileStore: Send + Sync {
    /// Stored preferences, or the empty record if none were saved.
    fn load_preferences(&self) -> Result<UserPreferences>;

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<()>;

    /// Stored likes, or the empty set if none were saved.
    fn load_liked_ids(&self) -> Result<LikedIds>;

    /// Append a like. Liking the same product twice is a no-op.
    fn record_like(&self, id: &str) -> Result<()>;

    /// Remove a like (wishlist removal). Returns whether it was present.
    fn remove_like(&self, id: &str) -> Result<bool>;
}

// =============================================================================
// Local (on-device) store
// =============================================================================

/// Directory-backed store, one JSON document per key.
///
/// Missing documents read as defaults; the directory is created on first
/// write.
#[derive(Debug, Clone)]
pub struct LocalProfileStore {
    dir: PathBuf,
}

impl LocalProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn write_key<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        parser::write_json(&self.key_path(key), value)
    }

    /// Liked ids in a stable order for writing back to disk.
    fn write_liked_ids(&self, liked: &LikedIds) -> Result<()> {
        let mut ids: Vec<&ProductId> = liked.iter().collect();
        ids.sort();
        self.write_key(LIKED_IDS_KEY, &ids)
    }
}

/// Treat a missing document as "nothing stored yet".
fn or_default<T: Default>(result: Result<T>) -> Result<T> {
    match result {
        Err(CatalogError::FileNotFound { .. }) => Ok(T::default()),
        other => other,
    }
}

impl ProfileStore for LocalProfileStore {
    fn load_preferences(&self) -> Result<UserPreferences> {
        or_default(parser::parse_preferences(&self.key_path(PREFERENCES_KEY)))
    }

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<()> {
        self.write_key(PREFERENCES_KEY, preferences)
    }

    fn load_liked_ids(&self) -> Result<LikedIds> {
        or_default(parser::parse_liked_ids(&self.key_path(LIKED_IDS_KEY)))
    }

    fn record_like(&self, id: &str) -> Result<()> {
        let mut liked = self.load_liked_ids()?;
        if liked.insert(id.to_string()) {
            self.write_liked_ids(&liked)?;
            tracing::debug!("Recorded like for product {}", id);
        }
        Ok(())
    }

    fn remove_like(&self, id: &str) -> Result<bool> {
        let mut liked = self.load_liked_ids()?;
        let removed = liked.remove(id);
        if removed {
            self.write_liked_ids(&liked)?;
            tracing::debug!("Removed like for product {}", id);
        }
        Ok(removed)
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// In-process store, used for injected profile data and tests.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    preferences: RwLock<UserPreferences>,
    liked_ids: RwLock<LikedIds>,
}

impl MemoryProfileStore {
    pub fn new(preferences: UserPreferences, liked_ids: LikedIds) -> Self {
        Self {
            preferences: RwLock::new(preferences),
            liked_ids: RwLock::new(liked_ids),
        }
    }
}

fn poisoned(what: &str) -> CatalogError {
    CatalogError::ValidationError(format!("{} lock poisoned", what))
}

impl ProfileStore for MemoryProfileStore {
    fn load_preferences(&self) -> Result<UserPreferences> {
        let preferences = self.preferences.read().map_err(|_| poisoned("preferences"))?;
        Ok(preferences.clone())
    }

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<()> {
        let mut stored = self.preferences.write().map_err(|_| poisoned("preferences"))?;
        *stored = preferences.clone();
        Ok(())
    }

    fn load_liked_ids(&self) -> Result<LikedIds> {
        let liked = self.liked_ids.read().map_err(|_| poisoned("liked ids"))?;
        Ok(liked.clone())
    }

    fn record_like(&self, id: &str) -> Result<()> {
        let mut liked = self.liked_ids.write().map_err(|_| poisoned("liked ids"))?;
        liked.insert(id.to_string());
        Ok(())
    }

    fn remove_like(&self, id: &str) -> Result<bool> {
        let mut liked = self.liked_ids.write().map_err(|_| poisoned("liked ids"))?;
        Ok(liked.remove(id))
    }
}

// =============================================================================
// Loading everything a feed request needs
// =============================================================================

/// The three inputs of a ranking call.
#[derive(Debug, Clone)]
pub struct FeedInputs {
    pub catalog: Vec<Product>,
    pub preferences: UserPreferences,
    pub liked_ids: LikedIds,
}

/// Load the catalog and the user's profile in parallel.
///
/// `load_catalog` is whatever produces the catalog page (a file, a mock
/// generator); the profile comes from `store`.
pub fn load_feed_inputs<F>(load_catalog: F, store: &dyn ProfileStore) -> Result<FeedInputs>
where
    F: FnOnce() -> Result<Vec<Product>> + Send,
{
    let (catalog, (preferences, liked_ids)) = rayon::join(load_catalog, || {
        rayon::join(|| store.load_preferences(), || store.load_liked_ids())
    });

    let inputs = FeedInputs {
        catalog: catalog?,
        preferences: preferences?,
        liked_ids: liked_ids?,
    };

    tracing::info!(
        "Loaded feed inputs: {} products, {} liked ids",
        inputs.catalog.len(),
        inputs.liked_ids.len()
    );
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_store_defaults_when_empty() {
        let dir = TempDir::new().unwrap();
        let store = LocalProfileStore::new(dir.path().join("profile"));

        assert!(store.load_preferences().unwrap().is_empty());
        assert!(store.load_liked_ids().unwrap().is_empty());
    }

    #[test]
    fn test_local_store_likes() {
        let dir = TempDir::new().unwrap();
        let store = LocalProfileStore::new(dir.path().join("profile"));

        store.record_like("12").unwrap();
        store.record_like("5").unwrap();
        store.record_like("12").unwrap();

        let liked = store.load_liked_ids().unwrap();
        assert_eq!(liked.len(), 2);

        let on_disk = fs::read_to_string(store.dir().join("liked_ids.json")).unwrap();
        let ids: Vec<String> = serde_json::from_str(&on_disk).unwrap();
        assert_eq!(ids, vec!["12", "5"]);

        assert!(store.remove_like("12").unwrap());
        assert!(!store.remove_like("12").unwrap());
        assert_eq!(store.load_liked_ids().unwrap().len(), 1);
    }

    #[test]
    fn test_local_store_preferences() {
        let dir = TempDir::new().unwrap();
        let store = LocalProfileStore::new(dir.path());

        let mut prefs = UserPreferences::default();
        prefs.styles.insert("vintage".to_string());
        prefs.colors.insert("olive".to_string());
        store.save_preferences(&prefs).unwrap();

        assert_eq!(store.load_preferences().unwrap(), prefs);
    }

    #[test]
    fn test_local_store_surfaces_corrupt_documents() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("liked_ids.json"), "{}").unwrap();
        let store = LocalProfileStore::new(dir.path());

        assert!(matches!(
            store.load_liked_ids(),
            Err(CatalogError::JsonError { .. })
        ));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryProfileStore::default();
        store.record_like("a").unwrap();
        store.record_like("b").unwrap();
        assert!(store.remove_like("a").unwrap());

        let liked = store.load_liked_ids().unwrap();
        assert_eq!(liked.len(), 1);
        assert!(liked.contains("b"));
    }

    #[test]
    fn test_load_feed_inputs() {
        let mut prefs = UserPreferences::default();
        prefs.brands.insert("Zara".to_string());
        let liked: LikedIds = ["2".to_string()].into_iter().collect();
        let store = MemoryProfileStore::new(prefs.clone(), liked);

        let inputs = load_feed_inputs(
            || Ok(vec![Product::new("1"), Product::new("2")]),
            &store,
        )
        .unwrap();

        assert_eq!(inputs.catalog.len(), 2);
        assert_eq!(inputs.preferences, prefs);
        assert!(inputs.liked_ids.contains("2"));
    }

    #[test]
    fn test_load_feed_inputs_propagates_catalog_error() {
        let store = MemoryProfileStore::default();
        let result = load_feed_inputs(
            || {
                Err(CatalogError::FileNotFound {
                    path: "catalog.json".to_string(),
                })
            },
            &store,
        );
        assert!(result.is_err());
    }
}
