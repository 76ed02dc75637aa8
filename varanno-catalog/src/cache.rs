//! Process-wide catalog cache keyed by data directory.
//!
//! Catalogs are immutable, so cached entries can be handed out as shared
//! `Arc`s to any number of concurrent readers. Reload follows a
//! construct-new-then-swap discipline: a fresh catalog is built outside the
//! lock and then replaces the shared reference atomically, so in-flight
//! requests keep the catalog they started with.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::store::Catalog;

#[derive(Debug, Default)]
pub struct CatalogCache {
    inner: RwLock<HashMap<PathBuf, Arc<Catalog>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Catalog for `data_dir`, loading and caching it on first use.
    ///
    pub fn get_or_load(&self, data_dir: &Path) -> Arc<Catalog> {
        // Entries are immutable once inserted; a poisoned lock still holds
        // consistent data.
        if let Some(catalog) = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(data_dir)
        {
            return Arc::clone(catalog);
        }
        let catalog = Arc::new(Catalog::load(data_dir));
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have loaded concurrently; keep the first entry
        // so all callers see one catalog per directory.
        Arc::clone(
            guard
                .entry(data_dir.to_path_buf())
                .or_insert_with(|| catalog),
        )
    }

    ///
    /// Rebuild the catalog for `data_dir` and swap it in. Readers holding
    /// the old `Arc` are unaffected.
    ///
    pub fn reload(&self, data_dir: &Path) -> Arc<Catalog> {
        let catalog = Arc::new(Catalog::load(data_dir));
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(data_dir.to_path_buf(), Arc::clone(&catalog));
        catalog
    }

    /// Drop the cached catalog for `data_dir`, if any.
    pub fn invalidate(&self, data_dir: &Path) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(data_dir);
    }

    /// Drop all cached catalogs.
    pub fn clear(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
