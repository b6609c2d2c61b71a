//! Process-scoped catalog holder with atomic table swaps.

use crate::catalog::FieldCatalog;
use crate::scanner;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Owns the current [`FieldCatalog`] and replaces it wholesale on each
/// rebuild. Readers clone the `Arc` and never observe a half-built table.
#[derive(Debug, Default)]
pub struct CatalogService {
    current: RwLock<Arc<FieldCatalog>>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service pre-seeded with a fixed catalog, used by tests and by
    /// callers that build their own tables.
    pub fn with_catalog(catalog: FieldCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Snapshot of the current table. Cheap, just an `Arc` clone.
    pub fn catalog(&self) -> Arc<FieldCatalog> {
        self.current.read().unwrap().clone()
    }

    /// Rescan the project tree and swap in the fresh table.
    pub fn rebuild(&self, root: &Path) {
        let fresh = scanner::scan(root);
        tracing::debug!(
            classes = fresh.class_count(),
            aliases = fresh.alias_count(),
            "catalog rebuilt"
        );
        *self.current.write().unwrap() = Arc::new(fresh);
    }

    /// Replace the table directly without scanning.
    pub fn replace(&self, catalog: FieldCatalog) {
        *self.current.write().unwrap() = Arc::new(catalog);
    }
}
