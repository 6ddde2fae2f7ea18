use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;

use super::loader;
use super::model::{Dataset, Season};

/// Lazily loaded, read-only [`Dataset`] handed to every page.
///
/// The first call to [`DataStore::dataset`] reads the files; later calls
/// return the same `Arc`. A failed load is remembered too, so the error is
/// shown again instead of re-reading the disk every frame, until
/// [`DataStore::evict`] is called.
pub struct DataStore {
    dir: PathBuf,
    seasons: Vec<Season>,
    cached: Option<Result<Arc<Dataset>>>,
}

impl DataStore {
    pub fn new(dir: impl Into<PathBuf>, seasons: &[Season]) -> Self {
        DataStore {
            dir: dir.into(),
            seasons: seasons.to_vec(),
            cached: None,
        }
    }

    /// A store that never touches the disk.
    #[cfg(test)]
    pub fn with_dataset(dataset: Dataset) -> Self {
        DataStore {
            dir: PathBuf::new(),
            seasons: Season::ALL.to_vec(),
            cached: Some(Ok(Arc::new(dataset))),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn dataset(&mut self) -> Result<Arc<Dataset>> {
        if let Some(cached) = &self.cached {
            return cached.clone();
        }

        let loaded = loader::load_dataset(&self.dir, &self.seasons).map(Arc::new);
        match &loaded {
            Ok(ds) if ds.is_empty() => {
                log::warn!("No tables loaded from {}", self.dir.display())
            }
            Ok(ds) => log::info!("Dataset ready: {} tables from {}", ds.len(), self.dir.display()),
            Err(e) => log::error!("Failed to load dataset: {e}"),
        }
        self.cached = Some(loaded.clone());
        loaded
    }

    /// Forget the cached result; the next access reloads.
    pub fn evict(&mut self) {
        log::info!("Evicting cached dataset");
        self.cached = None;
    }

    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        self.dir = dir.into();
        log::info!("Data directory set to {}", self.dir.display());
        self.evict();
    }
}
