//! Static seed dataset loaded once when the store is created.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use eventboard_core::EventId;

use crate::event::Event;

/// Dataset bundled with the crate.
const DEFAULT_SEED: &str = include_str!("../data/events.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate event id {0} in seed dataset")]
    DuplicateId(EventId),
}

/// Seed document: `{ "events": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDataset {
    pub events: Vec<Event>,
}

impl SeedDataset {
    /// The bundled community events.
    pub fn bundled() -> Result<Self, SeedError> {
        Self::from_json(DEFAULT_SEED)
    }

    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let dataset: SeedDataset = serde_json::from_str(raw)?;
        dataset.check_unique_ids()?;
        Ok(dataset)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    fn check_unique_ids(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::with_capacity(self.events.len());
        for event in &self.events {
            if !seen.insert(event.id) {
                return Err(SeedError::DuplicateId(event.id));
            }
        }
        Ok(())
    }
}
