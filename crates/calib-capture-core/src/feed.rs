//! Target feed adapter.
//!
//! Marker detection runs out of process and hands its results over as a
//! JSON file; this module exposes them as an ordered, finite sequence of
//! [`MarkerTarget`]s. No detection logic lives here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::MarkerTarget;

#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Ordered, finite sequence of calibration targets.
///
/// The feed is read-only input to a session: it can be iterated any number
/// of times and is never mutated by the controller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetFeed {
    pub markers: Vec<MarkerTarget>,
}

impl TargetFeed {
    pub fn from_markers(markers: Vec<MarkerTarget>) -> Self {
        Self { markers }
    }

    /// Load a feed from a JSON file produced by the detection step.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this feed to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FeedError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn as_slice(&self) -> &[MarkerTarget] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
