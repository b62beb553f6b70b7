//! The train and station collections served by the API.
//!
//! A [`Dataset`] is built once at startup, either from the built-in
//! snapshot or from a JSON file, and is read-only from then on.

mod error;
mod seed;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Station, Train};

pub use error::DatasetError;

/// Immutable train and station collections.
///
/// Collection order is preserved and is the order the list endpoints return.
/// Ids are not required to be unique; lookups return the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub trains: Vec<Train>,
    pub stations: Vec<Station>,
}

impl Dataset {
    /// The built-in snapshot: four trains and two stations.
    pub fn seed() -> Self {
        Self {
            trains: seed::trains(),
            stations: seed::stations(),
        }
    }

    /// Load a dataset from a JSON document of the form
    /// `{"trains": [...], "stations": [...]}`.
    ///
    /// Field names match the API output. No cross-checks are applied.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// First train whose id is exactly `id`.
    pub fn find_train(&self, id: &str) -> Option<&Train> {
        self.trains.iter().find(|t| t.id == id)
    }

    /// First station whose id is exactly `id`.
    pub fn find_station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }
}
