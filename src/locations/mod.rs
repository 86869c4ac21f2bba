use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

pub use models::Location;

pub mod models;
#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read the locations file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse line {line} of the locations file: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    #[error("line {line} of the locations file has out of range coordinates")]
    InvalidCoordinate { line: usize },
    #[error("the locations file contains no locations")]
    Empty,
}

/// Landmarks to draw rounds from.
pub struct LocationCatalog {
    locations: Vec<Location>,
    rng: Mutex<StdRng>,
}

impl LocationCatalog {
    pub fn new(locations: Vec<Location>, seed: Option<u64>) -> Result<Self, CatalogError> {
        if locations.is_empty() {
            return Err(CatalogError::Empty);
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            locations,
            rng: Mutex::new(rng),
        })
    }

    /// Reads one JSON-encoded `Location` per line, skipping blank lines.
    pub fn load(path: &Path, seed: Option<u64>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), seed)
    }

    pub fn from_reader<R: BufRead>(reader: R, seed: Option<u64>) -> Result<Self, CatalogError> {
        let mut locations = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let location: Location = serde_json::from_str(&line).map_err(|source| {
                CatalogError::Parse {
                    line: index + 1,
                    source,
                }
            })?;
            if !location.coordinates.is_valid() {
                return Err(CatalogError::InvalidCoordinate { line: index + 1 });
            }
            locations.push(location);
        }
        Self::new(locations, seed)
    }

    pub fn pick_random(&self) -> Location {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let index = rng.gen_range(0..self.locations.len());
        self.locations[index].clone()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
