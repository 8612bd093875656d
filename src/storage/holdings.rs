//! CSV-backed holdings store
//!
//! The file carries one record per lot with the columns
//! `Code,Type,Cost,Shares,Note`.

use crate::models::position::Position;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait HoldingsStore {
    /// Load all positions; a store with no data yet loads as an empty list
    fn load(&self) -> Result<Vec<Position>, Box<dyn std::error::Error + Send + Sync>>;

    /// Replace the stored positions with `positions`
    fn save(
        &self,
        positions: &[Position],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

pub struct CsvHoldingsStore {
    path: PathBuf,
}

impl CsvHoldingsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HoldingsStore for CsvHoldingsStore {
    fn load(&self) -> Result<Vec<Position>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "holdings file missing, loading empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut positions = Vec::new();
        for record in reader.deserialize() {
            let position: Position = record?;
            positions.push(position);
        }
        Ok(positions)
    }

    fn save(
        &self,
        positions: &[Position],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for position in positions {
            writer.serialize(position)?;
        }
        writer.flush()?;
        debug!(
            path = %self.path.display(),
            count = positions.len(),
            "saved holdings"
        );
        Ok(())
    }
}
