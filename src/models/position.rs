//! Holdings data models
//!
//! The serialized field names (`Code`, `Type`, `Cost`, `Shares`, `Note`) are
//! the storage contract for the holdings file and must not change.

use serde::{Deserialize, Serialize};

/// Risk category of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionKind {
    Defensive,
    Aggressive,
}

/// One holding, owned by the caller; the core only reads it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Type")]
    pub kind: PositionKind,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Shares")]
    pub shares: f64,
    #[serde(rename = "Note", default)]
    pub note: String,
}

impl Position {
    pub fn new(code: &str, kind: PositionKind, cost: f64, shares: f64) -> Self {
        Self {
            code: code.to_uppercase(),
            kind,
            cost,
            shares,
            note: String::new(),
        }
    }
}

/// Explicit application state holding the current positions
///
/// Passed by reference into evaluator calls; there is no ambient session
/// state anywhere in the crate.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    positions: Vec<Position>,
}

impl Portfolio {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Register a new lot. Repeated codes are kept as separate lots.
    pub fn add(&mut self, position: Position) {
        self.positions.push(position);
    }

    /// Remove the lot at `index`, if present
    pub fn remove(&mut self, index: usize) -> Option<Position> {
        if index < self.positions.len() {
            Some(self.positions.remove(index))
        } else {
            None
        }
    }
}
