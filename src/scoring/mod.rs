//! Composite strength scoring

pub mod engine;
pub mod rules;

pub use engine::*;
pub use rules::*;
