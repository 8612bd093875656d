//! Holdings persistence

pub mod holdings;

pub use holdings::*;
