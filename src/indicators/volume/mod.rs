pub mod rvol;

pub use rvol::*;
