pub mod engine;
pub mod math;

pub mod momentum;
pub mod trend;
pub mod volume;

pub use engine::{IndicatorEngine, MIN_BARS};
