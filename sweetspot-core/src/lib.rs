pub mod calculations;
pub mod models;

pub use calculations::{AnalysisError, OptimumError, SweepError, analyze};
pub use models::*;
