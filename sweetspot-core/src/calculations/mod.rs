//! Tax calculations for salary versus dividend planning.
//!
//! The engine is split the way the numbers flow: progressive bracket taxes,
//! the salary sweep built on them, and the selection of the cheapest salary.

pub mod analysis;
pub mod common;
pub mod optimum;
pub mod progressive;
pub mod sweep;

pub use analysis::{AnalysisError, analyze};
pub use optimum::{OptimumError, find_minimum_total};
pub use progressive::{accumulate_progressive_tax, compute_progressive_tax, compute_savings_tax};
pub use sweep::{ScenarioSweeper, SweepError};
