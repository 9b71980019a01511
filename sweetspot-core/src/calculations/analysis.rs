//! One-call pipeline: sweep the salaries, then pick the sweet spot.

use thiserror::Error;
use tracing::info;

use crate::calculations::optimum::{OptimumError, find_minimum_total};
use crate::calculations::sweep::{ScenarioSweeper, SweepError};
use crate::models::{SweepConfig, SweetSpotReport, TaxParameters};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Optimum(#[from] OptimumError),
}

/// Sweeps `config` under `params` and bundles the scenarios with the optimum.
///
/// # Errors
///
/// * [`AnalysisError::Sweep`] if the step is not positive.
/// * [`AnalysisError::Optimum`] if the salary range is empty.
pub fn analyze(
    params: &TaxParameters,
    config: &SweepConfig,
) -> Result<SweetSpotReport, AnalysisError> {
    let results = ScenarioSweeper::new(params).sweep(config)?;
    let sweet_spot = *find_minimum_total(&results)?;

    info!(
        tax_year = params.tax_year,
        scenarios = results.len(),
        salary = %sweet_spot.salary,
        total_tax = %sweet_spot.total_tax,
        "sweet spot found"
    );

    Ok(SweetSpotReport {
        tax_year: params.tax_year,
        config: *config,
        results,
        sweet_spot,
    })
}
