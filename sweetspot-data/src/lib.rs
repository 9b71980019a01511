//! Loading tax parameters from disk.
//!
//! Bracket schedules come from CSV ([`BracketScheduleLoader`]), scalar
//! settings and sweep defaults from TOML ([`ParametersFile`]). Both are
//! optional layers over the built-in 2026 parameters, applied in that order.

mod brackets;
mod parameters;

use std::path::Path;

use sweetspot_core::{SweepConfig, TaxParameters};
use thiserror::Error;
use tracing::info;

pub use brackets::{
    BracketLoaderError, BracketRecord, BracketScheduleLoader, LoadedSchedules, ScheduleKind,
};
pub use parameters::{ParametersError, ParametersFile, SweepSection, check_sweep_config};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Brackets(#[from] BracketLoaderError),

    #[error(transparent)]
    Parameters(#[from] ParametersError),

    #[error("bracket file is for {brackets} but parameters file is for {parameters}")]
    TaxYearMismatch { brackets: i32, parameters: i32 },
}

/// Parameters and sweep defaults after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParameters {
    pub params: TaxParameters,
    pub sweep: SweepConfig,
}

/// Builds the parameter set for a run.
///
/// Starts from [`TaxParameters::spain_2026`], replaces the schedules and tax
/// year with those of `brackets` if given, then overlays `parameters`.
///
/// # Errors
///
/// Returns [`LoadError`] if a file cannot be read or fails validation, or if
/// the two files name different tax years.
pub fn load_parameters(
    parameters: Option<&Path>,
    brackets: Option<&Path>,
) -> Result<ResolvedParameters, LoadError> {
    let mut params = TaxParameters::spain_2026();

    if let Some(path) = brackets {
        let loaded = BracketScheduleLoader::load_from_file(path)?;
        info!(path = %path.display(), tax_year = loaded.tax_year, "loaded bracket schedules");
        params = TaxParameters {
            tax_year: loaded.tax_year,
            income_brackets: loaded.income_brackets,
            savings_tiers: loaded.savings_tiers,
            ..params
        };
    }

    let file = match parameters {
        Some(path) => {
            let file = ParametersFile::load_from_file(path)?;
            info!(path = %path.display(), "loaded parameters file");
            file
        }
        None => ParametersFile::default(),
    };

    if let (Some(_), Some(year)) = (brackets, file.tax_year) {
        if year != params.tax_year {
            return Err(LoadError::TaxYearMismatch {
                brackets: params.tax_year,
                parameters: year,
            });
        }
    }

    let params = file.apply(params)?;
    let sweep = file.sweep_config(&params)?;

    Ok(ResolvedParameters { params, sweep })
}
