//! TOML parameter files.
//!
//! Every key is optional; anything left out keeps the value it already had
//! (the built-in 2026 set, or whatever a bracket file supplied).
//!
//! ```toml
//! tax_year = 2026
//! corporate_tax_rate = 0.15
//! minimum_salary = 16576
//!
//! [savings]
//! first_limit = 6000
//! first_rate = 0.19
//! second_limit = 50000
//! second_rate = 0.21
//! third_rate = 0.23
//!
//! [sweep]
//! revenue = 50000
//! expenses = 1000
//! step = 1000
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use sweetspot_core::{SavingsTaxTiers, ScheduleError, SweepConfig, TaxParameters};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParametersError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parameters file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    #[error("{name} must not be negative, got {value}")]
    NegativeAmount { name: &'static str, value: Decimal },

    #[error("sweep step must be positive, got {0}")]
    NonPositiveStep(Decimal),

    #[error("invalid savings tiers: {0}")]
    InvalidSavingsTiers(#[from] ScheduleError),
}

/// Default company figures for a sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepSection {
    pub revenue: Option<Decimal>,
    pub expenses: Option<Decimal>,
    pub step: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParametersFile {
    pub tax_year: Option<i32>,
    pub corporate_tax_rate: Option<Decimal>,
    pub minimum_salary: Option<Decimal>,
    pub savings: Option<SavingsTaxTiers>,
    #[serde(default)]
    pub sweep: SweepSection,
}

impl ParametersFile {
    pub fn from_toml_str(s: &str) -> Result<Self, ParametersError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ParametersError> {
        let contents = fs::read_to_string(path).map_err(|source| ParametersError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Overlays this file on `base` and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ParametersError`] if the corporate rate is outside `[0, 1]`,
    /// the minimum salary is negative, or the savings tiers do not form a
    /// valid schedule.
    pub fn apply(
        &self,
        base: TaxParameters,
    ) -> Result<TaxParameters, ParametersError> {
        let params = TaxParameters {
            tax_year: self.tax_year.unwrap_or(base.tax_year),
            corporate_tax_rate: self.corporate_tax_rate.unwrap_or(base.corporate_tax_rate),
            minimum_salary: self.minimum_salary.unwrap_or(base.minimum_salary),
            savings_tiers: self.savings.unwrap_or(base.savings_tiers),
            income_brackets: base.income_brackets,
        };

        check_rate("corporate_tax_rate", params.corporate_tax_rate)?;
        check_non_negative("minimum_salary", params.minimum_salary)?;
        params.savings_tiers.schedule()?;

        Ok(params)
    }

    /// Sweep defaults from the `[sweep]` table, starting at the minimum
    /// salary of `params`.
    pub fn sweep_config(
        &self,
        params: &TaxParameters,
    ) -> Result<SweepConfig, ParametersError> {
        let defaults = SweepConfig::default();
        let config = SweepConfig {
            revenue: self.sweep.revenue.unwrap_or(defaults.revenue),
            expenses: self.sweep.expenses.unwrap_or(defaults.expenses),
            step: self.sweep.step.unwrap_or(defaults.step),
            min_salary: params.minimum_salary,
        };

        check_sweep_config(&config)?;
        Ok(config)
    }
}

/// Checks the documented numeric ranges of a sweep.
pub fn check_sweep_config(config: &SweepConfig) -> Result<(), ParametersError> {
    check_non_negative("revenue", config.revenue)?;
    check_non_negative("expenses", config.expenses)?;
    if config.step <= Decimal::ZERO {
        return Err(ParametersError::NonPositiveStep(config.step));
    }
    Ok(())
}

fn check_rate(
    name: &'static str,
    value: Decimal,
) -> Result<(), ParametersError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ParametersError::InvalidRate { name, value });
    }
    Ok(())
}

fn check_non_negative(
    name: &'static str,
    value: Decimal,
) -> Result<(), ParametersError> {
    if value < Decimal::ZERO {
        return Err(ParametersError::NegativeAmount { name, value });
    }
    Ok(())
}
