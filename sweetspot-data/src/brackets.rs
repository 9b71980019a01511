use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use sweetspot_core::{BracketSchedule, SavingsTaxTiers, ScheduleError, TaxBracket};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading bracket schedules.
#[derive(Debug, Error)]
pub enum BracketLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown schedule '{0}' (expected 'general' or 'savings')")]
    UnknownSchedule(String),

    #[error("bracket file mixes tax years {expected} and {found}")]
    MixedTaxYears { expected: i32, found: i32 },

    #[error("bracket file has no '{}' schedule", .0.as_str())]
    MissingSchedule(ScheduleKind),

    #[error("invalid '{}' schedule: {source}", .schedule.as_str())]
    InvalidSchedule {
        schedule: ScheduleKind,
        #[source]
        source: ScheduleError,
    },

    #[error("savings schedule must have exactly 3 brackets, got {0}")]
    SavingsTierCount(usize),
}

impl From<csv::Error> for BracketLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketLoaderError::CsvParse(err.to_string())
    }
}

/// Which tax a schedule in the CSV belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleKind {
    /// Personal income tax (IRPF) on the salary.
    General,
    /// Savings tax on dividends.
    Savings,
}

impl ScheduleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Savings => "savings",
        }
    }

    /// Maps a CSV schedule code. Spanish names are accepted as aliases.
    pub fn parse(s: &str) -> Result<Self, BracketLoaderError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" | "irpf" => Ok(Self::General),
            "savings" | "ahorro" => Ok(Self::Savings),
            _ => Err(BracketLoaderError::UnknownSchedule(s.to_string())),
        }
    }
}

/// A single row of the bracket CSV.
///
/// - `tax_year`: the year the schedule applies to (e.g. 2026)
/// - `schedule`: `general` (IRPF) or `savings`
/// - `upper_limit`: cumulative ceiling of the bracket; empty for unbounded
/// - `rate`: marginal rate as a decimal (e.g. 0.19 for 19%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub tax_year: i32,
    pub schedule: String,
    #[serde(deserialize_with = "deserialize_upper_limit")]
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_upper_limit<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("infinity") => Ok(None),
        Some(s) => s.parse::<Decimal>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Schedules read from one bracket file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSchedules {
    pub tax_year: i32,
    pub income_brackets: BracketSchedule,
    pub savings_tiers: SavingsTaxTiers,
}

/// Loader for bracket schedules stored as CSV.
///
/// Rows are grouped by schedule in file order, so the file must list each
/// schedule's brackets from the lowest ceiling up. Validation happens here,
/// before anything reaches the calculators.
pub struct BracketScheduleLoader;

impl BracketScheduleLoader {
    /// Parse bracket records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Group parsed records into validated schedules.
    ///
    /// Both a `general` and a `savings` schedule must be present, all rows
    /// must share one tax year, and the savings schedule must have exactly
    /// three brackets.
    pub fn build(records: &[BracketRecord]) -> Result<LoadedSchedules, BracketLoaderError> {
        let mut tax_year: Option<i32> = None;
        let mut general = Vec::new();
        let mut savings = Vec::new();

        for record in records {
            match tax_year {
                None => tax_year = Some(record.tax_year),
                Some(expected) if expected != record.tax_year => {
                    return Err(BracketLoaderError::MixedTaxYears {
                        expected,
                        found: record.tax_year,
                    });
                }
                Some(_) => {}
            }

            let bracket = TaxBracket {
                upper_limit: record.upper_limit,
                rate: record.rate,
            };
            match ScheduleKind::parse(&record.schedule)? {
                ScheduleKind::General => general.push(bracket),
                ScheduleKind::Savings => savings.push(bracket),
            }
        }

        let tax_year = tax_year.ok_or(BracketLoaderError::MissingSchedule(ScheduleKind::General))?;
        let income_brackets = Self::schedule(ScheduleKind::General, general)?;
        let savings_schedule = Self::schedule(ScheduleKind::Savings, savings)?;
        let savings_tiers = SavingsTaxTiers::from_schedule(&savings_schedule)
            .ok_or(BracketLoaderError::SavingsTierCount(savings_schedule.len()))?;

        debug!(
            tax_year,
            general = income_brackets.len(),
            "loaded bracket schedules"
        );

        Ok(LoadedSchedules {
            tax_year,
            income_brackets,
            savings_tiers,
        })
    }

    /// Read, parse and validate a bracket file.
    pub fn load_from_file(path: &Path) -> Result<LoadedSchedules, BracketLoaderError> {
        let file = File::open(path).map_err(|source| BracketLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records = Self::parse(file)?;
        Self::build(&records)
    }

    fn schedule(
        kind: ScheduleKind,
        brackets: Vec<TaxBracket>,
    ) -> Result<BracketSchedule, BracketLoaderError> {
        if brackets.is_empty() {
            return Err(BracketLoaderError::MissingSchedule(kind));
        }
        BracketSchedule::new(brackets).map_err(|source| BracketLoaderError::InvalidSchedule {
            schedule: kind,
            source,
        })
    }
}
