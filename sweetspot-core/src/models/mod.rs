mod savings_tiers;
mod scenario;
mod sweep_config;
mod tax_bracket;
mod tax_parameters;

pub use savings_tiers::{
    SAVINGS_FIRST_BRACKET_LIMIT, SAVINGS_FIRST_BRACKET_RATE, SAVINGS_SECOND_BRACKET_LIMIT,
    SAVINGS_SECOND_BRACKET_RATE, SAVINGS_THIRD_BRACKET_RATE, SavingsTaxTiers,
};
pub use scenario::{ScenarioResult, SweetSpotReport};
pub use sweep_config::{DEFAULT_EXPENSES, DEFAULT_REVENUE, DEFAULT_SALARY_STEP, SweepConfig};
pub use tax_bracket::{BracketSchedule, ScheduleError, TaxBracket};
pub use tax_parameters::{
    CORPORATE_TAX_RATE_2026, IRPF_BRACKETS_2026, MINIMUM_SALARY_2026, TaxParameters,
};
