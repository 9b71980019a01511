use std::path::{Path, PathBuf};

use clap::Parser;
use rust_decimal::Decimal;
use sweetspot_core::SweepConfig;

const AMOUNT_HELP: &str = "Amounts are in euros and may use '_' or ',' as thousands separators \
(50_000, 50,000). Decimals always take a '.' (16576.50); a ',' followed by anything \
but three digits is rejected.";

/// Finds the salary that minimizes the combined IRPF, corporate and
/// dividend tax of a Spanish SL owner, and writes an HTML chart of the
/// sweep.
#[derive(Debug, Parser)]
#[command(name = "sweetspot", version, about, long_about = None, after_help = AMOUNT_HELP)]
pub struct Cli {
    /// Yearly company revenue.
    #[arg(long, value_parser = parse_amount)]
    pub revenue: Option<Decimal>,

    /// Yearly deductible expenses.
    #[arg(long, value_parser = parse_amount)]
    pub expenses: Option<Decimal>,

    /// Salary increment between scenarios.
    #[arg(long, value_parser = parse_amount)]
    pub step: Option<Decimal>,

    /// First salary to evaluate. Defaults to the minimum salary.
    #[arg(long, value_parser = parse_amount)]
    pub min_salary: Option<Decimal>,

    /// TOML file with rates, minimum salary and sweep defaults.
    #[arg(long)]
    pub parameters: Option<PathBuf>,

    /// CSV file with the IRPF and savings bracket schedules.
    #[arg(long)]
    pub brackets: Option<PathBuf>,

    /// Where to write the report.
    #[arg(short, long, default_value = "index.html")]
    pub output: PathBuf,

    /// Log filter, e.g. `debug` or `sweetspot_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Applies the amounts given on the command line over `base`.
    pub fn sweep_config(
        &self,
        base: SweepConfig,
    ) -> SweepConfig {
        SweepConfig {
            revenue: self.revenue.unwrap_or(base.revenue),
            expenses: self.expenses.unwrap_or(base.expenses),
            step: self.step.unwrap_or(base.step),
            min_salary: self.min_salary.unwrap_or(base.min_salary),
        }
    }

    /// The output path, with `extension` added when none was given.
    pub fn output_path(
        &self,
        extension: &str,
    ) -> PathBuf {
        with_default_extension(&self.output, extension)
    }
}

/// Parses a euro amount, ignoring `_` and `,` digit separators.
///
/// A `,` must separate groups of three digits, so the Spanish decimal form
/// `16576,50` is rejected instead of being read as `1657650`.
pub fn parse_amount(s: &str) -> Result<Decimal, String> {
    let trimmed = s.trim();
    let integer_part = trimmed.split('.').next().unwrap_or(trimmed);
    if integer_part
        .split(',')
        .skip(1)
        .any(|group| group.chars().filter(|c| *c != '_').count() != 3)
    {
        return Err(format!(
            "invalid amount '{s}': ',' only separates thousands, use '.' for decimals"
        ));
    }

    let normalized: String = trimmed
        .chars()
        .filter(|c| !matches!(c, '_' | ','))
        .collect();
    if normalized.is_empty() {
        return Err("amount is empty".to_string());
    }
    normalized
        .parse()
        .map_err(|e| format!("invalid amount '{s}': {e}"))
}

fn with_default_extension(
    path: &Path,
    extension: &str,
) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sweetspot").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn parse_amount_accepts_separators() {
        assert_eq!(parse_amount("50_000").unwrap(), dec!(50000));
        assert_eq!(parse_amount("50,000").unwrap(), dec!(50000));
        assert_eq!(parse_amount(" 1_234.5 ").unwrap(), dec!(1234.5));
    }

    #[test]
    fn parse_amount_rejects_decimal_comma() {
        assert!(parse_amount("16576,50").is_err());
        assert!(parse_amount("16576,5").is_err());
        assert!(parse_amount("1,23,456").is_err());
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
        assert_eq!(parse_amount("16576.50").unwrap(), dec!(16576.50));
    }

    #[test]
    fn help_explains_amount_separators() {
        let help = Cli::command().render_help().to_string();

        assert!(help.contains("Decimals"));
        assert!(help.contains("(16576.50);"));
    }

    #[test]
    fn decimal_comma_is_a_usage_error() {
        let result = Cli::try_parse_from(["sweetspot", "--min-salary", "16576,50"]);

        assert!(result.is_err());
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("_").is_err());
        assert!(parse_amount("fifty").is_err());
    }

    #[test]
    fn no_flags_keep_base_config() {
        let cli = parse(&[]);
        let base = SweepConfig::new(dec!(90000), dec!(5000), dec!(500), dec!(20000));

        assert_eq!(cli.sweep_config(base), base);
        assert_eq!(cli.output, PathBuf::from("index.html"));
    }

    #[test]
    fn flags_override_base_config() {
        let cli = parse(&["--revenue", "120_000", "--step", "250", "--min-salary", "30,000"]);
        let base = SweepConfig::default();

        assert_eq!(
            cli.sweep_config(base),
            SweepConfig::new(dec!(120000), base.expenses, dec!(250), dec!(30000))
        );
    }

    #[test]
    fn invalid_amount_is_a_usage_error() {
        let result = Cli::try_parse_from(["sweetspot", "--revenue", "lots"]);

        assert!(result.is_err());
    }

    #[test]
    fn output_path_gets_renderer_extension() {
        assert_eq!(parse(&["-o", "report"]).output_path("html"), PathBuf::from("report.html"));
        assert_eq!(parse(&["-o", "out/a.htm"]).output_path("html"), PathBuf::from("out/a.htm"));
    }
}
