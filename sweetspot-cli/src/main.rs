mod cli;
mod logging;

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use sweetspot_core::{ScenarioResult, analyze};
use sweetspot_data::{check_sweep_config, load_parameters};
use sweetspot_report::{HtmlReportRenderer, ReportRenderer, format_eur};
use tracing::{debug, info};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref())?;

    let resolved = load_parameters(cli.parameters.as_deref(), cli.brackets.as_deref())
        .context("Failed to load tax parameters")?;
    let sweep = cli.sweep_config(resolved.sweep);
    check_sweep_config(&sweep).context("Invalid sweep settings")?;
    debug!(?sweep, tax_year = resolved.params.tax_year, "resolved sweep");

    let report = analyze(&resolved.params, &sweep).context("Failed to analyze salary sweep")?;

    let renderer = HtmlReportRenderer::new();
    let page = renderer
        .render(&report)
        .context("Failed to render report")?;
    let output = cli.output_path(renderer.file_extension());
    fs::write(&output, page)
        .with_context(|| format!("Failed to write report to '{}'", output.display()))?;
    info!(path = %output.display(), scenarios = report.results.len(), "report written");

    println!("{}", summary(&output, &report.sweet_spot));

    Ok(())
}

/// Console lines printed once the report is on disk.
fn summary(
    output: &Path,
    sweet_spot: &ScenarioResult,
) -> String {
    let path = output.display();
    format!(
        "✅ Fichero {path} generado exitosamente.\n\
         💰 Punto óptimo encontrado: {}\n\
         📊 Total de impuestos en el punto óptimo: {}\n\
         📈 Abre {path} en tu navegador para ver la visualización.",
        format_eur(sweet_spot.salary),
        format_eur(sweet_spot.total_tax),
    )
}
