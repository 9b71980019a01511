//! Single-page HTML report with a Chart.js line chart.
//!
//! The page is self-contained apart from the Chart.js script, which is
//! loaded from a CDN. Chart data and options are embedded as JSON; the
//! formatting callbacks that JSON cannot express are attached in
//! [`CHART_SCRIPT`].

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Value, json};
use sweetspot_core::{ScenarioResult, SweetSpotReport};
use tracing::debug;

use crate::format::format_eur;
use crate::{RenderError, ReportRenderer};

pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js";

/// Renders a [`SweetSpotReport`] as a standalone HTML page.
#[derive(Debug, Clone, Default)]
pub struct HtmlReportRenderer;

impl HtmlReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Chart.js configuration: one label per salary and three series in
    /// sweep order.
    pub fn chart_config(
        &self,
        results: &[ScenarioResult],
    ) -> Result<Value, RenderError> {
        let labels = series(results, |r| r.salary)?;
        let income_tax = series(results, |r| r.income_tax)?;
        let corporate_and_dividend = series(results, |r| r.corporate_and_dividend_tax)?;
        let total = series(results, |r| r.total_tax)?;

        Ok(json!({
            "type": "line",
            "data": {
                "labels": labels,
                "datasets": [
                    dataset("IRPF (Salario)", income_tax, "239, 68, 68", 2, None),
                    dataset("IS + Impuesto Dividendos", corporate_and_dividend, "59, 130, 246", 2, None),
                    dataset("TOTAL IMPUESTOS", total, "34, 197, 94", 3, Some(0)),
                ]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": {
                    "title": {
                        "display": true,
                        "text": "Análisis de Impuestos por Nivel de Salario",
                        "font": { "size": 18 },
                        "padding": 20
                    },
                    "legend": {
                        "display": true,
                        "position": "top",
                        "labels": { "font": { "size": 12 }, "padding": 15 }
                    },
                    "tooltip": { "mode": "index", "intersect": false }
                },
                "scales": {
                    "x": {
                        "title": {
                            "display": true,
                            "text": "Salario (€)",
                            "font": { "size": 14, "weight": "bold" }
                        },
                        "ticks": { "maxTicksLimit": 20, "autoSkip": true, "autoSkipPadding": 10 }
                    },
                    "y": {
                        "title": {
                            "display": true,
                            "text": "Impuestos (€)",
                            "font": { "size": 14, "weight": "bold" }
                        },
                        "ticks": {}
                    }
                },
                "interaction": { "mode": "nearest", "axis": "x", "intersect": false }
            }
        }))
    }
}

impl ReportRenderer for HtmlReportRenderer {
    fn render(
        &self,
        report: &SweetSpotReport,
    ) -> Result<String, RenderError> {
        let config = serde_json::to_string(&self.chart_config(&report.results)?)?;
        let sweet_spot = &report.sweet_spot;
        let year = report.tax_year;

        let revenue = format_eur(report.config.revenue);
        let expenses = format_eur(report.config.expenses);
        let net_profit = format_eur(report.net_profit());
        let salary = format_eur(sweet_spot.salary);
        let income_tax = format_eur(sweet_spot.income_tax);
        let corporate_and_dividend = format_eur(sweet_spot.corporate_and_dividend_tax);
        let total = format_eur(sweet_spot.total_tax);

        debug!(bytes = config.len(), points = report.results.len(), "rendering html report");

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Tax Sweet Spot Optimizer {year}</title>
    <script src="{CHART_JS_URL}"></script>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        <h1>📈 Tax Sweet Spot Optimizer {year}</h1>
        <p class="subtitle">Optimización fiscal para Sociedades Limitadas en España</p>

        <div class="info-panel">
            <div class="info-item">
                <div class="info-label">Ingresos</div>
                <div class="info-value">{revenue}</div>
            </div>
            <div class="info-item">
                <div class="info-label">Gastos</div>
                <div class="info-value">{expenses}</div>
            </div>
            <div class="info-item">
                <div class="info-label">Beneficio Neto</div>
                <div class="info-value">{net_profit}</div>
            </div>
        </div>

        <div class="sweet-spot">
            <h2>💰 Punto Óptimo (Sweet Spot)</h2>
            <div class="salary">{salary}</div>
            <div class="details">
                <div>IRPF: {income_tax}</div>
                <div>IS + Impuesto Dividendos: {corporate_and_dividend}</div>
                <div><strong>Total Impuestos: {total}</strong></div>
            </div>
        </div>

        <div class="chart-container">
            <canvas id="taxChart"></canvas>
        </div>
    </div>

    <script>
        const config = {config};
{CHART_SCRIPT}
    </script>
</body>
</html>
"#
        ))
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }
}

fn series(
    results: &[ScenarioResult],
    field: impl Fn(&ScenarioResult) -> Decimal,
) -> Result<Vec<f64>, RenderError> {
    results
        .iter()
        .map(|r| {
            let amount = field(r);
            amount.to_f64().ok_or(RenderError::UnrepresentableAmount(amount))
        })
        .collect()
}

fn dataset(
    label: &str,
    data: Vec<f64>,
    rgb: &str,
    border_width: u32,
    point_radius: Option<u32>,
) -> Value {
    let mut dataset = json!({
        "label": label,
        "data": data,
        "borderColor": format!("rgb({rgb})"),
        "backgroundColor": format!("rgba({rgb}, 0.1)"),
        "borderWidth": border_width,
        "fill": false,
        "tension": 0.1
    });
    if let (Some(radius), Value::Object(map)) = (point_radius, &mut dataset) {
        map.insert("pointRadius".to_string(), json!(radius));
    }
    dataset
}

const STYLE: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 12px;
            box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
            padding: 30px;
        }
        h1 { text-align: center; color: #333; margin-bottom: 10px; font-size: 2em; }
        .subtitle { text-align: center; color: #666; margin-bottom: 30px; font-size: 0.9em; }
        .info-panel {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin-bottom: 30px;
            padding: 20px;
            background: #f8f9fa;
            border-radius: 8px;
        }
        .info-item { text-align: center; }
        .info-label { font-size: 0.85em; color: #666; margin-bottom: 5px; }
        .info-value { font-size: 1.3em; font-weight: bold; color: #333; }
        .sweet-spot {
            text-align: center;
            margin: 30px 0;
            padding: 25px;
            background: linear-gradient(135deg, #4bc0c0 0%, #44a08d 100%);
            border-radius: 8px;
            color: white;
        }
        .sweet-spot h2 { font-size: 1.5em; margin-bottom: 10px; }
        .sweet-spot .salary { font-size: 2.5em; font-weight: bold; margin: 10px 0; }
        .sweet-spot .details { font-size: 0.9em; opacity: 0.9; margin-top: 15px; }
        .chart-container { position: relative; height: 500px; margin-top: 30px; }
        canvas { max-height: 500px; }
    "#;

/// Formatting callbacks attached to the embedded `config` before the chart
/// is created.
const CHART_SCRIPT: &str = r#"
        const eur = new Intl.NumberFormat('es-ES', {
            style: 'currency', currency: 'EUR', minimumFractionDigits: 0, maximumFractionDigits: 0
        });
        const whole = new Intl.NumberFormat('es-ES', { minimumFractionDigits: 0, maximumFractionDigits: 0 });
        const salaryLabels = config.data.labels;

        config.options.plugins.tooltip.callbacks = {
            label: (context) => context.dataset.label + ': ' + eur.format(context.parsed.y)
        };
        // Auto-skipped ticks still carry their index into the label array.
        config.options.scales.x.ticks.callback = (value, index) =>
            index < salaryLabels.length ? whole.format(salaryLabels[index]) + '€' : '';
        config.options.scales.y.ticks.callback = (value) =>
            new Intl.NumberFormat('es-ES').format(value) + '€';

        new Chart(document.getElementById('taxChart').getContext('2d'), config);"#;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use sweetspot_core::SweepConfig;

    use super::*;

    fn scenario(
        salary: Decimal,
        total_tax: Decimal,
    ) -> ScenarioResult {
        ScenarioResult {
            salary,
            income_tax: dec!(100.50),
            corporate_tax: dec!(10),
            dividend_tax: dec!(20),
            corporate_and_dividend_tax: dec!(30),
            total_tax,
        }
    }

    fn report() -> SweetSpotReport {
        let results = vec![
            scenario(dec!(16576), dec!(13688.82)),
            scenario(dec!(17576), dec!(13587.32)),
        ];
        SweetSpotReport {
            tax_year: 2026,
            config: SweepConfig::default(),
            sweet_spot: results[1],
            results,
        }
    }

    #[test]
    fn chart_labels_follow_sweep_order() {
        let config = HtmlReportRenderer::new().chart_config(&report().results).unwrap();

        assert_eq!(config["data"]["labels"], json!([16576.0, 17576.0]));
        assert_eq!(config["data"]["datasets"][2]["data"], json!([13688.82, 13587.32]));
    }

    #[test]
    fn only_total_series_hides_points() {
        let config = HtmlReportRenderer::new().chart_config(&report().results).unwrap();
        let datasets = &config["data"]["datasets"];

        assert_eq!(datasets[0].get("pointRadius"), None);
        assert_eq!(datasets[2]["pointRadius"], json!(0));
        assert_eq!(datasets[2]["borderWidth"], json!(3));
    }

    #[test]
    fn page_shows_inputs_and_sweet_spot() {
        let html = HtmlReportRenderer::new().render(&report()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Tax Sweet Spot Optimizer 2026</title>"));
        assert!(html.contains("50.000\u{a0}€"));
        assert!(html.contains("49.000\u{a0}€"));
        assert!(html.contains(r#"<div class="salary">17.576"#));
        assert!(html.contains("Total Impuestos: 13.587\u{a0}€"));
        assert!(html.contains(CHART_JS_URL));
    }

    #[test]
    fn page_embeds_chart_config_as_json() {
        let html = HtmlReportRenderer::new().render(&report()).unwrap();

        assert!(html.contains(r#""labels":[16576.0,17576.0]"#));
        assert!(html.contains("new Chart("));
    }

    #[test]
    fn empty_results_render_empty_series() {
        let config = HtmlReportRenderer::new().chart_config(&[]).unwrap();

        assert_eq!(config["data"]["labels"], json!([]));
    }

    #[test]
    fn file_extension_is_html() {
        assert_eq!(HtmlReportRenderer::new().file_extension(), "html");
    }
}
