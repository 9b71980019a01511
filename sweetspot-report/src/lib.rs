//! Rendering of sweet-spot reports.
//!
//! The calculation crate only produces a [`SweetSpotReport`]; turning it
//! into something a person can look at happens behind [`ReportRenderer`].

mod format;
mod html;

use rust_decimal::Decimal;
use sweetspot_core::SweetSpotReport;
use thiserror::Error;

pub use format::{format_eur, format_number};
pub use html::{CHART_JS_URL, HtmlReportRenderer};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize chart data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("amount {0} cannot be plotted")]
    UnrepresentableAmount(Decimal),
}

/// Turns a finished analysis into a document.
pub trait ReportRenderer {
    fn render(
        &self,
        report: &SweetSpotReport,
    ) -> Result<String, RenderError>;

    /// Extension, without the dot, of the files this renderer produces.
    fn file_extension(&self) -> &'static str;
}
