use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    registry::LookupSpan,
};

const DEFAULT_FILTER: &str = "warn";

/// One line per event: local wall-clock time, level, the emitting crate,
/// then the event fields.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let time = Local::now().format("%H:%M:%S%.3f");
        let level = meta.level();
        let source = source_crate(meta.target());

        if writer.has_ansi_escapes() && *level <= Level::WARN {
            write!(writer, "{time} \x1b[1m{level:<5}\x1b[0m {source}: ")?;
        } else {
            write!(writer, "{time} {level:<5} {source}: ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// `sweetspot_core::calculations::sweep` -> `sweetspot_core`
fn source_crate(target: &str) -> &str {
    target.split("::").next().unwrap_or(target)
}

/// Picks the log filter: an explicit directive wins over `RUST_LOG`, which
/// wins over [`DEFAULT_FILTER`].
fn make_filter(directive: Option<&str>) -> Result<EnvFilter> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log level '{directive}'")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Initializes logging to stderr. Call once at startup.
///
/// Stdout is left to the command's own output. Output is colored only when
/// stderr is a terminal.
pub fn init_logging(directive: Option<&str>) -> Result<()> {
    let filter = make_filter(directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .event_format(LocalFmt)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
