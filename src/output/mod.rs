//! Output formatting for cleaning reports

mod json;
mod terminal;

use std::io::{IsTerminal, Write};

use anyhow::Result;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::ReportFormat;
use crate::pipeline::CleanReport;

pub use json::JsonReport;
pub use terminal::TerminalReport;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Render a cleaning report to a writer
    fn render(&self, report: &CleanReport, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating report formatters
pub struct ReportFactory;

impl ReportFactory {
    /// Create a report formatter based on format type
    pub fn create(format: ReportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Terminal => Box::new(TerminalReport::new()),
            ReportFormat::Json => Box::new(JsonReport::new()),
        }
    }
}

/// Render a cleaning report to stdout
pub fn render_to_stdout(report: &CleanReport, format: ReportFormat) -> Result<()> {
    let formatter = ReportFactory::create(format);
    let mut stdout = std::io::stdout().lock();
    formatter.render(report, &mut stdout)
}

/// Print a fatal error with its cause chain as a red `error:` line on stderr
pub fn print_error(err: &anyhow::Error) {
    let choice = if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = write_error(&mut stderr, err);
}

fn write_error<W: WriteColor>(out: &mut W, err: &anyhow::Error) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "error")?;
    out.reset()?;
    writeln!(out, ": {:#}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use termcolor::NoColor;

    #[test]
    fn test_error_line_includes_cause_chain() {
        let err = Err::<(), _>(std::io::Error::other("disk full"))
            .context("Failed to clean messy.csv")
            .unwrap_err();

        let mut out = NoColor::new(Vec::new());
        write_error(&mut out, &err).unwrap();

        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            "error: Failed to clean messy.csv: disk full\n"
        );
    }
}
