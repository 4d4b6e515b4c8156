mod json;
mod model;
mod terminal;

pub use json::JsonReporter;
pub use model::{
    CheckReport, ConstraintReport, DesugarReport, ManifestEntry, ManifestsReport, PluralsReport,
    QuantityEntry, Report, SdkEntry, SymbolKind,
};
pub use terminal::TerminalReporter;

use miette::Result;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

impl ReportFormat {
    /// Parse the `report.format` config value; unknown values yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "terminal" | "text" => Some(ReportFormat::Terminal),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Reporter for lintmeta results
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    show_details: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
            show_details: true,
        }
    }

    /// Whether terminal output includes serialized forms and counts
    pub fn with_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self
    }

    /// Render a report
    pub fn report(&self, report: &Report) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new().with_details(self.show_details);
                reporter.report(report)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone());
                reporter.report(report)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_name() {
        assert_eq!(ReportFormat::from_name("JSON"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::from_name("terminal"), Some(ReportFormat::Terminal));
        assert_eq!(ReportFormat::from_name("sarif"), None);
    }
}
