use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use serde::Serialize;
use thiserror::Error;

use super::text::{render_text, round_cents};
use super::Report;

pub const DEFAULT_FILE_STEM: &str = "expense_report";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported export format '{0}', expected csv or txt")]
    UnsupportedFormat(String),
    #[error("failed to encode report: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write {}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Txt,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
        }
    }

    pub fn default_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", DEFAULT_FILE_STEM, self.extension()))
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "txt" => Ok(ExportFormat::Txt),
            _ => Err(ExportError::UnsupportedFormat(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[enum_dispatch]
pub trait ReportExporter {
    fn format(&self) -> ExportFormat;
    fn render(&self, report: &Report) -> Result<Vec<u8>, ExportError>;
}

#[enum_dispatch(ReportExporter)]
pub enum Exporter {
    CsvExporter,
    TxtExporter,
}

impl Exporter {
    pub fn new(format: ExportFormat, currency: &str) -> Exporter {
        match format {
            ExportFormat::Csv => Exporter::CsvExporter(CsvExporter),
            ExportFormat::Txt => Exporter::TxtExporter(TxtExporter {
                currency: currency.to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct CsvReportRecord<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

/// `Category,Amount` rows followed by a `Total` row.
pub struct CsvExporter;

impl ReportExporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render(&self, report: &Report) -> Result<Vec<u8>, ExportError> {
        let mut csv_writer = csv::WriterBuilder::new().from_writer(Vec::new());
        for row in report.rows() {
            csv_writer.serialize(CsvReportRecord {
                category: row.category(),
                amount: format!("{:.2}", round_cents(row.amount())),
            })?;
        }

        csv_writer.serialize(CsvReportRecord {
            category: "Total",
            amount: format!("{:.2}", round_cents(report.grand_total())),
        })?;

        csv_writer
            .into_inner()
            .map_err(|err| ExportError::Csv(err.into_error().into()))
    }
}

/// The same fixed-width table that is printed to the console.
pub struct TxtExporter {
    currency: String,
}

impl ReportExporter for TxtExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Txt
    }

    fn render(&self, report: &Report) -> Result<Vec<u8>, ExportError> {
        Ok(render_text(report, &self.currency).into_bytes())
    }
}
