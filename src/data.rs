use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::accounting::{self, CategoryPercentages, CategoryTotals, Ledger, Record, ValueParseWarning};
use crate::config::{Filter, LedgerColumns};
use crate::report::export::{ExportError, ExportFormat, Exporter, ReportExporter};
use crate::report::Report;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file {} does not exist or cannot be read", .path.display())]
    NotFound { path: PathBuf },
    #[error("missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("failed to read ledger: {0}")]
    Read(#[from] csv::Error),
}

/// Reads a header-led CSV ledger.
///
/// Fails before reading any data row when the file is missing or the header
/// lacks one of the required columns. Rows with unreadable amounts are kept
/// with an amount of zero and reported through [`Ledger::warnings`]. When a
/// filter is given only rows whose raw value matches it exactly are kept.
pub fn load_ledger(path: &Path, columns: &LedgerColumns, filter: Option<&Filter>) -> Result<Ledger, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound { path: path.to_path_buf() });
    }

    let file = File::open(path).map_err(|err| {
        debug!("failed to open ledger, path={}, err={}", path.display(), err);
        LoadError::NotFound { path: path.to_path_buf() }
    })?;
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    let missing: Vec<String> = columns
        .required()
        .into_iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::Schema { missing });
    }

    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (position, row) in csv_reader.records().enumerate() {
        let row = row?;
        let line = row.position().map_or(position as u64 + 2, |pos| pos.line());

        if row.len() > headers.len() {
            debug!("extra cells ignored, line={}, cells={}, columns={}", line, row.len(), headers.len());
        }

        let fields = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (header.clone(), row.get(index).unwrap_or("").to_string()))
            .collect();

        let (record, warning) = Record::normalize(line, fields, columns);
        if let Some(warning) = warning {
            debug!("{}", warning);
            warnings.push(warning);
        }

        let retained = match filter {
            Some(filter) => record.field(&filter.column) == filter.value,
            None => true,
        };
        if retained {
            records.push(record);
        }
    }

    info!(
        "loaded ledger, path={}, records={}, warnings={}",
        path.display(),
        records.len(),
        warnings.len()
    );

    Ok(Ledger::new(records, warnings))
}

/// Loads a ledger file and keeps the last successful result around so it can
/// be aggregated repeatedly without touching the file again.
///
/// Not meant to be shared between threads; callers serialize access.
pub struct LedgerLoader {
    path: PathBuf,
    columns: LedgerColumns,
    filter: Option<Filter>,
    ledger: Option<Ledger>,
}

impl LedgerLoader {
    pub fn new(path: impl Into<PathBuf>, columns: LedgerColumns) -> LedgerLoader {
        LedgerLoader {
            path: path.into(),
            columns,
            filter: None,
            ledger: None,
        }
    }

    /// Reads the file, replacing whatever was cached before. A failed load
    /// leaves nothing cached.
    pub fn load(&mut self, filter: Option<Filter>) -> Result<&Ledger, LoadError> {
        self.ledger = None;
        let ledger = load_ledger(&self.path, &self.columns, filter.as_ref())?;
        self.filter = filter;

        Ok(&*self.ledger.insert(ledger))
    }

    /// Reads the file again with the filter of the last load.
    pub fn reload(&mut self) -> Result<&Ledger, LoadError> {
        let filter = self.filter.clone();
        self.load(filter)
    }

    /// The cached ledger. `Some` after any successful load, even one that
    /// produced no records.
    pub fn ledger(&self) -> Option<&Ledger> {
        self.ledger.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.ledger.is_some()
    }

    pub fn warnings(&self) -> &[ValueParseWarning] {
        self.ledger.as_ref().map(Ledger::warnings).unwrap_or_default()
    }

    /// The cached ledger, loading the whole file without a filter first if
    /// nothing has been loaded yet.
    pub fn ledger_or_load(&mut self) -> Result<&Ledger, LoadError> {
        match self.ledger.take() {
            Some(ledger) => Ok(&*self.ledger.insert(ledger)),
            None => {
                debug!("no ledger cached, loading {}", self.path.display());
                self.load(None)
            },
        }
    }

    pub fn totals_by_category(&mut self) -> Result<CategoryTotals, LoadError> {
        Ok(accounting::totals_by_category(self.ledger_or_load()?))
    }

    pub fn percentages_by_category(&mut self) -> Result<CategoryPercentages, LoadError> {
        Ok(accounting::percentages_by_category(self.ledger_or_load()?))
    }

    pub fn into_ledger(self) -> Option<Ledger> {
        self.ledger
    }
}

/// Writes `report` to `path` in the given format.
///
/// The file is rendered in memory, written next to the destination under a
/// temporary name and then renamed over it, so a failed export never leaves a
/// partial file at `path`.
pub fn export_report(report: &Report, format: ExportFormat, currency: &str, path: &Path) -> Result<(), ExportError> {
    let exporter = Exporter::new(format, currency);
    let contents = exporter.render(report)?;

    let temp_path = temp_path_for(path);
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(&contents)?;
        file.sync_all()
    });
    if let Err(err) = written.and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(ExportError::Io {
            path: path.to_path_buf(),
            source: err,
        });
    }

    info!("exported report, path={}, format={}", path.display(), format);

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(OsString::from).unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
