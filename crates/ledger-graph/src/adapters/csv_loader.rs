//! CSV transfer log loader
//!
//! Expects a header row followed by `amount,sender,receiver` rows. Extra
//! columns are ignored.

use crate::domain::errors::LoadError;
use crate::domain::value_objects::TransferRecord;
use crate::ports::outbound::TransferSource;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

enum Input {
    Path(PathBuf),
    Reader(Option<Box<dyn Read>>),
}

/// Loads transfer records from CSV
pub struct CsvTransferSource {
    input: Input,
}

impl CsvTransferSource {
    /// Read from a file. The file is opened by `load` and closed before it returns.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            input: Input::Path(path.as_ref().to_path_buf()),
        }
    }

    /// Read from an arbitrary reader. It is consumed by the first `load`.
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self {
            input: Input::Reader(Some(Box::new(reader))),
        }
    }
}

impl TransferSource for CsvTransferSource {
    fn load(&mut self) -> Result<Vec<TransferRecord>, LoadError> {
        match &mut self.input {
            Input::Path(path) => {
                let file = File::open(&*path)?;
                let records = parse_records(file)?;
                info!(path = %path.display(), records = records.len(), "Loaded transfer log");
                Ok(records)
            }
            Input::Reader(reader) => match reader.take() {
                Some(reader) => parse_records(reader),
                None => Ok(Vec::new()),
            },
        }
    }
}

/// Parse `amount,sender,receiver` rows after a header row.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<TransferRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() < 3 {
            return Err(LoadError::MalformedRow {
                line,
                found: row.len(),
            });
        }

        // Identifiers are kept verbatim; only the amount tolerates padding.
        let amount: f64 = row[0].trim().parse().map_err(|_| LoadError::Parse {
            line,
            value: row[0].to_string(),
        })?;

        let record = TransferRecord::from_row(amount, &row[1], &row[2]);
        record
            .validate()
            .map_err(|source| LoadError::InvalidRecord { line, source })?;

        records.push(record);
    }

    debug!(records = records.len(), "Parsed transfer rows");
    Ok(records)
}
