//! Shared CSV reader setup.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{FileSourceError, FileSourceResult};

/// Opens `path` for reading.
pub(crate) fn open(path: &Path) -> FileSourceResult<File> {
    File::open(path).map_err(|e| FileSourceError::io(path, e))
}

/// Builds a trimming CSV reader with lower-cased headers and checks that
/// every `required` column is present.
pub(crate) fn csv_reader<R: Read>(
    input: R,
    file: &'static str,
    required: &[&'static str],
) -> FileSourceResult<csv::Reader<R>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    let headers: StringRecord = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(FileSourceError::MissingColumn { file, column });
        }
    }

    reader.set_headers(headers);
    Ok(reader)
}
