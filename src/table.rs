/*!
# Table IO

Reads one text column out of a CSV table and writes the keyword list back
out as a one-column CSV.
*/

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tempfile::NamedTempFile;

use crate::errors::{KeywordError, Result};
use crate::pipeline::artifacts::Corpus;

/// Cell values treated as missing.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Header written above the keyword column by default.
pub const DEFAULT_OUTPUT_HEADER: &str = "keywords";

/// How input tables are parsed
#[derive(Debug, Clone)]
pub struct CsvTableOptions {
    pub delimiter: u8,
    pub na_values: Vec<String>,
}

impl Default for CsvTableOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CsvTableOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Whether a raw cell counts as missing
    pub fn is_null(&self, cell: &str) -> bool {
        self.na_values.iter().any(|na| na == cell)
    }
}

/// Read the non-null cells of `column` from a CSV file.
pub fn read_text_column_from_path(
    path: impl AsRef<Path>,
    column: &str,
    options: &CsvTableOptions,
) -> Result<Corpus> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), column, "reading input table");
    let file = File::open(path)?;
    read_text_column(file, column, options)
}

/// Read the non-null cells of `column` from CSV data with a header row.
///
/// Rows shorter than the header contribute nothing for the missing cell.
pub fn read_text_column<R: Read>(
    reader: R,
    column: &str,
    options: &CsvTableOptions,
) -> Result<Corpus> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let idx = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| KeywordError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })?;

    let mut cells = Vec::new();
    let mut rows = 0usize;
    for result in reader.records() {
        let record = result?;
        rows += 1;
        if let Some(cell) = record.get(idx) {
            if !options.is_null(cell) {
                cells.push(cell.to_string());
            }
        }
    }

    tracing::debug!(rows, non_null = cells.len(), "collected text column");
    Ok(Corpus::new(cells))
}

/// Write keywords as a single-column CSV.
pub fn write_keywords<W: Write, S: AsRef<str>>(writer: W, header: &str, keywords: &[S]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record([header])?;
    for keyword in keywords {
        writer.write_record([keyword.as_ref()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write keywords to `path`.
///
/// The file is written to a temporary file next to `path` and renamed into
/// place only once complete, so a failed run leaves no partial output.
pub fn write_keywords_to_path<S: AsRef<str>>(
    path: impl AsRef<Path>,
    header: &str,
    keywords: &[S],
) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_keywords(&mut tmp, header, keywords)?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), count = keywords.len(), "wrote keywords");
    Ok(())
}
