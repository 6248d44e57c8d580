//! Table export: XLSX, CSV and JSON.
//!
//! Every format has the same layout: a header of `URL` followed by the
//! selected field labels in selection order, then one line per row. Counts
//! are written as numbers and sentinels as text.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::fields::{dedup_fields, Field, FieldValue, URL_LABEL};
use crate::result::ResultRow;

/// Name of the single worksheet in XLSX output.
pub const SHEET_NAME: &str = "SEO";

/// Errors raised while writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format `{other}` (expected xlsx, csv or json)")),
        }
    }
}

/// `seo_extract_<YYYYmmdd_HHMMSS>.<ext>` for the given time.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rs_seo_extractor::export::{default_file_name, ExportFormat};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 1).unwrap();
/// assert_eq!(default_file_name(ExportFormat::Xlsx, &at), "seo_extract_20240305_090701.xlsx");
/// ```
#[must_use]
pub fn default_file_name<Tz>(format: ExportFormat, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "seo_extract_{}.{}",
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Header labels: `URL` then `fields`.
#[must_use]
pub fn header(fields: &[Field]) -> Vec<&'static str> {
    std::iter::once(URL_LABEL)
        .chain(dedup_fields(fields).into_iter().map(Field::label))
        .collect()
}

/// Cell values of `row` in column order, as text.
fn row_cells(row: &ResultRow, fields: &[Field]) -> Vec<String> {
    std::iter::once(row.url.clone())
        .chain(
            dedup_fields(fields)
                .into_iter()
                .map(|field| row.get(field).map(ToString::to_string).unwrap_or_default()),
        )
        .collect()
}

/// Write rows in `format` to `writer`.
pub fn write<W: Write>(
    format: ExportFormat,
    rows: &[ResultRow],
    fields: &[Field],
    mut writer: W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_csv(rows, fields, writer),
        ExportFormat::Json => write_json(rows, writer),
        ExportFormat::Xlsx => {
            writer.write_all(&xlsx_bytes(rows, fields)?)?;
            writer.flush()?;
            Ok(())
        }
    }
}

/// Write rows as CSV.
pub fn write_csv<W: Write>(rows: &[ResultRow], fields: &[Field], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(header(fields))?;
    for row in rows {
        wtr.write_record(row_cells(row, fields))?;
    }
    wtr.flush()?;
    tracing::debug!(rows = rows.len(), "exported CSV");
    Ok(())
}

/// Write rows as a pretty-printed JSON array of objects.
pub fn write_json<W: Write>(rows: &[ResultRow], mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    tracing::debug!(rows = rows.len(), "exported JSON");
    Ok(())
}

/// Build a one-sheet XLSX workbook in memory.
pub fn xlsx_bytes(rows: &[ResultRow], fields: &[Field]) -> Result<Vec<u8>, ExportError> {
    let fields = dedup_fields(fields);
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, label) in (0u16..).zip(header(&fields)) {
        sheet.write_string_with_format(0, col, label, &bold)?;
    }

    for (row_idx, row) in (1u32..).zip(rows) {
        sheet.write_string(row_idx, 0, row.url.as_str())?;
        for (col, field) in (1u16..).zip(&fields) {
            match row.get(*field) {
                Some(FieldValue::Count(n)) => {
                    #[allow(clippy::cast_precision_loss)]
                    let number = *n as f64;
                    sheet.write_number(row_idx, col, number)?;
                }
                Some(value) => {
                    sheet.write_string(row_idx, col, value.to_string())?;
                }
                None => {}
            }
        }
    }

    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(rows = rows.len(), bytes = buffer.len(), "exported XLSX");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, RequestFailure};
    use crate::result::ExtractionRecord;

    fn rows(fields: &[Field]) -> Vec<ResultRow> {
        let ok = ExtractionRecord {
            url: "https://a.com/".into(),
            h1: "Hello, world".into(),
            meta_title: "T".into(),
            ..ExtractionRecord::default()
        }
        .project(fields);
        let failed = ResultRow::failed(
            "b.com",
            fields,
            Error::Request {
                url: "b.com".into(),
                cause: RequestFailure::Connect,
            },
        );
        vec![ok, failed]
    }

    #[test]
    fn csv_layout() {
        let fields = [Field::MetaTitleLength, Field::H1];
        let mut out = Vec::new();
        write_csv(&rows(&fields), &fields, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "URL,Meta title length,H1\n\
             https://a.com/,1,\"Hello, world\"\n\
             b.com,ERROR: RequestError,ERROR: RequestError\n"
        );
    }

    #[test]
    fn csv_header_only_for_empty_batch() {
        let mut out = Vec::new();
        write_csv(&[], &[Field::Canonical], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "URL,Canonical\n");
    }

    #[test]
    fn json_layout() {
        let fields = [Field::H1];
        let mut out = Vec::new();
        write_json(&rows(&fields), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["URL"], "https://a.com/");
        assert_eq!(value[0]["H1"], "Hello, world");
        assert_eq!(value[1]["H1"], "ERROR: RequestError");
    }

    #[test]
    fn xlsx_is_a_zip_archive() {
        let fields = Field::ALL;
        let bytes = xlsx_bytes(&rows(&fields), &fields).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn format_parsing() {
        assert_eq!("XLSX".parse::<ExportFormat>(), Ok(ExportFormat::Xlsx));
        assert_eq!("csv".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn header_collapses_duplicates() {
        assert_eq!(header(&[Field::H2, Field::H2, Field::H1]), vec!["URL", "H2", "H1"]);
    }
}
