//! Research Ingest
//!
//! Resolves an uploaded file's format from its filename extension and
//! parses the raw bytes into a JSON payload for the research envelope.
//!
//! The format is a closed set: JSON, GeoJSON (JSON-compatible, kept
//! distinct for the API message), CSV and Excel. Tabular inputs become
//! an array of column-name to value objects, one per row.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("{0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Upload format, resolved once from the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Json,
    GeoJson,
    Csv,
    Excel,
}

impl UploadFormat {
    /// Resolve from the text after the last `.` of the lowercased
    /// filename. A name without a dot is treated as its own extension,
    /// so it fails the same way a wrong extension does.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let lowered = filename.to_lowercase();
        let ext = lowered.rsplit('.').next().unwrap_or_default();

        match ext {
            "json" => Ok(UploadFormat::Json),
            "geojson" => Ok(UploadFormat::GeoJson),
            "csv" => Ok(UploadFormat::Csv),
            "xls" | "xlsx" => Ok(UploadFormat::Excel),
            other => Err(IngestError::UnsupportedFileType(other.to_string())),
        }
    }

    /// Parse raw upload bytes into the envelope payload.
    pub fn parse(&self, bytes: &[u8]) -> Result<Value> {
        match self {
            UploadFormat::Json | UploadFormat::GeoJson => {
                serde_json::from_slice(bytes).map_err(|e| IngestError::Parse(e.to_string()))
            }
            UploadFormat::Csv => parse_csv(bytes),
            UploadFormat::Excel => parse_excel(bytes),
        }
    }
}

fn parse_csv(bytes: &[u8]) -> Result<Value> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| IngestError::Parse(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Parse(e.to_string()))?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, field)| (header.to_string(), csv_cell(field)))
            .collect();
        rows.push(Value::Object(row));
    }
    Ok(Value::Array(rows))
}

/// CSV carries no types; infer integers and floats, keep the rest as text.
fn csv_cell(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    Value::String(raw.to_string())
}

fn parse_excel(bytes: &[u8]) -> Result<Value> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| IngestError::Parse(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::Parse("workbook has no sheets".to_string()))?
        .map_err(|e| IngestError::Parse(e.to_string()))?;

    let mut row_iter = range.rows();
    let headers: Vec<String> = match row_iter.next() {
        Some(row) => row.iter().map(|cell| cell.to_string()).collect(),
        None => return Ok(Value::Array(Vec::new())),
    };

    let mut rows = Vec::new();
    for row in row_iter {
        let entry: Map<String, Value> = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.clone(), excel_cell(cell)))
            .collect();
        rows.push(Value::Object(entry));
    }
    Ok(Value::Array(rows))
}

fn excel_cell(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Float(f) => Value::from(*f),
        Data::Int(i) => Value::from(*i),
        Data::Bool(b) => Value::Bool(*b),
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(UploadFormat::from_filename("a.json").unwrap(), UploadFormat::Json);
        assert_eq!(
            UploadFormat::from_filename("Survey.GEOJSON").unwrap(),
            UploadFormat::GeoJson
        );
        assert_eq!(UploadFormat::from_filename("rows.csv").unwrap(), UploadFormat::Csv);
        assert_eq!(UploadFormat::from_filename("wb.xlsx").unwrap(), UploadFormat::Excel);
        assert_eq!(UploadFormat::from_filename("wb.xls").unwrap(), UploadFormat::Excel);
    }

    #[test]
    fn test_unsupported_extension_carried_in_error() {
        match UploadFormat::from_filename("notes.txt") {
            Err(IngestError::UnsupportedFileType(ext)) => assert_eq!(ext, "txt"),
            other => panic!("expected UnsupportedFileType, got {:?}", other),
        }
    }

    #[test]
    fn test_name_without_extension_rejected() {
        assert!(matches!(
            UploadFormat::from_filename("README"),
            Err(IngestError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_json_parse() {
        let value = UploadFormat::Json.parse(br#"{"x": 1}"#).unwrap();
        assert_eq!(value, json!({"x": 1}));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            UploadFormat::Json.parse(b"{not json"),
            Err(IngestError::Parse(_))
        ));
    }

    #[test]
    fn test_csv_rows_become_objects() {
        let csv = b"station,depth,notes\nA1,42,ok\nB2,7.5,shallow\n";
        let value = UploadFormat::Csv.parse(csv).unwrap();
        assert_eq!(
            value,
            json!([
                {"station": "A1", "depth": 42, "notes": "ok"},
                {"station": "B2", "depth": 7.5, "notes": "shallow"},
            ])
        );
    }

    #[test]
    fn test_geojson_is_parsed_as_json() {
        let geojson = br#"{"type": "FeatureCollection", "features": []}"#;
        let value = UploadFormat::GeoJson.parse(geojson).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
    }

    #[test]
    fn test_excel_garbage_is_parse_error() {
        assert!(matches!(
            UploadFormat::Excel.parse(b"definitely not a workbook"),
            Err(IngestError::Parse(_))
        ));
    }
}
