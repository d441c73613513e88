//! CSV rendering of an experience record.
//!
//! One header row (field names, in insertion order) and one data row (each
//! value's textual form). Quoting and escaping follow the `csv` crate
//! defaults, so embedded commas, quotes, and newlines survive a round trip.

use wfc_core::Record;

use crate::error::ExportError;

/// Render `record` as a two-row CSV string.
pub fn generate_csv(record: &Record) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(record.field_names())?;
    let row: Vec<String> = record.iter().map(|(_, value)| value.display_text()).collect();
    writer.write_record(&row)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| ExportError::Csv(e.to_string()))
}

/// UTF-8 bytes of [`generate_csv`].
pub fn csv_bytes(record: &Record) -> Result<Vec<u8>, ExportError> {
    generate_csv(record).map(String::into_bytes)
}

/// Parse a CSV string into headers and rows.
///
/// The first record is treated as the header row. Used by the round-trip
/// tests and by consumers re-ingesting a downloaded export.
pub fn parse_csv(input: &str) -> Result<(Vec<String>, Vec<Vec<String>>), ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok((headers, rows))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use wfc_core::record::fields;
    use wfc_core::{FieldValue, HandbookRatings};

    fn minimal_record() -> Record {
        let mut record = Record::new();
        record.push(fields::CUSTOMER_SERVICE_RATING, FieldValue::Number(4));
        record.push(
            fields::CUSTOMER_SERVICE_FEEDBACK,
            FieldValue::Text("Great help".into()),
        );
        record.push(fields::EMPLOYEE_NAMES, FieldValue::NameSequence(vec![]));
        record
    }

    #[test]
    fn test_header_matches_insertion_order() {
        let csv_text = generate_csv(&minimal_record()).unwrap();
        let (headers, rows) = parse_csv(&csv_text).unwrap();
        assert_eq!(
            headers,
            vec![
                "Customer Service Rating",
                "Customer Service Feedback",
                "Employee Names",
            ]
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), headers.len());
    }

    #[test]
    fn test_minimal_record_rows() {
        let csv_text = generate_csv(&minimal_record()).unwrap();
        let lines: Vec<&str> = csv_text.lines().collect();
        assert_eq!(lines[0], "Customer Service Rating,Customer Service Feedback,Employee Names");
        assert_eq!(lines[1], "4,Great help,None");
    }

    #[test]
    fn test_embedded_commas_and_quotes_are_quoted() {
        let mut record = Record::new();
        record.push(
            fields::CUSTOMER_SERVICE_FEEDBACK,
            FieldValue::Text("Helpful, patient, \"thorough\"".into()),
        );
        let csv_text = generate_csv(&record).unwrap();
        let (_, rows) = parse_csv(&csv_text).unwrap();
        assert_eq!(rows[0][0], "Helpful, patient, \"thorough\"");
    }

    #[test]
    fn test_embedded_newline_survives_round_trip() {
        let mut record = Record::new();
        record.push(
            fields::EXPERIENCE_NOTES,
            FieldValue::Text("line one\nline two".into()),
        );
        let csv_text = generate_csv(&record).unwrap();
        let (_, rows) = parse_csv(&csv_text).unwrap();
        assert_eq!(rows[0][0], "line one\nline two");
    }

    #[test]
    fn test_empty_conduct_selection_renders_marker() {
        let mut record = Record::new();
        record.push(
            fields::SELECTED_CODE_OF_CONDUCT,
            FieldValue::ConductSelection(vec![]),
        );
        let csv_text = generate_csv(&record).unwrap();
        assert!(csv_text.lines().nth(1).unwrap().contains("[]"));
    }

    #[test]
    fn test_handbook_ratings_in_single_cell() {
        let mut record = Record::new();
        record.push(
            fields::EMPLOYEE_PERFORMANCE_RATINGS,
            FieldValue::CriterionRatings(HandbookRatings::uniform(5)),
        );
        let csv_text = generate_csv(&record).unwrap();
        let (headers, rows) = parse_csv(&csv_text).unwrap();
        assert_eq!(headers.len(), 1);
        assert!(rows[0][0].contains("Act Professional and with Integrity: 5/10"));
        assert_eq!(rows[0][0].matches("/10").count(), 16);
    }

    #[test]
    fn test_generate_csv_is_deterministic() {
        let record = minimal_record();
        assert_eq!(generate_csv(&record).unwrap(), generate_csv(&record).unwrap());
    }

    #[test]
    fn test_unicode_text_is_fine_in_csv() {
        let mut record = Record::new();
        record.push(
            fields::CUSTOMER_SERVICE_FEEDBACK,
            FieldValue::Text("とても助かりました".into()),
        );
        let csv_text = generate_csv(&record).unwrap();
        assert!(csv_text.contains("とても助かりました"));
    }
}
