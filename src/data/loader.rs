use thiserror::Error;

use super::model::{LicenseTable, Record};

/// Columns every upload must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Provider", "Specialty", "Licenses"];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed input: missing required column(s) {}", .missing.join(", "))]
    MalformedInput { missing: Vec<String> },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse an uploaded CSV.
///
/// The header row must name `Provider`, `Specialty` and `Licenses`; any other
/// columns are ignored. `Licenses` holds comma-separated state codes and may
/// be blank.
pub fn load_bytes(bytes: &[u8]) -> Result<LicenseTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(bytes);

    let headers: csv::ByteRecord = reader
        .byte_headers()?
        .iter()
        .map(|h| h.strip_prefix(UTF8_BOM).unwrap_or(h))
        .collect();
    let columns = Columns::locate(&headers)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.byte_records().enumerate() {
        let raw = result?;
        let licenses = match raw.get(columns.licenses).map(std::str::from_utf8) {
            Some(Ok(cell)) => split_licenses(Some(cell)),
            Some(Err(e)) => {
                log::warn!("CSV row {row_no}: Licenses is not UTF-8 ({e}); keeping the row without licenses");
                Vec::new()
            }
            None => Vec::new(),
        };
        records.push(Record {
            provider: lossy_cell(&raw, columns.provider),
            specialty: lossy_cell(&raw, columns.specialty),
            licenses,
        });
    }

    Ok(LicenseTable::from_records(records))
}

/// Split a raw `Licenses` cell into trimmed, non-empty tokens.
///
/// A missing or blank cell yields an empty list.
pub fn split_licenses(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|tok| !tok.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Row decoding
// ---------------------------------------------------------------------------

/// Positions of the required columns. A repeated header name resolves to
/// its first occurrence.
struct Columns {
    provider: usize,
    specialty: usize,
    licenses: usize,
}

impl Columns {
    fn locate(headers: &csv::ByteRecord) -> Result<Self, LoadError> {
        let position = |name: &str| headers.iter().position(|h| h == name.as_bytes());
        let found = REQUIRED_COLUMNS.map(position);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .zip(&found)
            .filter(|(_, idx)| idx.is_none())
            .map(|(col, _)| col.to_string())
            .collect();

        match found {
            [Some(provider), Some(specialty), Some(licenses)] => Ok(Columns {
                provider,
                specialty,
                licenses,
            }),
            _ => Err(LoadError::MalformedInput { missing }),
        }
    }
}

/// Cell text with invalid UTF-8 replaced; a short row reads as empty.
fn lossy_cell(raw: &csv::ByteRecord, idx: usize) -> String {
    raw.get(idx)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_and_trims_license_tokens() {
        let table = load_bytes(
            b"Provider,Specialty,Licenses\n\
              Dr. A,Cardiology,\"TX, CA\"\n\
              Dr. B,Neurology,TX\n",
        )
        .unwrap();
        assert_eq!(
            table.records,
            vec![
                Record::new("Dr. A", "Cardiology", &["TX", "CA"]),
                Record::new("Dr. B", "Neurology", &["TX"]),
            ]
        );
    }

    #[test]
    fn blank_licenses_become_empty_sequence() {
        let table = load_bytes(
            b"Provider,Specialty,Licenses\n\
              Dr. A,Cardiology,\n\
              Dr. B,Neurology,\"  \"\n\
              Dr. C,Oncology\n",
        )
        .unwrap();
        for record in &table.records {
            assert!(record.licenses.is_empty(), "{record:?}");
        }
    }

    #[test]
    fn split_never_yields_empty_tokens() {
        assert_eq!(split_licenses(None), Vec::<String>::new());
        assert_eq!(split_licenses(Some("")), Vec::<String>::new());
        assert_eq!(split_licenses(Some(" , ,")), Vec::<String>::new());
        assert_eq!(split_licenses(Some("TX,,CA,")), vec!["TX", "CA"]);
    }

    #[test]
    fn passes_unknown_codes_and_casing_through() {
        let table = load_bytes(b"Provider,Specialty,Licenses\nDr. A,Cardiology,\"tx,PR,ZZ\"\n")
            .unwrap();
        assert_eq!(table.records[0].licenses, vec!["tx", "PR", "ZZ"]);
    }

    #[test]
    fn extra_columns_and_padded_headers_are_accepted() {
        let table = load_bytes(
            b"\xEF\xBB\xBFNPI, Provider ,Specialty,Licenses,Notes\n\
              123,Dr. A,Cardiology,NY,remote\n",
        )
        .unwrap();
        assert_eq!(table.records, vec![Record::new("Dr. A", "Cardiology", &["NY"])]);
    }

    #[test]
    fn missing_columns_are_malformed_input() {
        let err = load_bytes(b"Provider,States\nDr. A,TX\n").unwrap_err();
        match err {
            LoadError::MalformedInput { missing } => {
                assert_eq!(missing, vec!["Specialty", "Licenses"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_upload_is_malformed_input() {
        assert!(matches!(
            load_bytes(b""),
            Err(LoadError::MalformedInput { .. })
        ));
    }

    #[test]
    fn undecodable_provider_keeps_its_licenses() {
        let table = load_bytes(b"Provider,Specialty,Licenses\nDr. \xFFA,Cardiology,\"TX,CA\"\n")
            .unwrap();
        assert_eq!(table.records[0].provider, "Dr. \u{FFFD}A");
        assert_eq!(table.records[0].licenses, vec!["TX", "CA"]);
    }

    #[test]
    fn repeated_header_uses_first_column() {
        let table = load_bytes(
            b"Provider,Specialty,Licenses,Licenses\n\
              Dr. A,Cardiology,\"TX,CA\",NY\n",
        )
        .unwrap();
        assert_eq!(table.records, vec![Record::new("Dr. A", "Cardiology", &["TX", "CA"])]);
    }

    #[test]
    fn undecodable_licenses_degrade_to_empty() {
        let table = load_bytes(b"Provider,Specialty,Licenses\nDr. A,Cardiology,T\xFFX\nDr. B,Neurology,CA\n")
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].provider, "Dr. A");
        assert!(table.records[0].licenses.is_empty());
        assert_eq!(table.records[1].licenses, vec!["CA"]);
    }
}
