//! Address extract CSV parser.
//!
//! Reads G-NAF style CSV extracts (one row per address, columns named
//! after the G-NAF address view) and yields [`AddressRecord`]s for
//! indexing.

use std::io::Read;
use std::path::Path;

use address_lookup_models::AddressRecord;
use serde::Deserialize;

/// A raw row from an address extract CSV file.
#[derive(Debug, Deserialize)]
pub struct AddressRow {
    /// Persisted address id.
    pub address_detail_pid: String,
    /// Building name.
    #[serde(default)]
    pub building_name: String,
    /// Flat type.
    #[serde(default)]
    pub flat_type: String,
    /// Flat number.
    #[serde(default)]
    pub flat_number: String,
    /// First street number.
    #[serde(default)]
    pub number_first: String,
    /// Last street number.
    #[serde(default)]
    pub number_last: String,
    /// Street name.
    #[serde(default)]
    pub street_name: String,
    /// Street type code.
    #[serde(default)]
    pub street_type_code: String,
    /// Locality name.
    #[serde(default)]
    pub locality_name: String,
    /// State abbreviation.
    #[serde(default)]
    pub state_abbreviation: String,
    /// Postcode.
    #[serde(default)]
    pub postcode: String,
    /// Latitude.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude.
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl AddressRow {
    /// Converts this raw row into an address record.
    ///
    /// Returns `None` if the row has no id or no street name, or carries
    /// out-of-range coordinates.
    #[must_use]
    pub fn to_record(&self) -> Option<AddressRecord> {
        let id = self.address_detail_pid.trim();
        let street_name = self.street_name.trim();
        if id.is_empty() || street_name.is_empty() {
            return None;
        }

        let latitude = self.latitude.filter(|lat| (-90.0..=90.0).contains(lat));
        let longitude = self.longitude.filter(|lon| (-180.0..=180.0).contains(lon));
        if latitude.is_some() != self.latitude.is_some()
            || longitude.is_some() != self.longitude.is_some()
        {
            return None;
        }

        Some(AddressRecord {
            id: id.to_string(),
            building_name: self.building_name.trim().to_string(),
            flat_type: self.flat_type.trim().to_string(),
            flat_number: self.flat_number.trim().to_string(),
            number_first: self.number_first.trim().to_string(),
            number_last: self.number_last.trim().to_string(),
            street_name: street_name.to_string(),
            street_type: self.street_type_code.trim().to_string(),
            locality_name: self.locality_name.trim().to_string(),
            state: self.state_abbreviation.trim().to_string(),
            postcode: self.postcode.trim().to_string(),
            latitude,
            longitude,
        })
    }
}

/// Errors from address extract parsing.
#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    /// CSV parsing error.
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// Path to the CSV file.
        path: String,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// I/O error reading the file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that caused the error.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// File does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Counts from one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseCounts {
    /// Rows turned into records.
    pub records: u64,
    /// Rows skipped as malformed or unusable.
    pub skipped: u64,
}

/// Parses an address extract CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn parse_file(
    path: &Path,
    mut on_record: impl FnMut(AddressRecord),
) -> Result<ParseCounts, RecordsError> {
    if !path.exists() {
        return Err(RecordsError::FileNotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path).map_err(|e| RecordsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let counts = parse_reader(file, &mut on_record);
    log::info!(
        "Parsed {} records from {} ({} skipped)",
        counts.records,
        path.display(),
        counts.skipped
    );

    Ok(counts)
}

/// Parses address rows from any reader, skipping rows that cannot be
/// used.
pub fn parse_reader(reader: impl Read, on_record: &mut impl FnMut(AddressRecord)) -> ParseCounts {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut counts = ParseCounts::default();
    for result in csv_reader.deserialize::<AddressRow>() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::trace!("  skipping malformed row: {e}");
                counts.skipped += 1;
                continue;
            }
        };

        if let Some(record) = row.to_record() {
            on_record(record);
            counts.records += 1;
        } else {
            log::trace!("  skipping unusable row {}", row.address_detail_pid);
            counts.skipped += 1;
        }
    }

    counts
}

/// Reads every usable record from CSV text.
#[must_use]
pub fn records_from_str(csv_text: &str) -> Vec<AddressRecord> {
    let mut records = Vec::new();
    parse_reader(csv_text.as_bytes(), &mut |record| records.push(record));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../data/sample_addresses.csv");

    #[test]
    fn parses_sample_extract() {
        let mut records = Vec::new();
        let counts = parse_reader(SAMPLE.as_bytes(), &mut |r| records.push(r));
        assert_eq!(counts.records, 10);
        assert_eq!(counts.skipped, 1);

        let first = &records[0];
        assert_eq!(first.id, "GAQLD155116960");
        assert_eq!(first.flat_number, "45");
        assert_eq!(first.street_type, "STREET");
        assert_eq!(first.locality_name, "MAIN BEACH");
        assert!(first.latitude.is_some());
    }

    #[test]
    fn skips_rows_without_street_name() {
        let csv = "address_detail_pid,street_name,number_first\nA1,,5\nA2,SMITH,7\n";
        let records = records_from_str(csv);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "A2");
        assert!(records[0].latitude.is_none());
    }

    #[test]
    fn skips_out_of_range_coordinates() {
        let csv = "address_detail_pid,street_name,latitude,longitude\nA1,SMITH,95.0,10.0\n";
        assert!(records_from_str(csv).is_empty());
    }

    #[test]
    fn missing_file_is_reported() {
        let result = parse_file(Path::new("/definitely/not/here.csv"), |_| {});
        assert!(matches!(result, Err(RecordsError::FileNotFound(_))));
    }
}
