// Park catalog CSV reader
// Handles the POTA "all parks" export: header row, comma separated, often
// saved with a UTF-8 byte-order mark by spreadsheet tools.
//
// Only three columns matter:
//   reference     - park reference, e.g. CN-0012
//   name          - park name
//   locationDesc  - comma separated location tokens, e.g. "CN-AH,CN-ZJ"
// Everything else in the export (grid, lat/lon, activation counts) is ignored.

use serde::Deserialize;

use crate::reference;

/// One data row of the export, as read (fields may be missing or empty)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CsvParkRow {
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "locationDesc")]
    pub location_desc: Option<String>,
}

/// A row with all required fields present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkRow<'a> {
    pub reference: &'a str,
    pub name: &'a str,
    pub location_desc: &'a str,
}

impl CsvParkRow {
    /// Required fields, or None if any is missing or empty
    pub fn required(&self) -> Option<ParkRow<'_>> {
        fn non_empty(f: &Option<String>) -> Option<&str> {
            f.as_deref().filter(|s| !s.is_empty())
        }
        Some(ParkRow {
            reference: non_empty(&self.reference)?,
            name: non_empty(&self.name)?,
            location_desc: non_empty(&self.location_desc)?,
        })
    }
}

/// Strip a leading UTF-8 byte-order mark
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Parse CSV text into rows. Ragged rows are tolerated; malformed records
/// (e.g. a header that cannot be read) are errors.
pub fn parse_park_rows(text: &str) -> Result<Vec<CsvParkRow>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(strip_bom(text).as_bytes());

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: CsvParkRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Province codes mentioned in a locationDesc field, in order of appearance.
/// Tokens are trimmed; anything that is not a known code is dropped.
pub fn extract_provinces(location_desc: &str) -> Vec<String> {
    location_desc
        .split(',')
        .map(str::trim)
        .filter(|token| reference::is_province_code(token))
        .map(String::from)
        .collect()
}
