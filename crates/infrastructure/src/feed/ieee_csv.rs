use oui_data_domain::{DomainError, OuiEntry, OuiMapping};
use tracing::debug;

// Registry,Assignment,Organization Name,Organization Address
const ASSIGNMENT_COL: usize = 1;
const NAME_COL: usize = 2;
const ADDRESS_COL: usize = 3;

/// Parses the IEEE MA-L registry CSV export into an OUI mapping.
///
/// Keys are the upper-cased assignment. The value is the organization name,
/// followed by the address on a new line when one is published. Rows without
/// a 6-digit hex assignment or an organization name are skipped; when an
/// assignment repeats, the last row wins.
pub fn parse_ieee_csv(text: &str) -> Result<OuiMapping, DomainError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut mapping = OuiMapping::new();
    let mut skipped = 0usize;

    for (row, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| DomainError::FeedError(format!("malformed CSV at row {}: {}", row + 1, e)))?;

        let assignment = record.get(ASSIGNMENT_COL).unwrap_or_default();
        let name = record.get(NAME_COL).unwrap_or_default();
        let address = record.get(ADDRESS_COL).unwrap_or_default();

        if !OuiEntry::is_valid_id(assignment) || name.is_empty() {
            skipped += 1;
            continue;
        }

        let company_info = if address.is_empty() {
            name.to_string()
        } else {
            format!("{}\n{}", name, address)
        };

        mapping.insert(assignment.to_ascii_uppercase(), company_info);
    }

    debug!(entries = mapping.len(), skipped, "IEEE registry CSV parsed");
    Ok(mapping)
}
