use crate::oui_entry::OuiEntry;
use std::collections::HashMap;

/// Name of the bundled dataset resource.
pub const OUI_RESOURCE_NAME: &str = "oui.json";

/// OUI key (6 hex characters, case as sourced) to company description.
pub type OuiMapping = HashMap<String, String>;

/// Projects a mapping into entries sorted ascending by `id`.
///
/// Ordering is byte-wise and case-sensitive, so `"0A0000"` sorts before
/// `"0a0000"`. Keys are unique in the mapping, which makes the order total
/// and therefore stable across calls.
pub fn entries_from_mapping(mapping: OuiMapping) -> Vec<OuiEntry> {
    let mut entries: Vec<OuiEntry> = mapping
        .into_iter()
        .map(|(id, company_info)| OuiEntry { id, company_info })
        .collect();
    entries.sort_unstable_by(|a, b| a.id.cmp(&b.id));
    entries
}
