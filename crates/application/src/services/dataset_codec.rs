use oui_data_domain::{DomainError, OuiMapping};
use std::collections::BTreeMap;

/// Decodes `oui.json` bytes into the canonical mapping.
///
/// The top-level value must be an object whose members are all strings.
/// Keys and values are returned exactly as decoded.
pub fn decode_mapping(bytes: &[u8]) -> Result<OuiMapping, DomainError> {
    serde_json::from_slice::<OuiMapping>(bytes).map_err(|e| DomainError::DecodeError(e.to_string()))
}

/// Encodes a mapping in the published `oui.json` layout: keys ascending,
/// two-space indentation, no trailing newline.
pub fn encode_mapping(mapping: &OuiMapping) -> Result<String, DomainError> {
    let ordered: BTreeMap<&str, &str> = mapping
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    serde_json::to_string_pretty(&ordered).map_err(|e| DomainError::WriteError(e.to_string()))
}
