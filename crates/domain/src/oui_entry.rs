use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Length of an OUI key in hex characters (24 bits).
pub const OUI_KEY_LEN: usize = 6;

/// A single vendor record, projected from the OUI mapping for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OuiEntry {
    pub id: String,
    pub company_info: String,
}

impl OuiEntry {
    pub fn new(id: impl Into<String>, company_info: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            company_info: company_info.into(),
        }
    }

    /// True when `id` is exactly six ASCII hex digits. Case is not checked.
    pub fn is_valid_id(id: &str) -> bool {
        id.len() == OUI_KEY_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn validate_id(id: &str) -> Result<(), DomainError> {
        if id.is_empty() {
            return Err(DomainError::InvalidOui("OUI cannot be empty".to_string()));
        }

        if id.len() != OUI_KEY_LEN {
            return Err(DomainError::InvalidOui(format!(
                "{} must be {} characters, got {}",
                id,
                OUI_KEY_LEN,
                id.len()
            )));
        }

        if !Self::is_valid_id(id) {
            return Err(DomainError::InvalidOui(format!(
                "{} contains non-hexadecimal characters",
                id
            )));
        }

        Ok(())
    }

    pub fn validate_company_info(id: &str, company_info: &str) -> Result<(), DomainError> {
        if company_info.trim().is_empty() {
            return Err(DomainError::InvalidCompanyInfo(id.to_string()));
        }
        Ok(())
    }

    /// Registered organization name: the first line of `company_info`.
    pub fn organization(&self) -> &str {
        self.company_info.lines().next().unwrap_or_default().trim()
    }
}
