use std::sync::Arc;

use error_common::{Result, ServiceError};

use crate::client::{DirectoryClient, DirectoryEntry};

/// Strip spaces and hyphens, then require exactly 8 ASCII digits.
pub fn normalize(raw: &str) -> Result<String> {
    let cleaned = raw.replace(' ', "").replace('-', "");
    if cleaned.len() != 8 || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::invalid_format(
            "postal code must contain exactly 8 digits",
        ));
    }
    Ok(cleaned)
}

/// Stateless validation gate in front of the external directory.
pub struct PostalService {
    client: Arc<dyn DirectoryClient>,
}

impl PostalService {
    pub fn new(client: Arc<dyn DirectoryClient>) -> Self {
        Self { client }
    }

    /// Normalize `raw` and delegate to the directory, returning its entry
    /// unchanged.
    pub async fn normalize_and_lookup(&self, raw: &str) -> Result<DirectoryEntry> {
        let code = normalize(raw)?;
        self.client.lookup(&code).await
    }
}
