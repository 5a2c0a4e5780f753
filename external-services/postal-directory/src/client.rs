use async_trait::async_trait;
use error_common::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One directory record, field names mapped from the directory's wire
/// format. Serialization keeps the wire names so the payload passes through
/// the API unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "logradouro", default)]
    pub street: String,
    #[serde(rename = "complemento", default)]
    pub complement: String,
    #[serde(rename = "bairro", default)]
    pub district: String,
    #[serde(rename = "localidade", default)]
    pub city: String,
    #[serde(rename = "uf", default)]
    pub state: String,
    #[serde(default)]
    pub ibge: String,
    #[serde(default)]
    pub gia: String,
    #[serde(default)]
    pub ddd: String,
    #[serde(default)]
    pub siafi: String,
}

/// External directory port. `code` is already normalized (8 ASCII digits).
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    async fn lookup(&self, code: &str) -> Result<DirectoryEntry>;
}

/// HTTP implementation against a ViaCEP-style directory.
pub struct HttpDirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpDirectoryClient {
    fn default() -> Self {
        Self::new("https://viacep.com.br")
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn lookup(&self, code: &str) -> Result<DirectoryEntry> {
        let url = format!("{}/ws/{}/json/", self.base_url, code);
        debug!(url = %url, "directory lookup");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::external(format!("directory request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ServiceError::external(format!(
                "directory answered status {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ServiceError::external(format!("directory payload unreadable: {e}")))?;

        // The directory answers a well-formed body with `"erro": true` for
        // codes it does not know
        if payload.get("erro").and_then(|v| v.as_bool()) == Some(true) {
            return Err(ServiceError::not_found(format!("postal code not found: {code}")));
        }

        serde_json::from_value(payload)
            .map_err(|e| ServiceError::external(format!("directory payload unreadable: {e}")))
    }
}
