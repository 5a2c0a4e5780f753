use std::sync::Arc;

use anyhow::Result;
use auth_identity::{
    Argon2Encoder, IdentityConfig, IdentityService, InMemoryAccountRepository, JwtCodec,
    PostgresAccountRepository,
};
use contact_records::{
    ContactService, InMemoryAddressRepository, InMemoryPhoneRepository,
    PostgresAddressRepository, PostgresPhoneRepository,
};
use postal_directory::{HttpDirectoryClient, PostalService};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Postgres connection string; absent falls back to in-memory storage
    pub database_url: Option<String>,
    /// Base URL of the external postal directory
    pub directory_base_url: String,
    /// Token and hashing configuration
    pub identity: IdentityConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: None,
            directory_base_url: "https://viacep.com.br".to_string(),
            identity: IdentityConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults field by field.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("USERHUB_HOST").unwrap_or(defaults.host),
            port: std::env::var("USERHUB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database_url: std::env::var("DATABASE_URL").ok(),
            directory_base_url: std::env::var("POSTAL_DIRECTORY_URL")
                .unwrap_or(defaults.directory_base_url),
            identity: IdentityConfig {
                jwt_secret: std::env::var("JWT_SECRET")
                    .unwrap_or(defaults.identity.jwt_secret),
                jwt_expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                    .ok()
                    .and_then(|h| h.parse().ok())
                    .unwrap_or(defaults.identity.jwt_expiration_hours),
                jwt_issuer: defaults.identity.jwt_issuer,
            },
        }
    }
}

/// Main UserHub server state
#[derive(Clone)]
pub struct UserHubServer {
    /// Server configuration
    pub config: ServerConfig,
    /// Identity service
    pub identity: Arc<IdentityService>,
    /// Dependent-record service
    pub contacts: Arc<ContactService>,
    /// Postal normalization and lookup service
    pub postal: Arc<PostalService>,
}

impl UserHubServer {
    /// Assemble a server from pre-built services. Tests use this to inject
    /// doubles for the external collaborators.
    pub fn new(
        config: ServerConfig,
        identity: Arc<IdentityService>,
        contacts: Arc<ContactService>,
        postal: Arc<PostalService>,
    ) -> Self {
        Self {
            config,
            identity,
            contacts,
            postal,
        }
    }

    /// Build the server from configuration: Postgres-backed repositories
    /// when a database URL is configured, in-memory otherwise.
    pub async fn from_config(config: ServerConfig) -> Result<Self> {
        let postal = Arc::new(PostalService::new(Arc::new(HttpDirectoryClient::new(
            config.directory_base_url.clone(),
        ))));
        let encoder = Arc::new(Argon2Encoder::new());
        let tokens = Arc::new(JwtCodec::new(&config.identity));

        let (identity, contacts) = match &config.database_url {
            Some(url) => {
                let pool = PgPoolOptions::new().max_connections(20).connect(url).await?;
                info!("database connection pool created");
                let identity = Arc::new(IdentityService::new(
                    Arc::new(PostgresAccountRepository::new(pool.clone())),
                    encoder,
                    tokens,
                ));
                let contacts = Arc::new(ContactService::new(
                    identity.clone(),
                    Arc::new(PostgresAddressRepository::new(pool.clone())),
                    Arc::new(PostgresPhoneRepository::new(pool)),
                ));
                (identity, contacts)
            }
            None => {
                warn!("DATABASE_URL not set, using in-memory storage");
                Self::in_memory_services(encoder, tokens)
            }
        };

        Ok(Self::new(config, identity, contacts, postal))
    }

    fn in_memory_services(
        encoder: Arc<Argon2Encoder>,
        tokens: Arc<JwtCodec>,
    ) -> (Arc<IdentityService>, Arc<ContactService>) {
        let identity = Arc::new(IdentityService::new(
            Arc::new(InMemoryAccountRepository::new()),
            encoder,
            tokens,
        ));
        let contacts = Arc::new(ContactService::new(
            identity.clone(),
            Arc::new(InMemoryAddressRepository::new()),
            Arc::new(InMemoryPhoneRepository::new()),
        ));
        (identity, contacts)
    }
}
