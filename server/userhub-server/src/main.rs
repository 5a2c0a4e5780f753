use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use userhub_server::{create_app, ServerConfig, UserHubServer};

/// UserHub Engine HTTP server
#[derive(Debug, Parser)]
#[command(name = "userhub-server", version, about)]
struct Args {
    /// Bind host
    #[arg(long, env = "USERHUB_HOST")]
    host: Option<String>,

    /// Bind port
    #[arg(long, env = "USERHUB_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let addr = format!("{}:{}", config.host, config.port);
    let server = UserHubServer::from_config(config).await?;
    let app = create_app(server);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "userhub-server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
