//! CloudAPI GraphQL server

use clap::Parser;
use cloudapi_gql::{api, config::Config, schema_from_config};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CloudAPI GraphQL CLI arguments
#[derive(Parser, Debug)]
#[command(name = "cloudapi-gql")]
#[command(about = "GraphQL facade over the CloudAPI REST API", long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long, short = 'c', env = "CLOUDAPI_GQL_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address, overrides the configuration
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "cloudapi_gql=debug,cloudapi_client=debug,tower_http=debug".into()
        })
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "cloudapi_gql=info,cloudapi_client=info,tower_http=info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(addr) = args.addr {
        config = config.with_addr(addr);
    }

    api::health::init();

    let schema = schema_from_config(&config)?;
    info!(
        "Using CloudAPI at {} as account {}",
        config.cloudapi.api_base_url, config.cloudapi.account
    );

    let app = api::router(schema);

    let listener = TcpListener::bind(&config.addr).await?;
    info!("CloudAPI GraphQL listening on {}", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
