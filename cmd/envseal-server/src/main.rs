use clap::Parser;
use pkg_api::server::{ServerConfig, start_server};
use pkg_constants::manifest::{DEFAULT_NAMESPACE, DEFAULT_SECRET_NAME};
use pkg_constants::network::{DEFAULT_API_PORT, DEFAULT_CONFIG_PATH};
use pkg_types::config::{ServerConfigFile, load_config_file};
use std::net::SocketAddr;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "envseal-server", about = "envseal manifest conversion server")]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Secret name used when a request omits one
    #[arg(long)]
    default_name: Option<String>,

    /// Namespace used when a request omits one
    #[arg(long)]
    default_namespace: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: ServerConfigFile = load_config_file(&cli.config)?;
    info!("Config file: {}", cli.config);

    // Merge: CLI args > config file > defaults
    let port = cli.port.or(file_cfg.port).unwrap_or(DEFAULT_API_PORT);
    let default_secret_name = cli
        .default_name
        .or(file_cfg.default_secret_name)
        .unwrap_or_else(|| DEFAULT_SECRET_NAME.to_string());
    let default_namespace = cli
        .default_namespace
        .or(file_cfg.default_namespace)
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

    info!("Starting envseal-server");
    info!("  Port:              {}", port);
    info!("  Default secret:    {}", default_secret_name);
    info!("  Default namespace: {}", default_namespace);

    let config = ServerConfig {
        addr: SocketAddr::from(([0, 0, 0, 0], port)),
        default_secret_name,
        default_namespace,
    };

    start_server(config).await?;

    Ok(())
}
