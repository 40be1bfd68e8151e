use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use promptrelay::{Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "promptrelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Port to listen on (defaults to the Functions-host local port)
    #[arg(short, long, default_value = "7071")]
    port: u16,

    /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
    #[arg(long)]
    public: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ContainerConfig::from_env()?;
    let container = Arc::new(Container::new(config));

    let host = if cli.public {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    } else {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    };
    let addr = SocketAddr::new(host, cli.port);

    promptrelay::connector::api::serve(container, addr).await
}
