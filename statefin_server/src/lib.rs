pub mod config;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "statefin-server")]
#[command(about = "HTTP API over the state campaign-finance indices")]
pub struct Args {
    /// Address to listen on; overrides BIND_ADDR.
    #[arg(long)]
    pub bind: Option<String>,
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    init_tracing();
    let config = Config::from_env();
    let bind = args.bind.unwrap_or_else(|| config.bind_addr.clone());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", bind))?;

    let state = AppState::new(&config)?;
    let app = routes::router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, env = %config.api_env, "statefin API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("statefin_api=info".parse().unwrap())
                .add_directive("statefin_server=info".parse().unwrap()),
        )
        .with_target(false)
        .init();
}
