//! HTTP entry point.
//!
//! # Responsibility
//! - Bootstrap logging and per-resource repositories, then serve the
//!   routing table.
//! - Keep this shell thin: all record semantics live in `varejo_core`.

use anyhow::Result;
use log::info;
use tokio::net::TcpListener;
use varejo_core::init_logging;

mod config;
mod error;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env().map_err(anyhow::Error::msg)?;
    init_logging(&config.log_level, &config.log_dir.to_string_lossy())
        .map_err(anyhow::Error::msg)?;

    info!(
        "event=server_start module=server status=start addr={} data_dir={} version={}",
        config.addr,
        config.data_dir.display(),
        varejo_core::core_version()
    );

    let app = routes::build_app(&config.data_dir);
    let listener = TcpListener::bind(config.addr).await?;
    info!(
        "event=server_listen module=server status=ok addr={}",
        config.addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
