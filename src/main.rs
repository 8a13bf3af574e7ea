mod app;
mod caption;
mod cli;
mod config;
mod error;
mod playback;
mod session;
mod ui;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
