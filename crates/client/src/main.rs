//! Terminal entry point for the GéoMath Challenge quiz game.
mod app;
mod config;
mod logging;
mod screens;
mod theme;

use anyhow::Result;

use app::App;
use config::ClientConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    logging::init(&config)?;

    App::new(&config)?.run()
}
