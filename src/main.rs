//! pwcheck - A terminal password strength checker
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use pwcheck::cli::Args;
use pwcheck_core::logging;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let settings = args.settings();
    tracing::info!(
        "Settings: endpoint={} theme={} background={}",
        settings.server.endpoint,
        settings.ui.theme,
        settings.background.enabled
    );

    if args.headless {
        pwcheck::run_headless(settings).await?;
    } else {
        pwcheck::run(settings).await?;
    }

    Ok(())
}
