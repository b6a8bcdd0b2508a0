use anyhow::Context;
use epic_earth::{logging, EpicConfig};

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let download = epic_earth::run(&EpicConfig::default())
        .context("failed to download the latest EPIC image")?;

    tracing::info!(
        source = %download.source,
        "latest earth image written to {}",
        download.file.display()
    );

    Ok(())
}
