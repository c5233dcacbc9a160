use std::{fs, io, path::Path, sync::Arc};

use tracing::{Dispatch, Level};
use tracing_subscriber::{Registry, filter::Targets, fmt::writer::BoxMakeWriter, prelude::*};

const CODEC_FILE: &str = "codec";

/// Installs the codec trace writer if `dump_codec_trace` is set.
pub fn install() -> io::Result<()> {
    if optio_config::dump_codec_trace() {
        install_to(optio_config::log_dir())?;
    }
    Ok(())
}

/// Writes registry and sequence events as JSON lines to `<log_dir>/codec`.
pub fn install_to(log_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(log_dir)?;
    let file = fs::File::create(log_dir.join(CODEC_FILE))?;
    let writer = BoxMakeWriter::new(Arc::new(file));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .json()
        .with_filter(
            Targets::new()
                .with_target("optio_json::registry", Level::DEBUG)
                .with_target("optio::sequence", Level::DEBUG),
        );
    let dispatch = Dispatch::new(Registry::default().with(fmt_layer));
    dispatch.try_init().map_err(io::Error::other)
}
