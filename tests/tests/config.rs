use std::{fs, path::PathBuf};

use anyhow::Result;
use optio_config::Config;

#[test]
fn loads_settings_from_a_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("optio.toml");
    fs::write(&path, "dump_codec_trace = true\nlog_dir = \"trace\"\n")?;

    let config = Config::load_from(&path)?;
    assert!(config.dump_codec_trace);
    assert_eq!(config.log_dir, PathBuf::from("trace"));
    Ok(())
}

#[test]
fn compact_encoding_by_default() -> Result<()> {
    assert!(!optio_config::pretty_json());
    assert_eq!(optio_json::encode(&optio::some(vec![1, 2]))?, "[[1,2]]");
    Ok(())
}
