use std::{env, fs, path::PathBuf};

use anyhow::Result;
use optio_config::Config;

// Single test: it mutates the process environment before the global config is first read.
#[test]
fn environment_overrides_the_config_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("optio.toml");
    fs::write(&path, "pretty_json = false\nlog_dir = \"from-file\"\n")?;

    // SAFETY: no other thread of this test binary reads or writes the environment.
    unsafe { env::set_var("OPTIO_PRETTY_JSON", "true") };

    let config = Config::load_from(&path)?;
    assert!(config.pretty_json);
    assert_eq!(config.log_dir, PathBuf::from("from-file"));

    assert!(optio_config::pretty_json());
    assert_eq!(optio_json::encode(&optio::some(vec![1, 2]))?, "[\n  [\n    1,\n    2\n  ]\n]");
    Ok(())
}
