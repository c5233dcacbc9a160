//! Layered configuration: built-in defaults, then `optio.toml` (or `.optio.toml`) found in the
//! current directory or one of its parents, then `OPTIO_*` environment variables.
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use config::{Environment, File, FileFormat};
use serde::Deserialize;

const CONFIG_FILE_NAMES: [&str; 2] = ["optio.toml", ".optio.toml"];
const ENV_PREFIX: &str = "OPTIO";

pub fn pretty_json() -> bool {
    CONFIG.pretty_json
}

pub fn dump_codec_trace() -> bool {
    CONFIG.dump_codec_trace
}

pub fn log_dir() -> &'static PathBuf {
    &CONFIG.log_dir
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Pretty-print JSON produced by `optio_json::encode`.
    pub pretty_json: bool,
    /// Write the codec registry's trace to `log_dir` as JSON lines.
    pub dump_codec_trace: bool,
    /// Sets the directory to dump data. Defaults to `./log/`.
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self { pretty_json: false, dump_codec_trace: false, log_dir: PathBuf::from("./log/") }
    }
}

impl Config {
    /// Reads the configuration file (if any) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(config_path().map(|path| File::from(path).format(FileFormat::Toml)))
    }

    /// Reads `path` and the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(Some(File::from(path).format(FileFormat::Toml)))
    }

    /// Parses TOML contents without consulting the environment.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn build<S>(file: Option<S>) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file);
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug)]
pub struct ConfigError(config::ConfigError);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid optio configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError(err)
    }
}

fn config_path() -> Option<PathBuf> {
    find_config_file(&std::env::current_dir().ok()?)
}

/// Looks for a config file in `dir` and then in each of its parents.
fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut path = dir.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let file = path.join(name);
            if file.exists() {
                return Some(file);
            }
        }
        if !path.pop() {
            return None;
        }
    }
}

static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|err| {
        tracing::warn!("{err}, falling back to defaults");
        Config::default()
    })
});
