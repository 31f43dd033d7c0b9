//! Presentation and tooling defaults for the CLI.
//!
//! Game rules (starting chips, tie handling, payouts) are fixed constants in
//! the engine and deliberately absent here. Configuration covers how the CLI
//! renders and where its tooling writes by default:
//!
//! - `HILO_CONFIG` may point to a TOML file with any of the fields below
//! - `HILO_ASCII_CARDS` overrides `ascii_cards` from the environment

use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Render suits as letters instead of Unicode symbols
    pub ascii_cards: bool,
    /// Seed used by play/deal/sim when none is given on the command line
    pub default_seed: Option<u64>,
    /// Default output path for `sim --output`
    pub sim_output: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::File => "file",
            ValueSource::Env => "env",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub ascii_cards: ValueSource,
    pub default_seed: ValueSource,
    pub sim_output: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            ascii_cards: ValueSource::Default,
            default_seed: ValueSource::Default,
            sim_output: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ascii_cards: false,
            default_seed: None,
            sim_output: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HILO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.ascii_cards {
            cfg.ascii_cards = v;
            sources.ascii_cards = ValueSource::File;
        }
        if let Some(v) = f.default_seed {
            cfg.default_seed = Some(v);
            sources.default_seed = ValueSource::File;
        }
        if let Some(v) = f.sim_output {
            cfg.sim_output = Some(v);
            sources.sim_output = ValueSource::File;
        }
    }

    if let Ok(raw) = std::env::var("HILO_ASCII_CARDS") {
        cfg.ascii_cards = parse_bool_flag(&raw)
            .ok_or_else(|| ConfigError::Invalid(format!("HILO_ASCII_CARDS: '{}'", raw)))?;
        sources.ascii_cards = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// All-optional mirror of [`Config`] for partial TOML files.
#[derive(Debug, Deserialize)]
struct FileConfig {
    ascii_cards: Option<bool>,
    default_seed: Option<u64>,
    sim_output: Option<String>,
}
