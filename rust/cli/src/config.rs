//! Layered CLI configuration: defaults, then a TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables. Command-line flags
//! are applied by the commands on top of the resolved values.

use std::fs;

use holdem_ai::AI_KINDS;
use holdem_engine::config::{STARTING_STACK, TableConfig};
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";
pub const SEED_ENV: &str = "HOLDEM_SEED";
pub const STACK_ENV: &str = "HOLDEM_STARTING_STACK";
pub const AI_ENV: &str = "HOLDEM_AI";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub min_raise: u32,
    pub seed: Option<u64>,
    pub ai: String,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            starting_stack: STARTING_STACK,
            small_blind: table.small_blind,
            big_blind: table.big_blind,
            min_raise: table.min_raise,
            seed: None,
            ai: "baseline".into(),
        }
    }
}

impl Config {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            min_raise: self.min_raise,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub min_raise: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            min_raise: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.min_raise {
            cfg.min_raise = v;
            sources.min_raise = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {SEED_ENV}: '{seed}'")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var(STACK_ENV)
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {STACK_ENV}: '{stack}'")))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var(AI_ENV)
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    min_raise: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    cfg.table()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    if !AI_KINDS.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of: {})",
            cfg.ai,
            AI_KINDS.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_stakes() {
        let cfg = Config::default();
        assert_eq!(cfg.starting_stack, 1_000);
        assert_eq!(cfg.table(), TableConfig::default());
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero_stack = Config {
            starting_stack: 0,
            ..Config::default()
        };
        assert!(validate(&zero_stack).is_err());

        let inverted = Config {
            small_blind: 50,
            big_blind: 10,
            ..Config::default()
        };
        assert!(validate(&inverted).is_err());

        let unknown_ai = Config {
            ai: "oracle".into(),
            ..Config::default()
        };
        let msg = validate(&unknown_ai).unwrap_err().to_string();
        assert!(msg.contains("oracle"));
    }

    #[test]
    fn file_config_rejects_unknown_keys() {
        assert!(toml::from_str::<FileConfig>("level = 3").is_err());
        let f: FileConfig = toml::from_str("seed = 4\nai = \"passive\"").unwrap();
        assert_eq!(f.seed, Some(4));
        assert_eq!(f.ai.as_deref(), Some("passive"));
    }
}
