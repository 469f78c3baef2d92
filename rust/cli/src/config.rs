use arcana_engine::generator::DEFAULT_REVERSAL_PROBABILITY;
use arcana_engine::selection::SelectionKind;
use arcana_engine::shuffle::ShuffleKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub reversal_probability: f64,
    pub shuffle: ShuffleKind,
    pub selection: SelectionKind,
    /// Directory of JSON card files; the built-in catalog when unset
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub reversal_probability: ValueSource,
    pub shuffle: ValueSource,
    pub selection: ValueSource,
    pub data_dir: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            reversal_probability: ValueSource::Default,
            shuffle: ValueSource::Default,
            selection: ValueSource::Default,
            data_dir: ValueSource::Default,
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
            seed: None,
            reversal_probability: DEFAULT_REVERSAL_PROBABILITY,
            shuffle: ShuffleKind::Secure,
            selection: SelectionKind::Random,
            data_dir: None,
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("ARCANA_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.reversal_probability {
            cfg.reversal_probability = v;
            sources.reversal_probability = ValueSource::File;
        }
        if let Some(v) = f.shuffle {
            cfg.shuffle = v;
            sources.shuffle = ValueSource::File;
        }
        if let Some(v) = f.selection {
            cfg.selection = v;
            sources.selection = ValueSource::File;
        }
        if let Some(v) = f.data_dir {
            cfg.data_dir = Some(v);
            sources.data_dir = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("ARCANA_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(p) = std::env::var("ARCANA_REVERSAL_PROBABILITY")
        && !p.is_empty()
    {
        cfg.reversal_probability = p
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid reversal probability".into()))?;
        sources.reversal_probability = ValueSource::Env;
    }
    if let Ok(s) = std::env::var("ARCANA_SHUFFLE")
        && !s.is_empty()
    {
        cfg.shuffle = s.parse().map_err(ConfigError::Invalid)?;
        sources.shuffle = ValueSource::Env;
    }
    if let Ok(s) = std::env::var("ARCANA_SELECTION")
        && !s.is_empty()
    {
        cfg.selection = s.parse().map_err(ConfigError::Invalid)?;
        sources.selection = ValueSource::Env;
    }
    if let Ok(dir) = std::env::var("ARCANA_DATA_DIR")
        && !dir.is_empty()
    {
        cfg.data_dir = Some(PathBuf::from(dir));
        sources.data_dir = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    reversal_probability: Option<f64>,
    #[serde(default)]
    shuffle: Option<ShuffleKind>,
    #[serde(default)]
    selection: Option<SelectionKind>,
    #[serde(default)]
    data_dir: Option<PathBuf>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&cfg.reversal_probability) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: reversal_probability must be within [0, 1]".into(),
        ));
    }
    Ok(())
}
