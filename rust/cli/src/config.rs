use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub countdown_ms: u64,
    pub reveal_ms: u64,
    pub win_threshold: u32,
    pub seed: Option<u64>,
    /// External command used to play cue sounds; `None` disables audio
    pub sound: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub countdown_ms: ValueSource,
    pub reveal_ms: ValueSource,
    pub win_threshold: ValueSource,
    pub seed: ValueSource,
    pub sound: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            countdown_ms: ValueSource::Default,
            reveal_ms: ValueSource::Default,
            win_threshold: ValueSource::Default,
            seed: ValueSource::Default,
            sound: ValueSource::Default,
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
            countdown_ms: 2_000,
            reveal_ms: 1_000,
            win_threshold: 10,
            seed: None,
            sound: None,
        }
    }
}

impl Config {
    /// Engine-side view of the timing and scoring settings.
    pub fn to_round_config(&self) -> rochambot_engine::round::RoundConfig {
        rochambot_engine::round::RoundConfig {
            countdown: std::time::Duration::from_millis(self.countdown_ms),
            reveal: std::time::Duration::from_millis(self.reveal_ms),
            win_threshold: self.win_threshold,
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

#[allow(dead_code)]
pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("ROCHAMBOT_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.countdown_ms {
            cfg.countdown_ms = v;
            sources.countdown_ms = ValueSource::File;
        }
        if let Some(v) = f.reveal_ms {
            cfg.reveal_ms = v;
            sources.reveal_ms = ValueSource::File;
        }
        if let Some(v) = f.win_threshold {
            cfg.win_threshold = v;
            sources.win_threshold = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.sound {
            cfg.sound = Some(v);
            sources.sound = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("ROCHAMBOT_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(ms) = std::env::var("ROCHAMBOT_COUNTDOWN_MS")
        && !ms.is_empty()
    {
        cfg.countdown_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid countdown_ms".into()))?;
        sources.countdown_ms = ValueSource::Env;
    }
    if let Ok(ms) = std::env::var("ROCHAMBOT_REVEAL_MS")
        && !ms.is_empty()
    {
        cfg.reveal_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid reveal_ms".into()))?;
        sources.reveal_ms = ValueSource::Env;
    }
    if let Ok(t) = std::env::var("ROCHAMBOT_THRESHOLD")
        && !t.is_empty()
    {
        cfg.win_threshold = t
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid win_threshold".into()))?;
        sources.win_threshold = ValueSource::Env;
    }
    if let Ok(cmd) = std::env::var("ROCHAMBOT_SOUND")
        && !cmd.is_empty()
    {
        cfg.sound = Some(cmd);
        sources.sound = ValueSource::Env;
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
    countdown_ms: Option<u64>,
    #[serde(default)]
    reveal_ms: Option<u64>,
    #[serde(default)]
    win_threshold: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    sound: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.countdown_ms == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: countdown_ms must be >0".into(),
        ));
    }
    if cfg.reveal_ms == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: reveal_ms must be >0".into(),
        ));
    }
    if cfg.win_threshold == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: win_threshold must be >=1".into(),
        ));
    }
    Ok(())
}
