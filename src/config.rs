use strum_macros::{AsRefStr, EnumString};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "highlowData";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// When the deck goes back to 52 cards besides an explicit shuffle signal.
///
/// The game has been observed both ways: some sessions only ever announce a
/// shuffle through the `deckShuffled` flag, others appear to start each new
/// game from a fresh deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ResetPolicy {
    /// Reset only when a response carries the shuffle flag
    #[default]
    ShuffleSignal,
    /// Also reset whenever a game is settled (new game or money taken)
    NewGame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConfig {
    /// Endpoint identifier of the high-low game's responses
    pub endpoint: String,
    pub reset_policy: ResetPolicy,
    /// Attach a concrete higher/lower pick to every recommendation
    pub auto_choose: bool,
    pub channel_capacity: usize,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            reset_policy: ResetPolicy::default(),
            auto_choose: false,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl HelperConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `HIGHLOW_*` keys, falling back to defaults for
    /// anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("HIGHLOW_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(value) = lookup("HIGHLOW_RESET_POLICY") {
            config.reset_policy =
                value
                    .parse::<ResetPolicy>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "HIGHLOW_RESET_POLICY",
                        value,
                    })?;
        }

        if let Some(value) = lookup("HIGHLOW_AUTO_CHOOSE") {
            config.auto_choose = match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "HIGHLOW_AUTO_CHOOSE",
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup("HIGHLOW_CHANNEL_CAPACITY") {
            config.channel_capacity = value
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: "HIGHLOW_CHANNEL_CAPACITY",
                    value,
                })?;
        }

        Ok(config)
    }
}
