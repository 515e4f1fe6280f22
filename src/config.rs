use crate::core::transforms::{
    CUISINE_OVERRIDE_STEEPNESS, DEFAULT_UTILITY_SCALE, MAX_STEEPNESS, VENUE_OVERRIDE_STEEPNESS,
};
use crate::core::{GroupMatcher, ResolverParams, WelfareScheme};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub input: InputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Welfare scheme used when a request does not name one. Required; an
    /// unrecognised name fails configuration loading.
    pub scheme: WelfareScheme,
    #[serde(default = "default_utility_scale")]
    pub utility_scale: f64,
    #[serde(default = "default_venue_steepness")]
    pub venue_steepness: f64,
    #[serde(default = "default_cuisine_steepness")]
    pub cuisine_steepness: f64,
}

fn default_utility_scale() -> f64 { DEFAULT_UTILITY_SCALE }
fn default_venue_steepness() -> f64 { VENUE_OVERRIDE_STEEPNESS }
fn default_cuisine_steepness() -> f64 { CUISINE_OVERRIDE_STEEPNESS }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputSettings {
    /// Scenario file used when none is given on the command line
    pub scenario_path: Option<String>,
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Configuration file (config/default.toml)
    /// 2. Local overrides (config/local.toml)
    /// 3. Environment variables (prefixed with VENUE_MATCH)
    ///
    /// Resolver parameters are checked here so that bad values surface at
    /// startup rather than per request.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., VENUE_MATCH__MATCHING__SCHEME -> matching.scheme
            .add_source(environment())
            .build()?;

        Self::checked(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::checked(settings.try_deserialize()?)
    }

    /// Parse settings from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, config::FileFormat::Toml))
            .build()?;

        Self::checked(settings.try_deserialize()?)
    }

    fn checked(settings: Self) -> Result<Self, ConfigError> {
        settings.resolver_params()?;
        Ok(settings)
    }

    /// Validated resolver parameters
    ///
    /// The scale must be positive and finite; both slopes must lie in
    /// (0, MAX_STEEPNESS] with the venue slope strictly steeper.
    pub fn resolver_params(&self) -> Result<ResolverParams, ConfigError> {
        let m = &self.matching;

        if !(m.utility_scale.is_finite() && m.utility_scale > 0.0) {
            return Err(ConfigError::Message(format!(
                "matching.utility_scale must be a positive number, got {}",
                m.utility_scale
            )));
        }
        for (name, value) in [
            ("venue_steepness", m.venue_steepness),
            ("cuisine_steepness", m.cuisine_steepness),
        ] {
            if !(value > 0.0 && value <= MAX_STEEPNESS) {
                return Err(ConfigError::Message(format!(
                    "matching.{} must be in (0, {}], got {}",
                    name, MAX_STEEPNESS, value
                )));
            }
        }
        if m.venue_steepness <= m.cuisine_steepness {
            return Err(ConfigError::Message(format!(
                "matching.venue_steepness ({}) must exceed matching.cuisine_steepness ({})",
                m.venue_steepness, m.cuisine_steepness
            )));
        }

        Ok(ResolverParams {
            scale: m.utility_scale,
            venue_steepness: m.venue_steepness,
            cuisine_steepness: m.cuisine_steepness,
        })
    }

    /// Build a matcher from these settings
    pub fn matcher(&self) -> Result<GroupMatcher, ConfigError> {
        Ok(GroupMatcher::new(self.resolver_params()?, self.matching.scheme))
    }
}

fn environment() -> Environment {
    Environment::with_prefix("VENUE_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
