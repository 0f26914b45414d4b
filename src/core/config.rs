//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.brainwave/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BrainwaveConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Seed for the mock data generator. Unset = fresh data every run.
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub splash_char_interval_ms: Option<u64>,
    pub splash_pause_ms: Option<u64>,
    pub sign_in_delay_ms: Option<u64>,
    pub demo_sign_in_delay_ms: Option<u64>,
    pub fetch_latency_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SPLASH_CHAR_INTERVAL_MS: u64 = 100;
pub const DEFAULT_SPLASH_PAUSE_MS: u64 = 1500;
pub const DEFAULT_SIGN_IN_DELAY_MS: u64 = 1500;
pub const DEFAULT_DEMO_SIGN_IN_DELAY_MS: u64 = 1000;
pub const DEFAULT_FETCH_LATENCY_MS: u64 = 1000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Every scripted delay in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub splash_char_interval: Duration,
    pub splash_pause: Duration,
    pub sign_in_delay: Duration,
    pub demo_sign_in_delay: Duration,
    pub fetch_latency: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            splash_char_interval: Duration::from_millis(DEFAULT_SPLASH_CHAR_INTERVAL_MS),
            splash_pause: Duration::from_millis(DEFAULT_SPLASH_PAUSE_MS),
            sign_in_delay: Duration::from_millis(DEFAULT_SIGN_IN_DELAY_MS),
            demo_sign_in_delay: Duration::from_millis(DEFAULT_DEMO_SIGN_IN_DELAY_MS),
            fetch_latency: Duration::from_millis(DEFAULT_FETCH_LATENCY_MS),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub seed: Option<u64>,
    pub timing: Timing,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub fetch_latency_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.brainwave/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".brainwave").join("config.toml"))
}

/// Load config from `~/.brainwave/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BrainwaveConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BrainwaveConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BrainwaveConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<BrainwaveConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(BrainwaveConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BrainwaveConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# BrainWave Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# seed = 42                        # Or set BRAINWAVE_SEED; unset = new data each run

# [timing]
# splash_char_interval_ms = 100    # Title typing speed
# splash_pause_ms = 1500           # Pause after the title before login
# sign_in_delay_ms = 1500          # Google / Apple simulated round trip
# demo_sign_in_delay_ms = 1000
# fetch_latency_ms = 1000          # Or set BRAINWAVE_FETCH_LATENCY_MS
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BrainwaveConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &BrainwaveConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let env_u64 = |key: &str| {
        env(key).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Ignoring {}={:?}: {}", key, raw, e);
                None
            }
        })
    };

    // Seed: CLI → env → config → none
    let seed = cli
        .seed
        .or_else(|| env_u64("BRAINWAVE_SEED"))
        .or(config.general.seed);

    // Fetch latency: CLI → env → config → default
    let fetch_latency_ms = cli
        .fetch_latency_ms
        .or_else(|| env_u64("BRAINWAVE_FETCH_LATENCY_MS"))
        .or(config.timing.fetch_latency_ms)
        .unwrap_or(DEFAULT_FETCH_LATENCY_MS);

    let t = &config.timing;
    let ms = |value: Option<u64>, default: u64| Duration::from_millis(value.unwrap_or(default));

    ResolvedConfig {
        seed,
        timing: Timing {
            splash_char_interval: ms(t.splash_char_interval_ms, DEFAULT_SPLASH_CHAR_INTERVAL_MS),
            splash_pause: ms(t.splash_pause_ms, DEFAULT_SPLASH_PAUSE_MS),
            sign_in_delay: ms(t.sign_in_delay_ms, DEFAULT_SIGN_IN_DELAY_MS),
            demo_sign_in_delay: ms(t.demo_sign_in_delay_ms, DEFAULT_DEMO_SIGN_IN_DELAY_MS),
            fetch_latency: Duration::from_millis(fetch_latency_ms),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = BrainwaveConfig::default();
        assert!(config.general.seed.is_none());
        assert!(config.timing.fetch_latency_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&BrainwaveConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.seed, None);
        assert_eq!(resolved.timing, Timing::default());
        assert_eq!(resolved.timing.fetch_latency, Duration::from_secs(1));
        assert_eq!(resolved.timing.splash_pause, Duration::from_millis(1500));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = BrainwaveConfig {
            general: GeneralConfig { seed: Some(7) },
            timing: TimingConfig {
                splash_char_interval_ms: Some(10),
                fetch_latency_ms: Some(250),
                ..Default::default()
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.seed, Some(7));
        assert_eq!(resolved.timing.splash_char_interval, Duration::from_millis(10));
        assert_eq!(resolved.timing.fetch_latency, Duration::from_millis(250));
        assert_eq!(resolved.timing.sign_in_delay, Duration::from_millis(DEFAULT_SIGN_IN_DELAY_MS));
    }

    #[test]
    fn test_env_overrides_config() {
        let config = BrainwaveConfig {
            general: GeneralConfig { seed: Some(7) },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "BRAINWAVE_SEED" => Some("99".to_string()),
            "BRAINWAVE_FETCH_LATENCY_MS" => Some("not-a-number".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.seed, Some(99));
        assert_eq!(resolved.timing.fetch_latency, Duration::from_millis(DEFAULT_FETCH_LATENCY_MS));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = BrainwaveConfig {
            general: GeneralConfig { seed: Some(7) },
            timing: TimingConfig {
                fetch_latency_ms: Some(250),
                ..Default::default()
            },
        };
        let cli = CliOverrides {
            seed: Some(1),
            fetch_latency_ms: Some(0),
        };
        let env = |_: &str| Some("5".to_string());
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.seed, Some(1));
        assert_eq!(resolved.timing.fetch_latency, Duration::ZERO);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[timing]
splash_pause_ms = 200
"#;
        let config: BrainwaveConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timing.splash_pause_ms, Some(200));
        assert!(config.timing.fetch_latency_ms.is_none());
        assert!(config.general.seed.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("brainwave-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general]\nseed = \"seven\"\n").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("brainwave-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.seed.is_none());

        // The generated file is all comments, so it parses back to defaults.
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.timing.splash_pause_ms.is_none());
        fs::remove_dir_all(&dir).unwrap();
    }
}
