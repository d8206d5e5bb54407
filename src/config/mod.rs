use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub bus_name: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            bus_name: "org.mpris.MediaPlayer2.audacious".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_secs: 1 }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("trackinfo.txt"),
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trackline")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration. An explicitly given path must exist; the
    /// default location falls back to defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;
                toml::from_str(&content).with_context(|| "Failed to parse config file")
            }
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    let content = fs::read_to_string(&config_path).with_context(|| {
                        format!("Failed to read config from {}", config_path.display())
                    })?;
                    let config: Config =
                        toml::from_str(&content).with_context(|| "Failed to parse config file")?;
                    Ok(config)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                config_dir.display()
            )
        })?;

        let config_path = Self::config_path();
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(player) = &cli.player {
            self.player.bus_name = player.clone();
        }
        if let Some(interval) = cli.interval {
            self.poll.interval_secs = interval;
        }
        if let Some(output) = &cli.output {
            self.output.path = output.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.player.bus_name, "org.mpris.MediaPlayer2.audacious");
        assert_eq!(config.poll.interval_secs, 1);
        assert_eq!(config.output.path, PathBuf::from("trackinfo.txt"));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[player]\nbus_name = \"org.mpris.MediaPlayer2.mpv\"").unwrap();
        writeln!(file, "[poll]\ninterval_secs = 5").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.player.bus_name, "org.mpris.MediaPlayer2.mpv");
        assert_eq!(config.poll.interval_secs, 5);
        // Unspecified sections keep their defaults
        assert_eq!(config.output.path, PathBuf::from("trackinfo.txt"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "trackline",
            "--player",
            "org.mpris.MediaPlayer2.vlc",
            "--interval",
            "3",
            "--output",
            "/tmp/now.txt",
        ]);

        let config = Config::default().with_overrides(&cli);
        assert_eq!(config.player.bus_name, "org.mpris.MediaPlayer2.vlc");
        assert_eq!(config.poll.interval_secs, 3);
        assert_eq!(config.output.path, PathBuf::from("/tmp/now.txt"));
    }

    #[test]
    fn test_interval_conversion() {
        let poll = PollConfig { interval_secs: 2 };
        assert_eq!(poll.interval(), Duration::from_secs(2));
    }
}
