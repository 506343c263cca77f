use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ConfigError;
use crate::game::PlayerId;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub players: PlayersConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for the engine and bots; OS entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Games to play in a headless run.
    pub games: usize,
    /// Consecutive rejected moves tolerated from one player before giving up.
    pub max_rejections: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            seed: None,
            games: 1,
            max_rejections: 10,
        }
    }
}

/// How a seat chooses its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Random,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub kind: PlayerKind,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub a: SeatConfig,
    pub b: SeatConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            a: SeatConfig {
                name: "Player A".into(),
                kind: PlayerKind::Human,
            },
            b: SeatConfig {
                name: "Player B".into(),
                kind: PlayerKind::Random,
            },
        }
    }
}

impl PlayersConfig {
    pub fn seat(&self, player: PlayerId) -> &SeatConfig {
        match player {
            PlayerId::A => &self.a,
            PlayerId::B => &self.b,
        }
    }

    pub fn seat_mut(&mut self, player: PlayerId) -> &mut SeatConfig {
        match player {
            PlayerId::A => &mut self.a,
            PlayerId::B => &mut self.b,
        }
    }
}

/// Glyphs used by the text renderer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub empty: String,
    pub player_a: String,
    pub player_b: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            empty: "_".into(),
            player_a: "A".into(),
            player_b: "B".into(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file for the terminal UI, which cannot share the screen with logs.
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: PathBuf::from("connect4.log"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.games == 0 {
            return Err(ConfigError::Validation(
                "session.games must be > 0".into(),
            ));
        }
        if self.session.max_rejections == 0 {
            return Err(ConfigError::Validation(
                "session.max_rejections must be > 0".into(),
            ));
        }

        if self.players.a.name.trim().is_empty() || self.players.b.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.a.name and players.b.name must not be empty".into(),
            ));
        }
        if self.players.a.name == self.players.b.name {
            return Err(ConfigError::Validation(
                "players.a.name and players.b.name must differ".into(),
            ));
        }

        let glyphs = [&self.render.empty, &self.render.player_a, &self.render.player_b];
        if glyphs.iter().any(|g| g.is_empty()) {
            return Err(ConfigError::Validation(
                "render glyphs must not be empty".into(),
            ));
        }
        if glyphs[0] == glyphs[1] || glyphs[0] == glyphs[2] || glyphs[1] == glyphs[2] {
            return Err(ConfigError::Validation(
                "render glyphs must be distinct".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
