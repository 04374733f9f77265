//! Engine tuning knobs loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock game. Hosts read the path from their own command line and call
//! [`EngineConfig::load`].

use std::{fs, io};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_MAP_WIDTH: usize = 40;
pub const MIN_MAP_HEIGHT: usize = 24;
/// Either map side; keeps coordinates comfortably inside `i32`.
pub const MAX_MAP_SIDE: usize = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub map_width: usize,
    pub map_height: usize,
    pub fov_radius: u32,
    pub chase_range: u32,
    /// Percent chance per turn that an idle enemy takes a random step.
    pub wander_chance: u32,
    pub inventory_capacity: usize,
    pub log_capacity: usize,
    pub viewport_width: usize,
    pub viewport_height: usize,
    pub player_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            map_width: 80,
            map_height: 36,
            fov_radius: 12,
            chase_range: 5,
            wander_chance: 25,
            inventory_capacity: 8,
            log_capacity: 50,
            viewport_width: 48,
            viewport_height: 18,
            player_name: "Hero".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width < MIN_MAP_WIDTH {
            return Err(invalid("map_width", format!("must be at least {MIN_MAP_WIDTH}")));
        }
        if self.map_height < MIN_MAP_HEIGHT {
            return Err(invalid("map_height", format!("must be at least {MIN_MAP_HEIGHT}")));
        }
        if self.map_width > MAX_MAP_SIDE || self.map_height > MAX_MAP_SIDE {
            let field = if self.map_width > MAX_MAP_SIDE { "map_width" } else { "map_height" };
            return Err(invalid(field, format!("must be at most {MAX_MAP_SIDE}")));
        }
        let longest_side = self.map_width.max(self.map_height);
        if self.fov_radius == 0 || self.fov_radius as usize > longest_side {
            return Err(invalid("fov_radius", format!("must be within 1..={longest_side}")));
        }
        let widest_walk = self.map_width + self.map_height;
        if self.chase_range as usize > widest_walk {
            return Err(invalid("chase_range", format!("must be at most {widest_walk}")));
        }
        if self.wander_chance > 100 {
            return Err(invalid("wander_chance", "is a percentage (0-100)".to_string()));
        }
        if self.inventory_capacity == 0 {
            return Err(invalid("inventory_capacity", "must be positive".to_string()));
        }
        if self.log_capacity == 0 {
            return Err(invalid("log_capacity", "must be positive".to_string()));
        }
        if self.viewport_width == 0 || self.viewport_width > self.map_width {
            return Err(invalid("viewport_width", "must be within 1..=map_width".to_string()));
        }
        // The side panel needs sixteen rows.
        if self.viewport_height < 16 || self.viewport_height > self.map_height {
            return Err(invalid("viewport_height", "must be within 16..=map_height".to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
