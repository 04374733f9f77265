//! The UI scale persisted between launches.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::APP_NAME;
use crate::ui_scale::UiScale;

const FORMAT_VERSION: u32 = 1;
const FILE_NAME: &str = "ui_scale.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UiScaleFile {
    pub format_version: u32,
    pub ui_scale: f32,
}

impl UiScaleFile {
    pub fn new(scale: UiScale) -> Self {
        Self { format_version: FORMAT_VERSION, ui_scale: scale.get() }
    }

    /// `<platform data dir>/ui_scale.json`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join(FILE_NAME))
    }

    /// Writes to a sibling temp file first so a crash never leaves half a file.
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&content)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        if file.format_version != FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported ui scale format {}", file.format_version),
            ));
        }
        Ok(file)
    }

    /// The saved scale, or `None` when the file is missing or unreadable.
    pub fn load_scale(path: &Path) -> Option<f32> {
        match Self::load(path) {
            Ok(file) => Some(file.ui_scale),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring saved ui scale");
                None
            }
        }
    }
}
