//! Durable storage for the theme selection.
//!
//! One durable key, held in a small JSON settings file under the user's
//! config directory. Reads never fail the caller: an absent or unreadable
//! file means "nothing stored" and the controller falls back to the
//! first-load default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::mode::ThemeMode;

/// Error from writing the settings file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("settings io error: {0}")]
    Io(#[from] io::Error),
    #[error("settings serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("no user config directory available")]
    NoConfigDir,
}

/// On-disk settings. A struct rather than a bare string so the file can
/// grow more keys without a format migration.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Settings {
    #[serde(default)]
    theme: ThemeMode,
}

/// Storage backend for the persisted theme selection.
pub trait ThemeStore {
    /// Returns the stored selection, or `None` when nothing usable is stored.
    fn load(&self) -> Option<ThemeMode>;

    /// Persists the selection.
    fn save(&mut self, mode: ThemeMode) -> Result<(), StoreError>;
}

/// JSON settings file under the user config directory.
#[derive(Debug)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Store at the default location, `<config dir>/frontdesk/settings.json`.
    pub fn new() -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::at(dir.join("frontdesk").join("settings.json")))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    log::debug!("settings file {} unreadable: {err}", self.path.display());
                }
                return None;
            }
        };
        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => Some(settings.theme),
            Err(err) => {
                log::debug!("ignoring malformed settings file {}: {err}", self.path.display());
                None
            }
        }
    }

    fn save(&mut self, mode: ThemeMode) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Settings { theme: mode })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    stored: Option<ThemeMode>,
    fail_saves: bool,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts with a selection already persisted.
    pub fn with_stored(mode: ThemeMode) -> Self {
        Self {
            stored: Some(mode),
            fail_saves: false,
        }
    }

    /// Store whose writes always fail, for exercising degraded persistence.
    pub fn failing() -> Self {
        Self {
            stored: None,
            fail_saves: true,
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        self.stored
    }

    fn save(&mut self, mode: ThemeMode) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "memory store configured to fail",
            )));
        }
        self.stored = Some(mode);
        Ok(())
    }
}
