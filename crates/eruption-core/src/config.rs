//! Core runtime configuration.
//!
//! Resolved once at startup by the caller (environment, `.env`, flags) and
//! passed into the core. Nothing in this crate reads process environment
//! variables itself.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the SQLite database file.
pub const DB_PATH_ENV: &str = "ERUPTION_DB_PATH";
/// Environment variable naming the directory export files are written to.
pub const EXPORT_DIR_ENV: &str = "ERUPTION_EXPORT_DIR";
/// Environment variable selecting the [`PersistMode`].
pub const PERSIST_MODE_ENV: &str = "ERUPTION_PERSIST_MODE";

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "eruption.db";

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Database path cannot be empty")]
    EmptyDatabasePath,

    #[error("Export path is not a directory: {0}")]
    ExportDirNotDirectory(PathBuf),

    #[error("Unknown persist mode: {0} (expected patient-only or full)")]
    UnknownPersistMode(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// What a submission writes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum,
)]
pub enum PersistMode {
    /// Only `patient(name, identifier, comment)`
    #[default]
    PatientOnly,
    /// The patient row plus exam date and all tooth statuses
    FullAssessment,
}

impl PersistMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PersistMode::PatientOnly => "patient-only",
            PersistMode::FullAssessment => "full",
        }
    }
}

impl fmt::Display for PersistMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersistMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient-only" | "patient_only" | "patient" => Ok(PersistMode::PatientOnly),
            "full" | "full-assessment" | "full_assessment" => Ok(PersistMode::FullAssessment),
            _ => Err(ConfigError::UnknownPersistMode(s.to_string())),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    database_path: PathBuf,
    export_dir: Option<PathBuf>,
    persist_mode: PersistMode,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The export directory may not exist yet, but must not be an existing
    /// file.
    pub fn new(
        database_path: PathBuf,
        export_dir: Option<PathBuf>,
        persist_mode: PersistMode,
    ) -> ConfigResult<Self> {
        if database_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }
        if let Some(dir) = &export_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(ConfigError::ExportDirNotDirectory(dir.clone()));
            }
        }

        Ok(Self {
            database_path,
            export_dir,
            persist_mode,
        })
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub fn export_dir(&self) -> Option<&Path> {
        self.export_dir.as_deref()
    }

    pub fn persist_mode(&self) -> PersistMode {
        self.persist_mode
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            export_dir: None,
            persist_mode: PersistMode::default(),
        }
    }
}
