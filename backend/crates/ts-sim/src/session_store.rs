use crate::{SimError, SimResult};

use ts_core::Session;

use std::path::{Path, PathBuf};

use log::debug;

/// The logged-in user, kept between CLI invocations as `session.json`.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> SimResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| SimError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| SimError::Session {
                path: self.path.clone(),
                source,
            })
    }

    pub fn save(&self, session: &Session) -> SimResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SimError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(session).map_err(|source| SimError::Session {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| SimError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Returns whether a session existed.
    pub fn clear(&self) -> SimResult<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(SimError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
