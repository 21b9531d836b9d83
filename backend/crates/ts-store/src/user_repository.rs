use crate::{NewUser, StoreError, StoreResult};

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, warn};
use tokio::sync::Mutex;
use ts_core::User;

/// Registered users in a flat JSON array file.
///
/// Writes are serialised and replace the file atomically through a
/// temporary sibling, so concurrent registrations never drop each other.
pub struct UserRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl UserRepository {
    /// Open the user file, creating it as `[]` when missing.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if !tokio::fs::try_exists(&path)
            .await
            .map_err(|e| StoreError::io(&path, e))?
        {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::io(parent, e))?;
            }
            tokio::fs::write(&path, "[]")
                .await
                .map_err(|e| StoreError::io(&path, e))?;
            debug!("Created empty user file at {}", path.display());
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All users in file order. An unreadable or malformed file reads as empty.
    pub async fn all(&self) -> Vec<User> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read user file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(users) => users,
            Err(e) => {
                warn!("Malformed user file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    pub async fn count(&self) -> usize {
        self.all().await.len()
    }

    /// Append a user. No uniqueness checks.
    pub async fn register(&self, new_user: NewUser) -> StoreResult<User> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.all().await;
        let user = new_user.into_user(Utc::now().timestamp_millis().to_string());
        users.push(user.clone());

        self.replace(&users).await?;
        debug!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// First user in file order whose username or phone matches.
    pub async fn find_first(&self, username: Option<&str>, phone: Option<&str>) -> Option<User> {
        self.all()
            .await
            .into_iter()
            .find(|user| user.matches(username, phone))
    }

    async fn replace(&self, users: &[User]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(users)?;
        let temp_path = self.temp_path();

        tokio::fs::write(&temp_path, json)
            .await
            .map_err(|e| StoreError::io(&temp_path, e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
