//! JSON file storage
//!
//! The whole user collection lives in a single pretty-printed JSON array.
//! Every write replaces the file; there is no locking.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{info, warn};

use crate::domain::{seed_users, DomainResult, User, UserStore};

/// File-backed [`UserStore`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> DomainResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await?;
        }
        Ok(())
    }

    async fn write_seed(&self) -> DomainResult<Vec<User>> {
        info!(path = %self.path.display(), "Data file missing, writing seed users");
        let users = seed_users();
        self.write_all(&users).await?;
        Ok(users)
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn read_all(&self) -> DomainResult<Vec<User>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return self.write_seed().await,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!(path = %self.path.display(), error = %e, "Data file is not UTF-8, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return self.write_seed().await;
        }

        match serde_json::from_str::<Vec<User>>(&content) {
            Ok(users) => Ok(users),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Data file does not hold a list of users, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_all(&self, users: &[User]) -> DomainResult<()> {
        self.ensure_parent_dir().await?;
        let content = serde_json::to_string_pretty(users)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}
