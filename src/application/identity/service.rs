//! User management service: application-layer orchestration
//!
//! Every operation loads the whole collection from the store, works on it in
//! memory and writes it back. Nothing is cached between calls.
//!
//! Failure handling differs per operation and callers rely on it:
//! reads (`list_all`, `get_by_id`) and `delete` log and swallow store
//! failures, while `create` and `update` raise them.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::{DomainError, DomainResult, User, UserStore};

/// User service: CRUD over the injected [`UserStore`].
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// All users; empty when the store cannot be read.
    pub async fn list_all(&self) -> Vec<User> {
        match self.store.read_all().await {
            Ok(users) => users,
            Err(e) => {
                error!(error = %e, "Failed to read users");
                Vec::new()
            }
        }
    }

    /// Single user by id; `None` when absent or when the store cannot be read.
    pub async fn get_by_id(&self, id: u64) -> Option<User> {
        match self.store.read_all().await {
            Ok(users) => users.into_iter().find(|u| u.id == id),
            Err(e) => {
                error!(user_id = id, error = %e, "Failed to read user");
                None
            }
        }
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Append a new user with a fresh id and the default role.
    pub async fn create(&self, name: &str, email: &str) -> DomainResult<User> {
        self.try_create(name, email).await.map_err(|e| {
            error!(error = %e, "Failed to create user");
            DomainError::Creation(Box::new(e))
        })
    }

    async fn try_create(&self, name: &str, email: &str) -> DomainResult<User> {
        let mut users = self.store.read_all().await?;
        let user = User::new(self.store.next_id(&users)?, name, email);
        users.push(user.clone());
        self.store.write_all(&users).await?;

        info!(user_id = user.id, name = %user.name, email = %user.email, "User created");
        Ok(user)
    }

    /// Replace name and email of an existing user. The role is kept.
    pub async fn update(&self, id: u64, name: &str, email: &str) -> DomainResult<User> {
        let result = self.try_update(id, name, email).await;
        match result {
            Err(e @ DomainError::NotFound { .. }) => {
                warn!(user_id = id, "Update of unknown user");
                Err(e)
            }
            Err(e) => {
                error!(user_id = id, error = %e, "Failed to update user");
                Err(DomainError::Update(Box::new(e)))
            }
            ok => ok,
        }
    }

    async fn try_update(&self, id: u64, name: &str, email: &str) -> DomainResult<User> {
        let mut users = self.store.read_all().await?;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::user_not_found(id))?;

        user.name = name.to_string();
        user.email = email.to_string();
        let updated = user.clone();

        self.store.write_all(&users).await?;

        info!(user_id = id, name = %updated.name, email = %updated.email, "User updated");
        Ok(updated)
    }

    /// Remove a user. `false` when the id is unknown or the store fails.
    pub async fn delete(&self, id: u64) -> bool {
        let mut users = match self.store.read_all().await {
            Ok(users) => users,
            Err(e) => {
                error!(user_id = id, error = %e, "Failed to read users for deletion");
                return false;
            }
        };

        let Some(index) = users.iter().position(|u| u.id == id) else {
            info!(user_id = id, "Delete of unknown user");
            return false;
        };
        let removed = users.remove(index);

        if let Err(e) = self.store.write_all(&users).await {
            error!(user_id = id, error = %e, "Failed to persist deletion");
            return false;
        }

        info!(user_id = id, name = %removed.name, "User deleted");
        true
    }
}
