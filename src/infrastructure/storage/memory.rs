//! In-memory storage implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainResult, User, UserStore};

/// In-memory [`UserStore`] for development and testing
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn read_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn write_all(&self, users: &[User]) -> DomainResult<()> {
        *self.users.write().await = users.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[tokio::test]
    async fn write_replaces_collection() {
        let store = InMemoryStore::with_users(vec![User::new(1, "Ana", "ana@x.com")]);
        store
            .write_all(&[User::new(7, "Bo", "bo@y.org")])
            .await
            .unwrap();

        let users = store.read_all().await.unwrap();
        assert_eq!(users, vec![User::new(7, "Bo", "bo@y.org")]);
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        let store = InMemoryStore::new();
        assert_eq!(store.next_id(&[]).unwrap(), 1);
        assert_eq!(
            store
                .next_id(&[User::new(3, "a", "a@a.a"), User::new(11, "b", "b@b.b")])
                .unwrap(),
            12
        );
    }

    #[test]
    fn next_id_refuses_to_overflow() {
        let store = InMemoryStore::new();
        let err = store.next_id(&[User::new(u64::MAX, "a", "a@a.a")]).unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
