use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role assigned to every user created through the API.
pub const DEFAULT_ROLE: &str = "user";

/// User record, persisted as-is in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier, never reused among live records
    #[schema(example = 1)]
    pub id: u64,
    /// Display name (`nom` in legacy data files)
    #[serde(alias = "nom")]
    #[schema(example = "Jean Dupont")]
    pub name: String,
    #[schema(example = "jean.dupont@email.com")]
    pub email: String,
    #[schema(example = "user")]
    pub role: String,
}

impl User {
    /// Build a record with the default role.
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: DEFAULT_ROLE.to_string(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }
}

/// The sample users written when no data file exists yet.
pub fn seed_users() -> Vec<User> {
    const SEED: [(&str, &str, &str); 10] = [
        ("Jean Dupont", "jean.dupont@email.com", "admin"),
        ("Marie Martin", "marie.martin@email.com", "moderator"),
        ("Pierre Durand", "pierre.durand@email.com", DEFAULT_ROLE),
        ("Sophie Bernard", "sophie.bernard@email.com", DEFAULT_ROLE),
        ("Lucas Petit", "lucas.petit@email.com", DEFAULT_ROLE),
        ("Emma Roux", "emma.roux@email.com", DEFAULT_ROLE),
        ("Thomas Moreau", "thomas.moreau@email.com", DEFAULT_ROLE),
        ("Julie Simon", "julie.simon@email.com", DEFAULT_ROLE),
        ("Nicolas Michel", "nicolas.michel@email.com", DEFAULT_ROLE),
        ("Camille Garcia", "camille.garcia@email.com", DEFAULT_ROLE),
    ];

    SEED.iter()
        .zip(1u64..)
        .map(|(&(name, email, role), id)| User::new(id, name, email).with_role(role))
        .collect()
}
