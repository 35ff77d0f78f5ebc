//! In-memory user collection
//!
//! `UserStore` owns a single ordered list of [`User`] records. A record is any
//! JSON object; `id`, `name` and `email` are what the seed data carries, but
//! nothing is enforced. Lookups are linear scans comparing the integer `id`
//! field, so records without one are never found by id, and with duplicate
//! ids the first match in list order wins.
//!
//! The store itself does no locking. Callers that share it across tasks wrap
//! it in a lock (the HTTP layer uses `Arc<RwLock<UserStore>>`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Names used to build the seed list, in id order starting at 1
const SEED_NAMES: [&str; 20] = [
    "Alice", "Bob", "Charlie", "Diana", "Ethan", "Fatima", "George", "Hina", "Imran", "Jasmine",
    "Kashif", "Lina", "Michael", "Nadia", "Omar", "Priya", "Qasim", "Rida", "Saad", "Tanya",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound(i64),
}

/// A user record, stored exactly as the caller sent it
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct User(Map<String, Value>);

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::from(id));
        fields.insert("name".to_string(), Value::String(name.into()));
        fields.insert("email".to_string(), Value::String(email.into()));
        Self(fields)
    }

    /// The integer `id` field, if the record has one
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Shallow merge: every supplied key overwrites ours, `null` included
    pub fn merge(&mut self, fields: Map<String, Value>) {
        self.0.extend(fields);
    }
}

impl From<Map<String, Value>> for User {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// The fixed records present at startup
pub fn seed_users() -> Vec<User> {
    SEED_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| User::new(id, *name, format!("{}@example.com", name.to_lowercase())))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: i64) -> Result<&User, UserError> {
        self.users
            .iter()
            .find(|user| user.id() == Some(id))
            .ok_or(UserError::NotFound(id))
    }

    /// Append the record as given; no id assignment, duplicate or schema check
    pub fn create(&mut self, user: User) -> &User {
        self.users.push(user);
        &self.users[self.users.len() - 1]
    }

    pub fn update(&mut self, id: i64, fields: Map<String, Value>) -> Result<&User, UserError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id() == Some(id))
            .ok_or(UserError::NotFound(id))?;

        user.merge(fields);
        Ok(&*user)
    }

    pub fn delete(&mut self, id: i64) -> Result<User, UserError> {
        let position = self
            .users
            .iter()
            .position(|user| user.id() == Some(id))
            .ok_or(UserError::NotFound(id))?;

        Ok(self.users.remove(position))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
