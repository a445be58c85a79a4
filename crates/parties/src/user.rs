use serde::{Deserialize, Deserializer, Serialize, Serializer};

use inventix_core::{coerce, RecordId};

/// Account role.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Other(s) => s,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Role::Admin,
            "user" => Role::User,
            _ => Role::Other(value),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        coerce::text(deserializer).map(Role::from)
    }
}

fn no_role() -> Role {
    Role::Other(String::new())
}

/// User record as returned by the backend `users` listing.
///
/// Credentials the backend may include are not modelled and are dropped on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub username: String,
    #[serde(default, deserialize_with = "coerce::opt_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default = "no_role")]
    pub role: Role,
}

impl User {
    /// Everyone except administrators shops as a customer.
    pub fn is_customer(&self) -> bool {
        self.role != Role::Admin
    }

    /// Email on file, or one derived from the username.
    pub fn contact_email(&self) -> String {
        match self.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => email.to_string(),
            _ => format!("{}@email.com", self.username),
        }
    }
}

/// Customers among `users`, in input order.
pub fn customers(users: &[User]) -> Vec<User> {
    users.iter().filter(|u| u.is_customer()).cloned().collect()
}
