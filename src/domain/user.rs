//! User domain entity and related types.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A persisted user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Generated by the database, never changes
    pub id: i32,
    pub username: String,
    /// Stored as plain text
    pub password: String,
    /// Creation time as stored; `None` when another client left it NULL
    pub created_at: Option<NaiveDateTime>,
}

/// A user that has not been inserted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub created_at: NaiveDateTime,
}

impl NewUser {
    /// Create a new user stamped with the current local time
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::created_at(username, password, Local::now().naive_local())
    }

    /// Create a new user with an explicit creation time
    pub fn created_at(
        username: impl Into<String>,
        password: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            created_at,
        }
    }
}

/// User creation form fields. A field left out of the body is stored empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl From<CreateUser> for NewUser {
    fn from(form: CreateUser) -> Self {
        NewUser::new(form.username, form.password)
    }
}
