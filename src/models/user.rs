//! Dashboard user model.

use serde::{Deserialize, Serialize};

use super::{require, require_email, Entity, EntityKind, Id, Validate};
use crate::errors::ClientResult;

/// A dashboard user with access to one or more retreats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> Id {
        self.id
    }
}

/// Request body for inviting a user to a retreat.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub retreat_id: Id,
}

impl Validate for NewUser {
    fn validate(&self) -> ClientResult<()> {
        require("first_name", &self.first_name)?;
        require_email("email", &self.email)
    }
}

/// PATCH body for a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Validate for UserUpdate {}
