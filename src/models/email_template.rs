//! Email template model.

use serde::{Deserialize, Serialize};

use super::{require, Entity, EntityKind, Id, Validate};
use crate::errors::ClientResult;

/// An email template scoped to a retreat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: Id,
    pub retreat_id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

impl Entity for EmailTemplate {
    const KIND: EntityKind = EntityKind::EmailTemplate;

    fn id(&self) -> Id {
        self.id
    }
}

/// Request body for creating an email template.
#[derive(Debug, Clone, Serialize)]
pub struct NewEmailTemplate {
    pub retreat_id: Id,
    pub name: String,
    pub subject: String,
    pub body: String,
}

impl Validate for NewEmailTemplate {
    fn validate(&self) -> ClientResult<()> {
        require("name", &self.name)?;
        require("subject", &self.subject)
    }
}

/// PATCH body for an email template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmailTemplateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Validate for EmailTemplateUpdate {}
