//! Retreat model: the root resource every other record hangs off.

use serde::{Deserialize, Serialize};

use super::{require, Entity, EntityKind, Id, Validate};
use crate::errors::ClientResult;

/// A company retreat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retreat {
    pub id: Id,
    #[serde(default)]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retreat_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Ids of the users administering this retreat
    #[serde(default)]
    pub users: Vec<Id>,
    /// Ids of the attendees on the roster
    #[serde(default)]
    pub attendees: Vec<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees_website_id: Option<Id>,
    #[serde(default)]
    pub flights_live: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary_id: Option<Id>,
}

impl Entity for Retreat {
    const KIND: EntityKind = EntityKind::Retreat;

    fn id(&self) -> Id {
        self.id
    }
}

/// Request body for creating a retreat.
#[derive(Debug, Clone, Serialize)]
pub struct NewRetreat {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retreat_name: Option<String>,
}

impl Validate for NewRetreat {
    fn validate(&self) -> ClientResult<()> {
        require("company_name", &self.company_name)
    }
}

/// PATCH body for a retreat.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RetreatUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retreat_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flights_live: Option<bool>,
}

impl Validate for RetreatUpdate {}
