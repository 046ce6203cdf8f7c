//! Attendee model for retreat rosters.

use serde::{Deserialize, Serialize};

use super::{require, require_email, Entity, EntityKind, Id, Validate};
use crate::errors::ClientResult;

/// Whether the attendee has completed their registration details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InfoStatus {
    #[default]
    NotInvited,
    InfoNotEntered,
    InfoEntered,
    Cancelled,
}

/// Flight booking progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    #[default]
    Pending,
    OptOut,
    Booked,
}

/// A person attending a retreat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: Id,
    pub retreat_id: Id,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_prefs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub info_status: InfoStatus,
    #[serde(default)]
    pub flight_status: FlightStatus,
    /// Ids of booked trips, outbound first
    #[serde(default)]
    pub travel: Vec<Id>,
}

impl Attendee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Entity for Attendee {
    const KIND: EntityKind = EntityKind::Attendee;

    fn id(&self) -> Id {
        self.id
    }
}

/// Request body for adding an attendee to a retreat.
#[derive(Debug, Clone, Serialize)]
pub struct NewAttendee {
    pub retreat_id: Id,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_prefs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Validate for NewAttendee {
    fn validate(&self) -> ClientResult<()> {
        require("first_name", &self.first_name)?;
        require("last_name", &self.last_name)?;
        require_email("email_address", &self.email_address)
    }
}

/// PATCH body for an attendee.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttendeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_prefs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_status: Option<InfoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_status: Option<FlightStatus>,
}

impl Validate for AttendeeUpdate {
    fn validate(&self) -> ClientResult<()> {
        if let Some(email) = &self.email_address {
            require_email("email_address", email)?;
        }
        Ok(())
    }
}
