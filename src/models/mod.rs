//! Data models for the retreat planning backend.
//!
//! These models match the backend JSON resources; unknown fields are ignored on decode.

mod attendee;
mod email_template;
mod file;
mod itinerary;
mod retreat;
mod rfp;
mod trip;
mod user;
mod website;

pub use attendee::*;
pub use email_template::*;
pub use file::*;
pub use itinerary::*;
pub use retreat::*;
pub use rfp::*;
pub use trip::*;
pub use user::*;
pub use website::*;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::ClientResult;

/// Backend-assigned numeric identifier.
pub type Id = i64;

/// Every resource type mirrored by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Retreat,
    Attendee,
    Trip,
    Website,
    Page,
    Block,
    User,
    Rfp,
    EmailTemplate,
    PastItinerary,
    PastItineraryLocation,
    File,
}

impl EntityKind {
    /// Collection segment under `/v1.0/`.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Retreat => "retreats",
            EntityKind::Attendee => "attendees",
            EntityKind::Trip => "trips",
            EntityKind::Website => "websites",
            EntityKind::Page => "pages",
            EntityKind::Block => "blocks",
            EntityKind::User => "users",
            EntityKind::Rfp => "rfps",
            EntityKind::EmailTemplate => "email-templates",
            EntityKind::PastItinerary => "past-itineraries",
            EntityKind::PastItineraryLocation => "past-itinerary-locations",
            EntityKind::File => "files",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Retreat => "retreat",
            EntityKind::Attendee => "attendee",
            EntityKind::Trip => "trip",
            EntityKind::Website => "website",
            EntityKind::Page => "page",
            EntityKind::Block => "block",
            EntityKind::User => "user",
            EntityKind::Rfp => "rfp",
            EntityKind::EmailTemplate => "email template",
            EntityKind::PastItinerary => "past itinerary",
            EntityKind::PastItineraryLocation => "past itinerary location",
            EntityKind::File => "file",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flat record keyed by a backend-assigned id.
pub trait Entity: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> Id;
}

/// Pre-submission checks for request bodies.
pub trait Validate {
    fn validate(&self) -> ClientResult<()> {
        Ok(())
    }
}

pub(crate) fn require(field: &str, value: &str) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(crate::errors::ClientError::Validation(format!(
            "{} is required",
            field
        )));
    }
    Ok(())
}

pub(crate) fn require_email(field: &str, value: &str) -> ClientResult<()> {
    require(field, value)?;
    let trimmed = value.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };
    if !valid {
        return Err(crate::errors::ClientError::Validation(format!(
            "{} is not a valid email address",
            field
        )));
    }
    Ok(())
}
