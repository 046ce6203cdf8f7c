//! Lodging RFP model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require, Entity, EntityKind, Id, Validate};
use crate::errors::{ClientError, ClientResult};

/// Progress of a request for proposal sent to hotels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RfpStatus {
    #[default]
    Pending,
    Sent,
    Responded,
    Closed,
}

/// A lodging request for proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rfp {
    pub id: Id,
    pub retreat_id: Id,
    #[serde(default)]
    pub status: RfpStatus,
    #[serde(default)]
    pub retreat_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees_lower: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees_upper: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_block: Option<u32>,
    #[serde(default)]
    pub flexible_dates: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub hotel_ids: Vec<Id>,
}

impl Entity for Rfp {
    const KIND: EntityKind = EntityKind::Rfp;

    fn id(&self) -> Id {
        self.id
    }
}

/// Request body for creating an RFP.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewRfp {
    pub retreat_id: Id,
    pub retreat_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees_lower: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees_upper: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_block: Option<u32>,
    pub flexible_dates: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub preferences: Vec<String>,
    pub hotel_ids: Vec<Id>,
}

impl Validate for NewRfp {
    fn validate(&self) -> ClientResult<()> {
        require("retreat_name", &self.retreat_name)?;

        if let (Some(lower), Some(upper)) = (self.attendees_lower, self.attendees_upper) {
            if lower > upper {
                return Err(ClientError::Validation(
                    "attendee range is inverted".to_string(),
                ));
            }
        }

        if !self.flexible_dates {
            match (self.start_date, self.end_date) {
                (Some(start), Some(end)) if end < start => {
                    return Err(ClientError::Validation(
                        "end_date is before start_date".to_string(),
                    ));
                }
                (Some(_), Some(_)) => {}
                _ => {
                    return Err(ClientError::Validation(
                        "fixed-date RFPs need start_date and end_date".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// PATCH body for an RFP.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RfpUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RfpStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_block: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<String>>,
}

impl Validate for RfpUpdate {}
