//! Past itinerary models shown as inspiration when planning a retreat.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, Id};

/// A retreat itinerary run in the past.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastItinerary {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub nights: u32,
    #[serde(default)]
    pub location_ids: Vec<Id>,
}

impl Entity for PastItinerary {
    const KIND: EntityKind = EntityKind::PastItinerary;

    fn id(&self) -> Id {
        self.id
    }
}

/// A destination visited by one or more past itineraries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastItineraryLocation {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub hotel_ids: Vec<Id>,
}

impl Entity for PastItineraryLocation {
    const KIND: EntityKind = EntityKind::PastItineraryLocation;

    fn id(&self) -> Id {
        self.id
    }
}
