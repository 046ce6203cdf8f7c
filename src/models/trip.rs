//! Trip model for flight and travel logistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, Id, Validate};
use crate::errors::{ClientError, ClientResult};

/// A single flight segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripLeg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dep_airport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arr_airport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
}

/// A booked trip made of one or more legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_currency: Option<String>,
    /// Total travel time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default)]
    pub trip_legs: Vec<TripLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_locator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
}

impl Entity for Trip {
    const KIND: EntityKind = EntityKind::Trip;

    fn id(&self) -> Id {
        self.id
    }
}

/// Request body for booking a trip for an attendee.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTrip {
    pub attendee_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_currency: Option<String>,
    pub trip_legs: Vec<TripLeg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_locator: Option<String>,
}

impl Validate for NewTrip {
    fn validate(&self) -> ClientResult<()> {
        if let Some(cost) = self.cost {
            if cost < 0.0 {
                return Err(ClientError::Validation("cost must not be negative".to_string()));
            }
        }
        validate_legs(&self.trip_legs)
    }
}

/// PATCH body for a trip.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TripUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_legs: Option<Vec<TripLeg>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_locator: Option<String>,
}

impl Validate for TripUpdate {
    fn validate(&self) -> ClientResult<()> {
        match &self.trip_legs {
            Some(legs) => validate_legs(legs),
            None => Ok(()),
        }
    }
}

fn validate_legs(legs: &[TripLeg]) -> ClientResult<()> {
    for (index, leg) in legs.iter().enumerate() {
        if let (Some(dep), Some(arr)) = (leg.departure_time, leg.arrival_time) {
            if arr < dep {
                return Err(ClientError::Validation(format!(
                    "trip leg {} arrives before it departs",
                    index + 1
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_leg_ordering_validation() {
        let dep = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();
        let arr = Utc.with_ymd_and_hms(2026, 5, 1, 12, 30, 0).unwrap();

        let good = NewTrip {
            attendee_id: 1,
            trip_legs: vec![TripLeg {
                departure_time: Some(dep),
                arrival_time: Some(arr),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(good.validate().is_ok());

        let bad = TripUpdate {
            trip_legs: Some(vec![TripLeg {
                departure_time: Some(arr),
                arrival_time: Some(dep),
                ..Default::default()
            }]),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
