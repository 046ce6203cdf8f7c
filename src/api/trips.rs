//! Flight and travel actions.

use crate::errors::ClientResult;
use crate::models::{Id, NewTrip, Trip, TripUpdate};
use crate::store::ActionMeta;
use crate::Dashboard;

impl Dashboard {
    /// GET /v1.0/trips/:id
    pub async fn fetch_trip(&self, id: Id) -> ClientResult<Trip> {
        self.fetch(id).await
    }

    /// POST /v1.0/trips - appends the trip to the attendee's travel if the attendee is cached.
    pub async fn create_trip(&self, request: &NewTrip) -> ClientResult<Trip> {
        self.create(request, ActionMeta::parent(request.attendee_id))
            .await
    }

    /// PATCH /v1.0/trips/:id
    pub async fn update_trip(&self, id: Id, changes: &TripUpdate) -> ClientResult<Trip> {
        self.update(id, changes).await
    }

    /// DELETE /v1.0/trips/:id
    pub async fn delete_trip(&self, id: Id) -> ClientResult<()> {
        self.delete::<Trip>(id).await
    }
}
