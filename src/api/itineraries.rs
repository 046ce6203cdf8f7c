//! Past itinerary actions (read-only).

use super::collection_path;
use crate::errors::ClientResult;
use crate::models::{EntityKind, Id, PastItinerary, PastItineraryLocation};
use crate::Dashboard;

impl Dashboard {
    /// GET /v1.0/past-itineraries - also indexes each itinerary under its locations.
    pub async fn list_past_itineraries(&self) -> ClientResult<Vec<PastItinerary>> {
        self.list_at(&collection_path(EntityKind::PastItinerary), &[])
            .await
    }

    /// GET /v1.0/past-itineraries/:id
    pub async fn fetch_past_itinerary(&self, id: Id) -> ClientResult<PastItinerary> {
        self.fetch(id).await
    }

    /// GET /v1.0/past-itinerary-locations
    pub async fn list_itinerary_locations(&self) -> ClientResult<Vec<PastItineraryLocation>> {
        self.list_at(&collection_path(EntityKind::PastItineraryLocation), &[])
            .await
    }

    /// GET /v1.0/past-itinerary-locations/:id
    pub async fn fetch_itinerary_location(&self, id: Id) -> ClientResult<PastItineraryLocation> {
        self.fetch(id).await
    }
}
