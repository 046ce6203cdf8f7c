//! Typed views derived from the store.
//!
//! Relationship lists may reference ids that are not cached yet; views skip those and
//! `unresolved` reports them so callers can fetch them.

use super::{Lookup, Relation, Store, Stored};
use crate::models::{
    Attendee, Block, Id, Page, PastItinerary, PastItineraryLocation, Trip, User,
};

impl Store {
    fn resolve<E: Stored>(&self, ids: &[Id]) -> Vec<&E> {
        let map = E::map(self);
        ids.iter().filter_map(|id| map.get(*id)).collect()
    }

    fn resolve_children<E: Stored>(&self, relation: Relation, parent_id: Id) -> Vec<&E> {
        match self.children(relation, parent_id) {
            Some(ids) => self.resolve(ids),
            None => Vec::new(),
        }
    }

    /// Pages of a website in navigation order.
    pub fn website_pages(&self, website_id: Id) -> Vec<&Page> {
        self.resolve_children(Relation::WebsitePages, website_id)
    }

    /// Blocks of a page in render order.
    pub fn page_blocks(&self, page_id: Id) -> Vec<&Block> {
        self.resolve_children(Relation::PageBlocks, page_id)
    }

    pub fn retreat_attendees(&self, retreat_id: Id) -> Vec<&Attendee> {
        self.resolve_children(Relation::RetreatAttendees, retreat_id)
    }

    pub fn retreat_users(&self, retreat_id: Id) -> Vec<&User> {
        self.resolve_children(Relation::RetreatUsers, retreat_id)
    }

    pub fn attendee_trips(&self, attendee_id: Id) -> Vec<&Trip> {
        self.resolve_children(Relation::AttendeeTravel, attendee_id)
    }

    pub fn itinerary_locations(&self, itinerary_id: Id) -> Vec<&PastItineraryLocation> {
        match self.itineraries.get(itinerary_id) {
            Some(itinerary) => self.resolve(&itinerary.location_ids),
            None => Vec::new(),
        }
    }

    /// Past itineraries visiting a location, via the derived index.
    pub fn itineraries_at(&self, location_id: Id) -> Vec<&PastItinerary> {
        match self.itinerary_to_location.get(&location_id) {
            Some(ids) => self.resolve(ids),
            None => Vec::new(),
        }
    }

    /// Child ids a parent references that were never fetched. Not-found ids are excluded.
    pub fn unresolved(&self, relation: Relation, parent_id: Id) -> Vec<Id> {
        let Some(ids) = self.children(relation, parent_id) else {
            return Vec::new();
        };
        ids.iter()
            .copied()
            .filter(|id| self.is_missing(relation, *id))
            .collect()
    }

    fn is_missing(&self, relation: Relation, child_id: Id) -> bool {
        fn missing<E: Stored>(store: &Store, id: Id) -> bool {
            matches!(E::map(store).lookup(id), Lookup::Missing)
        }

        match relation {
            Relation::RetreatUsers => missing::<User>(self, child_id),
            Relation::RetreatAttendees => missing::<Attendee>(self, child_id),
            Relation::WebsitePages => missing::<Page>(self, child_id),
            Relation::PageBlocks => missing::<Block>(self, child_id),
            Relation::AttendeeTravel => missing::<Trip>(self, child_id),
        }
    }
}
