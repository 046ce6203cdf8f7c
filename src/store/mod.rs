//! Normalized client-side store.
//!
//! One mapping per entity type, keyed by backend id. Records are replaced whole on every
//! successful response; relationship lists live on the parent records and are kept in step
//! by the reducer. The server stays the source of truth: the store is a cache of what this
//! client last observed.

mod reducer;
mod relations;
mod selectors;

pub use reducer::*;
pub use relations::*;

use std::collections::HashMap;

use crate::models::{
    Attendee, Block, EmailTemplate, Entity, FileDescriptor, Id, Page, PastItinerary,
    PastItineraryLocation, Retreat, Rfp, Trip, User, Website,
};

/// Cached state for one id.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Present(T),
    /// The backend answered 404 for this id.
    NotFound,
}

/// Result of looking an id up in a mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a, T> {
    /// Never requested (or removed).
    Missing,
    NotFound,
    Present(&'a T),
}

/// Keyed mapping from id to record for a single entity type.
#[derive(Debug, Clone)]
pub struct EntityMap<T> {
    slots: HashMap<Id, Slot<T>>,
}

impl<T> Default for EntityMap<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<T: Entity> EntityMap<T> {
    pub fn lookup(&self, id: Id) -> Lookup<'_, T> {
        match self.slots.get(&id) {
            Some(Slot::Present(entity)) => Lookup::Present(entity),
            Some(Slot::NotFound) => Lookup::NotFound,
            None => Lookup::Missing,
        }
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        match self.slots.get(&id) {
            Some(Slot::Present(entity)) => Some(entity),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        match self.slots.get_mut(&id) {
            Some(Slot::Present(entity)) => Some(entity),
            _ => None,
        }
    }

    pub fn contains(&self, id: Id) -> bool {
        self.get(id).is_some()
    }

    pub fn is_not_found(&self, id: Id) -> bool {
        matches!(self.slots.get(&id), Some(Slot::NotFound))
    }

    /// Replace whatever is cached for the entity's id.
    pub fn upsert(&mut self, entity: T) -> Option<T> {
        match self.slots.insert(entity.id(), Slot::Present(entity)) {
            Some(Slot::Present(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Replace the slot with the not-found marker, returning a record it displaced.
    pub fn mark_not_found(&mut self, id: Id) -> Option<T> {
        match self.slots.insert(id, Slot::NotFound) {
            Some(Slot::Present(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Forget a not-found marker so the id can be requested again.
    pub fn clear_not_found(&mut self, id: Id) -> bool {
        if self.is_not_found(id) {
            self.slots.remove(&id);
            return true;
        }
        false
    }

    pub fn remove(&mut self, id: Id) -> Option<T> {
        match self.slots.remove(&id) {
            Some(Slot::Present(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Present records, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.values().filter_map(|slot| match slot {
            Slot::Present(entity) => Some(entity),
            Slot::NotFound => None,
        })
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.values_mut().filter_map(|slot| match slot {
            Slot::Present(entity) => Some(entity),
            Slot::NotFound => None,
        })
    }

    /// Number of present records.
    pub fn len(&self) -> usize {
        self.values().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The whole client-side cache.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub retreats: EntityMap<Retreat>,
    pub attendees: EntityMap<Attendee>,
    pub trips: EntityMap<Trip>,
    pub websites: EntityMap<Website>,
    pub pages: EntityMap<Page>,
    pub blocks: EntityMap<Block>,
    pub users: EntityMap<User>,
    pub rfps: EntityMap<Rfp>,
    pub email_templates: EntityMap<EmailTemplate>,
    pub itineraries: EntityMap<PastItinerary>,
    pub locations: EntityMap<PastItineraryLocation>,
    pub files: EntityMap<FileDescriptor>,
    /// Location id to the ids of past itineraries visiting it.
    pub itinerary_to_location: HashMap<Id, Vec<Id>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping for an entity type.
    pub fn map<E: Stored>(&self) -> &EntityMap<E> {
        E::map(self)
    }

    pub fn get<E: Stored>(&self, id: Id) -> Option<&E> {
        E::map(self).get(id)
    }

    pub fn lookup<E: Stored>(&self, id: Id) -> Lookup<'_, E> {
        E::map(self).lookup(id)
    }
}

/// Entity types the store keeps a mapping for.
pub trait Stored: Entity {
    /// The parent list a newly created record of this type is appended to.
    const RELATION: Option<Relation> = None;

    fn map(store: &Store) -> &EntityMap<Self>;

    fn map_mut(store: &mut Store) -> &mut EntityMap<Self>;

    /// Maintain derived indexes for a record about to be merged. The mapping still holds
    /// the previous version, if any.
    fn before_merge(_store: &mut Store, _entity: &Self) {}

    /// Maintain derived indexes after a record left the mapping.
    fn after_remove(_store: &mut Store, _removed: &Self) {}
}

macro_rules! impl_stored {
    ($entity:ty, $field:ident) => {
        impl_stored!($entity, $field, None);
    };
    ($entity:ty, $field:ident, $relation:expr) => {
        impl Stored for $entity {
            const RELATION: Option<Relation> = $relation;

            fn map(store: &Store) -> &EntityMap<Self> {
                &store.$field
            }

            fn map_mut(store: &mut Store) -> &mut EntityMap<Self> {
                &mut store.$field
            }
        }
    };
}

impl_stored!(Retreat, retreats);
impl_stored!(Attendee, attendees, Some(Relation::RetreatAttendees));
impl_stored!(Trip, trips, Some(Relation::AttendeeTravel));
impl_stored!(Website, websites);
impl_stored!(Page, pages, Some(Relation::WebsitePages));
impl_stored!(Block, blocks, Some(Relation::PageBlocks));
impl_stored!(User, users, Some(Relation::RetreatUsers));
impl_stored!(Rfp, rfps);
impl_stored!(EmailTemplate, email_templates);
impl_stored!(PastItineraryLocation, locations);
impl_stored!(FileDescriptor, files);

impl Stored for PastItinerary {
    fn map(store: &Store) -> &EntityMap<Self> {
        &store.itineraries
    }

    fn map_mut(store: &mut Store) -> &mut EntityMap<Self> {
        &mut store.itineraries
    }

    fn before_merge(store: &mut Store, itinerary: &Self) {
        let stale: Vec<Id> = match store.itineraries.get(itinerary.id) {
            Some(previous) => previous
                .location_ids
                .iter()
                .copied()
                .filter(|location_id| !itinerary.location_ids.contains(location_id))
                .collect(),
            None => Vec::new(),
        };
        let index = &mut store.itinerary_to_location;
        unlink_itinerary(index, itinerary.id, &stale);
        for location_id in &itinerary.location_ids {
            let itineraries = index.entry(*location_id).or_default();
            if !itineraries.contains(&itinerary.id) {
                itineraries.push(itinerary.id);
            }
        }
    }

    fn after_remove(store: &mut Store, itinerary: &Self) {
        unlink_itinerary(
            &mut store.itinerary_to_location,
            itinerary.id,
            &itinerary.location_ids,
        );
    }
}

/// Drop an itinerary from the index entries of the given locations only.
fn unlink_itinerary(index: &mut HashMap<Id, Vec<Id>>, itinerary_id: Id, location_ids: &[Id]) {
    for location_id in location_ids {
        if let Some(itineraries) = index.get_mut(location_id) {
            itineraries.retain(|id| *id != itinerary_id);
            if itineraries.is_empty() {
                index.remove(location_id);
            }
        }
    }
}
