//! Reducer: how completed requests are merged into the store.

use super::{Store, Stored};
use crate::models::{EntityKind, Id};

/// Context the caller attaches to a mutation, e.g. which parent a new child belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionMeta {
    pub parent_id: Option<Id>,
}

impl ActionMeta {
    pub fn parent(parent_id: Id) -> Self {
        Self {
            parent_id: Some(parent_id),
        }
    }
}

/// What a successful (or 404) response means for the store.
#[derive(Debug, Clone)]
pub enum Effect<E> {
    /// A fetch or update returned the record.
    Received(E),
    /// A list request returned records.
    ReceivedMany(Vec<E>),
    /// A create returned the new record.
    Created { entity: E, meta: ActionMeta },
    Deleted { id: Id },
    /// The backend answered 404 for a single-record fetch.
    Missing { id: Id },
}

/// Summary of one reducer pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Records written into their mapping.
    pub merged: usize,
    /// Parent whose list gained the new child id.
    pub attached_to: Option<Id>,
    /// Parent named in the meta but not cached, so its list was left alone.
    pub parent_skipped: Option<Id>,
    /// Parents whose list lost a deleted child id.
    pub pruned_from: Vec<Id>,
    pub removed: bool,
    pub marked_not_found: bool,
}

impl Store {
    /// Merge one effect into the store.
    pub fn apply<E: Stored>(&mut self, effect: Effect<E>) -> MergeReport {
        let mut report = MergeReport::default();

        match effect {
            Effect::Received(entity) => {
                self.merge(entity);
                report.merged = 1;
            }
            Effect::ReceivedMany(entities) => {
                report.merged = entities.len();
                for entity in entities {
                    self.merge(entity);
                }
            }
            Effect::Created { entity, meta } => {
                let child_id = entity.id();
                self.merge(entity);
                report.merged = 1;

                if let (Some(relation), Some(parent_id)) = (E::RELATION, meta.parent_id) {
                    match self.attach(relation, parent_id, child_id) {
                        Some(_) => report.attached_to = Some(parent_id),
                        None => {
                            // The list is corrected the next time the parent is fetched.
                            tracing::debug!(
                                kind = %E::KIND,
                                child_id,
                                parent_kind = %relation.parent_kind(),
                                parent_id,
                                "Parent not cached, skipping relationship update"
                            );
                            report.parent_skipped = Some(parent_id);
                        }
                    }
                }
            }
            Effect::Deleted { id } => {
                if let Some(removed) = E::map_mut(self).remove(id) {
                    E::after_remove(self, &removed);
                    report.removed = true;
                }
                if let Some(relation) = E::RELATION {
                    report.pruned_from = self.detach_everywhere(relation, id);
                }
                tracing::debug!(kind = %E::KIND, id, pruned = ?report.pruned_from, "Removed from store");
            }
            Effect::Missing { id } => {
                if let Some(displaced) = E::map_mut(self).mark_not_found(id) {
                    E::after_remove(self, &displaced);
                }
                report.marked_not_found = true;
                tracing::debug!(kind = %E::KIND, id, "Marked not found");
            }
        }

        report
    }

    fn merge<E: Stored>(&mut self, entity: E) {
        E::before_merge(self, &entity);
        E::map_mut(self).upsert(entity);
    }

    /// Clear a not-found marker ahead of an explicit refetch.
    pub fn forget_not_found(&mut self, kind: EntityKind, id: Id) -> bool {
        match kind {
            EntityKind::Retreat => self.retreats.clear_not_found(id),
            EntityKind::Attendee => self.attendees.clear_not_found(id),
            EntityKind::Trip => self.trips.clear_not_found(id),
            EntityKind::Website => self.websites.clear_not_found(id),
            EntityKind::Page => self.pages.clear_not_found(id),
            EntityKind::Block => self.blocks.clear_not_found(id),
            EntityKind::User => self.users.clear_not_found(id),
            EntityKind::Rfp => self.rfps.clear_not_found(id),
            EntityKind::EmailTemplate => self.email_templates.clear_not_found(id),
            EntityKind::PastItinerary => self.itineraries.clear_not_found(id),
            EntityKind::PastItineraryLocation => self.locations.clear_not_found(id),
            EntityKind::File => self.files.clear_not_found(id),
        }
    }
}
