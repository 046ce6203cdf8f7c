//! Parent-to-child relationship lists embedded in parent records.

use serde::{Deserialize, Serialize};

use super::Store;
use crate::models::{EntityKind, Id};

/// An ordered id list on a parent record that owns children of another type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// `Retreat.users`
    RetreatUsers,
    /// `Retreat.attendees`
    RetreatAttendees,
    /// `Website.page_ids`
    WebsitePages,
    /// `Page.block_ids`
    PageBlocks,
    /// `Attendee.travel`
    AttendeeTravel,
}

impl Relation {
    pub fn parent_kind(&self) -> EntityKind {
        match self {
            Relation::RetreatUsers | Relation::RetreatAttendees => EntityKind::Retreat,
            Relation::WebsitePages => EntityKind::Website,
            Relation::PageBlocks => EntityKind::Page,
            Relation::AttendeeTravel => EntityKind::Attendee,
        }
    }

    pub fn child_kind(&self) -> EntityKind {
        match self {
            Relation::RetreatUsers => EntityKind::User,
            Relation::RetreatAttendees => EntityKind::Attendee,
            Relation::WebsitePages => EntityKind::Page,
            Relation::PageBlocks => EntityKind::Block,
            Relation::AttendeeTravel => EntityKind::Trip,
        }
    }
}

impl Store {
    /// The relationship list of a present parent.
    pub fn children(&self, relation: Relation, parent_id: Id) -> Option<&[Id]> {
        let ids = match relation {
            Relation::RetreatUsers => &self.retreats.get(parent_id)?.users,
            Relation::RetreatAttendees => &self.retreats.get(parent_id)?.attendees,
            Relation::WebsitePages => &self.websites.get(parent_id)?.page_ids,
            Relation::PageBlocks => &self.pages.get(parent_id)?.block_ids,
            Relation::AttendeeTravel => &self.attendees.get(parent_id)?.travel,
        };
        Some(ids.as_slice())
    }

    pub(crate) fn children_mut(&mut self, relation: Relation, parent_id: Id) -> Option<&mut Vec<Id>> {
        let ids = match relation {
            Relation::RetreatUsers => &mut self.retreats.get_mut(parent_id)?.users,
            Relation::RetreatAttendees => &mut self.retreats.get_mut(parent_id)?.attendees,
            Relation::WebsitePages => &mut self.websites.get_mut(parent_id)?.page_ids,
            Relation::PageBlocks => &mut self.pages.get_mut(parent_id)?.block_ids,
            Relation::AttendeeTravel => &mut self.attendees.get_mut(parent_id)?.travel,
        };
        Some(ids)
    }

    /// Visit every present parent's list for a relation.
    pub(crate) fn for_each_list(&mut self, relation: Relation, mut visit: impl FnMut(Id, &mut Vec<Id>)) {
        match relation {
            Relation::RetreatUsers => self
                .retreats
                .values_mut()
                .for_each(|retreat| visit(retreat.id, &mut retreat.users)),
            Relation::RetreatAttendees => self
                .retreats
                .values_mut()
                .for_each(|retreat| visit(retreat.id, &mut retreat.attendees)),
            Relation::WebsitePages => self
                .websites
                .values_mut()
                .for_each(|website| visit(website.id, &mut website.page_ids)),
            Relation::PageBlocks => self
                .pages
                .values_mut()
                .for_each(|page| visit(page.id, &mut page.block_ids)),
            Relation::AttendeeTravel => self
                .attendees
                .values_mut()
                .for_each(|attendee| visit(attendee.id, &mut attendee.travel)),
        }
    }

    /// Append a child id to a parent's list once. `None` if the parent is not cached.
    pub fn attach(&mut self, relation: Relation, parent_id: Id, child_id: Id) -> Option<bool> {
        let ids = self.children_mut(relation, parent_id)?;
        if ids.contains(&child_id) {
            return Some(false);
        }
        ids.push(child_id);
        Some(true)
    }

    /// Remove a child id from every parent list of the relation; returns the parents touched.
    pub fn detach_everywhere(&mut self, relation: Relation, child_id: Id) -> Vec<Id> {
        let mut touched = Vec::new();
        self.for_each_list(relation, |parent_id, ids| {
            let before = ids.len();
            ids.retain(|id| *id != child_id);
            if ids.len() != before {
                touched.push(parent_id);
            }
        });
        touched.sort_unstable();
        touched
    }
}
