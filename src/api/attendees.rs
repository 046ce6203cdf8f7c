//! Attendee roster actions.

use super::item_path;
use crate::errors::ClientResult;
use crate::models::{Attendee, AttendeeUpdate, EntityKind, Id, NewAttendee};
use crate::store::ActionMeta;
use crate::Dashboard;

impl Dashboard {
    /// GET /v1.0/attendees/:id
    pub async fn fetch_attendee(&self, id: Id) -> ClientResult<Attendee> {
        self.fetch(id).await
    }

    /// GET /v1.0/retreats/:id/attendees - merges each attendee; the retreat's own list is
    /// left as the server last sent it.
    pub async fn list_retreat_attendees(&self, retreat_id: Id) -> ClientResult<Vec<Attendee>> {
        let path = format!("{}/attendees", item_path(EntityKind::Retreat, retreat_id));
        self.list_at(&path, &[]).await
    }

    /// POST /v1.0/attendees - appends the new id to the retreat's roster if it is cached.
    pub async fn create_attendee(&self, request: &NewAttendee) -> ClientResult<Attendee> {
        self.create(request, ActionMeta::parent(request.retreat_id))
            .await
    }

    /// PATCH /v1.0/attendees/:id
    pub async fn update_attendee(&self, id: Id, changes: &AttendeeUpdate) -> ClientResult<Attendee> {
        self.update(id, changes).await
    }

    /// DELETE /v1.0/attendees/:id
    pub async fn delete_attendee(&self, id: Id) -> ClientResult<()> {
        self.delete::<Attendee>(id).await
    }
}
