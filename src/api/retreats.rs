//! Retreat actions.

use super::collection_path;
use crate::errors::ClientResult;
use crate::models::{EntityKind, Id, NewRetreat, Retreat, RetreatUpdate};
use crate::store::ActionMeta;
use crate::Dashboard;

impl Dashboard {
    /// GET /v1.0/retreats/:id
    pub async fn fetch_retreat(&self, id: Id) -> ClientResult<Retreat> {
        self.fetch(id).await
    }

    /// GET /v1.0/retreats
    pub async fn list_retreats(&self) -> ClientResult<Vec<Retreat>> {
        self.list_at(&collection_path(EntityKind::Retreat), &[]).await
    }

    /// POST /v1.0/retreats
    pub async fn create_retreat(&self, request: &NewRetreat) -> ClientResult<Retreat> {
        self.create(request, ActionMeta::default()).await
    }

    /// PATCH /v1.0/retreats/:id
    pub async fn update_retreat(&self, id: Id, changes: &RetreatUpdate) -> ClientResult<Retreat> {
        self.update(id, changes).await
    }

    /// DELETE /v1.0/retreats/:id
    pub async fn delete_retreat(&self, id: Id) -> ClientResult<()> {
        self.delete::<Retreat>(id).await
    }
}
