//! Lodging RFP actions.

use super::collection_path;
use crate::errors::ClientResult;
use crate::models::{EntityKind, Id, NewRfp, Rfp, RfpUpdate};
use crate::store::ActionMeta;
use crate::Dashboard;

impl Dashboard {
    /// GET /v1.0/rfps/:id
    pub async fn fetch_rfp(&self, id: Id) -> ClientResult<Rfp> {
        self.fetch(id).await
    }

    /// GET /v1.0/rfps?retreat_id=
    pub async fn list_rfps(&self, retreat_id: Id) -> ClientResult<Vec<Rfp>> {
        self.list_at(
            &collection_path(EntityKind::Rfp),
            &[("retreat_id", retreat_id.to_string())],
        )
        .await
    }

    /// POST /v1.0/rfps
    pub async fn create_rfp(&self, request: &NewRfp) -> ClientResult<Rfp> {
        self.create(request, ActionMeta::default()).await
    }

    /// PATCH /v1.0/rfps/:id
    pub async fn update_rfp(&self, id: Id, changes: &RfpUpdate) -> ClientResult<Rfp> {
        self.update(id, changes).await
    }

    /// DELETE /v1.0/rfps/:id
    pub async fn delete_rfp(&self, id: Id) -> ClientResult<()> {
        self.delete::<Rfp>(id).await
    }
}
