//! API action layer.
//!
//! Every action issues one typed request, emits request/success/failure lifecycle events
//! and merges the outcome into the store. Failures come back to the caller as
//! `Err(ClientError)` and are never retried.

mod attendees;
mod client;
mod email_templates;
mod events;
mod files;
mod itineraries;
mod retreats;
mod rfps;
mod trips;
mod users;
mod websites;

pub use client::*;
pub use events::*;

use serde::Serialize;

use crate::errors::{ClientError, ClientResult};
use crate::models::{EntityKind, Id, Validate};
use crate::store::{ActionMeta, Effect, Stored};
use crate::Dashboard;

impl Dashboard {
    fn emit(&self, event: ActionEvent) {
        match &event.phase {
            Phase::Request => tracing::info!(
                request_id = %event.request_id,
                action = ?event.action,
                kind = %event.kind,
                id = ?event.id,
                "Request"
            ),
            Phase::Success => tracing::debug!(
                request_id = %event.request_id,
                id = ?event.id,
                parent_skipped = ?event.parent_skipped,
                "Request succeeded"
            ),
            Phase::Failure { code, message } => tracing::warn!(
                request_id = %event.request_id,
                kind = %event.kind,
                id = ?event.id,
                code,
                "Request failed: {}",
                message
            ),
        }
        // Nobody listening is fine.
        let _ = self.events.send(event);
    }

    /// GET a single record and merge it. A 404 leaves a not-found marker for the id.
    pub async fn fetch<E: Stored>(&self, id: Id) -> ClientResult<E> {
        self.fetch_at(&item_path(E::KIND, id), id).await
    }

    pub(crate) async fn fetch_at<E: Stored>(&self, path: &str, id: Id) -> ClientResult<E> {
        let event = ActionEvent::request(ActionKind::Fetch, E::KIND, Some(id));
        self.emit(event.clone());

        match self.api.get::<E>(path).await {
            Ok(entity) => {
                self.store
                    .write()
                    .await
                    .apply(Effect::Received(entity.clone()));
                self.emit(event.succeeded(None));
                Ok(entity)
            }
            Err(err) => {
                let err = classify_not_found(err, E::KIND, id);
                if err.is_not_found() {
                    self.store.write().await.apply(Effect::<E>::Missing { id });
                }
                self.emit(event.failed(&err));
                Err(err)
            }
        }
    }

    /// Drop a not-found marker and fetch the record again.
    pub async fn refetch<E: Stored>(&self, id: Id) -> ClientResult<E> {
        let cleared = self.store.write().await.forget_not_found(E::KIND, id);
        if cleared {
            tracing::debug!(kind = %E::KIND, id, "Cleared not-found marker");
        }
        self.fetch(id).await
    }

    /// GET a list of records and merge each of them.
    pub(crate) async fn list_at<E: Stored>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<Vec<E>> {
        let event = ActionEvent::request(ActionKind::List, E::KIND, None);
        self.emit(event.clone());

        let result = if query.is_empty() {
            self.api.get::<Vec<E>>(path).await
        } else {
            self.api.get_query::<Vec<E>, _>(path, query).await
        };

        match result {
            Ok(entities) => {
                self.store
                    .write()
                    .await
                    .apply(Effect::ReceivedMany(entities.clone()));
                self.emit(event.succeeded(None));
                Ok(entities)
            }
            Err(err) => {
                self.emit(event.failed(&err));
                Err(err)
            }
        }
    }

    /// POST a new record. With a parent in `meta`, the new id is appended to the parent's list.
    pub(crate) async fn create<E, B>(&self, body: &B, meta: ActionMeta) -> ClientResult<E>
    where
        E: Stored,
        B: Serialize + Validate,
    {
        body.validate()?;

        let event = ActionEvent::request(ActionKind::Create, E::KIND, None);
        self.emit(event.clone());

        match self.api.post::<B, E>(&collection_path(E::KIND), body).await {
            Ok(entity) => {
                let report = self.store.write().await.apply(Effect::Created {
                    entity: entity.clone(),
                    meta,
                });
                if let Some(parent_id) = report.parent_skipped {
                    tracing::debug!(
                        kind = %E::KIND,
                        id = entity.id(),
                        parent_id,
                        "Created without updating uncached parent"
                    );
                }
                self.emit(
                    event
                        .succeeded(Some(entity.id()))
                        .with_parent_skipped(report.parent_skipped),
                );
                Ok(entity)
            }
            Err(err) => {
                self.emit(event.failed(&err));
                Err(err)
            }
        }
    }

    /// PATCH a record; the response replaces the cached record whole.
    pub(crate) async fn update<E, B>(&self, id: Id, body: &B) -> ClientResult<E>
    where
        E: Stored,
        B: Serialize + Validate,
    {
        body.validate()?;

        let event = ActionEvent::request(ActionKind::Update, E::KIND, Some(id));
        self.emit(event.clone());

        match self.api.patch::<B, E>(&item_path(E::KIND, id), body).await {
            Ok(entity) => {
                self.store
                    .write()
                    .await
                    .apply(Effect::Received(entity.clone()));
                self.emit(event.succeeded(None));
                Ok(entity)
            }
            Err(err) => {
                let err = classify_not_found(err, E::KIND, id);
                self.emit(event.failed(&err));
                Err(err)
            }
        }
    }

    /// DELETE a record, then drop it from its mapping and from every parent list.
    pub(crate) async fn delete<E: Stored>(&self, id: Id) -> ClientResult<()> {
        let event = ActionEvent::request(ActionKind::Delete, E::KIND, Some(id));
        self.emit(event.clone());

        match self.api.delete(&item_path(E::KIND, id)).await {
            Ok(()) => {
                self.store.write().await.apply(Effect::<E>::Deleted { id });
                self.emit(event.succeeded(None));
                Ok(())
            }
            Err(err) => {
                let err = classify_not_found(err, E::KIND, id);
                self.emit(event.failed(&err));
                Err(err)
            }
        }
    }
}

fn classify_not_found(err: ClientError, kind: EntityKind, id: Id) -> ClientError {
    match err {
        ClientError::Http { status, .. } if status == reqwest::StatusCode::NOT_FOUND => {
            ClientError::NotFound { kind, id }
        }
        other => other,
    }
}
