//! Fetch-if-missing hooks.
//!
//! A hook belongs to one consumer (a view, a task) and watches one id. Reading it returns
//! what the store holds and starts a background fetch exactly when the id was never
//! loaded and this hook is not already loading it. The loading flag is local to the hook:
//! two hooks for the same id can both hit the network, which is harmless because merges
//! are idempotent.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::models::Id;
use crate::store::{Lookup, Stored};
use crate::Dashboard;

/// What a hook can report for its id.
#[derive(Debug, Clone, PartialEq)]
pub enum HookState<E> {
    /// Not cached yet; a fetch may be in flight.
    Loading,
    Loaded(E),
    /// The backend confirmed the id does not exist.
    NotFound,
}

impl<E> HookState<E> {
    pub fn loaded(self) -> Option<E> {
        match self {
            HookState::Loaded(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, HookState::Loading)
    }
}

/// Hook for a single record of type `E`.
pub struct UseEntity<E: Stored> {
    id: Id,
    loading: Arc<AtomicBool>,
    pending: Mutex<Option<JoinHandle<()>>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Stored> UseEntity<E> {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            loading: Arc::new(AtomicBool::new(false)),
            pending: Mutex::new(None),
            _entity: PhantomData,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Read the cached state, starting a fetch if the id is missing and not being loaded.
    pub async fn read(&self, dashboard: &Dashboard) -> HookState<E> {
        {
            let store = dashboard.store().read().await;
            match store.lookup::<E>(self.id) {
                Lookup::Present(entity) => return HookState::Loaded(entity.clone()),
                Lookup::NotFound => return HookState::NotFound,
                Lookup::Missing => {}
            }
        }

        if self.loading.swap(true, Ordering::SeqCst) {
            return HookState::Loading;
        }

        let dashboard = dashboard.clone();
        let loading = Arc::clone(&self.loading);
        let id = self.id;
        let handle = tokio::spawn(async move {
            if let Err(e) = dashboard.fetch::<E>(id).await {
                tracing::debug!(kind = %E::KIND, id, "Hook fetch failed: {}", e);
            }
            loading.store(false, Ordering::SeqCst);
        });
        *self.pending.lock().await = Some(handle);

        HookState::Loading
    }

    /// Wait for the fetch this hook started, if any.
    pub async fn settle(&self) {
        let handle = self.pending.lock().await.take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::warn!(kind = %E::KIND, id = self.id, "Hook fetch task aborted: {}", e);
            }
        }
    }

    /// Read, and if that started a fetch, wait for it and read again.
    pub async fn resolve(&self, dashboard: &Dashboard) -> HookState<E> {
        let state = self.read(dashboard).await;
        if !state.is_loading() {
            return state;
        }

        self.settle().await;
        let store = dashboard.store().read().await;
        match store.lookup::<E>(self.id) {
            Lookup::Present(entity) => HookState::Loaded(entity.clone()),
            Lookup::NotFound => HookState::NotFound,
            // Transport or server failure: stays missing, the next read tries again.
            Lookup::Missing => HookState::Loading,
        }
    }
}

impl Dashboard {
    /// Create a fetch-if-missing hook for one record.
    pub fn use_entity<E: Stored>(&self, id: Id) -> UseEntity<E> {
        UseEntity::new(id)
    }
}
