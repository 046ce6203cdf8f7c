//! Lifecycle events emitted for every request the action layer issues.

use serde::Serialize;
use uuid::Uuid;

use crate::errors::ClientError;
use crate::models::{EntityKind, Id};

/// The kind of request an action performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Fetch,
    List,
    Create,
    Update,
    Delete,
    Upload,
}

/// Where a request is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Request,
    Success,
    Failure { code: &'static str, message: String },
}

/// One lifecycle step of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionEvent {
    /// Shared by the request, success and failure events of a single call
    pub request_id: Uuid,
    pub action: ActionKind,
    pub kind: EntityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    /// Set on a create's success when the parent named by the request was not cached,
    /// so its relationship list was left alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_skipped: Option<Id>,
    #[serde(flatten)]
    pub phase: Phase,
}

impl ActionEvent {
    pub(crate) fn request(action: ActionKind, kind: EntityKind, id: Option<Id>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            action,
            kind,
            id,
            parent_skipped: None,
            phase: Phase::Request,
        }
    }

    pub(crate) fn succeeded(&self, id: Option<Id>) -> Self {
        Self {
            id: id.or(self.id),
            phase: Phase::Success,
            ..self.clone()
        }
    }

    pub(crate) fn failed(&self, error: &ClientError) -> Self {
        Self {
            phase: Phase::Failure {
                code: error.error_code(),
                message: error.to_string(),
            },
            ..self.clone()
        }
    }

    pub(crate) fn with_parent_skipped(self, parent_id: Option<Id>) -> Self {
        Self {
            parent_skipped: parent_id,
            ..self
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.phase, Phase::Failure { .. })
    }
}
