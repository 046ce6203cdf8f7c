//! Email template actions.

use super::collection_path;
use crate::errors::ClientResult;
use crate::models::{EmailTemplate, EmailTemplateUpdate, EntityKind, Id, NewEmailTemplate};
use crate::store::ActionMeta;
use crate::Dashboard;

impl Dashboard {
    /// GET /v1.0/email-templates/:id
    pub async fn fetch_email_template(&self, id: Id) -> ClientResult<EmailTemplate> {
        self.fetch(id).await
    }

    /// GET /v1.0/email-templates?retreat_id=
    pub async fn list_email_templates(&self, retreat_id: Id) -> ClientResult<Vec<EmailTemplate>> {
        self.list_at(
            &collection_path(EntityKind::EmailTemplate),
            &[("retreat_id", retreat_id.to_string())],
        )
        .await
    }

    /// POST /v1.0/email-templates
    pub async fn create_email_template(
        &self,
        request: &NewEmailTemplate,
    ) -> ClientResult<EmailTemplate> {
        self.create(request, ActionMeta::default()).await
    }

    /// PATCH /v1.0/email-templates/:id
    pub async fn update_email_template(
        &self,
        id: Id,
        changes: &EmailTemplateUpdate,
    ) -> ClientResult<EmailTemplate> {
        self.update(id, changes).await
    }

    /// DELETE /v1.0/email-templates/:id
    pub async fn delete_email_template(&self, id: Id) -> ClientResult<()> {
        self.delete::<EmailTemplate>(id).await
    }
}
