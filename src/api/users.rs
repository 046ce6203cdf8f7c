//! User management actions.

use crate::errors::ClientResult;
use crate::models::{Id, NewUser, User, UserUpdate};
use crate::store::ActionMeta;
use crate::Dashboard;

impl Dashboard {
    /// GET /v1.0/users/:id
    pub async fn fetch_user(&self, id: Id) -> ClientResult<User> {
        self.fetch(id).await
    }

    /// POST /v1.0/users - the new user is appended to the retreat's `users` when that
    /// retreat is cached.
    pub async fn create_user(&self, request: &NewUser) -> ClientResult<User> {
        self.create(request, ActionMeta::parent(request.retreat_id))
            .await
    }

    /// PATCH /v1.0/users/:id
    pub async fn update_user(&self, id: Id, changes: &UserUpdate) -> ClientResult<User> {
        self.update(id, changes).await
    }

    /// DELETE /v1.0/users/:id
    pub async fn delete_user(&self, id: Id) -> ClientResult<()> {
        self.delete::<User>(id).await
    }
}
