//! Uploaded file descriptor returned by the file server.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, Id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub id: Id,
    pub file_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Entity for FileDescriptor {
    const KIND: EntityKind = EntityKind::File;

    fn id(&self) -> Id {
        self.id
    }
}
