//! File upload action.

use super::{file_part, ActionEvent, ActionKind};
use crate::errors::{ClientError, ClientResult};
use crate::models::{Entity, FileDescriptor};
use crate::store::Effect;
use crate::Dashboard;

/// Largest upload the file server accepts.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl Dashboard {
    /// POST {files_url}/v1.0/files (multipart) and cache the returned descriptor.
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> ClientResult<FileDescriptor> {
        if file_name.trim().is_empty() {
            return Err(ClientError::Validation("file name is required".to_string()));
        }
        if bytes.is_empty() {
            return Err(ClientError::Validation("file is empty".to_string()));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ClientError::Validation(format!(
                "file is larger than {} bytes",
                MAX_UPLOAD_BYTES
            )));
        }

        let part = file_part(file_name, bytes, mime)?;

        let event = ActionEvent::request(ActionKind::Upload, FileDescriptor::KIND, None);
        self.emit(event.clone());

        match self.api.upload::<FileDescriptor>(part).await {
            Ok(file) => {
                self.store.write().await.apply(Effect::Received(file.clone()));
                self.emit(event.succeeded(Some(file.id)));
                Ok(file)
            }
            Err(err) => {
                self.emit(event.failed(&err));
                Err(err)
            }
        }
    }
}
