//! Subject resource client.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::SubjectApi;
use crate::error::ClientError;
use crate::handler::{from_value, handle, to_int};
use crate::model::Subject;
use crate::transport::{Transport, segment, with_text};
use crate::validate::{self, SUBJECT};

/// Issues `/subjects` requests.
#[derive(Debug, Clone)]
pub struct SubjectClient {
    transport: Arc<Transport>,
}

impl SubjectClient {
    #[must_use]
    pub const fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }
}

fn subject_path(name: &str) -> String {
    format!("/subjects/{}", segment(name))
}

#[async_trait]
impl SubjectApi for SubjectClient {
    async fn create_subject(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<i64, ClientError> {
        let request = with_text(self.transport.post(&subject_path(name)), description);
        handle(request.send().await, validate::validate_int, to_int).await
    }

    async fn get_subject(&self, name: &str) -> Result<Subject, ClientError> {
        let request = self.transport.get(&subject_path(name));
        handle(
            request.send().await,
            |v| validate::validate_object(v, SUBJECT),
            from_value,
        )
        .await
    }

    async fn list_subjects(&self) -> Result<Vec<String>, ClientError> {
        let request = self.transport.get("/subjects");
        handle(
            request.send().await,
            validate::validate_string_array,
            from_value,
        )
        .await
    }

    async fn update_description(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<i64, ClientError> {
        let request = with_text(self.transport.put(&subject_path(name)), description);
        handle(request.send().await, validate::validate_int, to_int).await
    }

    async fn delete_subject(&self, name: &str) -> Result<i64, ClientError> {
        let request = self.transport.delete(&subject_path(name));
        handle(request.send().await, validate::validate_int, to_int).await
    }
}
