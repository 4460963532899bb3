//! Schema resource client.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::SchemaApi;
use crate::error::ClientError;
use crate::handler::{from_value, handle};
use crate::model::{Compatibility, Schema, SchemaId, SemanticVersion, VersionSelector};
use crate::transport::{Transport, segment, with_definition};
use crate::validate::{self, COMPATIBILITY, Rule, SCHEMA, SCHEMA_ID};

/// Issues schema and compatibility requests.
#[derive(Debug, Clone)]
pub struct SchemaClient {
    transport: Arc<Transport>,
}

impl SchemaClient {
    #[must_use]
    pub const fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `GET /subjects/{subject}/versions/{selector}`.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn get_schema(
        &self,
        subject: &str,
        selector: VersionSelector,
    ) -> Result<Schema, ClientError> {
        let path = format!(
            "/subjects/{}/versions/{}",
            segment(subject),
            selector.path_segment()
        );
        let request = self.transport.get(&path);
        handle(
            request.send().await,
            |v| validate::validate_object(v, SCHEMA),
            from_value,
        )
        .await
    }

    /// `POST /compatibility/subjects/{subject}/versions/{selector}`.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn check_compatibility(
        &self,
        subject: &str,
        selector: VersionSelector,
        definition: &str,
    ) -> Result<Compatibility, ClientError> {
        let path = format!(
            "/compatibility/subjects/{}/versions/{}",
            segment(subject),
            selector.path_segment()
        );
        let request = with_definition(self.transport.post(&path), definition);
        handle(
            request.send().await,
            |v| validate::validate_object(v, COMPATIBILITY),
            from_value,
        )
        .await
    }
}

#[async_trait]
impl SchemaApi for SchemaClient {
    async fn register_schema(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<SchemaId, ClientError> {
        let path = format!("/subjects/{}/versions", segment(subject));
        let request = with_definition(self.transport.post(&path), definition);
        handle(
            request.send().await,
            |v| validate::validate_object(v, SCHEMA_ID),
            from_value,
        )
        .await
    }

    async fn lookup_schema(&self, subject: &str, definition: &str) -> Result<Schema, ClientError> {
        let path = format!("/subjects/{}/schema/lookup", segment(subject));
        let request = with_definition(self.transport.post(&path), definition);
        handle(
            request.send().await,
            |v| validate::validate_object(v, SCHEMA),
            from_value,
        )
        .await
    }

    async fn lookup_all_schemas(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<Vec<Schema>, ClientError> {
        let path = format!("/subjects/{}/schema/lookupAll", segment(subject));
        let request = with_definition(self.transport.post(&path), definition);
        handle(
            request.send().await,
            |v| validate::validate_array(v, SCHEMA),
            from_value,
        )
        .await
    }

    async fn get_schema_by_id(&self, id: i64) -> Result<Schema, ClientError> {
        let request = self.transport.get(&format!("/schemas/ids/{id}"));
        handle(
            request.send().await,
            |v| validate::validate_object(v, SCHEMA),
            from_value,
        )
        .await
    }

    async fn get_latest_schema(&self, subject: &str) -> Result<Schema, ClientError> {
        self.get_schema(subject, VersionSelector::Latest).await
    }

    async fn get_schema_by_major_version(
        &self,
        subject: &str,
        major: u32,
    ) -> Result<Schema, ClientError> {
        self.get_schema(subject, VersionSelector::Major(major)).await
    }

    async fn get_schema_by_version(
        &self,
        subject: &str,
        version: SemanticVersion,
    ) -> Result<Schema, ClientError> {
        self.get_schema(subject, VersionSelector::Exact(version)).await
    }

    async fn list_versions(&self, subject: &str) -> Result<Vec<SemanticVersion>, ClientError> {
        let path = format!("/subjects/{}/versions", segment(subject));
        let request = self.transport.get(&path);
        handle(
            request.send().await,
            |v| validate::validate_each(v, Rule::SemanticVersion),
            from_value,
        )
        .await
    }

    async fn check_compatibility_with_latest(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<Compatibility, ClientError> {
        self.check_compatibility(subject, VersionSelector::Latest, definition)
            .await
    }

    async fn check_compatibility_with_major_version(
        &self,
        subject: &str,
        major: u32,
        definition: &str,
    ) -> Result<Compatibility, ClientError> {
        self.check_compatibility(subject, VersionSelector::Major(major), definition)
            .await
    }

    async fn check_compatibility_with_version(
        &self,
        subject: &str,
        version: SemanticVersion,
        definition: &str,
    ) -> Result<Compatibility, ClientError> {
        self.check_compatibility(subject, VersionSelector::Exact(version), definition)
            .await
    }
}
