//! The facade: one object implementing every capability set.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ConfigApi, SchemaApi, SubjectApi};
use crate::config::ConfigClient;
use crate::error::ClientError;
use crate::model::{
    Compatibility, Property, RegistryConfig, Schema, SchemaId, SemanticVersion, Subject,
    VersionSelector,
};
use crate::schema::SchemaClient;
use crate::subject::SubjectClient;
use crate::transport::{ClientOptions, Transport};

/// Typed client for a typebook registry.
///
/// Holds one resource client per API area, all sharing a single
/// [`Transport`]. Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    subjects: SubjectClient,
    schemas: SchemaClient,
    configs: ConfigClient,
}

impl Client {
    /// Build a client with its own HTTP connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(options: &ClientOptions) -> Result<Self, ClientError> {
        Ok(Self::from_transport(Transport::new(options)?))
    }

    #[must_use]
    pub fn from_transport(transport: Transport) -> Self {
        let transport = Arc::new(transport);
        Self {
            subjects: SubjectClient::new(Arc::clone(&transport)),
            schemas: SchemaClient::new(Arc::clone(&transport)),
            configs: ConfigClient::new(transport),
        }
    }

    #[must_use]
    pub const fn subjects(&self) -> &SubjectClient {
        &self.subjects
    }

    #[must_use]
    pub const fn schemas(&self) -> &SchemaClient {
        &self.schemas
    }

    #[must_use]
    pub const fn configs(&self) -> &ConfigClient {
        &self.configs
    }

    /// Fetch the schema addressed by `selector`.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn get_schema(
        &self,
        subject: &str,
        selector: VersionSelector,
    ) -> Result<Schema, ClientError> {
        self.schemas.get_schema(subject, selector).await
    }

    /// Check `definition` against the schema addressed by `selector`.
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
        self.schemas
            .check_compatibility(subject, selector, definition)
            .await
    }
}

#[async_trait]
impl SubjectApi for Client {
    async fn create_subject(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<i64, ClientError> {
        self.subjects.create_subject(name, description).await
    }

    async fn get_subject(&self, name: &str) -> Result<Subject, ClientError> {
        self.subjects.get_subject(name).await
    }

    async fn list_subjects(&self) -> Result<Vec<String>, ClientError> {
        self.subjects.list_subjects().await
    }

    async fn update_description(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<i64, ClientError> {
        self.subjects.update_description(name, description).await
    }

    async fn delete_subject(&self, name: &str) -> Result<i64, ClientError> {
        self.subjects.delete_subject(name).await
    }
}

#[async_trait]
impl SchemaApi for Client {
    async fn register_schema(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<SchemaId, ClientError> {
        self.schemas.register_schema(subject, definition).await
    }

    async fn lookup_schema(&self, subject: &str, definition: &str) -> Result<Schema, ClientError> {
        self.schemas.lookup_schema(subject, definition).await
    }

    async fn lookup_all_schemas(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<Vec<Schema>, ClientError> {
        self.schemas.lookup_all_schemas(subject, definition).await
    }

    async fn get_schema_by_id(&self, id: i64) -> Result<Schema, ClientError> {
        self.schemas.get_schema_by_id(id).await
    }

    async fn get_latest_schema(&self, subject: &str) -> Result<Schema, ClientError> {
        self.schemas.get_latest_schema(subject).await
    }

    async fn get_schema_by_major_version(
        &self,
        subject: &str,
        major: u32,
    ) -> Result<Schema, ClientError> {
        self.schemas.get_schema_by_major_version(subject, major).await
    }

    async fn get_schema_by_version(
        &self,
        subject: &str,
        version: SemanticVersion,
    ) -> Result<Schema, ClientError> {
        self.schemas.get_schema_by_version(subject, version).await
    }

    async fn list_versions(&self, subject: &str) -> Result<Vec<SemanticVersion>, ClientError> {
        self.schemas.list_versions(subject).await
    }

    async fn check_compatibility_with_latest(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<Compatibility, ClientError> {
        self.schemas
            .check_compatibility_with_latest(subject, definition)
            .await
    }

    async fn check_compatibility_with_major_version(
        &self,
        subject: &str,
        major: u32,
        definition: &str,
    ) -> Result<Compatibility, ClientError> {
        self.schemas
            .check_compatibility_with_major_version(subject, major, definition)
            .await
    }

    async fn check_compatibility_with_version(
        &self,
        subject: &str,
        version: SemanticVersion,
        definition: &str,
    ) -> Result<Compatibility, ClientError> {
        self.schemas
            .check_compatibility_with_version(subject, version, definition)
            .await
    }
}

#[async_trait]
impl ConfigApi for Client {
    async fn set_config(&self, subject: &str, config: RegistryConfig) -> Result<i64, ClientError> {
        self.configs.set_config(subject, config).await
    }

    async fn set_property(
        &self,
        subject: &str,
        property: Property,
        value: &str,
    ) -> Result<i64, ClientError> {
        self.configs.set_property(subject, property, value).await
    }

    async fn get_config(&self, subject: &str) -> Result<RegistryConfig, ClientError> {
        self.configs.get_config(subject).await
    }

    async fn get_property(&self, subject: &str, property: Property) -> Result<String, ClientError> {
        self.configs.get_property(subject, property).await
    }

    async fn delete_config(&self, subject: &str) -> Result<i64, ClientError> {
        self.configs.delete_config(subject).await
    }

    async fn delete_property(&self, subject: &str, property: Property) -> Result<i64, ClientError> {
        self.configs.delete_property(subject, property).await
    }
}
