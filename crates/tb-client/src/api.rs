//! Capability sets, one per resource area of the registry API.
//!
//! Each trait is implemented by an independent resource client and, by
//! delegation, by the [`Client`](crate::Client) facade.

use async_trait::async_trait;

use crate::error::ClientError;
use crate::model::{
    Compatibility, Property, RegistryConfig, Schema, SchemaId, SemanticVersion, Subject,
};

/// Subject management: `/subjects`.
#[async_trait]
pub trait SubjectApi: Send + Sync {
    /// `POST /subjects/{name}` with an optional description.
    async fn create_subject(&self, name: &str, description: Option<&str>)
    -> Result<i64, ClientError>;

    /// `GET /subjects/{name}`.
    async fn get_subject(&self, name: &str) -> Result<Subject, ClientError>;

    /// `GET /subjects`: names of every registered subject.
    async fn list_subjects(&self) -> Result<Vec<String>, ClientError>;

    /// `PUT /subjects/{name}`; returns the number of updated rows.
    async fn update_description(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<i64, ClientError>;

    /// `DELETE /subjects/{name}`; returns the number of deleted rows.
    async fn delete_subject(&self, name: &str) -> Result<i64, ClientError>;
}

/// Schema registration, lookup and compatibility checks.
#[async_trait]
pub trait SchemaApi: Send + Sync {
    /// Register `definition` as a new schema under `subject`.
    async fn register_schema(&self, subject: &str, definition: &str)
    -> Result<SchemaId, ClientError>;

    /// Newest schema under `subject` whose definition matches `definition`.
    async fn lookup_schema(&self, subject: &str, definition: &str) -> Result<Schema, ClientError>;

    /// Every schema under `subject` whose definition matches `definition`.
    async fn lookup_all_schemas(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<Vec<Schema>, ClientError>;

    async fn get_schema_by_id(&self, id: i64) -> Result<Schema, ClientError>;

    async fn get_latest_schema(&self, subject: &str) -> Result<Schema, ClientError>;

    /// Newest schema within major version `major`.
    async fn get_schema_by_major_version(
        &self,
        subject: &str,
        major: u32,
    ) -> Result<Schema, ClientError>;

    async fn get_schema_by_version(
        &self,
        subject: &str,
        version: SemanticVersion,
    ) -> Result<Schema, ClientError>;

    /// Every version under `subject`, in server order.
    async fn list_versions(&self, subject: &str) -> Result<Vec<SemanticVersion>, ClientError>;

    async fn check_compatibility_with_latest(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<Compatibility, ClientError>;

    async fn check_compatibility_with_major_version(
        &self,
        subject: &str,
        major: u32,
        definition: &str,
    ) -> Result<Compatibility, ClientError>;

    async fn check_compatibility_with_version(
        &self,
        subject: &str,
        version: SemanticVersion,
        definition: &str,
    ) -> Result<Compatibility, ClientError>;
}

/// Per-subject registry configuration: `/config`.
#[async_trait]
pub trait ConfigApi: Send + Sync {
    /// Replace the whole config of `subject`; returns the number of updated rows.
    async fn set_config(&self, subject: &str, config: RegistryConfig) -> Result<i64, ClientError>;

    /// Set one property of the config of `subject`.
    async fn set_property(
        &self,
        subject: &str,
        property: Property,
        value: &str,
    ) -> Result<i64, ClientError>;

    async fn get_config(&self, subject: &str) -> Result<RegistryConfig, ClientError>;

    async fn get_property(&self, subject: &str, property: Property) -> Result<String, ClientError>;

    /// Delete the whole config of `subject`; returns the number of deleted rows.
    async fn delete_config(&self, subject: &str) -> Result<i64, ClientError>;

    async fn delete_property(&self, subject: &str, property: Property) -> Result<i64, ClientError>;
}
