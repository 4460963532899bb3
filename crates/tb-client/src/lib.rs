//! # tb-client
//!
//! Typed HTTP client for the typebook schema registry.
//!
//! Every operation funnels through one response pipeline that checks the
//! status, decodes the body, validates its shape and only then maps it into a
//! domain value. The API is split into three capability sets:
//! - [`SubjectApi`]: subjects and their descriptions
//! - [`SchemaApi`]: schema registration, lookup and compatibility checks
//! - [`ConfigApi`]: per-subject registry configuration
//!
//! [`Client`] implements all three by delegating to [`SubjectClient`],
//! [`SchemaClient`] and [`ConfigClient`], which share one [`Transport`].

pub mod api;
pub mod model;
pub mod validate;

mod client;
mod config;
mod error;
mod handler;
mod schema;
mod subject;
mod transport;

pub use api::{ConfigApi, SchemaApi, SubjectApi};
pub use client::Client;
pub use config::ConfigClient;
pub use error::{ClientError, ErrorResponse, UnknownValueError, VersionFormatError};
pub use model::{
    Compatibility, CompatibilityType, ConfigEntry, Property, RegistryConfig, Schema, SchemaId,
    SemanticVersion, Subject, VersionSelector,
};
pub use schema::SchemaClient;
pub use subject::SubjectClient;
pub use transport::{ClientOptions, DEFAULT_BASE_URL, Transport, normalize_base_url};
pub use validate::Violation;
