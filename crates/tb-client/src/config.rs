//! Config resource client.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::ConfigApi;
use crate::error::ClientError;
use crate::handler::{from_value, handle, to_int};
use crate::model::{Property, RegistryConfig};
use crate::transport::{Transport, segment, with_value};
use crate::validate::{self, REGISTRY_CONFIG};

/// Issues `/config` requests.
#[derive(Debug, Clone)]
pub struct ConfigClient {
    transport: Arc<Transport>,
}

impl ConfigClient {
    #[must_use]
    pub const fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }
}

fn config_path(subject: &str) -> String {
    format!("/config/{}", segment(subject))
}

fn property_path(subject: &str, property: Property) -> String {
    format!("{}/properties/{}", config_path(subject), property.as_str())
}

#[async_trait]
impl ConfigApi for ConfigClient {
    async fn set_config(&self, subject: &str, config: RegistryConfig) -> Result<i64, ClientError> {
        let request = self.transport.put(&config_path(subject)).json(&config);
        handle(request.send().await, validate::validate_int, to_int).await
    }

    async fn set_property(
        &self,
        subject: &str,
        property: Property,
        value: &str,
    ) -> Result<i64, ClientError> {
        let request = with_value(self.transport.put(&property_path(subject, property)), value);
        handle(request.send().await, validate::validate_int, to_int).await
    }

    async fn get_config(&self, subject: &str) -> Result<RegistryConfig, ClientError> {
        let request = self.transport.get(&config_path(subject));
        handle(
            request.send().await,
            |v| validate::validate_object(v, REGISTRY_CONFIG),
            from_value,
        )
        .await
    }

    async fn get_property(&self, subject: &str, property: Property) -> Result<String, ClientError> {
        let request = self.transport.get(&property_path(subject, property));
        handle(
            request.send().await,
            validate::validate_non_empty_string,
            from_value,
        )
        .await
    }

    async fn delete_config(&self, subject: &str) -> Result<i64, ClientError> {
        let request = self.transport.delete(&config_path(subject));
        handle(request.send().await, validate::validate_int, to_int).await
    }

    async fn delete_property(&self, subject: &str, property: Property) -> Result<i64, ClientError> {
        let request = self.transport.delete(&property_path(subject, property));
        handle(request.send().await, validate::validate_int, to_int).await
    }
}
