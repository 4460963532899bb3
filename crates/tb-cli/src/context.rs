use anyhow::Context;
use tb_client::Client;
use tb_config::TbConfig;

use crate::bootstrap;

/// Everything a command handler needs: the registry client and settings.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub client: Client,
    pub config: TbConfig,
}

impl AppContext {
    pub fn init(config: TbConfig) -> anyhow::Result<Self> {
        let options = bootstrap::client_options(&config);
        tracing::debug!(url = %options.base_url, "connecting to typebook registry");
        let client = Client::new(&options).context("failed to build registry client")?;
        Ok(Self { client, config })
    }
}
