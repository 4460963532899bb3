use anyhow::Context;
use tb_client::ClientOptions;
use tb_config::TbConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TbConfig> {
    let config = TbConfig::load_with_dotenv().context("failed to load typebook configuration")?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: TbConfig, flags: &GlobalFlags) -> anyhow::Result<TbConfig> {
    if let Some(url) = &flags.url {
        config.server.url.clone_from(url);
        config.validate().context("invalid --url")?;
    }
    Ok(config)
}

#[must_use]
pub fn client_options(config: &TbConfig) -> ClientOptions {
    ClientOptions::new(config.server.url.clone())
        .timeout(config.server.timeout())
        .user_agent(config.server.user_agent.clone())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use tb_client::Transport;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(url: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn url_flag_overrides_config() {
        let config = apply_overrides(TbConfig::default(), &flags(Some("registry:9000"))).unwrap();
        assert_eq!(config.server.url, "registry:9000");
    }

    #[test]
    fn invalid_url_flag_is_rejected() {
        let err = apply_overrides(TbConfig::default(), &flags(Some("ftp://registry"))).unwrap_err();
        assert!(format!("{err:#}").contains("invalid --url"));
    }

    #[test]
    fn client_options_follow_server_config() {
        let mut config = TbConfig::default();
        config.server.timeout_secs = 0;
        let options = client_options(&config);
        assert_eq!(options.base_url, "127.0.0.1:8888");
        assert_eq!(options.timeout, None);

        config.server.timeout_secs = 5;
        assert_eq!(client_options(&config).timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn configured_url_is_normalized_once_by_the_transport() {
        let mut config = TbConfig::default();
        config.server.url = "registry.internal:9000/".into();
        let transport = Transport::new(&client_options(&config)).unwrap();
        assert_eq!(transport.base_url(), "http://registry.internal:9000");

        config.server.url = "https://registry.internal//".into();
        let transport = Transport::new(&client_options(&config)).unwrap();
        assert_eq!(transport.base_url(), "https://registry.internal");
    }
}
