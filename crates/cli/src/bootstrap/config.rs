use relief_domain::{CliOverrides, Config};

/// Logging is not up yet at this point, so nothing is logged here.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
