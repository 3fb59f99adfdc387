use sysdwitch_domain::{CliOverrides, Config};

/// Loads and validates configuration. Any failure here is fatal.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
