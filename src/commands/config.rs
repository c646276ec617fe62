//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use ansi_html::Config;

/// The config file in effect: `--config` or the default location.
pub fn effective_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", effective_path(explicit)?.display());
    Ok(())
}

/// Write a default config file, refusing to overwrite unless forced.
pub fn handle_init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = effective_path(explicit)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}\nHint: use --force to overwrite it.",
            path.display()
        );
    }
    let config = Config::default();
    match explicit {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    println!("Wrote {}", path.display());
    Ok(())
}
