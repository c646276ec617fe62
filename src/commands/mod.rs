//! Command handlers for the ansi-html CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod css;
pub mod html;
pub mod text;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use ansi_html::Config;

/// One input read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub text: String,
}

/// Load the config from `--config` or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// True when `path` means stdin.
fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read every input; no files (or `-`) reads stdin.
///
/// Invalid UTF-8 is replaced rather than rejected; logs are often mixed.
pub fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    files
        .iter()
        .map(|path| {
            if is_stdin(path) {
                return read_stdin();
            }
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read input: {:?}", path))?;
            debug!(path = %path.display(), bytes = bytes.len(), "Read input");
            Ok(Input {
                name: path.display().to_string(),
                text: String::from_utf8_lossy(&bytes).into_owned(),
            })
        })
        .collect()
}

fn read_stdin() -> Result<Input> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    Ok(Input {
        name: "<stdin>".to_string(),
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Write to `output`, or stdout when none is given.
pub fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            info!(path = %path.display(), bytes = contents.len(), "Wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("Failed to write stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}
