//! Css command handler

use anyhow::Result;
use std::path::Path;

use ansi_html::class_stylesheet;

use super::write_output;

/// Handle the css command.
#[cfg(not(tarpaulin_include))]
pub fn handle(output: Option<&Path>) -> Result<()> {
    write_output(output, &class_stylesheet())
}
