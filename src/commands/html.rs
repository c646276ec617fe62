//! Html command handler.
//!
//! Converts each input with a fresh interpreter (in parallel) and writes the
//! results in argument order.

use anyhow::Result;
use rayon::prelude::*;
use tracing::{debug, info};

use ansi_html::cli::HtmlArgs;
use ansi_html::{render_log, wrap_document, Config, RenderOptions};

use super::{read_inputs, write_output, Input};

/// Merge command-line flags over the `[render]` config section.
pub fn resolve_render_options(args: &HtmlArgs, config: &Config) -> RenderOptions {
    let mut options = config.render_options();
    if args.classes {
        options.convert.use_classes = true;
    }
    if args.no_escape {
        options.escape_html = false;
    }
    if args.linkify {
        options.linkify = true;
    }
    options
}

/// Convert all inputs and concatenate them in order.
pub fn render_inputs(inputs: &[Input], options: &RenderOptions) -> String {
    inputs
        .par_iter()
        .map(|input| {
            debug!(input = %input.name, "Rendering");
            render_log(&input.text, options)
        })
        .collect::<Vec<_>>()
        .concat()
}

/// Build the final output: converted body, optionally as a full document.
pub fn build_output(args: &HtmlArgs, config: &Config, inputs: &[Input]) -> String {
    let options = resolve_render_options(args, config);
    let body = render_inputs(inputs, &options);

    if !(args.standalone || config.document.standalone) {
        return body;
    }

    let mut document = config.document_options();
    document.embed_stylesheet = config.document.embed_stylesheet && options.convert.use_classes;
    wrap_document(&body, &document)
}

/// Handle the html command.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &HtmlArgs, config: &Config) -> Result<()> {
    let inputs = read_inputs(&args.files)?;
    info!(inputs = inputs.len(), "Converting to HTML");
    let output = build_output(args, config, &inputs);
    write_output(args.output.as_deref(), &output)
}
