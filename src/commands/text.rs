//! Text command handler

use anyhow::Result;
use rayon::prelude::*;

use ansi_html::ansi_to_text;
use ansi_html::cli::TextArgs;

use super::{read_inputs, write_output, Input};

/// Strip escape sequences from all inputs, concatenated in order.
pub fn strip_inputs(inputs: &[Input]) -> String {
    inputs
        .par_iter()
        .map(|input| ansi_to_text(&input.text))
        .collect::<Vec<_>>()
        .concat()
}

/// Handle the text command.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &TextArgs) -> Result<()> {
    let inputs = read_inputs(&args.files)?;
    write_output(args.output.as_deref(), &strip_inputs(&inputs))
}
