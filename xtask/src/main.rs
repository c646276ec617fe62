//! xtask - Build tasks for ansi-html
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use ansi_html::cli::Cli;

const BIN: &str = "ansi-html";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for ansi-html")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            let all = !man && !markdown;
            if all || man {
                generate_man_pages(&output)?;
            }
            if all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

fn visible_subcommands(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|sub| !sub.is_hide_set())
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(arg.get_id().as_str(), "help" | "version")
}

/// Render `cmd` and its visible subcommands as `<stem>[-<sub>...].1`.
fn write_man_tree(dir: &Path, stem: &str, cmd: &Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    let path = dir.join(format!("{stem}.1"));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Generated: {}", path.display());

    for sub in visible_subcommands(cmd) {
        write_man_tree(dir, &format!("{stem}-{}", sub.get_name()), sub)?;
    }
    Ok(())
}

fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;
    write_man_tree(&man_dir, BIN, &Cli::command())?;
    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Flag column for an option: `-o, --output`.
fn flag_label(arg: &Arg) -> Option<String> {
    match (arg.get_short(), arg.get_long()) {
        (Some(s), Some(l)) => Some(format!("-{s}, --{l}")),
        (None, Some(l)) => Some(format!("--{l}")),
        (Some(s), None) => Some(format!("-{s}")),
        (None, None) => None,
    }
}

fn push_arguments(markdown: &mut String, cmd: &Command) {
    let args: Vec<&Arg> = cmd.get_arguments().filter(|a| !is_builtin(a)).collect();

    let positional: Vec<&&Arg> = args.iter().filter(|a| a.is_positional()).collect();
    if !positional.is_empty() {
        markdown.push_str("**Arguments**\n\n");
        for arg in positional {
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            let name = arg.get_id().as_str().to_uppercase();
            markdown.push_str(&format!("- `<{name}>`: {help}\n"));
        }
        markdown.push('\n');
    }

    let options: Vec<(String, String)> = args
        .iter()
        .filter(|a| !a.is_positional())
        .filter_map(|a| {
            let help = a.get_help().map(|h| h.to_string()).unwrap_or_default();
            flag_label(a).map(|flag| (flag, help))
        })
        .collect();
    if !options.is_empty() {
        markdown.push_str("**Options**\n\n");
        for (flag, help) in options {
            markdown.push_str(&format!("- `{flag}`: {help}\n"));
        }
        markdown.push('\n');
    }
}

fn push_command(markdown: &mut String, path: &str, cmd: &Command, depth: usize) {
    markdown.push_str(&format!("{} {path}\n\n", "#".repeat(depth)));
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{about}\n\n"));
    }
    push_arguments(markdown, cmd);
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{long_about}\n```\n\n"));
    }
    for sub in visible_subcommands(cmd) {
        push_command(
            markdown,
            &format!("{path} {}", sub.get_name()),
            sub,
            depth + 1,
        );
    }
}

/// Generate COMMANDS.md from the CLI definitions.
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();
    markdown.push_str("# ansi-html Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    for sub in visible_subcommands(&cmd) {
        let name = sub.get_name();
        markdown.push_str(&format!("- [{name}](#{BIN}-{name})\n"));
    }
    markdown.push_str("\n---\n\n");

    push_command(&mut markdown, BIN, &cmd, 2);
    markdown.push_str("*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());
    Ok(())
}
