//! CLI definitions for ansi-html
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ansi-html")]
#[command(about = "Render ANSI-colored build and CI logs as HTML or plain text")]
#[command(
    long_about = "ansi-html - Render ANSI-colored build and CI logs as HTML or plain text.

SGR color sequences (16 colors, 256-color palette, 24-bit true color) become
styled <span> elements. Other control sequences are dropped.

QUICK START:
    ansi-html html build.log > build.html    Convert with inline styles
    ansi-html html --classes build.log       Convert with ansi-* classes
    ansi-html css > ansi.css                 Stylesheet for class mode
    some-command | ansi-html text            Strip escape sequences

Settings are read from ~/.config/ansi-html/config.toml (see 'ansi-html config')."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of ~/.config/ansi-html/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert ANSI-colored text to HTML
    #[command(long_about = "Convert ANSI-colored text to HTML.

Reads each FILE (or stdin when none is given or FILE is '-') and writes the
converted markup in argument order. Each file starts with fresh color state.
Flags override the [render] and [document] config sections.

EXAMPLES:
    ansi-html html build.log                 Inline-style spans to stdout
    ansi-html html --classes --standalone a.log -o a.html
    ansi-html html --linkify --no-escape trusted.log")]
    Html(HtmlArgs),

    /// Strip ANSI escape sequences
    Text(TextArgs),

    /// Print the stylesheet used by class-mode output
    Css {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct HtmlArgs {
    /// Input files ('-' or none reads stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Emit ansi-* class names instead of inline styles
    #[arg(long)]
    pub classes: bool,

    /// Do not escape &, < and > before converting
    #[arg(long)]
    pub no_escape: bool,

    /// Wrap bare http(s) URLs in anchors (a URL directly followed by an
    /// escape sequence swallows it; keep whitespace after colored URLs)
    #[arg(long)]
    pub linkify: bool,

    /// Wrap output in a complete HTML document
    #[arg(long)]
    pub standalone: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TextArgs {
    /// Input files ('-' or none reads stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
