//! ansi-html - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use ansi_html::cli::{Cli, Commands, ConfigCommands};
use ansi_html::logging::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Html(args) => {
            let config = commands::load_config(config_path)?;
            commands::html::handle(&args, &config)
        }
        Commands::Text(args) => commands::text::handle(&args),
        Commands::Css { output } => commands::css::handle(output.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                let config = commands::load_config(config_path)?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
