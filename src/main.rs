use anyhow::{Context, Result};
use clap::Parser;

use cos_explorer::cli::{Cli, Command};
use cos_explorer::commands;
use cos_explorer::config::Config;
use cos_explorer::cos::Document;
use cos_explorer::tui::Palette;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Tree(args) => {
            tracing::info!(?args, "Printing tree");
            commands::tree::run(args, &config)?;
        }
        Command::Tui(args) => {
            tracing::info!(?args, "Starting TUI");
            let document = Document::open(&args.file)
                .with_context(|| format!("Failed to open {}", args.file.display()))?;

            let mut app = cos_explorer::tui::App::new(args.file.clone(), document);
            app.palette = if args.no_color {
                Palette::Mono
            } else {
                Palette::from_scheme(&config.tui.color_scheme)
            };
            app.show_icons = config.icons.glyphs;
            if config.tui.expand_root {
                app.expand_root();
            }

            cos_explorer::tui::run(app)?;
        }
        Command::Completions(args) => {
            commands::completions::run(args);
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cos_explorer={}", level)));

    // Logs go to stderr so they never mix with tree output
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
