//! Hypoboard CLI - Kanban board and stage-transition gates for AI project hypotheses

use clap::Parser;
use hypoboard::cli::{commands, Cli, Commands};
use hypoboard::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> hypoboard::Result<()> {
    let config = cli.load_config()?;

    match cli.command {
        Some(Commands::Board { json, out }) => commands::board::run(&config, json, out.as_deref()).await,
        Some(Commands::Show { id, json }) => commands::show::run(&config, &id, json).await,
        Some(Commands::Gate { id, target, json }) => commands::gate::run(&config, &id, target, json).await,
        Some(Commands::Move { id, to, actor, drag }) => {
            commands::stage_move::run(&config, &id, to, actor.as_deref(), drag).await
        }
        Some(Commands::Tui) => commands::tui::run(&config).await,
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
