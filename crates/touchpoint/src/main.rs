mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let store = cli.store;

    match cli.command {
        Commands::Visit { url } => commands::visit::run(store.as_deref(), &url),
        Commands::Resolve { path, query } => commands::resolve::run(store.as_deref(), &path, query),
        Commands::Decorate { path, urls } => commands::decorate::run(store.as_deref(), &path, &urls),
        Commands::Show => commands::show::run(store.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
