//! CLI entry point.
//!
//! Wires parsed arguments into the bootstrap, dispatches to handlers,
//! and maps failures to exit codes. Nothing below this file touches
//! the process environment or exit status.

use std::process::ExitCode;

use clap::Parser;

use symkit_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose lowers the default threshold
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            let code = error
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::with_defaults(cli.manifest, cli.python, cli.ascii);
    let ctx = bootstrap(config);

    let Some(command) = cli.command else {
        // No subcommand - print help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Check { strict, json } => handlers::check::execute(&ctx, strict, json).await,
        Commands::List { json } => handlers::list::execute(&ctx, json).await,
        Commands::Lint { path } => handlers::lint::execute(&ctx, path.as_deref()).await,
        Commands::Extras => handlers::extras::execute(&ctx),
    }
}
