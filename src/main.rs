//! cfgkit CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cfgkit::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // `log` installs its own JSON logger; everything else gets stderr diagnostics
    if !matches!(cli.command, Commands::Log(_)) {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let result = match cli.command {
        Commands::Dump(args) => cfgkit::cli::commands::dump::execute(args, &cli.source),
        Commands::Get(args) => cfgkit::cli::commands::get::execute(args, &cli.source, cli.json),
        Commands::Exists(args) => {
            match cfgkit::cli::commands::exists::execute(args, &cli.source, cli.json) {
                Ok(true) => Ok(()),
                Ok(false) => std::process::exit(1),
                Err(err) => Err(err),
            }
        }
        Commands::Log(args) => cfgkit::cli::commands::log::execute(args),
    };

    if let Err(err) = result {
        cfgkit::cli::handle_error(err, cli.json);
    }
}
