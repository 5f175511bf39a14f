use clap::Parser;
use eagle_cli::cli::dispatcher::{DispatchOptions, Dispatcher, resolve_client_config};
use eagle_cli::cli::main_types::Cli;
use eagle_cli::error::AppError;
use eagle_cli::storage::config::Config;
use eagle_cli::utils::logging::{init_logging, print_verbose};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        log::debug!("error severity: {}", e.severity().label());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = Config::load(config_path.clone())?;

    let profile_name = cli
        .profile
        .clone()
        .unwrap_or_else(|| config.active_profile_name().to_string());

    print_verbose(cli.verbose, &format!("Using profile: {}", profile_name));
    if let Some(config_dir) = &cli.config_dir {
        print_verbose(cli.verbose, &format!("Using config directory: {}", config_dir));
    }

    let client_config =
        resolve_client_config(config.get_profile(&profile_name), cli.host, cli.port)?;

    let options = DispatchOptions {
        profile_name,
        config_path,
        json: cli.json,
        verbose: cli.verbose,
    };
    let dispatcher = Dispatcher::new(config, options, client_config)?;
    dispatcher.dispatch(cli.command).await
}
