//! tb - ticket board CLI
//!
//! # Examples
//!
//! ```bash
//! # Log in once; the session is kept in .tb/session.json
//! tb login --email alice@example.com --password secret
//!
//! # Show the board for one project
//! tb board show --project-id <id> --pretty
//!
//! # Drag a ticket from To Do to Done
//! tb board move <ticket-id> --from to_do --from-index 0 --to done
//!
//! # Search as you type (one query per line)
//! printf 'log\nlogin\n' | tb find tickets
//! ```

use tb_cli::{App, Cli, CliResult, logger};
use tb_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.server.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let log_file = config.log_file_path().ok().flatten();
    if let Err(e) = logger::initialize(&config.logging, log_file) {
        eprintln!("Warning: {}", e.user_message());
    }
    config.log_summary();

    let result = match App::from_config(&config) {
        Ok(app) => app.run(cli.command).await,
        Err(e) => Err(e),
    };

    // Handle result
    match result {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(value)) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Config file and environment, then the `--server` flag on top.
fn load_config(server: Option<&str>) -> CliResult<Config> {
    let mut config = Config::load()?;
    if let Some(url) = server {
        config.gateway.base_url = url.to_string();
    }
    config.validate()?;
    Ok(config)
}
