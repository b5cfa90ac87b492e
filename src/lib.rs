use std::process::ExitCode;

use clap::Parser;

pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use commands::cli::Cli;
use types::errors::AppError;

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level when both are set.
    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let json = cli.json;
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(commands::dispatch(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {e:?}");
            if json {
                let message = match e.downcast_ref::<AppError>() {
                    Some(app) => serde_json::to_value(app).unwrap_or_default(),
                    None => serde_json::Value::String(e.to_string()),
                };
                eprintln!("{}", serde_json::json!({ "error": message }));
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
