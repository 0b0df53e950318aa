use clap::Parser;
use devops_ai::config::config_manager::ConfigManager;
use devops_ai::errors::ErrorHandler;
use devops_ai::structs::cli::Cli;
use devops_ai::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag.
    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let config = match ConfigManager::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            std::process::exit(1);
        }
    };

    let mut runner = CommandRunner::new(config);
    let code = runner.run_command(cli.command).await;
    std::process::exit(code);
}
