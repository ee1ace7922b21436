use std::path::PathBuf;

use clap::Parser;
use recipe_bot::config::Config;
use recipe_bot::daemon::{self, AppState};
use recipe_bot::error::Result;
use recipe_bot::services::chat::ChatService;

#[derive(Parser, Debug)]
#[command(name = "recipe-botd")]
#[command(about = "Recipe Bot HTTP daemon")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RECIPE_BOT_GIT_SHA"), ")"))]
struct Cli {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// JSON config file; the environment is used when omitted.
    #[arg(long, env = "RECIPE_BOT_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    recipe_bot::logging::init_tracing("recipe_botd");
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env(),
    };
    let chat = ChatService::from_config(&config)?;

    daemon::run(&cli.host, cli.port, AppState { chat }).await
}
