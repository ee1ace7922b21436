use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_bot::config::Config;
use recipe_bot::domains::conversation::{Conversation, Message};
use recipe_bot::error::{RecipeBotError, Result};
use recipe_bot::services::chat::ChatService;

#[derive(Parser, Debug)]
#[command(name = "recipe-bot")]
#[command(about = "Chat with the recipe assistant from the terminal")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RECIPE_BOT_GIT_SHA"), ")"))]
struct Cli {
    /// JSON config file; the environment is used when omitted.
    #[arg(long, env = "RECIPE_BOT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Skip,
    Quit,
    Reset,
    Say(&'a str),
}

fn parse_line(line: &str) -> ReplInput<'_> {
    match line.trim() {
        "" => ReplInput::Skip,
        "/quit" | "/exit" => ReplInput::Quit,
        "/reset" => ReplInput::Reset,
        text => ReplInput::Say(text),
    }
}

fn prompt() {
    print!("you> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    recipe_bot::logging::init_tracing("recipe_bot");
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env(),
    };
    let chat = ChatService::from_config(&config)?;
    println!(
        "Recipe assistant ({}). /reset starts over, /quit exits.",
        chat.persona().model()
    );

    let mut history: Conversation = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| RecipeBotError::Runtime(e.to_string()))?
    {
        match parse_line(&line) {
            ReplInput::Skip => {}
            ReplInput::Quit => break,
            ReplInput::Reset => {
                history.clear();
                println!("(conversation cleared)");
            }
            ReplInput::Say(text) => {
                let mut turn = history.clone();
                turn.push(Message::user(text));
                match chat.respond(turn).await {
                    Ok(updated) => {
                        if let Some(reply) = updated.last() {
                            println!("\n{}\n", reply.content());
                        }
                        history = updated;
                    }
                    Err(err) => eprintln!("error: {err}"),
                }
            }
        }
        prompt();
    }

    Ok(())
}
