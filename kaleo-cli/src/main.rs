use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use kaleo_api::ApiClient;
use kaleo_core::{Config, Context};
use kaleo_screens::{ActiveScreen, CommandOutcome, NavAction, handle_command, parse_nav};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let api = Arc::new(ApiClient::new(
        config.api_url.clone(),
        config.access_token.clone(),
    ));
    let ctx = Context::new(api);

    info!("talking to {}", config.api_url);
    println!("Kaleo browser. Type `help` for commands.");

    // One screen at a time consumes navigation input; everything else is
    // routed as a top-level command.
    let mut active: Option<ActiveScreen> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if active.is_some()
            && let Some(action) = parse_nav(&line)
        {
            if action == NavAction::Back {
                active = None;
                println!("Closed.");
            } else if let Some(screen) = active.as_ref() {
                println!("{}", screen.handle_nav(action).await);
            }
            continue;
        }

        match handle_command(&ctx, &line).await {
            CommandOutcome::Opened(screen, view) => {
                println!("{view}");
                active = Some(screen);
            }
            CommandOutcome::Message(message) => println!("{message}"),
            CommandOutcome::Unknown => {
                if !line.trim().is_empty() {
                    println!("Unknown command. Type `help` for commands.");
                }
            }
            CommandOutcome::Quit => break,
        }
    }

    Ok(())
}
