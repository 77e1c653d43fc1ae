use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use llama_chat::config::Config;
use llama_chat::console;
use llama_chat::services::inference::OllamaClient;
use llama_chat::state::ChatSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env().context("Error loading config")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    console::customize(&mut lines, &mut stdout, &mut config).await?;

    let client = OllamaClient::new(&config.endpoint_url, config.request_timeout())
        .context("failed to build HTTP client")?;
    let mut session = ChatSession::new(config, client);

    console::run(&mut session, &mut lines, &mut stdout).await?;
    Ok(())
}
