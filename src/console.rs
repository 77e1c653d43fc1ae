// src/console.rs
//! Line-oriented front end: optional name/prompt overrides, then the chat loop.

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, Lines};
use tracing::debug;

use crate::config::Config;
use crate::services::inference::InferenceClient;
use crate::state::ChatSession;

pub const EXIT_COMMAND: &str = "exit";

async fn prompt<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

/// Ask whether to replace the configured names and system prompt.
///
/// Has to run before the session is built, since the system message is
/// formatted from these values exactly once.
pub async fn customize<R, W>(lines: &mut Lines<R>, output: &mut W, config: &mut Config) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    prompt(output, "Press 'Enter' to use default values from config or 'y' to enter custom values.\n").await?;
    let Some(answer) = lines.next_line().await? else {
        return Ok(());
    };
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let fields: [(&str, &mut String); 3] = [
        ("Enter custom human name: ", &mut config.human_name),
        ("Enter custom AI name: ", &mut config.ai_name),
        ("Enter custom system prompt: ", &mut config.system_prompt),
    ];
    for (question, slot) in fields {
        prompt(output, question).await?;
        if let Some(value) = lines.next_line().await? {
            *slot = value;
        }
    }
    debug!(human = %config.human_name, ai = %config.ai_name, "using custom session values");
    Ok(())
}

/// Read lines until `exit` or end of input, one request per line.
///
/// Failed turns are reported on `output` and the loop keeps going.
pub async fn run<R, W, C>(session: &mut ChatSession<C>, lines: &mut Lines<R>, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    C: InferenceClient,
{
    let human = session.config().human_name.clone();
    let ai = session.config().ai_name.clone();

    loop {
        prompt(output, &format!("{human}: ")).await?;
        let Some(input) = lines.next_line().await? else {
            break;
        };
        if input == EXIT_COMMAND {
            break;
        }

        let line = match session.send_turn(&input).await {
            Ok(reply) => format!("{ai}: {}\n", reply.content),
            Err(err) => format!("Error sending message: {err}\n"),
        };
        prompt(output, &line).await?;
    }

    debug!(messages = session.transcript().len(), "chat loop finished");
    Ok(())
}
