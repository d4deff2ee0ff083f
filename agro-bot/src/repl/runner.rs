//! REPL runner: reads lines, passes them to the handler chain for one session, writes replies.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, instrument, warn};

use crate::core::{Command, HandlerResponse};
use crate::runner::AgroBot;

/// Runs one session on the process's stdin/stdout.
pub async fn run_repl(bot: &AgroBot) -> Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    run_session(bot, input, &mut output).await
}

/// Starts a session, writes its greeting, then answers each input line until EOF or `/quit`.
///
/// Per-request failures are written to `output` and the session continues. The session is
/// removed from the store on exit.
#[instrument(skip(bot, input, output))]
pub async fn run_session<R, W>(bot: &AgroBot, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (session_id, session) = bot.components.sessions.create().await;
    let greeting = session
        .lock()
        .await
        .log()
        .all()
        .first()
        .map(|turn| turn.content.clone())
        .unwrap_or_default();
    write_line(output, &greeting).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if Command::parse(&line) == Some(Command::Quit) {
            info!(session_id = %session_id, "step: quit requested");
            break;
        }

        match bot.handle_input(&session_id, &line).await {
            Ok(HandlerResponse::Reply(text)) => write_line(output, &text).await?,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, session_id = %session_id, "Request failed, session continues");
                write_line(output, &format!("Sorry, that request failed: {}", e)).await?;
            }
        }
    }

    bot.components.sessions.remove(&session_id).await;
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
