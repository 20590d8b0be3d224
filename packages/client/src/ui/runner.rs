//! Read-evaluate loop.

use std::sync::Arc;

use buddyline_shared::{nonce::RandomNonce, time::SystemClock};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::infrastructure::{GatewayConfig, ReqwestChatGateway};

use super::{
    command::Command,
    dispatcher::{Dispatcher, Flow},
    error::ClientError,
    formatter::ReplyFormatter,
    prompt::TerminalPrompt,
};

/// Run the interactive client until `exit`, EOF, or a fatal error.
///
/// With `email` set, a login is attempted before the first prompt and the
/// password is asked for interactively.
pub async fn run_client(config: GatewayConfig, email: Option<String>) -> Result<(), ClientError> {
    let gateway = Arc::new(ReqwestChatGateway::new(&config)?);
    tracing::info!("Using {}", config.base_url);

    let mut dispatcher = Dispatcher::new(
        gateway,
        Arc::new(SystemClock),
        Arc::new(RandomNonce),
        Box::new(TerminalPrompt),
    );

    if let Some(email) = email {
        let flow = dispatcher
            .dispatch(Command::Login {
                email: Some(email),
                password: None,
            })
            .await?;
        print_flow(&flow);
    }

    println!("Type 'help' for a list of commands.");

    let mut rl = DefaultEditor::new().map_err(|e| ClientError::Readline(e.to_string()))?;

    loop {
        let prompt = ReplyFormatter::format_prompt(dispatcher.session());
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                tracing::info!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                tracing::info!("EOF");
                break;
            }
            Err(err) => return Err(ClientError::Readline(err.to_string())),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Keep passwords typed inline out of the history
        if !line.starts_with("login") {
            rl.add_history_entry(line).ok();
        }

        let flow = dispatcher.dispatch_line(line).await?;
        if flow == Flow::Exit {
            break;
        }
        print_flow(&flow);
    }

    tracing::info!("Client session ended");
    Ok(())
}

fn print_flow(flow: &Flow) {
    if let Flow::Continue(text) = flow
        && !text.is_empty()
    {
        println!("{}", text);
    }
}
