//! Command dispatcher: owns the session and routes parsed commands to use cases.

use std::sync::Arc;

use buddyline_shared::{nonce::NonceSource, time::Clock};

use crate::{
    domain::{ChatGateway, Session},
    usecase::{ListOnlineUseCase, LoginUseCase, SendMessageUseCase, SetTypingUseCase},
};

use super::{
    command::Command, error::ClientError, formatter::ReplyFormatter, prompt::CredentialPrompt,
};

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text (if any) and read the next line
    Continue(String),
    /// Leave the loop
    Exit,
}

/// Interactive command dispatcher
///
/// Holds the only `Session` of the process. Authenticated commands check it
/// before calling a use case, so an empty session never reaches the network.
pub struct Dispatcher {
    session: Session,
    login: LoginUseCase,
    list_online: ListOnlineUseCase,
    set_typing: SetTypingUseCase,
    send_message: SendMessageUseCase,
    prompt: Box<dyn CredentialPrompt>,
}

impl Dispatcher {
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        clock: Arc<dyn Clock>,
        nonce_source: Arc<dyn NonceSource>,
        prompt: Box<dyn CredentialPrompt>,
    ) -> Self {
        Self {
            session: Session::new(),
            login: LoginUseCase::new(gateway.clone()),
            list_online: ListOnlineUseCase::new(gateway.clone()),
            set_typing: SetTypingUseCase::new(gateway.clone()),
            send_message: SendMessageUseCase::new(gateway, clock, nonce_source),
            prompt,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Parse and run one input line.
    ///
    /// Malformed lines are reported in the returned text; only fatal errors
    /// come back as `Err`.
    pub async fn dispatch_line(&mut self, line: &str) -> Result<Flow, ClientError> {
        match Command::parse(line) {
            Ok(Some(command)) => self.dispatch(command).await,
            Ok(None) => Ok(Flow::Continue(String::new())),
            Err(e) => Ok(Flow::Continue(ReplyFormatter::format_command_error(&e))),
        }
    }

    /// Run a parsed command
    pub async fn dispatch(&mut self, command: Command) -> Result<Flow, ClientError> {
        let reply = match command {
            Command::Login { email, password } => self.run_login(email, password).await?,
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => ReplyFormatter::format_help(),
            _ if !self.session.is_logged_in() => ReplyFormatter::format_not_logged_in(),
            Command::ListOnline => {
                let buddies = self.list_online.execute(&self.session).await?;
                ReplyFormatter::format_online_buddies(&buddies)
            }
            Command::Typing { target, typing } => {
                let response = self.set_typing.execute(&self.session, target, typing).await?;
                ReplyFormatter::format_json_response(&response)
            }
            Command::Send { target, body } => {
                let receipt = self
                    .send_message
                    .execute(&self.session, target, body)
                    .await?;
                ReplyFormatter::format_sent(&receipt)
            }
        };

        Ok(Flow::Continue(reply))
    }

    async fn run_login(
        &mut self,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<String, ClientError> {
        let email = match email {
            Some(email) => email,
            None => self.prompt.ask_email()?,
        };
        let password = match password {
            Some(password) => password,
            None => self.prompt.ask_password()?,
        };

        let outcome = self
            .login
            .execute(&mut self.session, &email, &password)
            .await?;
        Ok(ReplyFormatter::format_login_outcome(&outcome))
    }
}
