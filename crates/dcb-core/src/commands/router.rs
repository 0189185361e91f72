use std::collections::HashMap;

use crate::{
    commands::{CommandCtx, CommandSpec},
    config::Config,
    domain::MessageRef,
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{Delivery, IncomingMessage, Invocation},
    },
    Result,
};

/// Outcome of feeding one incoming message through the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Not addressed to this bot (no prefix, empty token, or a bot author).
    Ignored,
    /// Prefixed token that matches no registered name or alias.
    Unknown(String),
    Handled {
        command: &'static str,
        delivery: Delivery,
        sent: MessageRef,
    },
}

/// Immutable command table plus the prefix it listens on.
pub struct CommandRouter {
    prefix: String,
    ignore_bots: bool,
    commands: Vec<CommandSpec>,
    by_token: HashMap<&'static str, usize>,
}

impl CommandRouter {
    pub fn new(prefix: impl Into<String>, commands: Vec<CommandSpec>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(Error::Config("command prefix must not be empty".to_string()));
        }

        let mut by_token: HashMap<&'static str, usize> = HashMap::new();
        for (idx, spec) in commands.iter().enumerate() {
            for token in spec.tokens() {
                if token.is_empty() || token.contains(char::is_whitespace) {
                    return Err(Error::InvalidCommand(token.to_string()));
                }
                if let Some(&prev) = by_token.get(token) {
                    return Err(Error::DuplicateCommand {
                        name: token.to_string(),
                        first: commands[prev].name.to_string(),
                        second: spec.name.to_string(),
                    });
                }
                by_token.insert(token, idx);
            }
        }

        Ok(Self {
            prefix,
            ignore_bots: true,
            commands,
            by_token,
        })
    }

    pub fn from_config(cfg: &Config, commands: Vec<CommandSpec>) -> Result<Self> {
        let router = Self::new(cfg.command_prefix.clone(), commands)?;
        Ok(router.ignore_bots(cfg.ignore_bot_messages))
    }

    pub fn ignore_bots(mut self, ignore: bool) -> Self {
        self.ignore_bots = ignore;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Exact, case-sensitive lookup by name or alias.
    pub fn find(&self, token: &str) -> Option<&CommandSpec> {
        self.by_token.get(token).map(|&idx| &self.commands[idx])
    }

    /// Split `content` into `(token, args)` if it starts with the prefix.
    ///
    /// The token runs up to the first whitespace and may be empty.
    pub fn parse<'a>(&self, content: &'a str) -> Option<(&'a str, &'a str)> {
        let rest = content.strip_prefix(self.prefix.as_str())?;
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (token, args) = rest.split_at(end);
        Some((token, args.trim()))
    }

    /// Match `msg` against the table and deliver the handler's reply.
    ///
    /// At most one delivery happens per call. Delivery errors are returned
    /// as-is; this layer never retries.
    pub async fn dispatch(
        &self,
        messenger: &dyn MessagingPort,
        msg: IncomingMessage,
    ) -> Result<Dispatch> {
        if self.ignore_bots && msg.author.bot {
            return Ok(Dispatch::Ignored);
        }
        let Some((token, args)) = self.parse(&msg.content) else {
            return Ok(Dispatch::Ignored);
        };
        if token.is_empty() {
            return Ok(Dispatch::Ignored);
        }
        let Some(spec) = self.find(token) else {
            tracing::debug!(command = token, "command not found");
            return Ok(Dispatch::Unknown(token.to_string()));
        };

        let invocation = Invocation {
            invoked_with: token.to_string(),
            args: args.to_string(),
            channel_id: msg.channel_id,
            message: msg.message_ref(),
            author: msg.author,
        };
        tracing::info!(
            command = spec.name,
            invoked_with = %invocation.invoked_with,
            user_id = invocation.author.id.0,
            channel_id = invocation.channel_id.0,
            "command invoked"
        );

        let out = (spec.handler)(&CommandCtx {
            invocation: &invocation,
            router: self,
        });

        let sent = match out.delivery {
            Delivery::Send => messenger.send(invocation.channel_id, &out.text).await?,
            Delivery::Reply => messenger.reply(invocation.message, &out.text).await?,
        };

        Ok(Dispatch::Handled {
            command: spec.name,
            delivery: out.delivery,
            sent,
        })
    }
}
