//! Prefix-command registration and dispatch.
//!
//! The command table is an ordered list of [`CommandSpec`]s built once at
//! startup. [`CommandRouter::new`] validates it (names and aliases unique,
//! no whitespace) before the gateway connection is opened.

pub mod builtin;
pub mod router;

pub use builtin::builtin_commands;
pub use router::{CommandRouter, Dispatch};

use crate::messaging::types::{Invocation, Outgoing};

/// A command handler: one invocation in, exactly one outgoing message out.
pub type Handler = fn(&CommandCtx<'_>) -> Outgoing;

/// Static registration of one command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// One-line summary shown by `help`.
    pub description: &'static str,
    pub handler: Handler,
}

impl CommandSpec {
    pub const fn new(name: &'static str, description: &'static str, handler: Handler) -> Self {
        Self {
            name,
            aliases: &[],
            description,
            handler,
        }
    }

    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Name followed by aliases, in registration order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// What a handler gets to look at.
pub struct CommandCtx<'a> {
    pub invocation: &'a Invocation,
    pub router: &'a CommandRouter,
}
