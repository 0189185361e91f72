/// Core error type for the bot.
///
/// Adapter crates should map their specific errors into this type so the
/// dispatch shell can report failures consistently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("duplicate command name {name:?}: registered by both {first:?} and {second:?}")]
    DuplicateCommand {
        name: String,
        first: String,
        second: String,
    },

    #[error("invalid command name {0:?}")]
    InvalidCommand(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
