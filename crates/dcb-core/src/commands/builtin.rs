use crate::commands::{CommandCtx, CommandSpec};
use crate::messaging::types::Outgoing;

/// The bot's command table, in the order `help` lists it.
pub fn builtin_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("help", "Shows this message", help),
        CommandSpec::new("hello", "Greets you with a mention", hello).aliases(&["HELLO", "Hello"]),
        CommandSpec::new(
            "what_does_ctx_author_mention_do",
            "Explains ctx.author.mention",
            author_mention,
        ),
        CommandSpec::new(
            "what_does_ctx_author_id_do",
            "Explains ctx.author.id",
            author_id,
        ),
        CommandSpec::new(
            "what_does_ctx_author_name_do",
            "Explains ctx.author.name",
            author_name,
        ),
        CommandSpec::new(
            "what_does_ctx_author_avatar_url_do",
            "Explains ctx.author.avatar.url",
            author_avatar_url,
        ),
        CommandSpec::new("what_does_ctx_send_do", "Explains ctx.send", send),
        CommandSpec::new("what_does_ctx_reply_do", "Explains ctx.reply", reply),
    ]
}

fn hello(ctx: &CommandCtx<'_>) -> Outgoing {
    Outgoing::send(format!("Hello {}", ctx.invocation.author.mention()))
}

fn author_mention(ctx: &CommandCtx<'_>) -> Outgoing {
    Outgoing::send(format!(
        "It will return a message with the user of the command being mentioned.. like this {}",
        ctx.invocation.author.mention()
    ))
}

fn author_id(ctx: &CommandCtx<'_>) -> Outgoing {
    Outgoing::send(format!(
        "It will return a message with the User ID of the user who triggered the command.. like this:- {}",
        ctx.invocation.author.id.0
    ))
}

fn author_name(ctx: &CommandCtx<'_>) -> Outgoing {
    Outgoing::send(format!(
        "It will return a message with the username of the user who triggered the command.. like this:- {}",
        ctx.invocation.author.name
    ))
}

// Users without a custom avatar get the platform default URL.
fn author_avatar_url(ctx: &CommandCtx<'_>) -> Outgoing {
    Outgoing::send(format!(
        "It will return a message with the url of the user's avatar who triggered the command.. like this:- ``{}``",
        ctx.invocation.author.display_avatar_url()
    ))
}

fn send(_: &CommandCtx<'_>) -> Outgoing {
    Outgoing::send("Pretty self explanatory.. just **sends** a message")
}

fn reply(_: &CommandCtx<'_>) -> Outgoing {
    Outgoing::reply(
        "This one's also pretty self explanatory.. just **replies** to the user's message who triggered the command",
    )
}

/// `help` lists every command; `help <command>` describes one.
fn help(ctx: &CommandCtx<'_>) -> Outgoing {
    let prefix = ctx.router.prefix();
    // The argument is looked up exactly as typed; `help !hello` is not `help hello`.
    let wanted = ctx.invocation.args.split_whitespace().next();

    let Some(wanted) = wanted else {
        let commands = ctx.router.commands();
        let width = commands.iter().map(|c| c.name.len()).max().unwrap_or(0);
        let mut lines = vec!["```".to_string(), "Commands:".to_string()];
        for c in commands {
            lines.push(format!("  {:<width$}  {}", c.name, c.description).trim_end().to_string());
        }
        lines.push(String::new());
        lines.push(format!(
            "Type {prefix}help command for more info on a command."
        ));
        lines.push("```".to_string());
        return Outgoing::send(lines.join("\n"));
    };

    let Some(spec) = ctx.router.find(wanted) else {
        return Outgoing::send(format!("No command called \"{wanted}\" found."));
    };

    let mut lines = vec!["```".to_string(), format!("{prefix}{}", spec.name)];
    if !spec.description.is_empty() {
        lines.push(String::new());
        lines.push(spec.description.to_string());
    }
    if !spec.aliases.is_empty() {
        lines.push(String::new());
        lines.push(format!("Aliases: {}", spec.aliases.join(", ")));
    }
    lines.push("```".to_string());
    Outgoing::send(lines.join("\n"))
}
