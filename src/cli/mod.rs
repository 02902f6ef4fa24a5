pub mod context;
pub mod contact_commands;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{BotError, BotResult};
use context::CLIContext;

/// What the REPL should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit(String),
}

/// Run the interactive REPL until `exit`/`close` or EOF.
pub fn run(config: Config) {
    println!("Welcome to the assistant bot!");
    let mut ctx = CLIContext::new(config);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line() {
            Some(s) => s,
            None => break,
        };

        match execute(ctx, &input) {
            Outcome::Reply(text) => println!("{}", text),
            Outcome::Exit(text) => {
                println!("{}", text);
                break;
            }
        }
    }
}

/// Handle one input line against the context's address book.
pub fn execute(ctx: &mut CLIContext, input: &str) -> Outcome {
    let tokens = parse_input(input);
    let Some((first, args)) = tokens.split_first() else {
        return Outcome::Reply("Invalid command.".into());
    };

    let command = first.to_lowercase();
    debug!(command = command.as_str(), args = args.len(), "dispatching");

    let result: BotResult<String> = match command.as_str() {
        "hello" => Ok("Hello, how can I help you?".into()),
        "exit" | "close" => return Outcome::Exit("Good bye!".into()),
        "help" | "?" => Ok(help_text().into()),

        "add" => contact_commands::add(ctx, args),
        "change" => contact_commands::change(ctx, args),
        "remove-phone" => contact_commands::remove_phone(ctx, args),
        "phone" => contact_commands::show_phone(ctx, args),
        "add-birthday" => contact_commands::add_birthday(ctx, args),
        "birthday" => contact_commands::show_birthday(ctx, args),
        "birthdays" => contact_commands::birthdays(ctx),
        "delete" => contact_commands::delete(ctx, args),
        "all" => contact_commands::show_all(ctx),

        _ => Ok("Unknown command. Please try again.".into()),
    };

    Outcome::Reply(result.unwrap_or_else(|e| {
        warn!(command = command.as_str(), error = %e, "command failed");
        error_message(&e)
    }))
}

/// The fixed user-facing reply for a failed command.
pub fn error_message(err: &BotError) -> String {
    match err {
        e if e.is_not_found() => "Contact not found.".into(),
        e if e.is_validation() => "Give me name and phone please.".into(),
        BotError::MissingArgs { .. } => "Enter user name.".into(),
        e => format!("Error: {}", e),
    }
}

/// Split a line into whitespace-separated tokens.
pub fn parse_input(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

fn help_text() -> &'static str {
    r#"COMMANDS:
    hello                             Greeting
    add <name> <phone>                Add a phone (creates the contact if needed)
    change <name> <old> <new>         Replace a phone number
    remove-phone <name> <phone>       Remove a phone number
    phone <name>                      Show a contact's phones
    add-birthday <name> <DD.MM.YYYY>  Set a contact's birthday
    birthday <name>                   Show a contact's birthday
    birthdays                         Birthdays to celebrate in the coming days
    delete <name>                     Delete a contact
    all                               Show every contact
    help                              Show this help
    exit / close                      Quit

Phone numbers are exactly 10 digits."#
}
