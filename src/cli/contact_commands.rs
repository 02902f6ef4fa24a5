use crate::cli::context::CLIContext;
use crate::error::{BotError, BotResult};
use crate::ops::contact_ops;

/// Returns the positional argument at `idx`, or an arity error naming the usage.
fn arg<'a>(args: &[&'a str], idx: usize, command: &str, expected: &str) -> BotResult<&'a str> {
    args.get(idx).copied().ok_or_else(|| BotError::MissingArgs {
        command: command.into(),
        expected: expected.into(),
    })
}

pub fn add(ctx: &mut CLIContext, args: &[&str]) -> BotResult<String> {
    let name = arg(args, 0, "add", "<name> <phone>")?;
    let phone = arg(args, 1, "add", "<name> <phone>")?;
    contact_ops::add_phone(&mut ctx.book, name, phone)?;
    Ok("Contact added.".into())
}

pub fn change(ctx: &mut CLIContext, args: &[&str]) -> BotResult<String> {
    let usage = "<name> <old phone> <new phone>";
    let name = arg(args, 0, "change", usage)?;
    let old = arg(args, 1, "change", usage)?;
    let new = arg(args, 2, "change", usage)?;
    if ctx.book.find(name).is_none() {
        return Ok(format!("Contact {} not found.", name));
    }
    contact_ops::change_phone(&mut ctx.book, name, old, new)?;
    Ok("Contact changed.".into())
}

pub fn remove_phone(ctx: &mut CLIContext, args: &[&str]) -> BotResult<String> {
    let name = arg(args, 0, "remove-phone", "<name> <phone>")?;
    let phone = arg(args, 1, "remove-phone", "<name> <phone>")?;
    contact_ops::remove_phone(&mut ctx.book, name, phone)?;
    Ok("Phone removed.".into())
}

pub fn show_phone(ctx: &CLIContext, args: &[&str]) -> BotResult<String> {
    let name = arg(args, 0, "phone", "<name>")?;
    Ok(match ctx.book.find(name) {
        Some(record) => {
            let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
            format!("Phone numbers for {}: {}", name, phones.join(", "))
        }
        None => format!("Contact {} not found.", name),
    })
}

pub fn add_birthday(ctx: &mut CLIContext, args: &[&str]) -> BotResult<String> {
    let name = arg(args, 0, "add-birthday", "<name> <DD.MM.YYYY>")?;
    let date = arg(args, 1, "add-birthday", "<name> <DD.MM.YYYY>")?;
    if ctx.book.find(name).is_none() {
        return Ok(format!("Contact {} not found.", name));
    }
    contact_ops::set_birthday(&mut ctx.book, name, date)?;
    Ok(format!("Birthday for {} added.", name))
}

pub fn show_birthday(ctx: &CLIContext, args: &[&str]) -> BotResult<String> {
    let name = arg(args, 0, "birthday", "<name>")?;
    Ok(match ctx.book.find(name) {
        Some(record) => match record.birthday() {
            Some(bd) => format!("Birthday for {}: {}", name, bd),
            None => format!("No birthday set for {}.", name),
        },
        None => format!("Contact {} not found.", name),
    })
}

pub fn birthdays(ctx: &CLIContext) -> BotResult<String> {
    let lookahead = ctx.config.lookahead_days;
    let upcoming = ctx.book.upcoming_birthdays_within(ctx.today(), lookahead);
    if upcoming.is_empty() {
        return Ok(format!("No upcoming birthdays in the next {} days.", lookahead));
    }
    let lines: Vec<String> = upcoming.iter().map(|u| u.to_string()).collect();
    Ok(lines.join("\n"))
}

pub fn delete(ctx: &mut CLIContext, args: &[&str]) -> BotResult<String> {
    let name = arg(args, 0, "delete", "<name>")?;
    contact_ops::delete_contact(&mut ctx.book, name)?;
    Ok(format!("Contact {} deleted.", name))
}

pub fn show_all(ctx: &CLIContext) -> BotResult<String> {
    Ok(ctx.book.to_string())
}
