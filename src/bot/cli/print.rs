use super::styles::BANNER;
use assistant_bot::api::{CmdMessage, CmdResult, MessageLevel};
use assistant_bot::error::BotError;
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", BANNER.apply_to("Welcome to the assistant bot!"))?;
    writeln!(out, "Type 'help' to see a list of available commands.")?;
    writeln!(out)
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Rendered output first, then messages, then a blank separator line.
pub(super) fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    if let Some(output) = &result.output {
        write!(out, "{}", output)?;
        if !output.ends_with('\n') {
            writeln!(out)?;
        }
    }
    print_messages(out, &result.messages)?;
    writeln!(out)
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &BotError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())?;
    writeln!(out)
}

pub(super) fn print_warning<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.yellow())
}

pub(super) fn print_failure<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.red())
}
