use super::print::{print_banner, print_error, print_messages, print_result};
use super::prompt::{self, Io};
use assistant_bot::api::{BotApi, CmdMessage, CmdResult};
use assistant_bot::error::Result;
use assistant_bot::store::DataStore;
use log::{debug, warn};
use super::input::LineSource;
use std::io::Write;

const PROMPT: &str = "Enter a command: ";

/// Splits a line into a lower-cased command and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.map(str::to_string).collect()))
}

enum Flow {
    Continue,
    Exit,
}

/// One run of the REPL. Both books are saved on `close`/`exit`, at end of input,
/// on an interrupt, and when the session is dropped without any of these.
pub struct Session<S: DataStore, R: LineSource, W: Write> {
    api: BotApi<S>,
    io: Io<R, W>,
    saved: bool,
}

impl<S: DataStore, R: LineSource, W: Write> Session<S, R, W> {
    pub fn new(api: BotApi<S>, input: R, out: W) -> Self {
        Self {
            api,
            io: Io::new(input, out),
            saved: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        print_banner(self.io.out())?;
        let startup = self.api.take_startup_messages();
        print_messages(self.io.out(), &startup)?;

        loop {
            write!(self.io.out(), "{}", PROMPT)?;
            self.io.out().flush()?;

            let Some(line) = self.io.read_line()? else {
                writeln!(self.io.out())?;
                if self.io.interrupted() {
                    debug!("Interrupted, closing session");
                } else {
                    debug!("End of input, closing session");
                }
                self.shutdown()?;
                return Ok(());
            };
            let Some((command, args)) = parse_input(&line) else {
                continue;
            };
            debug!("Command '{}' with {} argument(s)", command, args.len());

            match self.dispatch(&command, &args) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => print_error(self.io.out(), &e)?,
            }
        }
    }

    fn dispatch(&mut self, command: &str, args: &[String]) -> Result<Flow> {
        let api = &mut self.api;
        let result = match command {
            "close" | "exit" => {
                self.shutdown()?;
                return Ok(Flow::Exit);
            }
            "hello" => api.hello(),
            "help" => api.help(),
            "add-contact" => prompt::add_contact(&mut self.io, api, args),
            "change-contact" => prompt::change_contact(&mut self.io, api, args),
            "delete-contact" => api.delete_contact(args),
            "all-contacts" => api.all_contacts(),
            "search-contact" => api.search_contacts(args),
            "show-phones" => api.show_phones(args),
            "show-birthday" => api.show_birthday(args),
            "birthdays" => api.birthdays(args),
            "add-note" => api.add_note(args),
            "change-note" => api.change_note(args),
            "delete-note" => api.delete_note(args),
            "all-notes" => api.all_notes(),
            "search-note" => api.search_notes(args),
            "add-note-tag" => api.add_note_tag(args),
            "delete-note-tag" => api.delete_note_tag(args),
            _ => Ok(CmdResult::message(CmdMessage::error("Invalid command."))),
        }?;

        print_result(self.io.out(), &result)?;
        Ok(Flow::Continue)
    }

    /// Saves both books. A failed save is reported, not fatal.
    fn shutdown(&mut self) -> Result<()> {
        self.saved = true;
        if let Err(e) = self.api.save() {
            warn!("Saving on exit failed: {}", e);
            print_messages(
                self.io.out(),
                &[CmdMessage::error(format!("Failed to save data: {}", e))],
            )?;
        }
        writeln!(self.io.out(), "Good bye!")?;
        Ok(())
    }
}

impl<S: DataStore, R: LineSource, W: Write> Drop for Session<S, R, W> {
    fn drop(&mut self) {
        if self.saved {
            return;
        }
        debug!("Session dropped before shutdown, saving");
        if let Err(e) = self.api.save() {
            warn!("Saving on drop failed: {}", e);
        }
    }
}
