//! Line-by-line elicitation for `add-contact` and `change-contact`.
//!
//! Both flows re-prompt on invalid input instead of failing the command. Closing
//! stdin or interrupting in the middle of a flow abandons it with an error.

use super::print::{print_failure, print_result, print_warning};
use super::styles::{skip_hint, CURRENT_VALUE, MENU_HINT, QUESTION};
use assistant_bot::api::{BotApi, CmdMessage, CmdResult};
use assistant_bot::commands::contacts::CONTACT_UPDATED;
use assistant_bot::error::{BotError, Result};
use assistant_bot::record::{FieldEdit, Record};
use assistant_bot::store::DataStore;
use super::input::{Line, LineSource};
use std::io::{self, Write};

/// Terminal input and output for one session.
///
/// Once input closes or is interrupted, every later read reports the end of input.
pub(super) struct Io<R, W> {
    input: R,
    out: W,
    finished: bool,
    interrupted: bool,
}

impl<R: LineSource, W: Write> Io<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            finished: false,
            interrupted: false,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// True once an interrupt ended the input.
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    /// Next line without its terminator, or `None` at end of input or after an interrupt.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        if self.finished {
            return Ok(None);
        }
        match self.input.next_line()? {
            Line::Text(line) => Ok(Some(line)),
            Line::Closed => {
                self.finished = true;
                Ok(None)
            }
            Line::Interrupted => {
                self.finished = true;
                self.interrupted = true;
                Ok(None)
            }
        }
    }

    /// Writes `question` and reads the trimmed answer. End of input is an error here.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.out, "{}: ", QUESTION.apply_to(question))?;
        self.out.flush()?;
        match self.read_line()? {
            Some(answer) => Ok(answer.trim().to_string()),
            None => Err(BotError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the answer was given",
            ))),
        }
    }
}

fn is_keyword(answer: &str, keyword: &str) -> bool {
    answer.eq_ignore_ascii_case(keyword)
}

pub(super) fn add_contact<S, R, W>(
    io: &mut Io<R, W>,
    api: &mut BotApi<S>,
    args: &[String],
) -> Result<CmdResult>
where
    S: DataStore,
    R: LineSource,
    W: Write,
{
    let mut record = api.prepare_new_contact(args)?;

    collect_many(io, &mut record, ListField::Phones)?;
    collect_many(io, &mut record, ListField::Emails)?;
    collect_one(io, &mut record, "address", "Enter address", Record::add_address)?;
    collect_one(
        io,
        &mut record,
        "birthday",
        "Enter birthday (DD.MM.YYYY)",
        Record::add_birthday,
    )?;

    api.add_contact(record)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListField {
    Phones,
    Emails,
}

impl ListField {
    fn singular(self) -> &'static str {
        match self {
            ListField::Phones => "phone",
            ListField::Emails => "email",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            ListField::Phones => "phones",
            ListField::Emails => "emails",
        }
    }

    fn values(self, record: &Record) -> Vec<String> {
        match self {
            ListField::Phones => record.phones().iter().map(|p| p.as_str().to_string()).collect(),
            ListField::Emails => record.emails().iter().map(|e| e.as_str().to_string()).collect(),
        }
    }

    fn edit(self, old: Option<String>, new: Option<String>) -> FieldEdit {
        match self {
            ListField::Phones => FieldEdit::Phones { old, new },
            ListField::Emails => FieldEdit::Emails { old, new },
        }
    }
}

/// Asks for phones or emails until the user answers `n`.
fn collect_many<R: LineSource, W: Write>(
    io: &mut Io<R, W>,
    record: &mut Record,
    field: ListField,
) -> Result<()> {
    let (label, question) = match field {
        ListField::Phones => ("Phone number", "Enter phone number"),
        ListField::Emails => ("Email", "Enter email"),
    };
    loop {
        let answer = io.ask(&format!("{} {}", question, skip_hint()))?;
        if is_keyword(&answer, "n") {
            return Ok(());
        }
        if answer.is_empty() {
            print_failure(
                io.out(),
                &format!("{} cannot be empty. Enter 'n' to skip.", label),
            )?;
            continue;
        }
        if field.values(record).contains(&answer) {
            print_warning(
                io.out(),
                &format!(
                    "This {} already exists in the contact. Please enter a different one.",
                    label.to_lowercase()
                ),
            )?;
            continue;
        }
        let added = match field {
            ListField::Phones => record.add_phone(&answer),
            ListField::Emails => record.add_email(&answer),
        };
        if let Err(e) = added {
            print_failure(
                io.out(),
                &format!("Error adding {}: {}", label.to_lowercase(), e),
            )?;
        }
    }
}

/// Asks for a single value until one is accepted or the user answers `n`.
fn collect_one<R, W, F>(
    io: &mut Io<R, W>,
    record: &mut Record,
    label: &str,
    question: &str,
    mut apply: F,
) -> Result<()>
where
    R: LineSource,
    W: Write,
    F: FnMut(&mut Record, &str) -> Result<()>,
{
    loop {
        let answer = io.ask(&format!("{} {}", question, skip_hint()))?;
        if is_keyword(&answer, "n") {
            return Ok(());
        }
        if answer.is_empty() {
            print_failure(
                io.out(),
                &format!("{} cannot be empty. Enter 'n' to skip.", capitalize(label)),
            )?;
            continue;
        }
        match apply(record, &answer) {
            Ok(()) => return Ok(()),
            Err(e) => print_failure(io.out(), &format!("Error adding {}: {}", label, e))?,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

const CHANGE_MENU: &str = "Which field would you like to edit?";
const CHANGE_OPTIONS: &[&str] = &[
    "1: Name",
    "2: Phones",
    "3: Emails",
    "4: Address",
    "5: Birthday",
    "Type 'exit' to stop",
];

pub(super) fn change_contact<S, R, W>(
    io: &mut Io<R, W>,
    api: &mut BotApi<S>,
    args: &[String],
) -> Result<CmdResult>
where
    S: DataStore,
    R: LineSource,
    W: Write,
{
    let mut name = api.prepare_change_contact(args)?;

    loop {
        print_result(io.out(), &api.show_contact(&name)?)?;
        writeln!(io.out(), "{}", QUESTION.apply_to(CHANGE_MENU))?;
        writeln!(
            io.out(),
            "{}",
            MENU_HINT.apply_to("Just enter the number next to the field.")
        )?;
        for option in CHANGE_OPTIONS {
            writeln!(io.out(), "{}", option)?;
        }

        let choice = io.ask("Your choice")?;
        if is_keyword(&choice, "exit") {
            break;
        }
        match choice.as_str() {
            "1" => {
                if let Some(renamed) = change_name(io, api, &name)? {
                    name = renamed;
                }
            }
            "2" => change_list(io, api, &name, ListField::Phones)?,
            "3" => change_list(io, api, &name, ListField::Emails)?,
            "4" => change_single(io, api, &name, SingleField::Address)?,
            "5" => change_single(io, api, &name, SingleField::Birthday)?,
            _ => print_failure(
                io.out(),
                "Invalid option. Please choose a valid number or 'exit' to stop.",
            )?,
        }
    }

    Ok(CmdResult::message(CmdMessage::success(CONTACT_UPDATED)))
}

/// Returns the new key when the contact was renamed.
fn change_name<S, R, W>(
    io: &mut Io<R, W>,
    api: &mut BotApi<S>,
    name: &str,
) -> Result<Option<String>>
where
    S: DataStore,
    R: LineSource,
    W: Write,
{
    loop {
        let new_name = io.ask("Enter the new name (or type 'back' to cancel)")?;
        if is_keyword(&new_name, "back") {
            return Ok(None);
        }
        match api.edit_contact(name, FieldEdit::Name(new_name.clone())) {
            Ok(result) => {
                print_result(io.out(), &result)?;
                return Ok((!new_name.is_empty()).then_some(new_name));
            }
            Err(e) => print_failure(io.out(), &format!("Error: {}. Please try again.", e))?,
        }
    }
}

fn change_list<S, R, W>(
    io: &mut Io<R, W>,
    api: &mut BotApi<S>,
    name: &str,
    field: ListField,
) -> Result<()>
where
    S: DataStore,
    R: LineSource,
    W: Write,
{
    let current = api
        .find_contact(name)
        .map(|record| field.values(record))
        .unwrap_or_default();
    let singular = field.singular();

    let editing = if current.is_empty() {
        print_warning(
            io.out(),
            &format!(
                "No current {} found. Switching to add mode.",
                field.plural()
            ),
        )?;
        false
    } else {
        let action = io.ask(&format!(
            "Would you like to edit an existing {} or add a new one? (edit/add or type 'back' to cancel) [add]",
            singular
        ))?;
        match action.to_lowercase().as_str() {
            "back" => return Ok(()),
            "edit" => true,
            "" | "add" => false,
            _ => {
                print_failure(io.out(), "Please type 'edit', 'add' or 'back'.")?;
                return Ok(());
            }
        }
    };

    let old = if editing {
        writeln!(
            io.out(),
            "{} {}",
            QUESTION.apply_to(format!("Current {}:", field.plural())),
            CURRENT_VALUE.apply_to(current.join(", "))
        )?;
        let old = io.ask(&format!(
            "Enter the current {} to be replaced (or type 'back' to cancel)",
            singular
        ))?;
        if is_keyword(&old, "back") {
            return Ok(());
        }
        if !current.contains(&old) {
            print_failure(
                io.out(),
                &format!("The {} '{}' does not exist.", singular, old),
            )?;
            return Ok(());
        }
        Some(old)
    } else {
        None
    };

    let question = if editing {
        format!(
            "Enter the new value for {} (leave empty to remove or type 'back' to cancel)",
            singular
        )
    } else {
        format!("Enter the new value for {} (or type 'back' to cancel)", singular)
    };

    loop {
        let new = io.ask(&question)?;
        if is_keyword(&new, "back") {
            return Ok(());
        }
        if new.is_empty() && old.is_none() {
            continue;
        }
        if !new.is_empty() && current.contains(&new) {
            print_failure(
                io.out(),
                &format!("The {} '{}' is already in the list.", singular, new),
            )?;
            continue;
        }
        match api.edit_contact(name, field.edit(old.clone(), Some(new))) {
            Ok(result) => {
                print_result(io.out(), &result)?;
                return Ok(());
            }
            Err(e) => print_failure(io.out(), &format!("Error: {}. Please try again.", e))?,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SingleField {
    Address,
    Birthday,
}

impl SingleField {
    fn label(self) -> &'static str {
        match self {
            SingleField::Address => "address",
            SingleField::Birthday => "birthday",
        }
    }

    fn value(self, record: &Record) -> Option<String> {
        match self {
            SingleField::Address => record.address().map(|a| a.to_string()),
            SingleField::Birthday => record.birthday().map(|b| b.to_string()),
        }
    }

    fn edit(self, new: String) -> FieldEdit {
        match self {
            SingleField::Address => FieldEdit::Address(Some(new)),
            SingleField::Birthday => FieldEdit::Birthday(Some(new)),
        }
    }
}

fn change_single<S, R, W>(
    io: &mut Io<R, W>,
    api: &mut BotApi<S>,
    name: &str,
    field: SingleField,
) -> Result<()>
where
    S: DataStore,
    R: LineSource,
    W: Write,
{
    let label = field.label();
    if let Some(value) = api.find_contact(name).and_then(|record| field.value(record)) {
        writeln!(
            io.out(),
            "{} {}",
            QUESTION.apply_to(format!("Current {}:", label)),
            CURRENT_VALUE.apply_to(value)
        )?;
    }

    loop {
        let new = io.ask(&format!(
            "Enter the new value for {} (this will overwrite the existing value, leave empty to clear, or type 'back' to cancel)",
            label
        ))?;
        if is_keyword(&new, "back") {
            return Ok(());
        }
        match api.edit_contact(name, field.edit(new)) {
            Ok(result) => {
                print_result(io.out(), &result)?;
                return Ok(());
            }
            Err(e) => print_failure(io.out(), &format!("Error: {}. Please try again.", e))?,
        }
    }
}
