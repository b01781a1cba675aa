use super::{join_args, require_args, usage, CmdMessage, CmdResult};
use crate::address_book::AddressBook;
use crate::error::{BotError, Result};
use crate::record::{FieldEdit, Record};
use crate::table;
use chrono::NaiveDate;

pub const ADD_USAGE: &str = "Please provide the contact name. Usage: add-contact <name>";
pub const CHANGE_USAGE: &str = "Please provide the contact name. Usage: change-contact <name>";
pub const DELETE_USAGE: &str = "Please provide the name of the contact to delete.";
pub const SHOW_PHONES_USAGE: &str = "Insufficient arguments. Usage: show-phones <name>";
pub const SHOW_BIRTHDAY_USAGE: &str = "Insufficient arguments. Usage: show-birthday <name>";
pub const BIRTHDAYS_TOO_MANY: &str = "Too many arguments. Usage: birthdays [<days>]";
pub const BIRTHDAYS_NOT_INTEGER: &str =
    "The number of days must be an integer. Usage: birthdays [<days>]";

pub const CONTACT_ADDED: &str = "Contact added successfully.";
pub const CONTACT_UPDATED: &str = "Contact updated successfully.";
pub const NO_CONTACTS: &str = "No contacts.";

/// Validates the name for a new contact and returns an empty record for it.
///
/// Fails if the name is taken, before any field is asked for.
pub fn prepare_new(book: &AddressBook, args: &[String]) -> Result<Record> {
    require_args(args, 1, ADD_USAGE)?;
    let name = join_args(args);
    if book.contains(&name) {
        return Err(BotError::DuplicateContact(name));
    }
    Record::new(name)
}

pub fn add(book: &mut AddressBook, record: Record) -> Result<CmdResult> {
    let name = record.name().to_string();
    if book.contains(&name) {
        return Err(BotError::DuplicateContact(name));
    }
    book.add_record(record);
    Ok(CmdResult::message(CmdMessage::success(CONTACT_ADDED)))
}

/// Resolves the contact named by `args` for the change-contact flow.
pub fn prepare_change(book: &AddressBook, args: &[String]) -> Result<String> {
    require_args(args, 1, CHANGE_USAGE)?;
    let name = join_args(args);
    if !book.contains(&name) {
        return Err(BotError::ContactNotFound(name));
    }
    Ok(name)
}

pub fn edit(
    book: &mut AddressBook,
    name: &str,
    edit: FieldEdit,
    today: NaiveDate,
) -> Result<CmdResult> {
    let description = book.edit_field_on(name, edit, today)?;
    Ok(CmdResult::message(CmdMessage::success(description)))
}

/// Single-contact table, shown before and during editing.
pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| BotError::ContactNotFound(name.to_string()))?;
    let rendered = table::contacts_table("Contact Details", [record]).render();
    Ok(CmdResult::default().with_output(rendered))
}

pub fn delete(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    require_args(args, 1, DELETE_USAGE)?;
    let name = join_args(args);
    let message = match book.delete(&name) {
        Some(_) => CmdMessage::success(format!("Contact '{}' has been deleted.", name)),
        None => CmdMessage::warning(format!("Contact '{}' not found.", name)),
    };
    Ok(CmdResult::message(message))
}

pub fn all(book: &AddressBook) -> CmdResult {
    if book.is_empty() {
        return CmdResult::message(CmdMessage::info(NO_CONTACTS));
    }
    CmdResult::default().with_output(table::contacts_table("All Contacts", book.records()).render())
}

pub fn search(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let matches = book.search_in_fields(args)?;
    if matches.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No matches found.")));
    }
    Ok(CmdResult::default().with_output(table::search_results_table(matches).render()))
}

pub fn show_phones(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    require_args(args, 1, SHOW_PHONES_USAGE)?;
    let name = join_args(args);
    Ok(match book.find(&name) {
        Some(record) => CmdResult::message(CmdMessage::info(record.show_formatted_phones())),
        None => not_found(&name),
    })
}

pub fn show_birthday(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    require_args(args, 1, SHOW_BIRTHDAY_USAGE)?;
    let name = join_args(args);
    Ok(match book.find(&name) {
        Some(record) => CmdResult::message(CmdMessage::info(record.show_birthday())),
        None => not_found(&name),
    })
}

/// Lists birthdays within `[<days>]` of `today`, defaulting to `default_days`.
pub fn birthdays(
    book: &AddressBook,
    args: &[String],
    default_days: i64,
    today: NaiveDate,
) -> Result<CmdResult> {
    let days = match args {
        [] => default_days,
        [days] => days
            .parse::<i64>()
            .map_err(|_| usage(BIRTHDAYS_NOT_INTEGER))?,
        _ => return Err(usage(BIRTHDAYS_TOO_MANY)),
    };

    if book.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info(NO_CONTACTS)));
    }

    let upcoming = book.get_upcoming_birthdays(days, today);
    if upcoming.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info(format!(
            "There are no upcoming birthdays within {} days.",
            days
        ))));
    }
    Ok(CmdResult::default().with_output(table::birthdays_table(days, &upcoming).render()))
}

fn not_found(name: &str) -> CmdResult {
    CmdResult::message(CmdMessage::warning(format!(
        "No contact found with name {}.",
        name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ValidationError;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn book_with(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            let mut record = Record::new(*name).unwrap();
            record.add_phone("0501234567").unwrap();
            book.add_record(record);
        }
        book
    }

    fn first_message(result: &CmdResult) -> &str {
        &result.messages[0].content
    }

    #[test]
    fn prepare_new_joins_multi_word_names() {
        let book = AddressBook::new();
        let record = prepare_new(&book, &args(&["John", "Smith"])).unwrap();
        assert_eq!(record.name().as_str(), "John Smith");
    }

    #[test]
    fn prepare_new_rejects_existing_contact() {
        let book = book_with(&["Ann"]);
        let err = prepare_new(&book, &args(&["Ann"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Contact 'Ann' already exists. If you want to update it, use the command: change-contact <contact_name>."
        );
    }

    #[test]
    fn prepare_new_requires_a_name() {
        let err = prepare_new(&AddressBook::new(), &[]).unwrap_err();
        assert_eq!(err.to_string(), ADD_USAGE);
    }

    #[test]
    fn add_inserts_record() {
        let mut book = AddressBook::new();
        let record = prepare_new(&book, &args(&["Ann"])).unwrap();
        let result = add(&mut book, record).unwrap();
        assert_eq!(first_message(&result), "Contact added successfully.");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(book.contains("Ann"));
    }

    #[test]
    fn prepare_change_reports_unknown_contact() {
        let book = book_with(&["Ann"]);
        let err = prepare_change(&book, &args(&["Bob"])).unwrap_err();
        assert_eq!(err.to_string(), "Contact 'Bob' not found. Please check the name.");
        assert_eq!(prepare_change(&book, &args(&["Ann"])).unwrap(), "Ann");
    }

    #[test]
    fn edit_describes_the_change() {
        let mut book = book_with(&["Ann"]);
        let result = edit(
            &mut book,
            "Ann",
            FieldEdit::Address(Some("Main St 1".into())),
            day(2024, 6, 10),
        )
        .unwrap();
        assert_eq!(first_message(&result), "Address updated to 'Main St 1'.");
    }

    #[test]
    fn delete_reports_each_outcome() {
        let mut book = book_with(&["Ann"]);
        let result = delete(&mut book, &args(&["Ann"])).unwrap();
        assert_eq!(first_message(&result), "Contact 'Ann' has been deleted.");
        let result = delete(&mut book, &args(&["Ann"])).unwrap();
        assert_eq!(first_message(&result), "Contact 'Ann' not found.");
        let err = delete(&mut book, &[]).unwrap_err();
        assert_eq!(err.to_string(), DELETE_USAGE);
    }

    #[test]
    fn all_on_empty_book() {
        let result = all(&AddressBook::new());
        assert_eq!(first_message(&result), "No contacts.");
        assert!(result.output.is_none());
    }

    #[test]
    fn all_renders_table() {
        let result = all(&book_with(&["Ann", "Bob"]));
        let output = result.output.unwrap();
        assert!(output.contains("All Contacts"));
        assert!(output.find("Ann").unwrap() < output.find("Bob").unwrap());
    }

    #[test]
    fn search_messages() {
        let book = book_with(&["Ann"]);
        let err = search(&book, &[]).unwrap_err();
        assert!(matches!(
            err,
            BotError::Validation(ValidationError::EmptySearch(_))
        ));
        assert_eq!(err.to_string(), "No search input provided.");

        let result = search(&book, &args(&["zed"])).unwrap();
        assert_eq!(first_message(&result), "No matches found.");

        let result = search(&book, &args(&["an"])).unwrap();
        assert!(result.output.unwrap().contains("Search Results"));
    }

    #[test]
    fn show_phones_and_birthday() {
        let book = book_with(&["Ann Lee"]);
        let result = show_phones(&book, &args(&["Ann", "Lee"])).unwrap();
        assert_eq!(first_message(&result), "Ann Lee: 0501234567");

        let result = show_birthday(&book, &args(&["Ann", "Lee"])).unwrap();
        assert_eq!(first_message(&result), "No birthday set");

        let result = show_phones(&book, &args(&["Bob"])).unwrap();
        assert_eq!(first_message(&result), "No contact found with name Bob.");

        let err = show_birthday(&book, &[]).unwrap_err();
        assert_eq!(err.to_string(), SHOW_BIRTHDAY_USAGE);
    }

    #[test]
    fn birthdays_argument_handling() {
        let book = book_with(&["Ann"]);
        let today = day(2024, 6, 10);

        let err = birthdays(&book, &args(&["1", "2"]), 7, today).unwrap_err();
        assert_eq!(err.to_string(), BIRTHDAYS_TOO_MANY);

        let err = birthdays(&book, &args(&["soon"]), 7, today).unwrap_err();
        assert_eq!(err.to_string(), BIRTHDAYS_NOT_INTEGER);

        let result = birthdays(&AddressBook::new(), &[], 7, today).unwrap();
        assert_eq!(first_message(&result), "No contacts.");

        let result = birthdays(&book, &[], 7, today).unwrap();
        assert_eq!(
            first_message(&result),
            "There are no upcoming birthdays within 7 days."
        );
    }

    #[test]
    fn birthdays_renders_rows_with_default_window() {
        let mut book = AddressBook::new();
        let mut ann = Record::new("Ann").unwrap();
        ann.add_birthday_on("15.06.1990", day(2024, 6, 10)).unwrap();
        book.add_record(ann);

        let result = birthdays(&book, &[], 7, day(2024, 6, 10)).unwrap();
        let output = result.output.unwrap();
        assert!(output.contains("Upcoming Birthdays within 7 Days"));
        assert!(output.contains("17.06.2024"));

        let result = birthdays(&book, &args(&["3"]), 7, day(2024, 6, 10)).unwrap();
        assert!(result.output.is_none());

        let result =
            birthdays(&book, &args(&["99999999999999"]), 7, day(2024, 6, 10)).unwrap();
        assert!(result.output.unwrap().contains("17.06.2024"));
    }
}
