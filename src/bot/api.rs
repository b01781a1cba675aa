//! # API Facade
//!
//! `BotApi` is the session object: it owns the address book, the notebook, the
//! configuration and the store for one run of the assistant. Every UI goes through it.
//!
//! ## Role and Responsibilities
//!
//! - **Loads** both books from the store once, at construction
//! - **Dispatches** each verb to its function in `commands/*.rs`
//! - **Captures "now"** once per call and hands it down as a date
//! - **Saves** both books wholesale on [`BotApi::save`]
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and the containers
//! - **I/O**: no stdout or stdin; interactive flows live in the CLI
//!
//! ## Generic Over DataStore
//!
//! - Production: `BotApi<FileStore>`
//! - Testing: `BotApi<InMemoryStore>`
//!
//! A book that fails to load does not stop the session. It starts empty and the
//! failure is queued as a warning, available from [`BotApi::take_startup_messages`].

use crate::address_book::AddressBook;
use crate::commands;
use crate::config::BotConfig;
use crate::error::{BotError, Result};
use crate::note_book::NoteBook;
use crate::record::{FieldEdit, Record};
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

pub struct BotApi<S: DataStore> {
    store: S,
    config: BotConfig,
    address_book: AddressBook,
    note_book: NoteBook,
    startup_messages: Vec<CmdMessage>,
    contacts_locked: bool,
    notes_locked: bool,
}

impl<S: DataStore> BotApi<S> {
    pub fn new(store: S, config: BotConfig) -> Self {
        let mut startup_messages = Vec::new();

        let (address_book, contacts_locked) = match store.load_address_book() {
            Ok(book) => (book, false),
            Err(e) => {
                let locked = load_failure(&mut startup_messages, "contacts", "address book", &e);
                (AddressBook::new(), locked)
            }
        };
        let (note_book, notes_locked) = match store.load_note_book() {
            Ok(book) => (book, false),
            Err(e) => {
                let locked = load_failure(&mut startup_messages, "notes", "notebook", &e);
                (NoteBook::new(), locked)
            }
        };

        Self {
            store,
            config,
            address_book,
            note_book,
            startup_messages,
            contacts_locked,
            notes_locked,
        }
    }

    /// Load warnings gathered at construction; empty after the first call.
    pub fn take_startup_messages(&mut self) -> Vec<CmdMessage> {
        std::mem::take(&mut self.startup_messages)
    }

    /// Persists both books. Both saves are attempted; the first failure is returned.
    ///
    /// A book whose stored copy could not be read is never written, so the session's
    /// empty stand-in cannot replace it.
    pub fn save(&mut self) -> Result<()> {
        let contacts = if self.contacts_locked {
            Err(BotError::Store(
                "the stored address book could not be read, leaving it untouched".to_string(),
            ))
        } else {
            self.store.save_address_book(&self.address_book)
        };
        let notes = if self.notes_locked {
            Err(BotError::Store(
                "the stored notebook could not be read, leaving it untouched".to_string(),
            ))
        } else {
            self.store.save_note_book(&self.note_book)
        };
        contacts.and(notes)
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn note_book(&self) -> &NoteBook {
        &self.note_book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // Contacts

    pub fn prepare_new_contact(&self, args: &[String]) -> Result<Record> {
        commands::contacts::prepare_new(&self.address_book, args)
    }

    pub fn add_contact(&mut self, record: Record) -> Result<CmdResult> {
        commands::contacts::add(&mut self.address_book, record)
    }

    pub fn prepare_change_contact(&self, args: &[String]) -> Result<String> {
        commands::contacts::prepare_change(&self.address_book, args)
    }

    pub fn edit_contact(&mut self, name: &str, edit: FieldEdit) -> Result<CmdResult> {
        commands::contacts::edit(&mut self.address_book, name, edit, today())
    }

    pub fn show_contact(&self, name: &str) -> Result<CmdResult> {
        commands::contacts::show(&self.address_book, name)
    }

    pub fn find_contact(&self, name: &str) -> Option<&Record> {
        self.address_book.find(name)
    }

    pub fn delete_contact(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::contacts::delete(&mut self.address_book, args)
    }

    pub fn all_contacts(&self) -> Result<CmdResult> {
        Ok(commands::contacts::all(&self.address_book))
    }

    pub fn search_contacts(&self, args: &[String]) -> Result<CmdResult> {
        commands::contacts::search(&self.address_book, args)
    }

    pub fn show_phones(&self, args: &[String]) -> Result<CmdResult> {
        commands::contacts::show_phones(&self.address_book, args)
    }

    pub fn show_birthday(&self, args: &[String]) -> Result<CmdResult> {
        commands::contacts::show_birthday(&self.address_book, args)
    }

    pub fn birthdays(&self, args: &[String]) -> Result<CmdResult> {
        commands::contacts::birthdays(
            &self.address_book,
            args,
            self.config.birthday_window_days,
            today(),
        )
    }

    // Notes

    pub fn add_note(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::notes::add(&mut self.note_book, args)
    }

    pub fn change_note(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::notes::change(&mut self.note_book, args)
    }

    pub fn delete_note(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::notes::delete(&mut self.note_book, args)
    }

    pub fn all_notes(&self) -> Result<CmdResult> {
        Ok(commands::notes::all(&self.note_book))
    }

    pub fn search_notes(&self, args: &[String]) -> Result<CmdResult> {
        commands::notes::search(&self.note_book, args)
    }

    pub fn add_note_tag(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::notes::add_tag(&mut self.note_book, args)
    }

    pub fn delete_note_tag(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::notes::delete_tag(&mut self.note_book, args)
    }

    // Misc

    pub fn help(&self) -> Result<CmdResult> {
        Ok(commands::help::run())
    }

    pub fn hello(&self) -> Result<CmdResult> {
        Ok(commands::help::hello())
    }
}

/// Queues the load warning and reports whether the stored blob must be left alone.
///
/// A parse failure has already been moved aside by the store; anything else means the
/// original is still in place and unread.
fn load_failure(
    messages: &mut Vec<CmdMessage>,
    what: &str,
    book: &str,
    error: &BotError,
) -> bool {
    messages.push(CmdMessage::warning(format!(
        "Could not load {} ({}). Starting with an empty {}.",
        what, error, book
    )));
    let locked = !matches!(error, BotError::Serialization(_));
    if locked {
        messages.push(CmdMessage::warning(format!(
            "Changes to {} will not be saved this session.",
            what
        )));
    }
    locked
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
