use super::DataStore;
use crate::address_book::AddressBook;
use crate::error::{BotError, Result};
use crate::note_book::NoteBook;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    address_book: AddressBook,
    note_book: NoteBook,
    saves: usize,
    fail_saves: bool,
    unreadable_address_book: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(address_book: AddressBook, note_book: NoteBook) -> Self {
        Self {
            address_book,
            note_book,
            ..Self::default()
        }
    }

    /// A store whose saves always fail, for exercising error reporting.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// A store holding `address_book` that cannot be read back, as with a permission error.
    pub fn with_unreadable_address_book(address_book: AddressBook) -> Self {
        Self {
            address_book,
            unreadable_address_book: true,
            ..Self::default()
        }
    }

    /// Number of successful save calls across both books.
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn note_book(&self) -> &NoteBook {
        &self.note_book
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_saves {
            return Err(BotError::Store("store is read-only".to_string()));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn load_address_book(&self) -> Result<AddressBook> {
        if self.unreadable_address_book {
            return Err(BotError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            )));
        }
        Ok(self.address_book.clone())
    }

    fn save_address_book(&mut self, book: &AddressBook) -> Result<()> {
        self.check_writable()?;
        self.address_book = book.clone();
        self.saves += 1;
        Ok(())
    }

    fn load_note_book(&self) -> Result<NoteBook> {
        Ok(self.note_book.clone())
    }

    fn save_note_book(&mut self, book: &NoteBook) -> Result<()> {
        self.check_writable()?;
        self.note_book = book.clone();
        self.saves += 1;
        Ok(())
    }
}
