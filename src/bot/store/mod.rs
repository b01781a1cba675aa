//! # Storage Layer
//!
//! The assistant keeps both collections in memory for the whole session and persists
//! each one as a single unit. The [`DataStore`] trait is that boundary: load a whole
//! book at startup, save a whole book at shutdown. There is no per-record persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - `addressbook.json` holds every contact (JSON array, insertion order)
//!   - `notebook.json` holds every note
//!   - A missing file loads as an empty book
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── addressbook.json    # contacts
//! ├── notebook.json       # notes
//! └── config.json         # BotConfig
//! ```
//!
//! The two files are independent: a corrupt notebook does not prevent the address
//! book from loading.

use crate::address_book::AddressBook;
use crate::error::Result;
use crate::note_book::NoteBook;

pub mod fs;
pub mod memory;

/// Whole-collection persistence for the two books.
pub trait DataStore {
    /// Load the address book; an absent blob is an empty book
    fn load_address_book(&self) -> Result<AddressBook>;

    /// Replace the stored address book
    fn save_address_book(&mut self, book: &AddressBook) -> Result<()>;

    /// Load the notebook; an absent blob is an empty book
    fn load_note_book(&self) -> Result<NoteBook>;

    /// Replace the stored notebook
    fn save_note_book(&mut self, book: &NoteBook) -> Result<()>;
}
