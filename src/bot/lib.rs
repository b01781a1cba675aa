//! # Assistant Bot Architecture
//!
//! The assistant is a **library for a personal address book and notebook** with a
//! line-based REPL as its client. The REPL is thin; everything it does goes through
//! [`api::BotApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - REPL loop, input parsing, interactive prompts, colors    │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session object owning both books and the store           │
//! │  - Captures "now", returns structured CmdResult values      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per REPL verb, argument handling, messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (fields, record, note, address_book, note_book)       │
//! │  - Validation, search, editing and birthday arithmetic      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! Core types never print, never log and never read the clock implicitly where it
//! matters for a result: date-dependent operations have an `_on` variant taking
//! "today" so they can be tested against fixed dates.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade
//! - [`commands`]: Per-verb logic and user-facing messages
//! - [`fields`]: Validated value types (`Name`, `Phone`, `Email`, `Address`, `Birthday`)
//! - [`record`]: A contact and its field edits
//! - [`note`]: A tagged note
//! - [`address_book`]: Contacts by name, search, upcoming birthdays
//! - [`note_book`]: Notes by id, text and tag search
//! - [`table`]: Box-drawn table rendering
//! - [`store`]: Persistence
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: REPL, prompts and printing for the binary (not part of the lib API)

pub mod address_book;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod note;
pub mod note_book;
pub mod record;
pub mod store;
pub mod table;
