use super::DataStore;
use crate::address_book::AddressBook;
use crate::config::BotConfig;
use crate::error::{BotError, Result};
use crate::note_book::NoteBook;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    addressbook_file: String,
    notebook_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, &BotConfig::default())
    }

    pub fn with_config(root: PathBuf, config: &BotConfig) -> Self {
        Self {
            root,
            addressbook_file: config.addressbook_file.clone(),
            notebook_file: config.notebook_file.clone(),
        }
    }

    pub fn address_book_path(&self) -> PathBuf {
        self.root.join(&self.addressbook_file)
    }

    pub fn note_book_path(&self) -> PathBuf {
        self.root.join(&self.notebook_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BotError::Io)?;
        }
        Ok(())
    }

    fn load_blob<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            debug!("{} not found, starting empty", path.display());
            return Ok(T::default());
        }

        // Bytes, not a String: bad encoding is corruption like any other parse failure.
        let content = fs::read(path).map_err(BotError::Io)?;
        match serde_json::from_slice(&content) {
            Ok(value) => {
                debug!("Loaded {}", path.display());
                Ok(value)
            }
            Err(e) => {
                // Keep the unreadable file around; the next save would overwrite it.
                let backup = backup_path(path);
                warn!(
                    "Could not parse {} ({}), moving it to {}",
                    path.display(),
                    e,
                    backup.display()
                );
                if let Err(rename_err) = fs::rename(path, &backup) {
                    warn!("Failed to move {}: {}", path.display(), rename_err);
                }
                Err(BotError::Serialization(e))
            }
        }
    }

    fn save_blob<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(BotError::Serialization)?;

        // Write next to the target and rename so a failed write never truncates the book.
        let tmp = with_suffix(path, ".tmp");
        fs::write(&tmp, content).map_err(BotError::Io)?;
        fs::rename(&tmp, path).map_err(BotError::Io)?;
        debug!("Saved {}", path.display());
        Ok(())
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// `<file>.bak`, or `<file>.bak.<n>` with the first free `n` when earlier backups exist.
fn backup_path(path: &Path) -> PathBuf {
    let first = with_suffix(path, ".bak");
    if !first.exists() {
        return first;
    }
    (1u32..)
        .map(|n| with_suffix(path, &format!(".bak.{}", n)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

impl DataStore for FileStore {
    fn load_address_book(&self) -> Result<AddressBook> {
        self.load_blob(&self.address_book_path())
    }

    fn save_address_book(&mut self, book: &AddressBook) -> Result<()> {
        self.save_blob(&self.address_book_path(), book)
    }

    fn load_note_book(&self) -> Result<NoteBook> {
        self.load_blob(&self.note_book_path())
    }

    fn save_note_book(&mut self, book: &NoteBook) -> Result<()> {
        self.save_blob(&self.note_book_path(), book)
    }
}
