use crate::error::{BotError, Result, ValidationError};
use crate::note::{normalize_tag, Note};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const SEARCH_USAGE: &str = "Provide at least one search word or tag! Usage by text: search-note <input> Usage by tags: search-note #<tag> [#<tag2> ... #<tagN>]";

/// All notes keyed by id, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Note>", into = "Vec<Note>")]
pub struct NoteBook {
    notes: HashMap<String, Note>,
    order: Vec<String>,
}

/// Outcome of [`NoteBook::search_notes`].
#[derive(Debug, PartialEq, Eq)]
pub enum NoteSearch<'a> {
    /// The notebook is empty.
    NoNotes,
    NoneFound,
    Found { title: String, notes: Vec<&'a Note> },
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.order.iter().filter_map(|id| self.notes.get(id))
    }

    pub fn find(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn add_note(&mut self, note: Note) {
        let id = note.id.clone();
        if self.notes.insert(id.clone(), note).is_none() {
            self.order.push(id);
        }
    }

    fn note_mut(&mut self, id: &str) -> Result<&mut Note> {
        self.notes
            .get_mut(id)
            .ok_or_else(|| BotError::NoteNotFound(id.to_string()))
    }

    pub fn change_note(&mut self, id: &str, text: impl Into<String>) -> Result<()> {
        self.note_mut(id)?.text = text.into();
        Ok(())
    }

    pub fn delete_note(&mut self, id: &str) -> Result<Note> {
        let note = self
            .notes
            .remove(id)
            .ok_or_else(|| BotError::NoteNotFound(id.to_string()))?;
        self.order.retain(|key| key != id);
        Ok(note)
    }

    /// Searches by tag when the query contains `#`, otherwise by text.
    ///
    /// Tag search takes every space-separated token containing `#` and returns notes
    /// carrying at least one of them, ordered by their tag lists. Text search is a
    /// case-sensitive substring match on the whole query.
    pub fn search_notes(&self, query: &str) -> Result<NoteSearch<'_>> {
        if query.is_empty() {
            return Err(ValidationError::EmptySearch(SEARCH_USAGE.to_string()).into());
        }
        if self.is_empty() {
            return Ok(NoteSearch::NoNotes);
        }

        let (title, notes) = if query.contains('#') {
            let keys: Vec<&str> = query.split(' ').filter(|k| k.contains('#')).collect();
            let mut found: Vec<&Note> = self
                .notes()
                .filter(|note| keys.iter().any(|key| note.has_tag(key)))
                .collect();
            found.sort_by(|a, b| a.tags.cmp(&b.tags));
            (format!("Found Notes by Tag '{}'", keys.join(" ")), found)
        } else {
            let found: Vec<&Note> = self.notes().filter(|n| n.text.contains(query)).collect();
            (format!("Found Notes by Keyword '{}'", query), found)
        };

        if notes.is_empty() {
            return Ok(NoteSearch::NoneFound);
        }
        Ok(NoteSearch::Found { title, notes })
    }

    /// Adds each tag (prefixed with `#` if needed) unless the note already has it.
    pub fn add_tag<T: AsRef<str>>(&mut self, id: &str, tags: &[T]) -> Result<()> {
        let note = self.note_mut(id)?;
        for tag in tags {
            note.add_tag(normalize_tag(tag.as_ref()));
        }
        Ok(())
    }

    /// Removes each tag (prefixed with `#` if needed); tags the note lacks are skipped.
    pub fn delete_tag<T: AsRef<str>>(&mut self, id: &str, tags: &[T]) -> Result<()> {
        let note = self.note_mut(id)?;
        for tag in tags {
            note.remove_tag(&normalize_tag(tag.as_ref()));
        }
        Ok(())
    }
}

impl From<Vec<Note>> for NoteBook {
    fn from(notes: Vec<Note>) -> Self {
        let mut book = Self::new();
        for note in notes {
            book.add_note(note);
        }
        book
    }
}

impl From<NoteBook> for Vec<Note> {
    fn from(mut book: NoteBook) -> Self {
        book.order
            .iter()
            .filter_map(|id| book.notes.remove(id))
            .collect()
    }
}
