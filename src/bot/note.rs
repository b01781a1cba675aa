use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub created_at: DateTime<Local>,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_tags(text, Vec::new())
    }

    pub fn with_tags(text: impl Into<String>, tags: Vec<String>) -> Self {
        let mut note = Self {
            id: Uuid::new_v4().to_string(),
            created_at: Local::now(),
            text: text.into(),
            tags: Vec::new(),
        };
        for tag in tags {
            note.add_tag(tag);
        }
        note
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Appends `tag` unless the note already carries it. Returns whether it was added.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Returns whether the tag was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}

/// Tags are stored with a leading `#`. Input that already contains one is kept as typed.
pub fn normalize_tag(tag: &str) -> String {
    if tag.contains('#') {
        tag.to_string()
    } else {
        format!("#{}", tag)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.id,
            self.created_at.format(CREATED_AT_FORMAT),
            self.text
        )?;
        if !self.tags.is_empty() {
            write!(f, " ({})", self.tags.join(", "))?;
        }
        Ok(())
    }
}
