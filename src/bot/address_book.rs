//! # Address Book
//!
//! The keyed collection of all contacts. Keys are the exact contact names, so
//! "Ann" and "ann" are different contacts, and a rename moves the record to a new key.
//!
//! Iteration follows insertion order; overwriting an existing name keeps its
//! position, a rename moves the contact to the end.
//!
//! ## Upcoming Birthdays
//!
//! For the reminder window only the month and day of a birthday matter:
//!
//! 1. Take this year's occurrence. If it is already behind `today`, use next year's.
//!    A 29 February birthday falls on 28 February in non-leap years.
//! 2. Keep it when it lies in `[today, today + days]`.
//! 3. The congratulation date is that occurrence moved to Monday when it lands on a
//!    weekend. The shift happens after the window check, so a Saturday birthday on the
//!    last day of the window is congratulated two days past the window.

use crate::error::{BotError, Result, ValidationError};
use crate::fields::Name;
use crate::record::{FieldEdit, Record};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

/// One row of the upcoming birthdays report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Inserts the record under its name, replacing any contact with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// Re-keys a contact: removes it under `old`, renames it, and inserts it under `new`.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<String> {
        if new.is_empty() {
            return Ok("No name change applied.".to_string());
        }
        let name = Name::new(new)?;
        if new != old && self.contains(new) {
            return Err(BotError::DuplicateContact(new.to_string()));
        }
        let mut record = self
            .delete(old)
            .ok_or_else(|| BotError::ContactNotFound(old.to_string()))?;
        record.set_name(name);
        self.add_record(record);
        Ok(format!("Name updated from '{}' to '{}'.", old, new))
    }

    /// Applies a field edit to the contact called `name`. Name edits re-key the contact.
    pub fn edit_field(&mut self, name: &str, edit: FieldEdit) -> Result<String> {
        self.edit_field_on(name, edit, Local::now().date_naive())
    }

    pub fn edit_field_on(&mut self, name: &str, edit: FieldEdit, today: NaiveDate) -> Result<String> {
        if let FieldEdit::Name(new) = &edit {
            return self.rename(name, new);
        }
        self.find_mut(name)
            .ok_or_else(|| BotError::ContactNotFound(name.to_string()))?
            .edit_field_on(edit, today)
    }

    /// Case-insensitive prefix search over name, phones, emails, address and birthday.
    ///
    /// A contact matches when any field starts with any of the terms.
    pub fn search_in_fields<T: AsRef<str>>(&self, terms: &[T]) -> Result<Vec<&Record>> {
        if terms.is_empty() {
            return Err(
                ValidationError::EmptySearch("No search input provided.".to_string()).into(),
            );
        }
        let terms: Vec<String> = terms.iter().map(|t| t.as_ref().to_lowercase()).collect();
        let matches_any = |value: &str| {
            let value = value.to_lowercase();
            terms.iter().any(|t| value.starts_with(t.as_str()))
        };

        Ok(self
            .records()
            .filter(|record| {
                matches_any(record.name().as_str())
                    || record.phones().iter().any(|p| matches_any(p.as_str()))
                    || record.emails().iter().any(|e| matches_any(e.as_str()))
                    || record.address().is_some_and(|a| matches_any(a.as_str()))
                    || record
                        .birthday()
                        .is_some_and(|b| matches_any(&b.to_string()))
            })
            .collect())
    }

    pub fn get_upcoming_birthdays(&self, days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        if days < 0 {
            return Vec::new();
        }
        // A window reaching past the calendar's end covers every birthday.
        let window_end = Duration::try_days(days)
            .and_then(|span| today.checked_add_signed(span))
            .unwrap_or(NaiveDate::MAX);

        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let occurrence = next_occurrence(birthday, today)?;
                if occurrence < today || occurrence > window_end {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: roll_to_weekday(occurrence),
                    phones: record.phones().iter().map(|p| p.to_string()).collect(),
                    emails: record.emails().iter().map(|e| e.to_string()).collect(),
                })
            })
            .collect()
    }
}

fn anniversary(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// This year's occurrence of the birthday, or next year's if it already passed.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birthday, today.year())?;
    if this_year < today {
        anniversary(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

fn roll_to_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(mut book: AddressBook) -> Self {
        book.order
            .iter()
            .filter_map(|name| book.records.remove(name))
            .collect()
    }
}
