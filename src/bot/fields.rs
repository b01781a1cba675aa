//! # Field Values
//!
//! Every contact field is a newtype that validates its input on construction and is
//! immutable afterwards. Changing a field means building a new value, so a [`Record`]
//! can never hold a malformed phone, email, address or birthday.
//!
//! | Type       | Rule                                                      |
//! |------------|-----------------------------------------------------------|
//! | [`Name`]     | non-empty                                               |
//! | [`Phone`]    | exactly 10 ASCII digits                                 |
//! | [`Email`]    | `local@domain.tld` shaped                               |
//! | [`Address`]  | word characters, whitespace and commas only             |
//! | [`Birthday`] | `DD.MM.YYYY`, not after today                           |
//!
//! All values serialize as their canonical display string and re-validate when
//! deserialized.
//!
//! [`Record`]: crate::record::Record

use crate::error::ValidationError;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").expect("valid email regex")
});
static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s,]*$").expect("valid address regex"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::InvalidName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !EMAIL_RE.is_match(&value) {
            return Err(ValidationError::InvalidEmail(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !ADDRESS_RE.is_match(&value) {
            return Err(ValidationError::InvalidAddress(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A date of birth. Only the month and day matter for reminders; the year is kept
/// for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses `DD.MM.YYYY` against the local calendar date.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Self::parse_on(text, Local::now().date_naive())
    }

    /// Parses `DD.MM.YYYY`, rejecting dates strictly after `today`.
    pub fn parse_on(text: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let date = parse_date(text)?;
        if date > today {
            return Err(ValidationError::BirthdayInFuture(text.to_string()));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(text.trim(), BIRTHDAY_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthdayFormat(text.to_string()))
}

// Stored birthdays only need a readable date; the "not in the future" rule applies
// when the user enters one.
impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

macro_rules! string_field {
    ($($ty:ident),+) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = ValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )+
    };
}

string_field!(Name, Phone, Email, Address);
