use crate::error::{BotError, Result};
use crate::fields::{Address, Birthday, Email, Name, Phone};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const EMPTY_PLACEHOLDER: &str = "----------";

/// One contact. The name doubles as the key in the [`AddressBook`].
///
/// [`AddressBook`]: crate::address_book::AddressBook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    emails: Vec<Email>,
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

/// A change to a single field, as chosen in the change-contact menu.
///
/// Empty strings are treated the same as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Phones {
        old: Option<String>,
        new: Option<String>,
    },
    Emails {
        old: Option<String>,
        new: Option<String>,
    },
    Address(Option<String>),
    Birthday(Option<String>),
}

impl FieldEdit {
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldEdit::Name(_) => "name",
            FieldEdit::Phones { .. } => "phones",
            FieldEdit::Emails { .. } => "emails",
            FieldEdit::Address(_) => "address",
            FieldEdit::Birthday(_) => "birthday",
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            emails: Vec::new(),
            address: None,
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub(crate) fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    pub fn has_phone(&self, number: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == number)
    }

    pub fn has_email(&self, address: &str) -> bool {
        self.emails.iter().any(|e| e.as_str() == address)
    }

    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    pub fn remove_phone(&mut self, number: &str) {
        self.phones.retain(|p| p.as_str() != number);
    }

    /// Adds `new` before removing `old`, so a bad `new` leaves the record untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        self.add_phone(new)?;
        self.remove_phone(old);
        Ok(())
    }

    pub fn add_email(&mut self, address: &str) -> Result<()> {
        self.emails.push(Email::new(address)?);
        Ok(())
    }

    pub fn remove_email(&mut self, address: &str) {
        self.emails.retain(|e| e.as_str() != address);
    }

    pub fn edit_email(&mut self, old: &str, new: &str) -> Result<()> {
        self.add_email(new)?;
        self.remove_email(old);
        Ok(())
    }

    pub fn add_address(&mut self, text: &str) -> Result<()> {
        self.address = Some(Address::new(text)?);
        Ok(())
    }

    pub fn edit_address(&mut self, text: &str) -> Result<()> {
        self.add_address(text)
    }

    pub fn add_birthday(&mut self, text: &str) -> Result<()> {
        self.add_birthday_on(text, Local::now().date_naive())
    }

    pub fn add_birthday_on(&mut self, text: &str, today: NaiveDate) -> Result<()> {
        if self.birthday.is_some() {
            return Err(BotError::State("Birthday is already set".to_string()));
        }
        self.birthday = Some(Birthday::parse_on(text, today)?);
        Ok(())
    }

    /// Applies a single field edit and describes what changed.
    ///
    /// Renaming needs the owning book to re-key the record, so [`FieldEdit::Name`]
    /// fails here; go through [`AddressBook::edit_field`] instead.
    ///
    /// [`AddressBook::edit_field`]: crate::address_book::AddressBook::edit_field
    pub fn edit_field(&mut self, edit: FieldEdit) -> Result<String> {
        self.edit_field_on(edit, Local::now().date_naive())
    }

    pub fn edit_field_on(&mut self, edit: FieldEdit, today: NaiveDate) -> Result<String> {
        match edit {
            FieldEdit::Name(_) => Err(BotError::Config(
                "AddressBook is required to change the contact's name.".to_string(),
            )),
            FieldEdit::Phones { old, new } => {
                match (non_empty(old), non_empty(new)) {
                    (Some(old), Some(new)) => {
                        self.edit_phone(&old, &new)?;
                        Ok(format!("Phone number '{}' updated to '{}'.", old, new))
                    }
                    (None, Some(new)) => {
                        self.add_phone(&new)?;
                        Ok(format!("Phone number '{}' added.", new))
                    }
                    (Some(old), None) => {
                        self.remove_phone(&old);
                        Ok(format!("Phone number '{}' removed.", old))
                    }
                    (None, None) => Ok("No changes applied.".to_string()),
                }
            }
            FieldEdit::Emails { old, new } => match (non_empty(old), non_empty(new)) {
                (Some(old), Some(new)) => {
                    self.edit_email(&old, &new)?;
                    Ok(format!("Email '{}' updated to '{}'.", old, new))
                }
                (None, Some(new)) => {
                    self.add_email(&new)?;
                    Ok(format!("Email '{}' added.", new))
                }
                (Some(old), None) => {
                    self.remove_email(&old);
                    Ok(format!("Email '{}' removed.", old))
                }
                (None, None) => Ok("No changes applied.".to_string()),
            },
            FieldEdit::Address(new) => match non_empty(new) {
                Some(new) => {
                    self.edit_address(&new)?;
                    Ok(format!("Address updated to '{}'.", new))
                }
                None => {
                    self.address = None;
                    Ok("Address removed.".to_string())
                }
            },
            FieldEdit::Birthday(new) => match non_empty(new) {
                Some(new) => {
                    self.birthday = Some(Birthday::parse_on(&new, today)?);
                    Ok(format!("Birthday updated to '{}'.", new))
                }
                None => {
                    self.birthday = None;
                    Ok("Birthday removed.".to_string())
                }
            },
        }
    }

    pub fn show_formatted_phones(&self) -> String {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {}", self.name, phones)
    }

    pub fn show_birthday(&self) -> String {
        match &self.birthday {
            Some(bd) => format!("{}'s birthday is on {}", self.name, bd),
            None => "No birthday set".to_string(),
        }
    }
}

fn joined_or_placeholder<T: fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string());
        let address = self
            .address
            .as_ref()
            .map(|a| a.to_string())
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string());
        write!(
            f,
            "Contact name: {}, birthday: {}, phones: {}, emails: {}, address: {}",
            self.name,
            birthday,
            joined_or_placeholder(&self.phones),
            joined_or_placeholder(&self.emails),
            address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn new_requires_a_name() {
        assert!(matches!(
            Record::new(""),
            Err(BotError::Validation(ValidationError::InvalidName))
        ));
    }

    #[test]
    fn phone_add_remove_edit() {
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0670000000").unwrap();
        record.remove_phone("1111111111");
        assert_eq!(record.phones().len(), 2);

        record.edit_phone("0501234567", "0939999999").unwrap();
        assert!(!record.has_phone("0501234567"));
        assert!(record.has_phone("0939999999"));

        assert!(record.edit_phone("0670000000", "bad").is_err());
        assert!(record.has_phone("0670000000"));
    }

    #[test]
    fn email_add_remove_edit() {
        let mut record = Record::new("Ann").unwrap();
        record.add_email("ann@example.com").unwrap();
        record.edit_email("ann@example.com", "ann@work.org").unwrap();
        assert_eq!(record.emails()[0].as_str(), "ann@work.org");
        record.remove_email("ann@work.org");
        assert!(record.emails().is_empty());
    }

    #[test]
    fn address_overwrites() {
        let mut record = Record::new("Ann").unwrap();
        record.add_address("1 Main St").unwrap();
        record.edit_address("2 Side St, Town").unwrap();
        assert_eq!(record.address().unwrap().as_str(), "2 Side St, Town");
    }

    #[test]
    fn birthday_can_only_be_added_once() {
        let mut record = Record::new("Ann").unwrap();
        record.add_birthday_on("12.06.1990", today()).unwrap();
        let err = record.add_birthday_on("01.01.1991", today()).unwrap_err();
        assert!(matches!(err, BotError::State(_)));
        assert_eq!(record.birthday().unwrap().to_string(), "12.06.1990");
    }

    #[test]
    fn edit_field_on_lists() {
        let mut record = Record::new("Ann").unwrap();
        let msg = record
            .edit_field(FieldEdit::Phones {
                old: None,
                new: Some("0501234567".into()),
            })
            .unwrap();
        assert_eq!(msg, "Phone number '0501234567' added.");

        record
            .edit_field(FieldEdit::Phones {
                old: Some("0501234567".into()),
                new: Some("0677654321".into()),
            })
            .unwrap();
        assert_eq!(record.phones()[0].as_str(), "0677654321");

        let msg = record
            .edit_field(FieldEdit::Phones {
                old: Some("0677654321".into()),
                new: Some(String::new()),
            })
            .unwrap();
        assert_eq!(msg, "Phone number '0677654321' removed.");
        assert!(record.phones().is_empty());

        record
            .edit_field(FieldEdit::Emails {
                old: None,
                new: Some("a@b.cd".into()),
            })
            .unwrap();
        assert!(record.has_email("a@b.cd"));
    }

    #[test]
    fn edit_field_on_singular_fields_overwrites_and_clears() {
        let mut record = Record::new("Ann").unwrap();
        record.add_birthday_on("12.06.1990", today()).unwrap();

        let msg = record
            .edit_field_on(FieldEdit::Birthday(Some("13.07.1991".into())), today())
            .unwrap();
        assert_eq!(msg, "Birthday updated to '13.07.1991'.");
        assert_eq!(record.birthday().unwrap().to_string(), "13.07.1991");

        record
            .edit_field_on(FieldEdit::Birthday(None), today())
            .unwrap();
        assert!(record.birthday().is_none());

        record
            .edit_field(FieldEdit::Address(Some("Elm St 5".into())))
            .unwrap();
        assert!(record.address().is_some());
        let msg = record.edit_field(FieldEdit::Address(Some("  ".into()))).unwrap();
        assert_eq!(msg, "Address removed.");
        assert!(record.address().is_none());
    }

    #[test]
    fn edit_field_validates() {
        let mut record = Record::new("Ann").unwrap();
        let err = record
            .edit_field_on(FieldEdit::Birthday(Some("01.01.2099".into())), today())
            .unwrap_err();
        assert!(matches!(
            err,
            BotError::Validation(ValidationError::BirthdayInFuture(_))
        ));
    }

    #[test]
    fn rename_without_book_is_a_config_error() {
        let mut record = Record::new("Ann").unwrap();
        let err = record.edit_field(FieldEdit::Name("Anna".into())).unwrap_err();
        assert!(matches!(err, BotError::Config(_)));
        assert_eq!(record.name().as_str(), "Ann");
    }

    #[test]
    fn rendering() {
        let mut record = Record::new("Ann").unwrap();
        assert_eq!(record.show_birthday(), "No birthday set");
        assert_eq!(
            record.to_string(),
            "Contact name: Ann, birthday: ----------, phones: ----------, emails: ----------, address: ----------"
        );

        record.add_phone("0501234567").unwrap();
        record.add_phone("0670000000").unwrap();
        record.add_birthday_on("12.06.1990", today()).unwrap();
        assert_eq!(
            record.show_formatted_phones(),
            "Ann: 0501234567, 0670000000"
        );
        assert_eq!(record.show_birthday(), "Ann's birthday is on 12.06.1990");
        assert!(record
            .to_string()
            .contains("phones: 0501234567; 0670000000"));
    }
}
