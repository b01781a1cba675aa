use thiserror::Error;

/// A field value or command argument that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    InvalidName,

    #[error("Phone number must be 10 digits")]
    InvalidPhone(String),

    #[error("Invalid email format. Expected format: example@domain.com")]
    InvalidEmail(String),

    #[error(
        "Invalid address format. The address must contain only letters, digits, spaces and commas"
    )]
    InvalidAddress(String),

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthdayFormat(String),

    #[error("Birthday date cannot be in the future")]
    BirthdayInFuture(String),

    #[error("{0}")]
    EmptySearch(String),

    #[error("{0}")]
    MissingArgument(String),
}

#[derive(Error, Debug)]
pub enum BotError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    State(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Contact '{0}' not found. Please check the name.")]
    ContactNotFound(String),

    #[error("Contact '{0}' already exists. If you want to update it, use the command: change-contact <contact_name>.")]
    DuplicateContact(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
