//! Error types for catalog loading and command handling
//!
//! Everything a command can run into is an expected outcome and is returned
//! as a value. Callers decide how to present it (see [`crate::messages`]).

use thiserror::Error;

/// Failure to load or validate catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a catalog file
    #[error("Failed to read catalog file: {path}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog data is not valid YAML or does not match the item shape
    #[error("Failed to parse catalog data")]
    Parse {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Two items share an id
    #[error("Duplicate catalog item id: {id}")]
    DuplicateId { id: String },

    /// An item is unusable as described
    #[error("Invalid catalog item '{id}': {reason}")]
    InvalidItem { id: String, reason: String },
}

/// Refusal of a list operation by the list state machine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The item exists but is out of stock
    #[error("\"{item}\" is out of stock")]
    NotAvailable { item: String },

    /// The requested or resulting quantity is above the item's limit
    #[error("\"{item}\" is limited to {max} (requested {requested})")]
    MaxStockExceeded {
        item: String,
        requested: u64,
        max: u32,
    },

    /// Quantities start at 1
    #[error("Quantity for \"{item}\" must be at least 1")]
    InvalidQuantity { item: String },
}

/// A phrase that does not name any catalog item
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No catalog item named \"{phrase}\"")]
pub struct ItemNotFound {
    /// The phrase as it was looked up (trimmed)
    pub phrase: String,
}

/// Outcome of a command that did not change the list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The item phrase did not resolve (includes empty phrases)
    #[error(transparent)]
    NotFound(#[from] ItemNotFound),

    /// The item resolved but the list refused the change
    #[error("{rejection}")]
    Rejected {
        /// What the user called the item
        phrase: String,
        #[source]
        rejection: Rejection,
    },
}

/// Flat error classification, used to key localized messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ItemNotFound,
    NotAvailable,
    MaxStockExceeded,
    InvalidQuantity,
}

impl Rejection {
    /// Message key for this rejection
    pub fn kind(&self) -> ErrorKind {
        match self {
            Rejection::NotAvailable { .. } => ErrorKind::NotAvailable,
            Rejection::MaxStockExceeded { .. } => ErrorKind::MaxStockExceeded,
            Rejection::InvalidQuantity { .. } => ErrorKind::InvalidQuantity,
        }
    }
}

impl CommandError {
    /// Message key for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::NotFound(_) => ErrorKind::ItemNotFound,
            CommandError::Rejected { rejection, .. } => rejection.kind(),
        }
    }

    /// The user-facing item phrase the error is about
    pub fn phrase(&self) -> &str {
        match self {
            CommandError::NotFound(err) => &err.phrase,
            CommandError::Rejected { phrase, .. } => phrase,
        }
    }

    /// Attach the user's phrase to a list rejection
    pub fn rejected(phrase: impl Into<String>, rejection: Rejection) -> Self {
        CommandError::Rejected {
            phrase: phrase.into(),
            rejection,
        }
    }
}
