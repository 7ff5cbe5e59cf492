//! Record addressing in `content://pets/<id>` form.

use crate::model::pet::PetId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Address of the whole pet collection.
pub const PETS_CONTENT_URI: &str = "content://pets";

static PET_URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^content://pets/([1-9][0-9]*)$").expect("valid pet uri regex"));

/// Error returned when a string is not a single-record address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    Malformed(String),
    IdOutOfRange(String),
}

impl Display for UriError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => {
                write!(f, "`{value}` is not of the form {PETS_CONTENT_URI}/<id>")
            }
            Self::IdOutOfRange(value) => write!(f, "pet id `{value}` is out of range"),
        }
    }
}

impl Error for UriError {}

/// Opaque address of one pet record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PetUri {
    id: PetId,
}

impl PetUri {
    /// Builds the address of the record with `id`.
    pub fn for_id(id: PetId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> PetId {
        self.id
    }
}

impl Display for PetUri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{PETS_CONTENT_URI}/{}", self.id)
    }
}

impl FromStr for PetUri {
    type Err = UriError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let captures = PET_URI_RE
            .captures(value.trim())
            .ok_or_else(|| UriError::Malformed(value.to_string()))?;
        let digits = &captures[1];
        let id = digits
            .parse::<PetId>()
            .map_err(|_| UriError::IdOutOfRange(digits.to_string()))?;
        Ok(Self { id })
    }
}
