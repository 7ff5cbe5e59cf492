//! Pending form edits and their validation.

use crate::config::EditorStrings;
use crate::model::pet::{Gender, NewPet, PetRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    InvalidWeight(String),
    NegativeWeight(i64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "pet name cannot be empty"),
            Self::InvalidWeight(raw) => write!(f, "weight `{raw}` is not a whole number"),
            Self::NegativeWeight(value) => write!(f, "weight {value} cannot be negative"),
        }
    }
}

impl Error for ValidationError {}

/// Raw editor field values, exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetForm {
    pub name: String,
    pub breed: String,
    pub weight: String,
    /// Label currently picked in the gender selector, if any.
    pub gender_selection: Option<String>,
}

impl PetForm {
    /// Blank form: empty text, weight "0", gender selector on index 0.
    pub fn defaults(strings: &EditorStrings) -> Self {
        Self {
            name: String::new(),
            breed: String::new(),
            weight: "0".to_string(),
            gender_selection: Some(strings.label_for(Gender::Unknown).to_string()),
        }
    }

    /// Form populated from a stored record.
    pub fn from_record(record: &PetRecord, strings: &EditorStrings) -> Self {
        Self {
            name: record.name.clone(),
            breed: record.breed.clone(),
            weight: record.weight.to_string(),
            gender_selection: Some(strings.label_for(record.gender).to_string()),
        }
    }

    /// Picks the selector option at `index`; out-of-range picks index 0.
    pub fn select_gender_index(&mut self, index: usize, strings: &EditorStrings) {
        let gender = Gender::from_display_index(index);
        self.gender_selection = Some(strings.label_for(gender).to_string());
    }

    /// Selector position of the current selection.
    pub fn gender_index(&self, strings: &EditorStrings) -> usize {
        self.gender(strings).display_index()
    }

    pub fn gender(&self, strings: &EditorStrings) -> Gender {
        strings.gender_from_label(self.gender_selection.as_deref())
    }

    /// Trims text fields, parses weight, and maps the gender label.
    pub fn validate(&self, strings: &EditorStrings) -> Result<NewPet, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let raw_weight = self.weight.trim();
        let weight = raw_weight
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidWeight(raw_weight.to_string()))?;
        if weight < 0 {
            return Err(ValidationError::NegativeWeight(weight));
        }

        Ok(NewPet {
            name: name.to_string(),
            breed: self.breed.trim().to_string(),
            gender: self.gender(strings),
            weight,
        })
    }
}
