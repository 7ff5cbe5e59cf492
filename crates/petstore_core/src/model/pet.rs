//! Pet record model and gender encoding.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused.
//! - `Gender` persists only as `0`, `1` or `2`.
//! - `weight` is non-negative for records written through the editor.

use serde::{Deserialize, Serialize};

/// Store-assigned row identifier (`pets._id`).
pub type PetId = i64;

/// Pet gender as stored in `pets.gender`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
}

impl Gender {
    /// All values in display order; position equals display index.
    pub const ALL: [Gender; 3] = [Gender::Unknown, Gender::Male, Gender::Female];

    /// Column encoding: 0 unknown, 1 male, 2 female.
    pub fn to_db(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Strict column decoding. Returns `None` for any other integer.
    pub fn from_db(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::Male),
            2 => Some(Self::Female),
            _ => None,
        }
    }

    /// Position of this value in the gender selector.
    pub fn display_index(self) -> usize {
        match self {
            Self::Unknown => 0,
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Inverse of [`Gender::display_index`]; out-of-range indexes are `Unknown`.
    pub fn from_display_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

/// Insert payload for one pet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub breed: String,
    pub gender: Gender,
    pub weight: i64,
}

impl NewPet {
    /// Creates a payload with default gender and zero weight.
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            gender: Gender::Unknown,
            weight: 0,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = weight;
        self
    }
}

/// Persisted pet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    pub id: PetId,
    pub name: String,
    /// Empty when the stored column is NULL.
    pub breed: String,
    pub gender: Gender,
    pub weight: i64,
}

impl PetRecord {
    /// Returns whether this record carries the same fields as `pet`.
    pub fn matches(&self, pet: &NewPet) -> bool {
        self.name == pet.name
            && self.breed == pet.breed
            && self.gender == pet.gender
            && self.weight == pet.weight
    }
}

#[cfg(test)]
mod tests {
    use super::{Gender, NewPet, PetRecord};

    #[test]
    fn gender_db_encoding_is_stable() {
        assert_eq!(Gender::Unknown.to_db(), 0);
        assert_eq!(Gender::Male.to_db(), 1);
        assert_eq!(Gender::Female.to_db(), 2);
        assert_eq!(Gender::from_db(3), None);
        assert_eq!(Gender::from_db(-1), None);
    }

    #[test]
    fn out_of_range_display_index_is_unknown() {
        assert_eq!(Gender::from_display_index(9), Gender::Unknown);
        assert_eq!(Gender::from_display_index(9).display_index(), 0);
    }

    #[test]
    fn record_matches_payload_fields() {
        let pet = NewPet::new("Rex", "Labrador")
            .with_gender(Gender::Male)
            .with_weight(30);
        let record = PetRecord {
            id: 1,
            name: "Rex".to_string(),
            breed: "Labrador".to_string(),
            gender: Gender::Male,
            weight: 30,
        };
        assert!(record.matches(&pet));
        assert!(!record.matches(&pet.clone().with_weight(31)));
    }
}
