//! Rating value object for questionnaire answers (0 to 4 frequency scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Frequency/intensity rating: 0 (not at all) to 4 (very often).
///
/// Serializes as its numeric value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Rating {
    #[default]
    NotAtAll = 0,
    Rarely = 1,
    Sometimes = 2,
    Often = 3,
    VeryOften = 4,
}

impl Rating {
    /// Lowest possible rating value.
    pub const MIN: u8 = 0;

    /// Highest possible rating value.
    pub const MAX: u8 = 4;

    /// All ratings in ascending order.
    pub const ALL: [Rating; 5] = [
        Rating::NotAtAll,
        Rating::Rarely,
        Rating::Sometimes,
        Rating::Often,
        Rating::VeryOften,
    ];

    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(Rating::NotAtAll),
            1 => Ok(Rating::Rarely),
            2 => Ok(Rating::Sometimes),
            3 => Ok(Rating::Often),
            4 => Ok(Rating::VeryOften),
            _ => Err(ValidationError::out_of_range(
                "rating",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                i32::from(value),
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::NotAtAll => "Not at all",
            Rating::Rarely => "Rarely",
            Rating::Sometimes => "Sometimes",
            Rating::Often => "Often",
            Rating::VeryOften => "Very Often",
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::try_from_u8(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
