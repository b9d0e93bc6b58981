//! Beer domain model.
//!
//! # Responsibility
//! - Define the single persisted record handled by the record store.
//! - Define the closed category sets (`BeerType`, `BeerStyle`) and their
//!   stable storage codes.
//!
//! # Invariants
//! - `id` is caller-assigned; `0` means "unset" and is rejected by mutating
//!   paths that address an existing row.
//! - Storage codes never change once released. New variants take new codes.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Caller-assigned identifier of a stored beer.
pub type BeerId = i64;

/// Sentinel value for an identifier that was never assigned.
pub const UNSET_BEER_ID: BeerId = 0;

/// Validation errors for beer values handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BeerValidationError {
    #[error("invalid beer id: id must be non-zero")]
    InvalidId,
}

/// Returned when a label does not name a known type or style.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown beer {axis} `{value}`")]
pub struct ParseBeerEnumError {
    axis: &'static str,
    value: String,
}

/// Brewing family of a beer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeerType {
    Ale,
    Lager,
    Malt,
    Stout,
}

impl BeerType {
    /// Every type, ordered by storage code.
    pub const ALL: [BeerType; 4] = [Self::Ale, Self::Lager, Self::Malt, Self::Stout];

    /// Stable integer code persisted in `beer.type`.
    pub fn code(self) -> i64 {
        match self {
            Self::Ale => 1,
            Self::Lager => 2,
            Self::Malt => 3,
            Self::Stout => 4,
        }
    }

    /// Maps a persisted code back to its variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ale => "Ale",
            Self::Lager => "Lager",
            Self::Malt => "Malt",
            Self::Stout => "Stout",
        }
    }
}

impl Display for BeerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BeerType {
    type Err = ParseBeerEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseBeerEnumError {
                axis: "type",
                value: trimmed.to_string(),
            })
    }
}

/// Style of a beer. Independent from [`BeerType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeerStyle {
    Amber,
    Blonde,
    Brown,
    Cream,
    Dark,
    Pale,
    Strong,
    Wheat,
    Red,
    Ipa,
    Lime,
    Pilsner,
    Golden,
    Fruit,
    Honey,
    Porter,
}

impl BeerStyle {
    /// Every style, ordered by storage code.
    pub const ALL: [BeerStyle; 16] = [
        Self::Amber,
        Self::Blonde,
        Self::Brown,
        Self::Cream,
        Self::Dark,
        Self::Pale,
        Self::Strong,
        Self::Wheat,
        Self::Red,
        Self::Ipa,
        Self::Lime,
        Self::Pilsner,
        Self::Golden,
        Self::Fruit,
        Self::Honey,
        Self::Porter,
    ];

    /// Stable integer code persisted in `beer.style`.
    pub fn code(self) -> i64 {
        match self {
            Self::Amber => 1,
            Self::Blonde => 2,
            Self::Brown => 3,
            Self::Cream => 4,
            Self::Dark => 5,
            Self::Pale => 6,
            Self::Strong => 7,
            Self::Wheat => 8,
            Self::Red => 9,
            Self::Ipa => 10,
            Self::Lime => 11,
            Self::Pilsner => 12,
            Self::Golden => 13,
            Self::Fruit => 14,
            Self::Honey => 15,
            Self::Porter => 16,
        }
    }

    /// Maps a persisted code back to its variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Amber => "Amber",
            Self::Blonde => "Blonde",
            Self::Brown => "Brown",
            Self::Cream => "Cream",
            Self::Dark => "Dark",
            Self::Pale => "Pale",
            Self::Strong => "Strong",
            Self::Wheat => "Wheat",
            Self::Red => "Red",
            Self::Ipa => "IPA",
            Self::Lime => "Lime",
            Self::Pilsner => "Pilsner",
            Self::Golden => "Golden",
            Self::Fruit => "Fruit",
            Self::Honey => "Honey",
            Self::Porter => "Porter",
        }
    }
}

impl Display for BeerStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BeerStyle {
    type Err = ParseBeerEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseBeerEnumError {
                axis: "style",
                value: trimmed.to_string(),
            })
    }
}

/// Canonical beer record.
///
/// Values are plain data: the store copies fields out on write and builds a
/// fresh value on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    /// Caller-assigned identifier. `0` is the unset sentinel.
    pub id: BeerId,
    pub name: String,
    /// Serialized as `type` to match the column name.
    #[serde(rename = "type")]
    pub kind: BeerType,
    pub style: BeerStyle,
}

impl Beer {
    pub fn new(id: BeerId, name: impl Into<String>, kind: BeerType, style: BeerStyle) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            style,
        }
    }

    /// Returns whether this value carries an assigned identifier.
    pub fn has_id(&self) -> bool {
        self.id != UNSET_BEER_ID
    }
}

/// Rejects the unset identifier.
///
/// This is the only validation the store performs; it runs before any
/// database interaction.
pub fn ensure_assigned_id(id: BeerId) -> Result<(), BeerValidationError> {
    if id == UNSET_BEER_ID {
        return Err(BeerValidationError::InvalidId);
    }
    Ok(())
}
