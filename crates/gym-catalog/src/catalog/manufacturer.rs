//! Manufacturer filter entries.

use serde::{Deserialize, Serialize};

use crate::ids::ManufacturerId;
use crate::search::params;

/// Gym equipment manufacturers offered as filters.
///
/// Titles are the URL identity of an entry and are kept byte-for-byte,
/// trailing spaces included, so existing shared links keep matching.
pub const GYM_MANUFACTURERS: &[&str] = &[
    "Life Fitness",
    "Technogym",
    "Hammer Strength",
    "Star Trac ",
    "Matrix ",
    "Cybex",
    "Precor",
    "Inotec",
    "Panatta",
];

/// Parts manufacturers offered as filters.
pub const PARTS_MANUFACTURERS: &[&str] = &[
    "Rope Belts",
    "Rollers",
    "Pillows",
    "Plastic fittings",
    "Fasteners",
    "Cargo blocks",
    "Cuffs Insurance",
    "Grips",
    "Other",
];

/// Which of the two manufacturer lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManufacturerList {
    /// Gym equipment manufacturers (`gym` query parameter).
    Gym,
    /// Parts manufacturers (`parts` query parameter).
    Parts,
}

impl ManufacturerList {
    /// Both lists, in panel order.
    pub const ALL: [ManufacturerList; 2] = [ManufacturerList::Gym, ManufacturerList::Parts];

    /// Query-string key carrying this list's checked titles.
    pub fn query_key(&self) -> &'static str {
        match self {
            ManufacturerList::Gym => params::GYM,
            ManufacturerList::Parts => params::PARTS,
        }
    }

    /// Titles the list is seeded with.
    pub fn seed_titles(&self) -> &'static [&'static str] {
        match self {
            ManufacturerList::Gym => GYM_MANUFACTURERS,
            ManufacturerList::Parts => PARTS_MANUFACTURERS,
        }
    }

    /// Accordion title in the filter panel.
    pub fn panel_title(&self) -> &'static str {
        match self {
            ManufacturerList::Gym => "Тренажеры",
            ManufacturerList::Parts => "Запчасти и аксесуары",
        }
    }

    /// Heading of the checked-manufacturers block above the catalog.
    pub fn block_title(&self) -> &'static str {
        match self {
            ManufacturerList::Gym => "Производитель тренажеров:",
            ManufacturerList::Parts => "Производитель запчастей:",
        }
    }
}

/// One toggleable manufacturer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerEntry {
    pub id: ManufacturerId,
    pub title: String,
    pub checked: bool,
}

impl ManufacturerEntry {
    /// Create an unchecked entry with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ManufacturerId::generate(),
            title: title.into(),
            checked: false,
        }
    }

    /// Copy of this entry with a different checked state.
    pub fn with_checked(&self, checked: bool) -> Self {
        Self {
            checked,
            ..self.clone()
        }
    }
}

/// Seed a list from titles, all unchecked.
pub fn seed_entries(titles: &[&str]) -> Vec<ManufacturerEntry> {
    titles.iter().map(|t| ManufacturerEntry::new(*t)).collect()
}
