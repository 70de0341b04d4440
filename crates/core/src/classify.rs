use prodsched_grid::CellValue;
use serde::Serialize;

/// Region classification, derived from the first character of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    A,
    B,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "region_a"),
            Self::B => write!(f, "region_b"),
        }
    }
}

/// Novelty classification, derived from the marker field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Novelty {
    New,
    Old,
}

impl std::fmt::Display for Novelty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Old => write!(f, "old"),
        }
    }
}

/// Region A iff the first character of the trimmed key is an ASCII
/// letter. Digits, kana, kanji and empty keys all fall to region B.
pub fn is_region_a(key: &str) -> bool {
    key.trim()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}

pub fn region_of(key: &str) -> Region {
    if is_region_a(key) {
        Region::A
    } else {
        Region::B
    }
}

/// "New" iff the marker is a text cell starting with "$" or its
/// full-width variant "＄". Non-text markers are never new.
pub fn is_new_marker(marker: &CellValue) -> bool {
    match marker {
        CellValue::Text(s) => s.starts_with('$') || s.starts_with('＄'),
        _ => false,
    }
}

pub fn novelty_of(marker: &CellValue) -> Novelty {
    if is_new_marker(marker) {
        Novelty::New
    } else {
        Novelty::Old
    }
}
