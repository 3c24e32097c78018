//! Chord qualities and their naming tokens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::interval::Interval;
use crate::error::ParseError;

/// A chord quality: the interval stack above the root plus its names
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    MajorSeventh,
    DominantSeventh,
    MinorSeventh,
    HalfDiminishedSeventh,
}

const MAJOR_SEVENTH: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MAJOR_THIRD,
    Interval::PERFECT_FIFTH,
    Interval::MAJOR_SEVENTH,
];

const DOMINANT_SEVENTH: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MAJOR_THIRD,
    Interval::PERFECT_FIFTH,
    Interval::MINOR_SEVENTH,
];

const MINOR_SEVENTH: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MINOR_THIRD,
    Interval::PERFECT_FIFTH,
    Interval::MINOR_SEVENTH,
];

const HALF_DIMINISHED_SEVENTH: [Interval; 4] = [
    Interval::PERFECT_UNISON,
    Interval::MINOR_THIRD,
    Interval::DIMINISHED_FIFTH,
    Interval::MINOR_SEVENTH,
];

impl ChordType {
    pub const ALL: [ChordType; 4] = [
        ChordType::MajorSeventh,
        ChordType::DominantSeventh,
        ChordType::MinorSeventh,
        ChordType::HalfDiminishedSeventh,
    ];

    /// The chord types of the image deck when none are configured
    pub const DEFAULT_SET: [ChordType; 3] = [
        ChordType::MajorSeventh,
        ChordType::DominantSeventh,
        ChordType::MinorSeventh,
    ];

    /// Intervals above the root, unison first
    pub fn intervals(&self) -> &'static [Interval] {
        match self {
            ChordType::MajorSeventh => &MAJOR_SEVENTH,
            ChordType::DominantSeventh => &DOMINANT_SEVENTH,
            ChordType::MinorSeventh => &MINOR_SEVENTH,
            ChordType::HalfDiminishedSeventh => &HALF_DIMINISHED_SEVENTH,
        }
    }

    /// Label for display, e.g. "major seventh"
    pub fn pretty_label(&self) -> &'static str {
        match self {
            ChordType::MajorSeventh => "major seventh",
            ChordType::DominantSeventh => "dominant seventh",
            ChordType::MinorSeventh => "minor seventh",
            ChordType::HalfDiminishedSeventh => "half-diminished seventh",
        }
    }

    /// ASCII token used in identifiers and directory names
    pub fn long_token(&self) -> &'static str {
        match self {
            ChordType::MajorSeventh => "major_seventh",
            ChordType::DominantSeventh => "dominant_seventh",
            ChordType::MinorSeventh => "minor_seventh",
            ChordType::HalfDiminishedSeventh => "half_diminished_seventh",
        }
    }

    /// Lead-sheet symbol
    pub fn short_symbol(&self) -> &'static str {
        match self {
            ChordType::MajorSeventh => "maj7",
            ChordType::DominantSeventh => "7",
            ChordType::MinorSeventh => "min7",
            ChordType::HalfDiminishedSeventh => "min7b5",
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_label())
    }
}

/// Accepts the long token, the pretty label or the short symbol
impl FromStr for ChordType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ChordType::ALL
            .iter()
            .copied()
            .find(|chord_type| {
                trimmed.eq_ignore_ascii_case(chord_type.long_token())
                    || trimmed.eq_ignore_ascii_case(chord_type.pretty_label())
                    || trimmed == chord_type.short_symbol()
            })
            .ok_or_else(|| ParseError::UnknownChordType(s.to_string()))
    }
}
