//! Pitch representation and enharmonic spelling
//!
//! A [`Pitch`] is a *spelled* pitch: letter, alteration and octave. The
//! absolute semitone offset (C0 = 0, C4 = 48) identifies the sounding pitch
//! independently of its spelling, so `C#4` and `Db4` are different pitches
//! that are enharmonic to each other.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Integer pitch height on the chromatic continuum, independent of spelling
pub type AbsoluteSemitoneOffset = i32;

/// Diatonic letter name
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in diatonic order starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Semitones above C within the same octave
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Diatonic index (C = 0 … B = 6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Letter at a diatonic index, wrapping every seven steps
    pub fn from_index(index: usize) -> Letter {
        Self::ALL[index % 7]
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Chromatic alteration applied to a letter
///
/// Serialized as its signed semitone delta, the same value MusicXML writes
/// into `<alter>`.
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Alteration {
    DoubleFlat = -2,
    Flat = -1,
    Natural = 0,
    Sharp = 1,
    DoubleSharp = 2,
}

impl Alteration {
    /// All alterations from double flat to double sharp
    pub const ALL: [Alteration; 5] = [
        Alteration::DoubleFlat,
        Alteration::Flat,
        Alteration::Natural,
        Alteration::Sharp,
        Alteration::DoubleSharp,
    ];

    /// Get the semitone offset for this alteration
    pub fn semitone_offset(self) -> i8 {
        self as i8
    }

    /// Alteration for a semitone delta, if it is within double flat … double sharp
    pub fn from_semitone_offset(delta: i32) -> Option<Alteration> {
        match delta {
            -2 => Some(Alteration::DoubleFlat),
            -1 => Some(Alteration::Flat),
            0 => Some(Alteration::Natural),
            1 => Some(Alteration::Sharp),
            2 => Some(Alteration::DoubleSharp),
            _ => None,
        }
    }

    /// Number of alteration steps away from natural
    pub fn steps(self) -> u8 {
        self.semitone_offset().unsigned_abs()
    }

    /// ASCII symbol used in identifiers and file names
    pub fn ascii_symbol(self) -> &'static str {
        match self {
            Alteration::DoubleFlat => "bb",
            Alteration::Flat => "b",
            Alteration::Natural => "",
            Alteration::Sharp => "#",
            Alteration::DoubleSharp => "##",
        }
    }

    /// Unicode glyph used for display
    pub fn pretty_symbol(self) -> &'static str {
        match self {
            Alteration::DoubleFlat => "𝄫",
            Alteration::Flat => "♭",
            Alteration::Natural => "",
            Alteration::Sharp => "♯",
            Alteration::DoubleSharp => "𝄪",
        }
    }
}

impl Default for Alteration {
    fn default() -> Self {
        Alteration::Natural
    }
}

/// A spelled pitch: letter, alteration and octave
///
/// Equality and hashing use the full spelling. Use
/// [`Pitch::is_enharmonic`] to compare sounding pitch only.
///
/// The ordering is total: by absolute semitone offset, then fewer
/// alteration steps first, then sharps before flats. Every sorted
/// collection of pitches in this crate relies on it, which keeps generated
/// output independent of container iteration order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub letter: Letter,
    pub alteration: Alteration,
    pub octave: i32,
}

impl Pitch {
    pub fn new(letter: Letter, alteration: Alteration, octave: i32) -> Self {
        Self {
            letter,
            alteration,
            octave,
        }
    }

    pub fn natural(letter: Letter, octave: i32) -> Self {
        Self::new(letter, Alteration::Natural, octave)
    }

    /// Absolute semitone offset: letter table + alteration + 12 * octave
    pub fn absolute_semitone_offset(&self) -> AbsoluteSemitoneOffset {
        self.letter.semitone() + self.alteration.semitone_offset() as i32 + 12 * self.octave
    }

    /// True when both pitches sound the same, whatever their spelling
    pub fn is_enharmonic(&self, other: &Pitch) -> bool {
        self.absolute_semitone_offset() == other.absolute_semitone_offset()
    }

    /// Every spelling of an absolute offset, sorted by the pitch order
    ///
    /// Each letter contributes at most one spelling (the alteration range
    /// spans fewer than 12 semitones), so there are between one and three
    /// results: offset 50 is `D4`, `C##4` and `Ebb4`.
    pub fn spellings(offset: AbsoluteSemitoneOffset) -> Vec<Pitch> {
        let mut spellings: Vec<Pitch> = Letter::ALL
            .iter()
            .flat_map(|&letter| {
                Alteration::ALL.iter().filter_map(move |&alteration| {
                    let remainder =
                        offset - letter.semitone() - alteration.semitone_offset() as i32;
                    (remainder.rem_euclid(12) == 0)
                        .then(|| Pitch::new(letter, alteration, remainder.div_euclid(12)))
                })
            })
            .collect();
        spellings.sort();
        spellings
    }

    /// Letter plus unicode glyph, without octave (e.g. `C♯`)
    pub fn pretty_name(&self) -> String {
        format!("{}{}", self.letter, self.alteration.pretty_symbol())
    }

    /// Letter plus ASCII accidental, without octave (e.g. `C#`)
    pub fn ascii_name(&self) -> String {
        format!("{}{}", self.letter, self.alteration.ascii_symbol())
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute_semitone_offset()
            .cmp(&other.absolute_semitone_offset())
            .then_with(|| self.alteration.steps().cmp(&other.alteration.steps()))
            .then_with(|| {
                other
                    .alteration
                    .semitone_offset()
                    .cmp(&self.alteration.semitone_offset())
            })
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Canonical ASCII spelling with octave (`C#4`); parses back to the same pitch
impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ascii_name(), self.octave)
    }
}

impl FromStr for Pitch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_pitch(s)
    }
}
