//! Clef selection for rendered chords

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// The two supported clefs, each a fixed `(sign, line)` pair
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Clef {
    /// Treble clef: sign G on line 2
    #[default]
    G,
    /// Bass clef: sign F on line 4
    F,
}

impl Clef {
    /// MusicXML `<sign>` value
    pub fn sign(&self) -> &'static str {
        match self {
            Clef::G => "G",
            Clef::F => "F",
        }
    }

    /// MusicXML `<line>` value
    pub fn line(&self) -> u8 {
        match self {
            Clef::G => 2,
            Clef::F => 4,
        }
    }

    /// Name used by LilyPond's `\clef`
    pub fn lilypond_name(&self) -> &'static str {
        match self {
            Clef::G => "treble",
            Clef::F => "bass",
        }
    }
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

impl FromStr for Clef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "treble" => Ok(Clef::G),
            "f" | "bass" => Ok(Clef::F),
            _ => Err(ParseError::InvalidClef(s.to_string())),
        }
    }
}
