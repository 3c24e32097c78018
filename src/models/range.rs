//! Half-open ranges of root pitches

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use super::pitch::{AbsoluteSemitoneOffset, Letter, Pitch};
use crate::error::ParseError;

/// `[start, end)` over absolute semitone offsets
///
/// Built from two pitches; only their offsets matter, so `B#3,C5` and
/// `C4,C5` describe the same range. Written as `"C4,C5"` in configuration
/// files and on the command line.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct RootRange {
    start: Pitch,
    end: Pitch,
}

impl RootRange {
    /// Fails when `end` sounds lower than `start`; an empty range is allowed
    pub fn new(start: Pitch, end: Pitch) -> Result<Self, ParseError> {
        if end.absolute_semitone_offset() < start.absolute_semitone_offset() {
            return Err(ParseError::ReversedRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// `C{octave}` up to, not including, the next C
    pub fn octave(octave: i32) -> Self {
        Self {
            start: Pitch::natural(Letter::C, octave),
            end: Pitch::natural(Letter::C, octave + 1),
        }
    }

    pub fn start(&self) -> Pitch {
        self.start
    }

    pub fn end(&self) -> Pitch {
        self.end
    }

    /// Offsets covered by the range, start inclusive, end exclusive
    pub fn offsets(&self) -> Range<AbsoluteSemitoneOffset> {
        self.start.absolute_semitone_offset()..self.end.absolute_semitone_offset()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets().is_empty()
    }
}

impl fmt::Display for RootRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.start, self.end)
    }
}

impl FromStr for RootRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_root_range(s)
    }
}

impl TryFrom<String> for RootRange {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootRange> for String {
    fn from(range: RootRange) -> Self {
        range.to_string()
    }
}
