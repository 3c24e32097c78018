//! Symbolic intervals
//!
//! An interval carries both its size in semitones and its generic size in
//! letter steps. The letter steps decide the spelling of the upper note
//! (a major third above C is E, never Fb); see [`crate::transposition`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use super::pitch::Pitch;
use crate::error::ChordError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    semitones: i32,
    letter_steps: i32,
}

impl Interval {
    pub const PERFECT_UNISON: Interval = Interval::new(0, 0);
    pub const MINOR_SECOND: Interval = Interval::new(1, 1);
    pub const MAJOR_SECOND: Interval = Interval::new(2, 1);
    pub const MINOR_THIRD: Interval = Interval::new(3, 2);
    pub const MAJOR_THIRD: Interval = Interval::new(4, 2);
    pub const PERFECT_FOURTH: Interval = Interval::new(5, 3);
    pub const DIMINISHED_FIFTH: Interval = Interval::new(6, 4);
    pub const PERFECT_FIFTH: Interval = Interval::new(7, 4);
    pub const MINOR_SIXTH: Interval = Interval::new(8, 5);
    pub const MAJOR_SIXTH: Interval = Interval::new(9, 5);
    pub const MINOR_SEVENTH: Interval = Interval::new(10, 6);
    pub const MAJOR_SEVENTH: Interval = Interval::new(11, 6);
    pub const PERFECT_OCTAVE: Interval = Interval::new(12, 7);

    /// Intervals of the major scale above the tonic, minor second through major seventh
    pub const SCALE_STEPS: [Interval; 10] = [
        Interval::MINOR_SECOND,
        Interval::MAJOR_SECOND,
        Interval::MINOR_THIRD,
        Interval::MAJOR_THIRD,
        Interval::PERFECT_FOURTH,
        Interval::PERFECT_FIFTH,
        Interval::MINOR_SIXTH,
        Interval::MAJOR_SIXTH,
        Interval::MINOR_SEVENTH,
        Interval::MAJOR_SEVENTH,
    ];

    pub const fn new(semitones: i32, letter_steps: i32) -> Self {
        Self {
            semitones,
            letter_steps,
        }
    }

    pub fn semitones(&self) -> i32 {
        self.semitones
    }

    pub fn letter_steps(&self) -> i32 {
        self.letter_steps
    }

    /// Conventional English name, for the intervals that have one here
    pub fn name(&self) -> Option<&'static str> {
        let name = match (self.semitones, self.letter_steps) {
            (0, 0) => "perfect unison",
            (1, 1) => "minor second",
            (2, 1) => "major second",
            (3, 2) => "minor third",
            (4, 2) => "major third",
            (5, 3) => "perfect fourth",
            (6, 3) => "augmented fourth",
            (6, 4) => "diminished fifth",
            (7, 4) => "perfect fifth",
            (8, 4) => "augmented fifth",
            (8, 5) => "minor sixth",
            (9, 5) => "major sixth",
            (9, 6) => "diminished seventh",
            (10, 6) => "minor seventh",
            (11, 6) => "major seventh",
            (12, 7) => "perfect octave",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(
                f,
                "{} semitones over {} letters",
                self.semitones, self.letter_steps
            ),
        }
    }
}

/// `pitch + interval`, spelled by letter steps
///
/// Fails when the spelling would need more than a double alteration.
impl Add<Interval> for Pitch {
    type Output = Result<Pitch, ChordError>;

    fn add(self, interval: Interval) -> Self::Output {
        crate::transposition::transpose(self, interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Interval::MAJOR_THIRD.name(), Some("major third"));
        assert_eq!(Interval::DIMINISHED_FIFTH.to_string(), "diminished fifth");
        assert_eq!(Interval::new(13, 8).name(), None);
        assert_eq!(Interval::new(13, 8).to_string(), "13 semitones over 8 letters");
    }

    #[test]
    fn test_scale_steps_ascend() {
        let sizes: Vec<i32> = Interval::SCALE_STEPS.iter().map(|i| i.semitones()).collect();
        assert_eq!(sizes, vec![1, 2, 3, 4, 5, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_add_operator() {
        let c4: Pitch = "C4".parse().unwrap();
        let e4: Pitch = "E4".parse().unwrap();
        assert_eq!((c4 + Interval::MAJOR_THIRD).unwrap(), e4);
    }
}
