//! Chord construction
//!
//! A chord is a set of spelled pitches stacked on a root. Identity is the
//! member set alone: the order in which intervals were supplied is kept
//! only for display (see [`Chord::voicing`]).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use super::interval::Interval;
use super::pitch::{AbsoluteSemitoneOffset, Pitch};
use crate::error::ChordError;

/// One member of a chord together with the interval that produced it
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voice {
    pub interval: Interval,
    pub pitch: Pitch,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Chord {
    root: Pitch,
    pitches: BTreeSet<Pitch>,
    voicing: Vec<Voice>,
}

/// Stack `intervals` on `root`, collapsing enharmonic duplicates
///
/// The result has one pitch per interval unless two intervals land on the
/// same absolute offset, in which case the first one wins.
pub fn build_chord(root: Pitch, intervals: &[Interval]) -> Result<Chord, ChordError> {
    build_chord_with(root, intervals, false)
}

/// Stack `intervals` on `root`
///
/// With `allow_enharmonic_duplicates`, two differently spelled pitches at
/// the same offset are both kept. Identical spellings always collapse.
pub fn build_chord_with(
    root: Pitch,
    intervals: &[Interval],
    allow_enharmonic_duplicates: bool,
) -> Result<Chord, ChordError> {
    let first = intervals
        .first()
        .copied()
        .ok_or(ChordError::NoIntervals { root })?;

    let mut lowest = (root + first)?;
    let mut pitches = BTreeSet::new();
    let mut offsets = BTreeSet::new();
    let mut voicing = Vec::with_capacity(intervals.len());

    for &interval in intervals {
        let pitch = (root + interval)?;
        let offset = pitch.absolute_semitone_offset();

        let fresh_offset = offsets.insert(offset);
        if !fresh_offset && !allow_enharmonic_duplicates {
            log::debug!(
                "{} above {} duplicates offset {}; collapsed",
                interval,
                root,
                offset
            );
            continue;
        }

        if pitches.insert(pitch) {
            lowest = lowest.min(pitch);
            voicing.push(Voice { interval, pitch });
        }
    }

    Ok(Chord {
        root: lowest,
        pitches,
        voicing,
    })
}

impl Chord {
    /// Number of distinct member pitches
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    /// Always false for chords produced by [`build_chord`]
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// The identity pitch: lowest member by the pitch order
    pub fn root(&self) -> Pitch {
        self.root
    }

    /// Members in ascending pitch order
    pub fn pitches(&self) -> impl Iterator<Item = &Pitch> {
        self.pitches.iter()
    }

    pub fn contains(&self, pitch: &Pitch) -> bool {
        self.pitches.contains(pitch)
    }

    /// Absolute offsets of the members, ascending
    pub fn offsets(&self) -> Vec<AbsoluteSemitoneOffset> {
        self.pitches
            .iter()
            .map(Pitch::absolute_semitone_offset)
            .collect()
    }

    /// Members in the order their intervals were supplied
    pub fn voicing(&self) -> &[Voice] {
        &self.voicing
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.pitches == other.pitches
    }
}

impl Eq for Chord {}

impl Hash for Chord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pitches.hash(state);
    }
}

impl Ord for Chord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pitches.iter().cmp(other.pitches.iter())
    }
}

impl PartialOrd for Chord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChordType;

    fn p(s: &str) -> Pitch {
        s.parse().unwrap()
    }

    #[test]
    fn test_c_major_seventh() {
        let chord = build_chord(p("C4"), ChordType::MajorSeventh.intervals()).unwrap();
        let members: Vec<Pitch> = chord.pitches().copied().collect();
        assert_eq!(members, vec![p("C4"), p("E4"), p("G4"), p("B4")]);
        assert_eq!(chord.root(), p("C4"));
    }

    #[test]
    fn test_member_count_matches_interval_count() {
        for root in ["C4", "F#3", "Bb2", "Db5"] {
            let chord = build_chord(p(root), ChordType::DominantSeventh.intervals()).unwrap();
            assert_eq!(chord.len(), 4, "root {}", root);
        }
    }

    #[test]
    fn test_enharmonic_collision_collapses() {
        let augmented_fourth = Interval::new(6, 3);
        let intervals = [
            Interval::PERFECT_UNISON,
            augmented_fourth,
            Interval::DIMINISHED_FIFTH,
        ];
        let chord = build_chord(p("C4"), &intervals).unwrap();
        assert_eq!(chord.len(), 2);
        assert!(chord.contains(&p("F#4")));
        assert!(!chord.contains(&p("Gb4")));

        let kept = build_chord_with(p("C4"), &intervals, true).unwrap();
        assert_eq!(kept.len(), 3);
        assert!(kept.contains(&p("Gb4")));
    }

    #[test]
    fn test_identical_spellings_always_collapse() {
        let intervals = [Interval::PERFECT_UNISON, Interval::PERFECT_UNISON];
        let chord = build_chord_with(p("E4"), &intervals, true).unwrap();
        assert_eq!(chord.len(), 1);
    }

    #[test]
    fn test_identity_ignores_interval_order() {
        let forward = [Interval::PERFECT_UNISON, Interval::MAJOR_THIRD, Interval::PERFECT_FIFTH];
        let backward = [Interval::PERFECT_FIFTH, Interval::MAJOR_THIRD, Interval::PERFECT_UNISON];
        let a = build_chord(p("D4"), &forward).unwrap();
        let b = build_chord(p("D4"), &backward).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.voicing()[0].pitch, p("D4"));
        assert_eq!(b.voicing()[0].pitch, p("A4"));
    }

    #[test]
    fn test_root_is_lowest_pitch() {
        let intervals = [Interval::PERFECT_FIFTH, Interval::new(-5, -3)];
        let chord = build_chord(p("C4"), &intervals).unwrap();
        assert_eq!(chord.root(), p("G3"));
    }

    #[test]
    fn test_empty_interval_list_is_rejected() {
        assert_eq!(
            build_chord(p("C4"), &[]),
            Err(ChordError::NoIntervals { root: p("C4") })
        );
    }
}
