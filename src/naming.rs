//! Chord naming and identity
//!
//! Every generated chord gets a display name for the card and a stable id
//! that doubles as deck GUID and file stem. The id always carries the
//! chord-type token, so chords of several types sharing one output
//! namespace never overwrite each other.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::NamingCollision;
use crate::models::{Chord, ChordType};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChordName {
    /// Unicode spelling of the root plus the chord-type label, e.g. `C♯ minor seventh`
    pub display_name: String,
    /// ASCII spelling of the root with octave plus the chord-type token, e.g. `C#4_minor_seventh`
    pub stable_id: String,
}

/// Name `chord`, built as a `chord_type`
///
/// Both names use the chord's root, its lowest pitch, which is not
/// necessarily the pitch the chord was stacked on.
pub fn derive_name(chord: &Chord, chord_type: ChordType) -> ChordName {
    let root = chord.root();
    ChordName {
        display_name: format!("{} {}", root.pretty_name(), chord_type.pretty_label()),
        stable_id: format!("{}_{}", root, chord_type.long_token()),
    }
}

/// The stable ids issued during one run
#[derive(Debug, Default)]
pub struct NameRegistry {
    issued: BTreeMap<String, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` for `chord`
    ///
    /// Registering the same chord and name again is a no-op returning
    /// `false`. A different chord under an issued id is a collision.
    pub fn register(&mut self, name: &ChordName, chord: &Chord) -> Result<bool, NamingCollision> {
        let members = describe(chord, &name.display_name);

        match self.issued.get(&name.stable_id) {
            Some(existing) if *existing == members => Ok(false),
            Some(existing) => Err(NamingCollision {
                stable_id: name.stable_id.clone(),
                first: existing.clone(),
                second: members,
            }),
            None => {
                self.issued.insert(name.stable_id.clone(), members);
                Ok(true)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    /// Issued ids in sorted order
    pub fn stable_ids(&self) -> impl Iterator<Item = &str> {
        self.issued.keys().map(String::as_str)
    }
}

fn describe(chord: &Chord, display_name: &str) -> String {
    let members: Vec<String> = chord.pitches().map(ToString::to_string).collect();
    format!("{} [{}]", display_name, members.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{build_chord, build_chord_with, Interval, Pitch};

    fn p(s: &str) -> Pitch {
        s.parse().unwrap()
    }

    fn chord(root: &str, chord_type: ChordType) -> Chord {
        build_chord(p(root), chord_type.intervals()).unwrap()
    }

    #[test]
    fn test_c_major_seventh() {
        let name = derive_name(&chord("C4", ChordType::MajorSeventh), ChordType::MajorSeventh);
        assert_eq!(name.display_name, "C major seventh");
        assert_eq!(name.stable_id, "C4_major_seventh");
    }

    #[test]
    fn test_accidentals_pretty_and_ascii() {
        let name = derive_name(&chord("Db4", ChordType::DominantSeventh), ChordType::DominantSeventh);
        assert_eq!(name.display_name, "D♭ dominant seventh");
        assert_eq!(name.stable_id, "Db4_dominant_seventh");
        assert!(name.stable_id.is_ascii());
    }

    #[test]
    fn test_name_uses_lowest_pitch() {
        let intervals = [Interval::PERFECT_UNISON, Interval::new(-3, -2)];
        let chord = build_chord(p("C4"), &intervals).unwrap();
        let name = derive_name(&chord, ChordType::MinorSeventh);
        assert_eq!(name.stable_id, "A3_minor_seventh");
    }

    #[test]
    fn test_chord_types_never_share_ids() {
        let mut registry = NameRegistry::new();
        for chord_type in ChordType::ALL {
            let chord = chord("G4", chord_type);
            assert!(registry.register(&derive_name(&chord, chord_type), &chord).unwrap());
        }
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_reregistering_same_chord_is_noop() {
        let mut registry = NameRegistry::new();
        let chord = chord("E4", ChordType::MinorSeventh);
        let name = derive_name(&chord, ChordType::MinorSeventh);
        assert!(registry.register(&name, &chord).unwrap());
        assert!(!registry.register(&name, &chord).unwrap());
        assert_eq!(registry.stable_ids().collect::<Vec<_>>(), vec!["E4_minor_seventh"]);
    }

    #[test]
    fn test_collision_is_reported() {
        let intervals = [
            Interval::PERFECT_UNISON,
            Interval::new(6, 3),
            Interval::DIMINISHED_FIFTH,
        ];
        let collapsed = build_chord(p("C4"), &intervals).unwrap();
        let kept = build_chord_with(p("C4"), &intervals, true).unwrap();

        let mut registry = NameRegistry::new();
        let name = derive_name(&collapsed, ChordType::DominantSeventh);
        registry.register(&name, &collapsed).unwrap();

        let err = registry
            .register(&derive_name(&kept, ChordType::DominantSeventh), &kept)
            .unwrap_err();
        assert_eq!(err.stable_id, "C4_dominant_seventh");
        assert!(err.second.contains("Gb4"));
    }
}
