//! Which spellings of an offset may serve as chord roots

use serde::{Deserialize, Serialize};

use crate::models::{Alteration, Pitch};

/// Admission rule for root spellings
///
/// `allowed` filters by alteration. With `prefer_naturals`, an offset that
/// has a natural spelling admits only that spelling, which drops `E#`,
/// `Fb`, `B#` and `Cb` from the conventional set.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SpellingPolicy {
    pub allowed: Vec<Alteration>,
    pub prefer_naturals: bool,
}

impl SpellingPolicy {
    /// Naturals, sharps and flats; the 17 roots of a keyboard octave
    pub fn conventional() -> Self {
        Self {
            allowed: vec![Alteration::Flat, Alteration::Natural, Alteration::Sharp],
            prefer_naturals: true,
        }
    }

    /// Every single alteration, including `E#`, `Fb`, `B#` and `Cb`
    pub fn single_alterations() -> Self {
        Self {
            prefer_naturals: false,
            ..Self::conventional()
        }
    }

    /// Every spelling, double alterations included
    pub fn any() -> Self {
        Self {
            allowed: Alteration::ALL.to_vec(),
            prefer_naturals: false,
        }
    }

    /// Whether `pitch` is admitted, given every spelling of its offset
    pub fn admits(&self, pitch: &Pitch, spellings: &[Pitch]) -> bool {
        if !self.allowed.contains(&pitch.alteration) {
            return false;
        }
        if self.prefer_naturals && pitch.alteration != Alteration::Natural {
            let has_natural = spellings
                .iter()
                .any(|s| s.alteration == Alteration::Natural && self.allowed.contains(&s.alteration));
            return !has_natural;
        }
        true
    }
}

impl Default for SpellingPolicy {
    fn default() -> Self {
        Self::conventional()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pitch {
        s.parse().unwrap()
    }

    #[test]
    fn test_conventional_rejects_double_alterations() {
        let policy = SpellingPolicy::conventional();
        let spellings = Pitch::spellings(p("D4").absolute_semitone_offset());
        assert!(policy.admits(&p("D4"), &spellings));
        assert!(!policy.admits(&p("C##4"), &spellings));
        assert!(!policy.admits(&p("Ebb4"), &spellings));
    }

    #[test]
    fn test_prefer_naturals_drops_white_key_respellings() {
        let spellings = Pitch::spellings(p("F4").absolute_semitone_offset());
        assert!(!SpellingPolicy::conventional().admits(&p("E#4"), &spellings));
        assert!(SpellingPolicy::single_alterations().admits(&p("E#4"), &spellings));
    }

    #[test]
    fn test_black_keys_keep_both_spellings() {
        let policy = SpellingPolicy::conventional();
        let spellings = Pitch::spellings(p("C#4").absolute_semitone_offset());
        assert!(policy.admits(&p("C#4"), &spellings));
        assert!(policy.admits(&p("Db4"), &spellings));
    }

    #[test]
    fn test_deserialize_partial_policy() {
        let policy: SpellingPolicy = serde_yaml::from_str("prefer_naturals: false").unwrap();
        assert_eq!(policy, SpellingPolicy::single_alterations());

        let policy: SpellingPolicy = serde_json::from_str(r#"{"allowed": [0]}"#).unwrap();
        assert_eq!(policy.allowed, vec![Alteration::Natural]);
        assert!(policy.prefer_naturals);
    }
}
