//! Root enumeration
//!
//! Walks every absolute offset of a [`RootRange`], spells it every possible
//! way and keeps the spellings a [`SpellingPolicy`] admits. The union is
//! returned in the total pitch order, so callers iterate roots the same
//! way on every run.

pub mod policy;

pub use policy::SpellingPolicy;

use std::collections::BTreeSet;

use crate::models::{AbsoluteSemitoneOffset, Pitch, RootRange};

/// Roots of a range plus the offsets that admitted no spelling
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootEnumeration {
    pub roots: Vec<Pitch>,
    pub empty_offsets: Vec<AbsoluteSemitoneOffset>,
}

/// Sorted, deduplicated roots of `range` under `policy`
pub fn enumerate_roots(range: &RootRange, policy: &SpellingPolicy) -> Vec<Pitch> {
    survey_roots(range, policy).roots
}

/// Like [`enumerate_roots`], also reporting offsets that contributed nothing
pub fn survey_roots(range: &RootRange, policy: &SpellingPolicy) -> RootEnumeration {
    let survey = survey_with(range, |pitch, spellings| policy.admits(pitch, spellings));

    if survey.roots.is_empty() {
        log::warn!("Root range {} yields no roots under {:?}", range, policy);
    }

    survey
}

/// Enumerate roots with an arbitrary admission predicate
///
/// The predicate sees the candidate and every spelling of its offset.
pub fn enumerate_roots_with<F>(range: &RootRange, admit: F) -> Vec<Pitch>
where
    F: Fn(&Pitch, &[Pitch]) -> bool,
{
    survey_with(range, admit).roots
}

fn survey_with<F>(range: &RootRange, admit: F) -> RootEnumeration
where
    F: Fn(&Pitch, &[Pitch]) -> bool,
{
    let mut roots = BTreeSet::new();
    let mut empty_offsets = Vec::new();

    for offset in range.offsets() {
        let spellings = Pitch::spellings(offset);
        let before = roots.len();

        roots.extend(spellings.iter().filter(|pitch| admit(pitch, &spellings)).copied());

        if roots.len() == before {
            log::debug!(
                "Offset {} ({}) has no admitted spelling; contributes no roots",
                offset,
                spellings
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("/")
            );
            empty_offsets.push(offset);
        }
    }

    RootEnumeration {
        roots: roots.into_iter().collect(),
        empty_offsets,
    }
}
