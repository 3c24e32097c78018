//! Interval decks
//!
//! For every conventional root of octave 4 and every interval of the major
//! scale, one deck asks for the note above the root and the other for the
//! root below the note.

use serde::Serialize;
use std::path::Path;

use super::templates::{render_card, CardTemplate};
use super::{Deck, DeckNote};
use crate::enumeration::{enumerate_roots, SpellingPolicy};
use crate::error::FlashcardError;
use crate::models::{Interval, Pitch, RootRange};

/// Which way the question runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntervalDirection {
    /// Root and interval given, note asked
    Forward,
    /// Note and interval given, root asked
    Backward,
}

impl IntervalDirection {
    pub const ALL: [IntervalDirection; 2] = [IntervalDirection::Forward, IntervalDirection::Backward];

    pub fn variant(self) -> u8 {
        match self {
            IntervalDirection::Forward => 1,
            IntervalDirection::Backward => 2,
        }
    }

    pub fn deck_id(self) -> u64 {
        match self {
            IntervalDirection::Forward => 1456594837,
            IntervalDirection::Backward => 1456594838,
        }
    }

    pub fn model_id(self) -> u64 {
        match self {
            IntervalDirection::Forward => 2136485517,
            IntervalDirection::Backward => 2136485518,
        }
    }

    pub fn deck_name(self) -> String {
        format!("Intervals (variant {})", self.variant())
    }

    /// Manifest file name
    pub fn file_name(self) -> String {
        format!("variant{}.json", self.variant())
    }

    fn templates(self) -> (CardTemplate, CardTemplate) {
        match self {
            IntervalDirection::Forward => (
                CardTemplate::IntervalForwardFront,
                CardTemplate::IntervalForwardBack,
            ),
            IntervalDirection::Backward => (
                CardTemplate::IntervalBackwardFront,
                CardTemplate::IntervalBackwardBack,
            ),
        }
    }
}

#[derive(Serialize)]
struct IntervalContext<'a> {
    root: &'a str,
    interval: &'a str,
    note: &'a str,
}

/// The 17 conventional roots from C4 up to B4
pub fn interval_roots() -> Vec<Pitch> {
    let octave = RootRange::octave(4);
    enumerate_roots(&octave, &SpellingPolicy::conventional())
}

/// Both interval decks, forward first
pub fn interval_decks() -> Result<Vec<Deck>, FlashcardError> {
    let roots = interval_roots();
    let mut decks: Vec<Deck> = IntervalDirection::ALL
        .iter()
        .map(|d| Deck::new(d.deck_id(), d.model_id(), d.deck_name()))
        .collect();

    for root in &roots {
        for interval in Interval::SCALE_STEPS {
            let note = (*root + interval)?;
            let (root_name, note_name) = (root.ascii_name(), note.ascii_name());
            let interval_name = interval_label(interval);
            let context = IntervalContext {
                root: &root_name,
                interval: &interval_name,
                note: &note_name,
            };

            for (deck, direction) in decks.iter_mut().zip(IntervalDirection::ALL) {
                deck.add_note(interval_note(direction, &context)?);
            }
        }
    }

    Ok(decks)
}

/// Write `variant1.json` and `variant2.json` into `out_dir`
pub fn write_interval_decks(out_dir: &Path) -> Result<usize, FlashcardError> {
    std::fs::create_dir_all(out_dir).map_err(|e| FlashcardError::io(out_dir, e))?;
    let mut written = 0;
    for (deck, direction) in interval_decks()?.iter().zip(IntervalDirection::ALL) {
        deck.write_json(&out_dir.join(direction.file_name()))?;
        written += deck.len();
    }
    Ok(written)
}

fn interval_label(interval: Interval) -> String {
    interval
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| interval.to_string())
}

fn interval_note(
    direction: IntervalDirection,
    context: &IntervalContext<'_>,
) -> Result<DeckNote, FlashcardError> {
    let guid = format!(
        "intervals_variant{}-{}-{}-{}",
        direction.variant(),
        context.root,
        context.interval,
        context.note
    );
    let (front, back) = direction.templates();

    Ok(DeckNote {
        media_file: None,
        front_html: render_card(front, context)?,
        back_html: render_card(back, context)?,
        sort_field: context.interval.to_string(),
        guid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_roots() {
        let roots: Vec<String> = interval_roots().iter().map(Pitch::ascii_name).collect();
        assert_eq!(
            roots,
            vec![
                "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A",
                "A#", "Bb", "B"
            ]
        );
    }

    #[test]
    fn test_deck_sizes_and_ids() {
        let decks = interval_decks().unwrap();
        assert_eq!(decks.len(), 2);
        assert_eq!(decks[0].deck_id, 1456594837);
        assert_eq!(decks[1].model_id, 2136485518);
        assert_eq!(decks[0].name, "Intervals (variant 1)");
        for deck in &decks {
            assert_eq!(deck.len(), 17 * 10);
        }
    }

    #[test]
    fn test_forward_and_backward_cards() {
        let decks = interval_decks().unwrap();
        let forward = decks[0]
            .notes
            .iter()
            .find(|n| n.guid == "intervals_variant1-C#-major third-E#")
            .unwrap();
        assert_eq!(forward.front_html, "A major third away from C# is ...");
        assert_eq!(forward.back_html, "E#");

        let backward = decks[1]
            .notes
            .iter()
            .find(|n| n.guid == "intervals_variant2-Bb-perfect fifth-F")
            .unwrap();
        assert_eq!(backward.front_html, "F is a perfect fifth away from ...");
        assert_eq!(backward.back_html, "Bb");
    }

    #[test]
    fn test_guids_unique() {
        let decks = interval_decks().unwrap();
        let mut guids: Vec<&str> = decks
            .iter()
            .flat_map(|d| d.notes.iter().map(|n| n.guid.as_str()))
            .collect();
        let total = guids.len();
        guids.sort_unstable();
        guids.dedup();
        assert_eq!(guids.len(), total);
    }
}
