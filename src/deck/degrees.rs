//! Diatonic seventh chord decks: which chord quality sits on each degree

use serde::Serialize;
use std::path::Path;

use super::templates::{render_card, CardTemplate};
use super::{Deck, DeckNote};
use crate::error::FlashcardError;
use crate::models::ChordType;

use ChordType::{
    DominantSeventh as Dom7, HalfDiminishedSeventh as Min7b5, MajorSeventh as Maj7,
    MinorSeventh as Min7,
};

/// Key mode of the scale whose degrees are asked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Major,
    /// Natural minor
    Minor,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Major, Mode::Minor];

    /// Seventh chord on degrees 1 through 7
    pub fn seventh_chords(self) -> [ChordType; 7] {
        match self {
            Mode::Major => [Maj7, Min7, Min7, Maj7, Dom7, Min7, Min7b5],
            Mode::Minor => [Min7, Min7b5, Maj7, Min7, Min7, Maj7, Dom7],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }

    pub fn deck_id(self) -> u64 {
        match self {
            Mode::Major => 1456594839,
            Mode::Minor => 1456594840,
        }
    }

    pub fn model_id(self) -> u64 {
        match self {
            Mode::Major => 2136485519,
            Mode::Minor => 2136485520,
        }
    }

    /// Manifest file name
    pub fn file_name(self) -> String {
        format!("seventh_chords_{}.json", self.name())
    }
}

#[derive(Serialize)]
struct DegreeContext<'a> {
    degree: usize,
    mode: &'a str,
    symbol: &'a str,
}

/// Seven-note deck for `mode`
pub fn degree_deck(mode: Mode) -> Result<Deck, FlashcardError> {
    let mut deck = Deck::new(
        mode.deck_id(),
        mode.model_id(),
        format!("Seventh chords ({} key)", mode.name()),
    );

    for (index, chord_type) in mode.seventh_chords().iter().enumerate() {
        let context = DegreeContext {
            degree: index + 1,
            mode: mode.name(),
            symbol: chord_type.short_symbol(),
        };

        deck.add_note(DeckNote {
            media_file: None,
            front_html: render_card(CardTemplate::DegreeFront, &context)?,
            back_html: render_card(CardTemplate::DegreeBack, &context)?,
            guid: format!(
                "seventh_chords_{}-{}-{}",
                mode.name(),
                context.degree,
                context.symbol
            ),
            sort_field: context.degree.to_string(),
        });
    }

    Ok(deck)
}

/// Write both degree decks into `out_dir`
pub fn write_degree_decks(out_dir: &Path) -> Result<usize, FlashcardError> {
    std::fs::create_dir_all(out_dir).map_err(|e| FlashcardError::io(out_dir, e))?;
    let mut written = 0;
    for mode in Mode::ALL {
        let deck = degree_deck(mode)?;
        deck.write_json(&out_dir.join(mode.file_name()))?;
        written += deck.len();
    }
    Ok(written)
}
