//! Flashcard decks
//!
//! A [`Deck`] is the hand-off to the flashcard packager: notes made of
//! `(media_file, front_html, back_html, guid)` plus a sort field, and the
//! media files the package must carry. Decks are written as JSON
//! manifests; building the binary package is left to the packager.
//!
//! Deck and model ids are fixed so that regenerated decks update the
//! cards already imported instead of duplicating them.

pub mod chords;
pub mod degrees;
pub mod intervals;
pub mod templates;

pub use chords::{chord_deck, chord_note};
pub use degrees::{degree_deck, write_degree_decks, Mode};
pub use intervals::{interval_decks, write_interval_decks, IntervalDirection};
pub use templates::{render_card, CardTemplate};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::FlashcardError;

/// One card
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeckNote {
    /// Media file shown on the card, relative to the deck manifest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_file: Option<String>,
    pub front_html: String,
    pub back_html: String,
    /// Unique within the package and stable across regenerations
    pub guid: String,
    pub sort_field: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    pub deck_id: u64,
    pub model_id: u64,
    pub name: String,
    pub notes: Vec<DeckNote>,
    pub media_files: Vec<String>,
}

impl Deck {
    pub fn new(deck_id: u64, model_id: u64, name: impl Into<String>) -> Self {
        Self {
            deck_id,
            model_id,
            name: name.into(),
            notes: Vec::new(),
            media_files: Vec::new(),
        }
    }

    /// Append a note, registering its media file with the package
    pub fn add_note(&mut self, note: DeckNote) {
        if let Some(media) = &note.media_file {
            self.media_files.push(media.clone());
        }
        self.notes.push(note);
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Write the manifest as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<(), FlashcardError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json + "\n").map_err(|e| FlashcardError::io(path, e))?;
        log::info!(
            "Deck '{}' with {} notes written to {}",
            self.name,
            self.notes.len(),
            path.display()
        );
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self, FlashcardError> {
        let json = fs::read_to_string(path).map_err(|e| FlashcardError::io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }
}
