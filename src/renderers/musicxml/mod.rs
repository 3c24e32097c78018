//! MusicXML export module
//!
//! Provides MusicXML 3.1 export for notation documents.
//!
//! # Module Structure
//!
//! - **builder**: MusicXML XML structure building
//! - `to_musicxml()`: emits one document as a single whole-note measure

pub mod builder;

pub use builder::MusicXmlBuilder;

use crate::renderers::document::NotationDocument;

/// Divisions per quarter note
const DIVISIONS: usize = 1;

/// A whole note in `DIVISIONS` units
const WHOLE_NOTE_DURATION: usize = 4 * DIVISIONS;

/// Serialize a notation document as a complete MusicXML score
pub fn to_musicxml(document: &NotationDocument) -> String {
    let mut builder = MusicXmlBuilder::new(document.clef);
    builder.start_measure(DIVISIONS);
    for note in &document.notes {
        builder.write_note(note, WHOLE_NOTE_DURATION, "whole");
    }
    builder.end_measure();
    builder.finalize()
}
