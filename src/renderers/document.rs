//! Notation document emission
//!
//! A [`NotationDocument`] is the renderable form of one chord: its pitches
//! in ascending order, stacked into a single whole-note sonority, plus the
//! clef to draw them on. It is self-contained; serializing it never needs
//! anything but the document itself.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::models::{Chord, Clef, Letter, Pitch};

/// One notehead of the sonority
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentNote {
    pub step: Letter,
    /// Signed semitone delta, as written to MusicXML `<alter>`
    pub alter: i8,
    pub octave: i32,
    /// Stacked onto the previous note's beat
    pub chord: bool,
}

impl DocumentNote {
    fn from_pitch(pitch: &Pitch, chord: bool) -> Self {
        Self {
            step: pitch.letter,
            alter: pitch.alteration.semitone_offset(),
            octave: pitch.octave,
            chord,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NotationDocument {
    pub clef: Clef,
    pub notes: Vec<DocumentNote>,
}

/// Serialize `chord` for drawing on `clef`
///
/// The first (lowest) pitch opens the stack; every later pitch is marked
/// as a chord tone of it.
pub fn emit(chord: &Chord, clef: Clef) -> NotationDocument {
    let notes = chord
        .pitches()
        .enumerate()
        .map(|(i, pitch)| DocumentNote::from_pitch(pitch, i != 0))
        .collect();

    NotationDocument { clef, notes }
}

impl NotationDocument {
    /// Complete MusicXML 3.1 partwise document
    pub fn to_musicxml(&self) -> String {
        super::musicxml::to_musicxml(self)
    }

    /// LilyPond source in absolute pitch with English note names
    pub fn to_lilypond(&self) -> Result<String, RenderError> {
        super::lilypond::to_lilypond(self)
    }
}
