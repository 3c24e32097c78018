//! LilyPond export
//!
//! Writes a notation document as LilyPond source: the chord in absolute
//! pitch with English note names (`cs`, `ef`, `bff`), rendered through a
//! Mustache template.

use serde::Serialize;

use crate::error::RenderError;
use crate::models::Letter;
use crate::renderers::document::{DocumentNote, NotationDocument};

/// LilyPond language version written to `\version`
pub const LILYPOND_VERSION: &str = "2.24.0";

const CHORD_TEMPLATE: &str = include_str!("templates/chord.ly.mustache");

/// Context data for template rendering
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    pub version: String,
    /// `treble` or `bass`
    pub clef: String,
    /// The sonority, e.g. `<c' e' g' b'>1`
    pub chord: String,
}

/// Serialize a notation document as LilyPond source
pub fn to_lilypond(document: &NotationDocument) -> Result<String, RenderError> {
    let context = TemplateContext {
        version: LILYPOND_VERSION.to_string(),
        clef: document.clef.lilypond_name().to_string(),
        chord: chord_expression(&document.notes),
    };
    render_template(&context)
}

fn render_template(context: &TemplateContext) -> Result<String, RenderError> {
    let template = mustache::compile_str(CHORD_TEMPLATE)?;
    Ok(template.render_to_string(context)?)
}

/// `<…>1` with every note of the document; notes are already ascending
fn chord_expression(notes: &[DocumentNote]) -> String {
    let pitches: Vec<String> = notes.iter().map(note_name).collect();
    format!("<{}>1", pitches.join(" "))
}

/// English note name plus absolute octave marks (`c'` is C4)
fn note_name(note: &DocumentNote) -> String {
    let letter = match note.step {
        Letter::C => "c",
        Letter::D => "d",
        Letter::E => "e",
        Letter::F => "f",
        Letter::G => "g",
        Letter::A => "a",
        Letter::B => "b",
    };

    let accidental = match note.alter {
        -2 => "ff",
        -1 => "f",
        1 => "s",
        2 => "ss",
        _ => "",
    };

    let marks = note.octave - 3;
    let octave_marks = if marks >= 0 {
        "'".repeat(marks as usize)
    } else {
        ",".repeat(marks.unsigned_abs() as usize)
    };

    format!("{}{}{}", letter, accidental, octave_marks)
}
