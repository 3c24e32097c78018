//! Chord image deck: picture of the chord on the front, its name on the back

use serde::Serialize;

use super::templates::{render_card, CardTemplate};
use super::{Deck, DeckNote};
use crate::error::FlashcardError;
use crate::models::Clef;
use crate::naming::ChordName;

pub const CHORD_DECK_ID: u64 = 1456594836;
pub const CHORD_MODEL_ID: u64 = 2136485516;

#[derive(Serialize)]
struct FrontContext<'a> {
    image: &'a str,
}

#[derive(Serialize)]
struct BackContext<'a> {
    display_name: &'a str,
}

/// Empty chord image deck for `clef`
pub fn chord_deck(clef: Clef, name: Option<&str>) -> Deck {
    let name = match name {
        Some(name) => name.to_string(),
        None => format!("Seventh chords on the {} clef", clef),
    };
    Deck::new(CHORD_DECK_ID, CHORD_MODEL_ID, name)
}

/// Note for one rendered chord
///
/// `media_file` is relative to the deck manifest; the card references the
/// bare file name, since the packager flattens media into one folder.
pub fn chord_note(media_file: &str, name: &ChordName) -> Result<DeckNote, FlashcardError> {
    let file_name = media_file.rsplit('/').next().unwrap_or(media_file);
    let image = image_src(file_name);

    Ok(DeckNote {
        media_file: Some(media_file.to_string()),
        front_html: render_card(
            CardTemplate::ChordImageFront,
            &FrontContext { image: &image },
        )?,
        back_html: render_card(
            CardTemplate::ChordImageBack,
            &BackContext {
                display_name: &name.display_name,
            },
        )?,
        guid: name.stable_id.clone(),
        sort_field: name.stable_id.clone(),
    })
}

/// File name as an `<img src>` URL; `#` would otherwise start a fragment
fn image_src(file_name: &str) -> String {
    file_name.replace('%', "%25").replace('#', "%23")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_name_follows_clef() {
        assert_eq!(chord_deck(Clef::F, None).name, "Seventh chords on the F clef");
        assert_eq!(chord_deck(Clef::G, None).name, "Seventh chords on the G clef");
        assert_eq!(chord_deck(Clef::G, Some("Mine")).name, "Mine");
    }

    #[test]
    fn test_chord_note_fields() {
        let name = ChordName {
            display_name: "F♯ minor seventh".to_string(),
            stable_id: "F#3_minor_seventh".to_string(),
        };
        let note = chord_note("minor_seventh/F#3_minor_seventh.png", &name).unwrap();

        assert_eq!(note.guid, "F#3_minor_seventh");
        assert_eq!(note.sort_field, note.guid);
        assert!(note
            .front_html
            .contains("<img src=\"F%233_minor_seventh.png\">"));
        assert!(!note.front_html.contains('#'));
        assert!(!note.front_html.contains("minor_seventh/"));
        assert!(note.back_html.contains("F♯ minor seventh"));
        assert_eq!(
            note.media_file.as_deref(),
            Some("minor_seventh/F#3_minor_seventh.png")
        );
    }

    #[test]
    fn test_natural_image_src_unchanged() {
        let name = ChordName {
            display_name: "C major seventh".to_string(),
            stable_id: "C4_major_seventh".to_string(),
        };
        let note = chord_note("major_seventh/C4_major_seventh.png", &name).unwrap();
        assert!(note.front_html.contains("<img src=\"C4_major_seventh.png\">"));
        assert_eq!(image_src("Bb4_minor_seventh.png"), "Bb4_minor_seventh.png");
    }
}
