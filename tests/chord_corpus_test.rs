// Test: chord corpus generation end to end
//
// Input: default configuration rendered with a renderer that returns MusicXML
// Expected: stable ids, chord membership and deck manifests are identical
// across two runs, and each written document parses as MusicXML

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

use chord_flashcards::models::{build_chord, Letter};
use chord_flashcards::pipeline::{generate_chord_corpus, read_chord_deck};
use chord_flashcards::{
    derive_name, emit, ChordType, Clef, GenerationConfig, NotationDocument, Pitch, RenderError,
    Renderer,
};

struct MusicXmlRenderer;

impl Renderer for MusicXmlRenderer {
    fn name(&self) -> &str {
        "musicxml"
    }

    fn extension(&self) -> &str {
        "xml"
    }

    fn render(&self, document: &NotationDocument) -> Result<Vec<u8>, RenderError> {
        Ok(document.to_musicxml().into_bytes())
    }
}

/// (step, alter, octave, chord) for every note of a MusicXML document
fn notes(xml: &str) -> Vec<(String, i32, i32, bool)> {
    // Emitted documents carry the MusicXML DOCTYPE
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options).unwrap();
    doc.descendants()
        .filter(|n| n.has_tag_name("note"))
        .map(|note| {
            let child = |name: &str| {
                note.descendants()
                    .find(|n| n.has_tag_name(name))
                    .and_then(|n| n.text())
                    .unwrap()
                    .to_string()
            };
            (
                child("step"),
                child("alter").parse().unwrap(),
                child("octave").parse().unwrap(),
                note.children().any(|n| n.has_tag_name("chord")),
            )
        })
        .collect()
}

fn collect_files(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            for inner in collect_files(&path) {
                let name = format!(
                    "{}/{}",
                    path.file_name().unwrap().to_string_lossy(),
                    inner.0
                );
                files.push((name, inner.1));
            }
        } else {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            files.push((name, fs::read(&path).unwrap()));
        }
    }
    files.sort();
    files
}

#[test]
fn test_c_major_seventh_scenario() {
    let root: Pitch = "C4".parse().unwrap();
    let chord = build_chord(root, ChordType::MajorSeventh.intervals()).unwrap();
    let name = derive_name(&chord, ChordType::MajorSeventh);

    assert_eq!(name.display_name, "C major seventh");
    assert_eq!(name.stable_id, "C4_major_seventh");

    let xml = emit(&chord, Clef::G).to_musicxml();
    assert_eq!(
        notes(&xml),
        vec![
            ("C".to_string(), 0, 4, false),
            ("E".to_string(), 0, 4, true),
            ("G".to_string(), 0, 4, true),
            ("B".to_string(), 0, 4, true),
        ]
    );
}

#[test]
fn test_flat_root_is_spelled_with_flats() {
    let chord = build_chord("Eb4".parse().unwrap(), ChordType::MinorSeventh.intervals()).unwrap();
    let document = emit(&chord, Clef::G);

    let steps: Vec<(Letter, i8)> = document.notes.iter().map(|n| (n.step, n.alter)).collect();
    assert_eq!(
        steps,
        vec![
            (Letter::E, -1),
            (Letter::G, -1),
            (Letter::B, -1),
            (Letter::D, -1)
        ]
    );
}

#[test]
fn test_regeneration_is_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let config = GenerationConfig::default();

    let a = generate_chord_corpus(&config, &MusicXmlRenderer, first.path()).unwrap();
    let b = generate_chord_corpus(&config, &MusicXmlRenderer, second.path()).unwrap();

    assert_eq!(a, b);
    assert_eq!(collect_files(first.path()), collect_files(second.path()));
    assert_eq!(
        read_chord_deck(first.path()).unwrap(),
        read_chord_deck(second.path()).unwrap()
    );
}

#[test]
fn test_every_written_document_is_a_four_note_chord() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        chord_types: vec![ChordType::DominantSeventh],
        ..GenerationConfig::default()
    };
    let report = generate_chord_corpus(&config, &MusicXmlRenderer, dir.path()).unwrap();
    assert_eq!(report.notes, 17);

    let deck = read_chord_deck(dir.path()).unwrap();
    for media in &deck.media_files {
        let xml = fs::read_to_string(dir.path().join(media)).unwrap();
        let notes = notes(&xml);
        assert_eq!(notes.len(), 4, "{}", media);
        assert!(!notes[0].3);
        assert!(notes[1..].iter().all(|n| n.3));
    }

    let guids: Vec<&str> = deck.notes.iter().map(|n| n.guid.as_str()).collect();
    assert_eq!(guids.first(), Some(&"C4_dominant_seventh"));
    assert_eq!(guids.last(), Some(&"B4_dominant_seventh"));
}
