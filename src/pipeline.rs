//! Chord corpus generation
//!
//! Roots are enumerated once; for every configured chord type each root is
//! stacked into a chord, named, emitted and rendered. Chord and render
//! failures stay with their chord and are collected in the
//! [`CorpusReport`]; a naming collision or an I/O failure on the output
//! directory aborts the run.
//!
//! Output layout:
//!
//! ```text
//! <out>/deck.json
//! <out>/<chord_type_token>/<stable_id>.png
//! ```

use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::config::GenerationConfig;
use crate::deck::{chord_deck, chord_note, Deck};
use crate::enumeration::survey_roots;
use crate::error::FlashcardError;
use crate::models::{build_chord, AbsoluteSemitoneOffset, Chord, ChordType, Pitch};
use crate::naming::{derive_name, NameRegistry};
use crate::renderers::{emit, Renderer};

/// Manifest written at the root of the output directory
pub const DECK_MANIFEST: &str = "deck.json";

/// A chord whose image could not be produced
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RenderFailure {
    pub stable_id: String,
    pub error: String,
}

/// A root that could not be stacked into a chord
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SkippedRoot {
    pub root: Pitch,
    pub chord_type: ChordType,
    pub reason: String,
}

/// Outcome of one corpus run
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CorpusReport {
    /// Notes written to the deck, one per rendered chord
    pub notes: usize,
    /// Stable ids of every chord that was named, rendered or not
    pub stable_ids: Vec<String>,
    pub failures: Vec<RenderFailure>,
    pub skipped: Vec<SkippedRoot>,
    /// Offsets of the root range that admitted no spelling
    pub empty_offsets: Vec<AbsoluteSemitoneOffset>,
}

impl CorpusReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }
}

/// Chords of one type on `roots`, deduplicated and in pitch order
///
/// Roots whose chord cannot be spelled are reported through `skipped`.
pub fn build_chords(
    roots: &[Pitch],
    chord_type: ChordType,
    skipped: &mut Vec<SkippedRoot>,
) -> BTreeSet<Chord> {
    let mut chords = BTreeSet::new();
    for &root in roots {
        match build_chord(root, chord_type.intervals()) {
            Ok(chord) => {
                if !chords.insert(chord) {
                    log::debug!("{} {} duplicates an earlier chord", root, chord_type);
                }
            }
            Err(e) => {
                log::warn!("Skipping {} {}: {}", root, chord_type, e);
                skipped.push(SkippedRoot {
                    root,
                    chord_type,
                    reason: e.to_string(),
                });
            }
        }
    }
    chords
}

/// Generate, render and package the chord image corpus into `out_dir`
pub fn generate_chord_corpus(
    config: &GenerationConfig,
    renderer: &dyn Renderer,
    out_dir: &Path,
) -> Result<CorpusReport, FlashcardError> {
    let mut report = CorpusReport::default();
    let survey = survey_roots(&config.root_range, &config.policy);
    report.empty_offsets = survey.empty_offsets;

    log::info!(
        "{} roots in {} on the {} clef, rendering with {}",
        survey.roots.len(),
        config.root_range,
        config.clef,
        renderer.name()
    );

    fs::create_dir_all(out_dir).map_err(|e| FlashcardError::io(out_dir, e))?;

    let mut registry = NameRegistry::new();
    let mut deck = chord_deck(config.clef, config.deck_name.as_deref());

    for &chord_type in &config.chord_types {
        let chords = build_chords(&survey.roots, chord_type, &mut report.skipped);
        log::info!("--- {} chords: {} ---", chord_type, chords.len());

        let type_dir = out_dir.join(chord_type.long_token());
        fs::create_dir_all(&type_dir).map_err(|e| FlashcardError::io(&type_dir, e))?;

        for chord in &chords {
            let name = derive_name(chord, chord_type);
            if !registry.register(&name, chord)? {
                continue;
            }

            let document = emit(chord, config.clef);
            let image = match renderer.render(&document) {
                Ok(image) => image,
                Err(e) => {
                    log::warn!("Failed to render {}: {}", name.stable_id, e);
                    report.failures.push(RenderFailure {
                        stable_id: name.stable_id.clone(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            let file_name = format!("{}.{}", name.stable_id, renderer.extension());
            let path = type_dir.join(&file_name);
            fs::write(&path, image).map_err(|e| FlashcardError::io(&path, e))?;
            log::debug!("Wrote {}", path.display());

            let media_file = format!("{}/{}", chord_type.long_token(), file_name);
            deck.add_note(chord_note(&media_file, &name)?);
        }
    }

    deck.write_json(&out_dir.join(DECK_MANIFEST))?;

    report.notes = deck.len();
    report.stable_ids = registry.stable_ids().map(str::to_string).collect();
    log_summary(&report);
    Ok(report)
}

/// Chord deck of an earlier run
pub fn read_chord_deck(out_dir: &Path) -> Result<Deck, FlashcardError> {
    Deck::read_json(&out_dir.join(DECK_MANIFEST))
}

fn log_summary(report: &CorpusReport) {
    log::info!(
        "{} notes written, {} render failures, {} roots skipped",
        report.notes,
        report.failures.len(),
        report.skipped.len()
    );
    if !report.empty_offsets.is_empty() {
        log::info!(
            "{} offsets in range had no admitted spelling",
            report.empty_offsets.len()
        );
    }
}
