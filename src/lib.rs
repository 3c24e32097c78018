//! Chord flashcard generation
//!
//! Enumerates chords over a root range with correct enharmonic spelling,
//! emits each as a notation document, names it with a stable id and packs
//! the rendered images into flashcard decks. Interval and scale-degree
//! decks are generated alongside.

pub mod config;
pub mod deck;
pub mod enumeration;
pub mod error;
pub mod models;
pub mod naming;
pub mod parse;
pub mod pipeline;
pub mod renderers;
pub mod transposition;

// Re-export commonly used types
pub use config::GenerationConfig;
pub use enumeration::{enumerate_roots, enumerate_roots_with, survey_roots, SpellingPolicy};
pub use error::{ChordError, FlashcardError, NamingCollision, ParseError, RenderError};
pub use models::*;
pub use naming::{derive_name, ChordName, NameRegistry};
pub use pipeline::{generate_chord_corpus, CorpusReport};
pub use renderers::{emit, NotationDocument, Renderer, RendererKind};
