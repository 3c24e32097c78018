//! Renderers module
//!
//! Serializes chords into notation documents and hands those to external
//! tools that draw them.

pub mod document;
pub mod external;
pub mod lilypond;
pub mod musicxml;

// Re-export commonly used types
pub use document::{emit, DocumentNote, NotationDocument};
pub use external::{locate_output, LilyPondRenderer, MuseScoreRenderer, Renderer, RendererKind};
pub use musicxml::to_musicxml;
