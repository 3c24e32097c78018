//! Models module for chord generation
//!
//! Value types for spelled pitches, intervals, chords and the clefs and
//! ranges they are generated for.

pub mod chord;
pub mod chord_type;
pub mod clef;
pub mod interval;
pub mod pitch;
pub mod range;

// Re-export commonly used types
pub use chord::{build_chord, build_chord_with, Chord, Voice};
pub use chord_type::ChordType;
pub use clef::Clef;
pub use interval::Interval;
pub use pitch::{AbsoluteSemitoneOffset, Alteration, Letter, Pitch};
pub use range::RootRange;
