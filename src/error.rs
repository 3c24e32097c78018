//! Error types for corpus generation
//!
//! Parse and configuration errors are fatal and surface before any work
//! begins. Chord and render errors are scoped to a single chord: the
//! pipeline logs them and moves on. A naming collision means the identity
//! invariant is broken and aborts the run.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Interval, Pitch};

/// Malformed pitch, clef, range or option text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid pitch '{0}': expected Letter[#|b]*Octave, e.g. C#4")]
    InvalidPitch(String),

    #[error("Invalid pitch '{0}': more than two accidentals")]
    TooManyAccidentals(String),

    #[error("Invalid pitch '{0}': sharps and flats mixed")]
    MixedAccidentals(String),

    #[error("Invalid pitch '{0}': octave must be between -1 and 9")]
    OctaveOutOfRange(String),

    #[error("Invalid clef '{0}': must be 'G' or 'F'")]
    InvalidClef(String),

    #[error("Invalid root range '{0}': expected 'root1,root2'")]
    InvalidRange(String),

    #[error("Root range end {end} is below its start {start}")]
    ReversedRange { start: String, end: String },

    #[error("Unknown chord type '{0}'")]
    UnknownChordType(String),

    #[error("Unknown renderer '{0}': must be 'musescore' or 'lilypond'")]
    UnknownRenderer(String),
}

/// Chord construction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// Spelling the upper note would need more than a double alteration
    #[error("{interval} above {pitch} needs an alteration of {delta} semitones")]
    AlterationOutOfRange {
        pitch: Pitch,
        interval: Interval,
        delta: i32,
    },

    #[error("Chord on {root} has no intervals")]
    NoIntervals { root: Pitch },
}

/// External renderer failures, reported per chord
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0} is not installed or not found in PATH")]
    ToolNotFound(String),

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("Renderer produced no image at {}", .0.display())]
    MissingOutput(PathBuf),

    #[error("LilyPond template failed: {0}")]
    Template(#[from] mustache::Error),

    #[error("Render I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Two chords of one run derived the same stable id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Stable id '{stable_id}' derived for both '{first}' and '{second}'")]
pub struct NamingCollision {
    pub stable_id: String,
    pub first: String,
    pub second: String,
}

/// Configuration file failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format {}: expected .yaml, .yml or .json", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Top-level error type
#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Chord(#[from] ChordError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Collision(#[from] NamingCollision),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] mustache::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize deck manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl FlashcardError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FlashcardError::Io {
            path: path.into(),
            source,
        }
    }
}
