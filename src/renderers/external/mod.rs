//! External notation renderers
//!
//! A [`Renderer`] turns a [`NotationDocument`] into image bytes. The two
//! implementations shell out to MuseScore and LilyPond; tests inject their
//! own. Every failure comes back as a [`RenderError`] for the caller to
//! report against the one chord it concerns.

pub mod lilypond;
pub mod musescore;

pub use lilypond::LilyPondRenderer;
pub use musescore::MuseScoreRenderer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::str::FromStr;

use crate::error::{ParseError, RenderError};
use crate::renderers::document::NotationDocument;

/// Render capability: document in, image bytes out
pub trait Renderer {
    /// Tool name used in diagnostics
    fn name(&self) -> &str;

    /// Extension of the produced image, without the dot
    fn extension(&self) -> &str {
        "png"
    }

    fn render(&self, document: &NotationDocument) -> Result<Vec<u8>, RenderError>;
}

/// Renderer selection for configuration and the command line
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    #[default]
    MuseScore,
    LilyPond,
}

impl RendererKind {
    /// Build the renderer, at `resolution` dots per inch when given
    pub fn build(self, resolution: Option<u32>) -> Box<dyn Renderer> {
        match (self, resolution) {
            (RendererKind::MuseScore, Some(dpi)) => {
                Box::new(MuseScoreRenderer::new().with_resolution(dpi))
            }
            (RendererKind::MuseScore, None) => Box::new(MuseScoreRenderer::new()),
            (RendererKind::LilyPond, Some(dpi)) => {
                Box::new(LilyPondRenderer::new().with_resolution(dpi))
            }
            (RendererKind::LilyPond, None) => Box::new(LilyPondRenderer::new()),
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererKind::MuseScore => write!(f, "musescore"),
            RendererKind::LilyPond => write!(f, "lilypond"),
        }
    }
}

impl FromStr for RendererKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "musescore" | "mscore" => Ok(RendererKind::MuseScore),
            "lilypond" => Ok(RendererKind::LilyPond),
            _ => Err(ParseError::UnknownRenderer(s.to_string())),
        }
    }
}

/// Resolve `program` on PATH
pub(crate) fn find_tool(program: &str) -> Result<PathBuf, RenderError> {
    which::which(program).map_err(|_| RenderError::ToolNotFound(program.to_string()))
}

/// Map a finished process to an error when it exited nonzero
pub(crate) fn check_status(tool: &str, output: &Output) -> Result<(), RenderError> {
    if output.status.success() {
        return Ok(());
    }
    Err(RenderError::ToolFailed {
        tool: tool.to_string(),
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

/// Find the image a tool wrote for `intended`, moving it there if needed
///
/// Some tools number their output (`chord-1.png`, `chord-page1.png`). Each
/// suffix is tried between stem and extension; a match is renamed back to
/// `intended`.
pub fn locate_output(intended: &Path, suffixes: &[&str]) -> Result<PathBuf, RenderError> {
    if intended.is_file() {
        return Ok(intended.to_path_buf());
    }

    let stem = intended
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = intended
        .extension()
        .map(|s| format!(".{}", s.to_string_lossy()))
        .unwrap_or_default();
    let parent = intended.parent().unwrap_or_else(|| Path::new(""));

    for suffix in suffixes {
        let candidate = parent.join(format!("{}{}{}", stem, suffix, extension));
        if candidate.is_file() {
            log::debug!(
                "Renaming {} to {}",
                candidate.display(),
                intended.display()
            );
            fs::rename(&candidate, intended)?;
            return Ok(intended.to_path_buf());
        }
    }

    Err(RenderError::MissingOutput(intended.to_path_buf()))
}
