//! Generation settings
//!
//! A [`GenerationConfig`] is read from a YAML or JSON file (picked by
//! extension); command-line flags then override individual fields. Every
//! field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::enumeration::SpellingPolicy;
use crate::error::ConfigError;
use crate::models::{ChordType, Clef, RootRange};
use crate::renderers::RendererKind;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub clef: Clef,
    /// `"C4,C5"`: roots from C4 up to, not including, C5
    pub root_range: RootRange,
    pub chord_types: Vec<ChordType>,
    pub renderer: RendererKind,
    /// Dots per inch; the renderer's own default when unset
    pub render_resolution: Option<u32>,
    pub policy: SpellingPolicy,
    /// Overrides "Seventh chords on the {clef} clef"
    pub deck_name: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            clef: Clef::G,
            root_range: RootRange::octave(4),
            chord_types: ChordType::DEFAULT_SET.to_vec(),
            renderer: RendererKind::MuseScore,
            render_resolution: None,
            policy: SpellingPolicy::default(),
            deck_name: None,
        }
    }
}

impl GenerationConfig {
    /// Load from a `.yaml`, `.yml` or `.json` file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let config = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text)?,
            Some("json") => Self::from_json_str(&text)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as unit, not as an empty map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}
