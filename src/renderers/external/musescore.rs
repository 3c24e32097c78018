//! MuseScore command-line renderer

use std::fs;
use std::process::{Command, Stdio};

use super::{check_status, find_tool, locate_output, Renderer};
use crate::error::RenderError;
use crate::renderers::document::NotationDocument;

/// Renders MusicXML through `mscore <doc.xml> -o <out.png> -T <margin>`
///
/// MuseScore numbers the pages it writes, so the single-page output lands
/// at `out-1.png` and is moved back to `out.png`.
#[derive(Debug, Clone)]
pub struct MuseScoreRenderer {
    program: String,
    trim_margin: u32,
    resolution: Option<u32>,
}

impl MuseScoreRenderer {
    pub fn new() -> Self {
        Self {
            program: "mscore".to_string(),
            trim_margin: 50,
            resolution: None,
        }
    }

    pub fn with_resolution(mut self, dpi: u32) -> Self {
        self.resolution = Some(dpi);
        self
    }
}

impl Default for MuseScoreRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MuseScoreRenderer {
    fn name(&self) -> &str {
        &self.program
    }

    fn render(&self, document: &NotationDocument) -> Result<Vec<u8>, RenderError> {
        let program = find_tool(&self.program)?;
        let workdir = tempfile::tempdir()?;

        let source = workdir.path().join("chord.xml");
        fs::write(&source, document.to_musicxml())?;
        let intended = workdir.path().join("chord.png");

        let mut command = Command::new(program);
        command
            .arg(&source)
            .arg("-o")
            .arg(&intended)
            .arg("-T")
            .arg(self.trim_margin.to_string());
        if let Some(dpi) = self.resolution {
            command.arg("-r").arg(dpi.to_string());
        }

        log::debug!("Running {:?}", command);
        let output = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;
        check_status(&self.program, &output)?;

        let image = locate_output(&intended, &["-1"])?;
        Ok(fs::read(image)?)
    }
}
