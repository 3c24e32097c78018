//! LilyPond renderer with stdin-based execution
//!
//! The source is piped to `lilypond --png -dcrop ... -`, so only the image
//! touches disk. Crop mode trims the page to the typeset chord and writes
//! it as `<base>.cropped.png`; the full page is not printed.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::{check_status, find_tool, locate_output, Renderer};
use crate::error::RenderError;
use crate::renderers::document::NotationDocument;

#[derive(Debug, Clone)]
pub struct LilyPondRenderer {
    program: String,
    resolution: u32,
}

impl LilyPondRenderer {
    pub fn new() -> Self {
        Self {
            program: "lilypond".to_string(),
            resolution: 300,
        }
    }

    pub fn with_resolution(mut self, dpi: u32) -> Self {
        self.resolution = dpi;
        self
    }

    fn arguments(&self, base: &Path) -> Vec<OsString> {
        vec![
            "--png".into(),
            "-dcrop".into(),
            "-dno-print-pages".into(),
            format!("-dresolution={}", self.resolution).into(),
            "-o".into(),
            base.into(),
            "-".into(), // Read from stdin
        ]
    }
}

/// Where crop mode leaves the image for output base `base`
fn cropped_output(base: &Path) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(".cropped.png");
    PathBuf::from(name)
}

impl Default for LilyPondRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for LilyPondRenderer {
    fn name(&self) -> &str {
        &self.program
    }

    fn render(&self, document: &NotationDocument) -> Result<Vec<u8>, RenderError> {
        let source = document.to_lilypond()?;
        let program = find_tool(&self.program)?;
        let workdir = tempfile::tempdir()?;
        let base = workdir.path().join("chord");

        let mut child = Command::new(program)
            .args(self.arguments(&base))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        check_status(&self.program, &output)?;

        let image = locate_output(&cropped_output(&base), &[])?;
        Ok(fs::read(image)?)
    }
}
