// MusicXML builder state machine

use crate::models::Clef;
use crate::renderers::document::DocumentNote;

/// Builds a single-part MusicXML document measure by measure
pub struct MusicXmlBuilder {
    buffer: String,
    measure_number: usize,
    measure_started: bool,
    attributes_written: bool,
    clef: Clef,
}

impl MusicXmlBuilder {
    pub fn new(clef: Clef) -> Self {
        Self {
            buffer: String::new(),
            measure_number: 1,
            measure_started: false,
            attributes_written: false,
            clef,
        }
    }

    /// Start a new measure; the first one carries divisions, key and clef
    pub fn start_measure(&mut self, divisions: usize) {
        self.buffer.push_str(&format!(
            "    <measure number=\"{}\">\n",
            self.measure_number
        ));
        self.measure_started = true;

        if !self.attributes_written {
            self.write_attributes(divisions);
            self.attributes_written = true;
        }
    }

    /// Close current measure and increment number
    pub fn end_measure(&mut self) {
        self.buffer.push_str("    </measure>\n");
        self.measure_number += 1;
        self.measure_started = false;
    }

    /// Write one pitched note; `<alter>` is always present, even when 0
    pub fn write_note(&mut self, note: &DocumentNote, duration_divs: usize, note_type: &str) {
        self.buffer.push_str("      <note>\n");
        if note.chord {
            self.buffer.push_str("        <chord/>\n");
        }
        self.buffer.push_str("        <pitch>\n");
        self.buffer
            .push_str(&format!("          <step>{}</step>\n", note.step));
        self.buffer
            .push_str(&format!("          <alter>{}</alter>\n", note.alter));
        self.buffer
            .push_str(&format!("          <octave>{}</octave>\n", note.octave));
        self.buffer.push_str("        </pitch>\n");
        self.buffer
            .push_str(&format!("        <duration>{}</duration>\n", duration_divs));
        self.buffer
            .push_str(&format!("        <type>{}</type>\n", note_type));
        self.buffer.push_str("      </note>\n");
    }

    pub fn finalize(mut self) -> String {
        if self.measure_started {
            self.end_measure();
        }

        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<!DOCTYPE score-partwise PUBLIC \"-//Recordare//DTD MusicXML 3.1 Partwise//EN\" \"http://www.musicxml.org/dtds/partwise.dtd\">\n");
        xml.push_str("<score-partwise version=\"3.1\">\n");
        xml.push_str("  <part-list>\n");
        xml.push_str("    <score-part id=\"P1\">\n");
        xml.push_str("      <part-name>Music</part-name>\n");
        xml.push_str("    </score-part>\n");
        xml.push_str("  </part-list>\n");
        xml.push_str("  <part id=\"P1\">\n");
        xml.push_str(&self.buffer);
        xml.push_str("  </part>\n");
        xml.push_str("</score-partwise>\n");
        xml
    }

    fn write_attributes(&mut self, divisions: usize) {
        self.buffer.push_str("      <attributes>\n");
        self.buffer
            .push_str(&format!("        <divisions>{}</divisions>\n", divisions));
        self.buffer.push_str("        <key><fifths>0</fifths></key>\n");
        self.buffer.push_str(&format!(
            "        <clef><sign>{}</sign><line>{}</line></clef>\n",
            self.clef.sign(),
            self.clef.line()
        ));
        self.buffer.push_str("      </attributes>\n");
    }
}
