//! Parsing of textual pitch and range specifications
//!
//! Pitches are written `Letter[accidentals]Octave`: `C4`, `F#3`, `Bb2`,
//! `C##5`. Besides `#` and `b` the parser accepts `x` for a double sharp
//! and the unicode glyphs produced by [`Pitch::pretty_name`], so every
//! spelling this crate displays can be read back.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

use crate::error::ParseError;
use crate::models::{Alteration, Letter, Pitch, RootRange};

static PITCH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-G])([#bx♯♭𝄪𝄫]*)(-?[0-9]+)$").expect("invalid pitch pattern")
});

/// Octaves a written pitch may name, the span of the MIDI note range
pub const OCTAVES: RangeInclusive<i32> = -1..=9;

/// Parse a pitch such as `C#4`
pub fn parse_pitch(input: &str) -> Result<Pitch, ParseError> {
    let text = input.trim();
    let captures = PITCH_PATTERN
        .captures(text)
        .ok_or_else(|| ParseError::InvalidPitch(input.to_string()))?;

    let letter = captures
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Letter::from_char)
        .ok_or_else(|| ParseError::InvalidPitch(input.to_string()))?;

    let accidentals = captures.get(2).map_or("", |m| m.as_str());
    let alteration = parse_accidentals(accidentals, input)?;

    let octave = captures
        .get(3)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .filter(|octave| OCTAVES.contains(octave))
        .ok_or_else(|| ParseError::OctaveOutOfRange(input.to_string()))?;

    Ok(Pitch::new(letter, alteration, octave))
}

fn parse_accidentals(accidentals: &str, input: &str) -> Result<Alteration, ParseError> {
    let mut sharps = 0i32;
    let mut flats = 0i32;

    for symbol in accidentals.chars() {
        match symbol {
            '#' | '♯' => sharps += 1,
            'x' | '𝄪' => sharps += 2,
            'b' | '♭' => flats += 1,
            '𝄫' => flats += 2,
            _ => return Err(ParseError::InvalidPitch(input.to_string())),
        }
    }

    if sharps > 0 && flats > 0 {
        return Err(ParseError::MixedAccidentals(input.to_string()));
    }

    Alteration::from_semitone_offset(sharps - flats)
        .ok_or_else(|| ParseError::TooManyAccidentals(input.to_string()))
}

/// Parse a root range written as `start,end`, e.g. `C2,C3`
pub fn parse_root_range(input: &str) -> Result<RootRange, ParseError> {
    let mut parts = input.split(',');
    let (start, end) = match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => (start, end),
        _ => return Err(ParseError::InvalidRange(input.to_string())),
    };

    RootRange::new(parse_pitch(start)?, parse_pitch(end)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pitches() {
        let c4 = parse_pitch("C4").unwrap();
        assert_eq!(c4, Pitch::natural(Letter::C, 4));

        let f_sharp = parse_pitch("F#3").unwrap();
        assert_eq!(f_sharp.alteration, Alteration::Sharp);
        assert_eq!(f_sharp.octave, 3);

        let b_flat = parse_pitch(" Bb2 ").unwrap();
        assert_eq!(b_flat, Pitch::new(Letter::B, Alteration::Flat, 2));
    }

    #[test]
    fn test_parse_double_alterations() {
        assert_eq!(parse_pitch("C##5").unwrap().alteration, Alteration::DoubleSharp);
        assert_eq!(parse_pitch("Cx5").unwrap().alteration, Alteration::DoubleSharp);
        assert_eq!(parse_pitch("Ebb4").unwrap().alteration, Alteration::DoubleFlat);
    }

    #[test]
    fn test_parse_unicode_glyphs() {
        assert_eq!(parse_pitch("C♯4").unwrap(), parse_pitch("C#4").unwrap());
        assert_eq!(parse_pitch("B𝄫2").unwrap(), parse_pitch("Bbb2").unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_pitch("H4"), Err(ParseError::InvalidPitch("H4".to_string())));
        assert_eq!(parse_pitch("C"), Err(ParseError::InvalidPitch("C".to_string())));
        assert_eq!(parse_pitch("c4"), Err(ParseError::InvalidPitch("c4".to_string())));
        assert_eq!(
            parse_pitch("C###4"),
            Err(ParseError::TooManyAccidentals("C###4".to_string()))
        );
        assert_eq!(
            parse_pitch("C#b4"),
            Err(ParseError::MixedAccidentals("C#b4".to_string()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for spec in ["C4", "C#4", "Db4", "E#3", "Fb5", "B#2", "Cbb1", "Gx0"] {
            let pitch = parse_pitch(spec).unwrap();
            assert_eq!(parse_pitch(&pitch.to_string()).unwrap(), pitch, "{}", spec);
            let pretty = format!("{}{}", pitch.pretty_name(), pitch.octave);
            assert_eq!(parse_pitch(&pretty).unwrap(), pitch, "{}", spec);
        }
    }

    #[test]
    fn test_parse_root_range() {
        let range = parse_root_range("C2,C3").unwrap();
        assert_eq!(range.offsets(), 24..36);

        assert_eq!(
            parse_root_range("C2"),
            Err(ParseError::InvalidRange("C2".to_string()))
        );
        assert_eq!(
            parse_root_range("C2,C3,C4"),
            Err(ParseError::InvalidRange("C2,C3,C4".to_string()))
        );
        assert!(matches!(
            parse_root_range("C2,X3"),
            Err(ParseError::InvalidPitch(_))
        ));
    }

    #[test]
    fn test_octave_bounds() {
        assert_eq!(parse_pitch("C-1").unwrap().absolute_semitone_offset(), -12);
        assert_eq!(parse_pitch("G9").unwrap().octave, 9);
        assert_eq!(
            parse_pitch("C10"),
            Err(ParseError::OctaveOutOfRange("C10".to_string()))
        );
        assert_eq!(
            parse_pitch("C999999999"),
            Err(ParseError::OctaveOutOfRange("C999999999".to_string()))
        );
        // Too long for i32 at all
        assert!(matches!(
            parse_pitch("C99999999999"),
            Err(ParseError::OctaveOutOfRange(_))
        ));
        assert_eq!(
            parse_root_range("C0,C999999999"),
            Err(ParseError::OctaveOutOfRange("C999999999".to_string()))
        );
    }
}
