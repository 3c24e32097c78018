//! Letter-step transposition
//!
//! Instead of picking the closest spelling for a semitone count, we step
//! the letter name first and then derive the alteration that makes the
//! semitone distance exact.
//!
//! Example: C + major third steps C→E (two letters) and needs 4 semitones,
//! so the result is E natural. C# + major third is E#, not F.

use crate::error::ChordError;
use crate::models::{Alteration, Interval, Letter, Pitch};

/// Add `interval` to `pitch`, preserving diatonic spelling
///
/// The octave carries whenever the letter steps past B. Negative letter
/// steps transpose downward.
pub fn transpose(pitch: Pitch, interval: Interval) -> Result<Pitch, ChordError> {
    let letter_index = pitch.letter.index() as i32 + interval.letter_steps();
    let letter = Letter::from_index(letter_index.rem_euclid(7) as usize);
    let octave = pitch.octave + letter_index.div_euclid(7);

    let target = pitch.absolute_semitone_offset() + interval.semitones();
    let delta = target - (letter.semitone() + 12 * octave);

    let alteration = Alteration::from_semitone_offset(delta).ok_or(
        ChordError::AlterationOutOfRange {
            pitch,
            interval,
            delta,
        },
    )?;

    Ok(Pitch::new(letter, alteration, octave))
}
