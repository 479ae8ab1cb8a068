//! Save strings.
//!
//! A save line looks like
//!
//! ```text
//! <timestamp> <base45 record>=<base32 checksum>
//! ```
//!
//! The record is the 13-byte [`SavableGameState`] encoding, the checksum is
//! four characters covering 20 bits of CRC-32. Save files hold one line per
//! save, newest first; reading and writing the file is left to the caller.

use alloc::string::String;

use crate::error::{DecodeError, LengthField};

pub mod base45;
pub mod checksum;
pub mod record;

pub use record::{RECORD_LEN, SavableGameState};

/// Separates the timestamp from the encoded state.
pub const TIMESTAMP_SEPARATOR: char = ' ';

/// Separates the encoded record from its checksum.
pub const CHECKSUM_SEPARATOR: char = '=';

/// A save line split into its three segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveLine<'a> {
    /// Free-form label written before the first space.
    pub timestamp: &'a str,
    /// Base45 encoded record.
    pub payload: &'a str,
    /// Base32 encoded checksum.
    pub checksum: &'a str,
}

/// Splits a save line into its segments without decoding them.
///
/// # Errors
///
/// Returns [`DecodeError::Format`] unless the line holds exactly one space and
/// exactly one `=`, with the space first.
pub fn parse_line(input: &str) -> Result<SaveLine<'_>, DecodeError> {
    for separator in [TIMESTAMP_SEPARATOR, CHECKSUM_SEPARATOR] {
        let found = input.matches(separator).count();
        if found != 1 {
            return Err(DecodeError::Format { separator, found });
        }
    }

    let (timestamp, rest) = input
        .split_once(TIMESTAMP_SEPARATOR)
        .ok_or(DecodeError::Format {
            separator: TIMESTAMP_SEPARATOR,
            found: 0,
        })?;
    let (payload, checksum) = rest
        .split_once(CHECKSUM_SEPARATOR)
        .ok_or(DecodeError::Format {
            separator: CHECKSUM_SEPARATOR,
            found: 0,
        })?;

    Ok(SaveLine {
        timestamp,
        payload,
        checksum,
    })
}

/// Encodes a state as `<base45 record>=<base32 checksum>`.
///
/// # Example
///
/// ```
/// use bjsave::save::{SavableGameState, encode_save, decode_save};
///
/// let state = SavableGameState {
///     seed: 42,
///     reshuffle_threshold: 26,
///     cards_dealt: 4,
///     deck_count: 1,
///     hit_on_soft_17: true,
///     need_reshuffle: false,
///     money: 100,
///     payout_numerator: 15,
/// };
/// let encoded = encode_save(&state);
/// assert_eq!(encoded, "6kWeeHPsEj63sekd78s=KDRN");
///
/// let line = format!("2024-01-01-12:00:00 {encoded}");
/// assert_eq!(decode_save(&line), Ok(state));
/// ```
#[must_use]
pub fn encode_save(state: &SavableGameState) -> String {
    let bytes = state.to_bytes();
    let mut encoded = base45::encode(&bytes);
    encoded.push(CHECKSUM_SEPARATOR);
    encoded.push_str(&checksum::encode(checksum::checksum(&bytes)));
    encoded
}

/// Builds a complete save line.
#[must_use]
pub fn format_line(timestamp: &str, state: &SavableGameState) -> String {
    let encoded = encode_save(state);
    let mut line = String::with_capacity(timestamp.len() + 1 + encoded.len());
    line.push_str(timestamp);
    line.push(TIMESTAMP_SEPARATOR);
    line.push_str(&encoded);
    line
}

/// Decodes and verifies a save line.
///
/// The line format is checked first, then the record must decode to exactly
/// 13 bytes and match the stored checksum.
///
/// # Errors
///
/// Returns the first [`DecodeError`] hit along the way.
pub fn decode_save(line: &str) -> Result<SavableGameState, DecodeError> {
    let parts = parse_line(line)?;

    let bytes = base45::decode(parts.payload)?;
    if bytes.len() != RECORD_LEN {
        return Err(DecodeError::Length {
            field: LengthField::Record,
            expected: RECORD_LEN,
            found: bytes.len(),
        });
    }

    let found = checksum::decode(parts.checksum)?;
    let expected = checksum::checksum(&bytes);
    if found != expected {
        return Err(DecodeError::ChecksumMismatch { expected, found });
    }

    SavableGameState::from_bytes(&bytes)
}

/// Returns the save candidates in a save file's contents, newest first.
///
/// Lines are trimmed and blank lines skipped.
pub fn candidates(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Returns new save-file contents with `line` added as the newest entry.
#[must_use]
pub fn prepend(existing: &str, line: &str) -> String {
    let mut contents = String::with_capacity(line.len() + 1 + existing.len());
    contents.push_str(line);
    contents.push('\n');
    contents.push_str(existing);
    contents
}

/// Current local time formatted as a save label (`YYYY-MM-DD-HH:MM:SS`).
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn timestamp_label() -> String {
    chrono::Local::now().format("%Y-%m-%d-%H:%M:%S").to_string()
}
