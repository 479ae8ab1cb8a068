//! 20-bit transcription checksum and its four-character encoding.
//!
//! The checksum is the low 20 bits of the CRC-32 (IEEE) of the record. It
//! catches copying mistakes; it is not tamper protection.

use alloc::string::String;

use crate::error::{Alphabet, DecodeError, LengthField};

/// The 32 checksum characters, lowest value first.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Number of characters in an encoded checksum.
pub const CHECKSUM_LEN: usize = 4;

const MASK: u32 = 0xF_FFFF;
const BITS_PER_CHAR: u32 = 5;

/// Computes the 20-bit checksum of `data`.
#[must_use]
pub fn checksum(data: &[u8]) -> u32 {
    crc32fast::hash(data) & MASK
}

/// Encodes the low 20 bits of `value` as four characters, most significant
/// group first.
///
/// # Example
///
/// ```
/// use bjsave::save::checksum;
///
/// assert_eq!(checksum::encode(0), "0000");
/// assert_eq!(checksum::encode(0xF_FFFF), "ZZZZ");
/// ```
#[must_use]
pub fn encode(value: u32) -> String {
    (0..CHECKSUM_LEN as u32)
        .rev()
        .map(|group| {
            let index = (value >> (group * BITS_PER_CHAR)) & 0x1F;
            char::from(ALPHABET[index as usize])
        })
        .collect()
}

/// Decodes a four-character checksum. Letters are accepted in either case.
///
/// # Errors
///
/// Returns [`DecodeError::Length`] if `encoded` is not exactly four
/// characters, or [`DecodeError::Alphabet`] for a character outside the
/// alphabet.
pub fn decode(encoded: &str) -> Result<u32, DecodeError> {
    let found = encoded.chars().count();
    if found != CHECKSUM_LEN {
        return Err(DecodeError::Length {
            field: LengthField::Checksum,
            expected: CHECKSUM_LEN,
            found,
        });
    }

    let mut value = 0;
    for (position, c) in encoded.char_indices() {
        let upper = c.to_ascii_uppercase();
        let index = ALPHABET
            .iter()
            .position(|&symbol| char::from(symbol) == upper)
            .ok_or(DecodeError::Alphabet {
                alphabet: Alphabet::Base32,
                position,
                found: c,
            })?;
        value = (value << BITS_PER_CHAR) | index as u32;
    }
    Ok(value)
}
