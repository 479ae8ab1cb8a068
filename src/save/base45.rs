//! Base45 codec treating the input as one big-endian unsigned integer.
//!
//! Each leading zero byte becomes one zero character (`1`) and back, so the
//! encoding preserves the exact input length. The alphabet leaves out `0` and
//! the letters `I L M N O Q U V` in both cases so a string survives being
//! copied by hand.

use alloc::string::String;
use alloc::vec::Vec;
use core::iter;

use crate::error::{Alphabet, DecodeError};

/// The 45 digit characters, lowest digit first.
pub const ALPHABET: &[u8; 45] = b"123456789ABCDEFGHJKPRSTWXYZabcdefghjkprstwxyz";

const BASE: u16 = 45;
const ZERO: u8 = ALPHABET[0];
const INVALID: u8 = u8::MAX;

const LOOKUP: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut digit = 0;
    while digit < ALPHABET.len() {
        table[ALPHABET[digit] as usize] = digit as u8;
        digit += 1;
    }
    table
};

fn digit_value(c: char) -> Option<u8> {
    let byte = u8::try_from(c).ok()?;
    match LOOKUP[usize::from(byte)] {
        INVALID => None,
        digit => Some(digit),
    }
}

/// Divides a big-endian number by 45 in place, returning the remainder.
fn divide_by_45(number: &mut [u8]) -> u8 {
    let mut remainder: u16 = 0;
    for byte in number.iter_mut() {
        let acc = remainder * 256 + u16::from(*byte);
        *byte = (acc / BASE) as u8;
        remainder = acc % BASE;
    }
    remainder as u8
}

/// Encodes bytes as base45.
///
/// # Example
///
/// ```
/// use bjsave::save::base45;
///
/// assert_eq!(base45::encode(&[0, 0, 45]), "1121");
/// assert_eq!(base45::decode("1121").unwrap(), [0, 0, 45]);
/// ```
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();

    let mut number = data[leading_zeros..].to_vec();
    // log(256) / log(45) is about 1.46 digits per byte
    let mut digits = Vec::with_capacity(number.len() * 146 / 100 + 1);
    let mut start = 0;
    while start < number.len() {
        let remainder = divide_by_45(&mut number[start..]);
        while start < number.len() && number[start] == 0 {
            start += 1;
        }
        digits.push(ALPHABET[usize::from(remainder)]);
    }

    let mut encoded = String::with_capacity(leading_zeros + digits.len());
    encoded.extend(iter::repeat_n(char::from(ZERO), leading_zeros));
    encoded.extend(digits.iter().rev().map(|&d| char::from(d)));
    encoded
}

/// Decodes a base45 string back into bytes.
///
/// # Errors
///
/// Returns [`DecodeError::Alphabet`] with the byte offset of the first
/// character outside the alphabet.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let mut values = Vec::with_capacity(encoded.len());
    for (position, found) in encoded.char_indices() {
        let digit = digit_value(found).ok_or(DecodeError::Alphabet {
            alphabet: Alphabet::Base45,
            position,
            found,
        })?;
        values.push(digit);
    }

    let leading_zeros = values.iter().take_while(|&&d| d == 0).count();

    // Least significant byte first while accumulating.
    let mut number: Vec<u8> = Vec::with_capacity(values.len() * 69 / 100 + 1);
    for &digit in &values[leading_zeros..] {
        let mut carry = u16::from(digit);
        for byte in &mut number {
            let acc = u16::from(*byte) * BASE + carry;
            *byte = acc as u8;
            carry = acc >> 8;
        }
        while carry > 0 {
            number.push(carry as u8);
            carry >>= 8;
        }
    }

    let mut decoded = Vec::with_capacity(leading_zeros + number.len());
    decoded.resize(leading_zeros, 0);
    decoded.extend(number.iter().rev());
    Ok(decoded)
}
