//! Generic base-N big-integer decoding over an arbitrary alphabet.
//!
//! Accumulates `value = value * base + digit` into a big-endian byte vector
//! with manual carry propagation, so precision is unbounded. The result is
//! the minimal big-endian serialization of the accumulated value: no leading
//! zero bytes, and a zero value (including empty input) is the empty vector.

use crate::error::{DecodeError, Result};

pub fn decode(input: &str, alphabet: &str) -> Result<Vec<u8>> {
    let base = alphabet.chars().count() as u32;

    let mut acc: Vec<u8> = Vec::new();
    for (pos, ch) in input.chars().enumerate() {
        let digit = alphabet
            .chars()
            .position(|a| a == ch)
            .ok_or(DecodeError::InvalidCharacter { char: ch, position: pos })? as u32;

        let mut carry = digit;
        for byte in acc.iter_mut().rev() {
            carry += (*byte as u32) * base;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            acc.insert(0, (carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    Ok(acc)
}

/// Inverse of `decode`, for round-trip tests. Like `decode`, it drops
/// leading zero bytes (they have no digits in this numeral system).
#[cfg(test)]
pub(crate) fn encode(input: &[u8], alphabet: &str) -> String {
    let base = alphabet.chars().count() as u32;
    let digits: Vec<char> = alphabet.chars().collect();

    let mut num = input.iter().fold(Vec::new(), |mut acc, &byte| {
        let mut carry = byte as u32;
        for digit in acc.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % base) as u8;
            carry /= base;
        }
        while carry > 0 {
            acc.push((carry % base) as u8);
            carry /= base;
        }
        acc
    });

    num.reverse();
    num.iter().map(|&d| digits[d as usize]).collect()
}
