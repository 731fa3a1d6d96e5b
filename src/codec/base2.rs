use super::Decoder;
use crate::error::{DecodeError, LengthConstraint, Result};
use crate::types::DecoderMeta;

pub struct Binary;

impl Decoder for Binary {
    fn meta(&self) -> DecoderMeta {
        DecoderMeta {
            name: "binary",
            aliases: &["bin", "base2"],
            alphabet: "01",
            description: "Binary digit string, leading zero bits kept as byte padding",
        }
    }

    // Output length is ceil(len/8): unlike the big-integer decoders, leading
    // zero bits survive as padding to the byte boundary.
    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Err(DecodeError::invalid_length(
                LengthConstraint::Range { min: 1, max: None },
                0,
            ));
        }

        let mut out = vec![0u8; input.len().div_ceil(8)];
        let last = out.len() - 1;

        for (pos, ch) in input.chars().enumerate() {
            let bit = match ch {
                '0' => 0u8,
                '1' => 1u8,
                _ => return Err(DecodeError::InvalidCharacter { char: ch, position: pos }),
            };
            // Bit index counted from the least significant end.
            let idx = input.len() - 1 - pos;
            out[last - idx / 8] |= bit << (idx % 8);
        }

        Ok(out)
    }
}
