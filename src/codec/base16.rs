use data_encoding::HEXLOWER_PERMISSIVE;

use super::Decoder;
use crate::error::{DecodeError, LengthConstraint, Result};
use crate::types::DecoderMeta;

const ALPHABET: &str = "0123456789abcdefABCDEF";

pub struct Hex;

impl Decoder for Hex {
    fn meta(&self) -> DecoderMeta {
        DecoderMeta {
            name: "hex",
            aliases: &["base16", "hexadecimal"],
            alphabet: ALPHABET,
            description: "Hexadecimal byte pairs, case-insensitive",
        }
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        for (pos, ch) in input.chars().enumerate() {
            if !ch.is_ascii_hexdigit() {
                return Err(DecodeError::InvalidCharacter { char: ch, position: pos });
            }
        }

        if input.len() % 2 != 0 {
            return Err(DecodeError::invalid_length(
                LengthConstraint::MultipleOf(2),
                input.len(),
            ));
        }

        HEXLOWER_PERMISSIVE
            .decode(input.as_bytes())
            .map_err(|e| DecodeError::invalid_input(e.to_string()))
    }
}
