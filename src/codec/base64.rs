use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurposeConfig};

use super::{util, Decoder};
use crate::error::{DecodeError, Result};
use crate::types::DecoderMeta;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

// Trailing bits are ignored and padding is normalized before decode, so a
// non-canonical final quantum still decodes.
const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_allow_trailing_bits(true)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);
const ENGINE: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, CONFIG);

pub struct Base64;

impl Decoder for Base64 {
    fn meta(&self) -> DecoderMeta {
        DecoderMeta {
            name: "base64",
            aliases: &["b64"],
            alphabet: ALPHABET,
            description: "RFC 4648 Base64, padding supplied automatically",
        }
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        let padded = util::pad_to_multiple(input, 4);
        ENGINE.decode(&padded).map_err(|e| match e {
            base64::DecodeError::InvalidByte(pos, byte) => {
                DecodeError::invalid_char(byte as char, pos)
            }
            base64::DecodeError::InvalidPadding => {
                DecodeError::invalid_padding("malformed '=' padding")
            }
            other => DecodeError::invalid_input(other.to_string()),
        })
    }
}
