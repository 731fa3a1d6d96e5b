use std::sync::OnceLock;

use data_encoding::{Encoding, Specification};

use super::{util, Decoder};
use crate::error::{DecodeError, Result};
use crate::types::DecoderMeta;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

static ENCODING: OnceLock<Encoding> = OnceLock::new();

// RFC 4648 Base32 with '=' padding; trailing bits are not checked, matching
// the lenient final-quantum handling of common decoders.
fn encoding() -> &'static Encoding {
    ENCODING.get_or_init(|| {
        let mut spec = Specification::new();
        spec.symbols.push_str(ALPHABET);
        spec.padding = Some('=');
        spec.check_trailing_bits = false;
        spec.encoding().unwrap()
    })
}

pub struct Base32;

impl Decoder for Base32 {
    fn meta(&self) -> DecoderMeta {
        DecoderMeta {
            name: "base32",
            aliases: &["b32"],
            alphabet: ALPHABET,
            description: "RFC 4648 Base32 (uppercase), padding supplied automatically",
        }
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        let padded = util::pad_to_multiple(input, 8);
        encoding()
            .decode(padded.as_bytes())
            .map_err(|e| DecodeError::invalid_input(e.to_string()))
    }
}
