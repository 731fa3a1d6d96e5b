use super::{bigint, Decoder};
use crate::error::Result;
use crate::types::DecoderMeta;

const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub struct Base58;

impl Decoder for Base58 {
    fn meta(&self) -> DecoderMeta {
        DecoderMeta {
            name: "base58",
            aliases: &["b58"],
            alphabet: ALPHABET,
            description: "Base58 (Bitcoin alphabet, big-integer decode)",
        }
    }

    // Pure big-integer interpretation: leading '1' digits are zero-valued
    // and do not map to leading zero bytes.
    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        bigint::decode(input, ALPHABET)
    }
}
