use super::{bigint, Decoder};
use crate::error::Result;
use crate::types::DecoderMeta;

// bash62 ordering: digits, then uppercase, then lowercase.
const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub struct Base62;

impl Decoder for Base62 {
    fn meta(&self) -> DecoderMeta {
        DecoderMeta {
            name: "base62",
            aliases: &["b62", "bash62"],
            alphabet: ALPHABET,
            description: "Base62 (bash62 alphabet, big-integer decode)",
        }
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        bigint::decode(input, ALPHABET)
    }
}
