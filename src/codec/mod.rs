mod base16;
mod base2;
mod base32;
mod base58;
mod base62;
mod base64;
mod base85;
mod base91;
mod bigint;
pub mod registry;
pub(crate) mod util;

pub use registry::Registry;

use crate::error::Result;
use crate::types::{Attempt, DecoderMeta};

pub trait Decoder: Send + Sync {
    fn meta(&self) -> DecoderMeta;

    /// Decode `input` to raw bytes. Pure: no I/O, no state, no panics on
    /// untrusted input.
    fn decode(&self, input: &str) -> Result<Vec<u8>>;

    fn name(&self) -> &'static str {
        self.meta().name
    }
}

pub fn decode_base64(input: &str) -> Result<Vec<u8>> {
    base64::Base64.decode(input)
}

pub fn decode_base32(input: &str) -> Result<Vec<u8>> {
    base32::Base32.decode(input)
}

pub fn decode_base58(input: &str) -> Result<Vec<u8>> {
    base58::Base58.decode(input)
}

pub fn decode_base62(input: &str) -> Result<Vec<u8>> {
    base62::Base62.decode(input)
}

pub fn decode_base91(input: &str) -> Result<Vec<u8>> {
    base91::Base91.decode(input)
}

pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    base16::Hex.decode(input)
}

pub fn decode_binary(input: &str) -> Result<Vec<u8>> {
    base2::Binary.decode(input)
}

pub fn decode_ascii85(input: &str) -> Result<Vec<u8>> {
    base85::Ascii85.decode(input)
}

/// Run every registered decoder against `input`, in registry order. One
/// `Attempt` per decoder; a failing decoder never stops the rest.
pub fn decode_all(input: &str) -> Vec<Attempt> {
    Registry::global().decode_all(input)
}
