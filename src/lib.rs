pub mod codec;
pub mod error;
pub mod types;

pub use codec::{
    decode_all, decode_ascii85, decode_base32, decode_base58, decode_base62, decode_base64,
    decode_base91, decode_binary, decode_hex, Decoder, Registry,
};
pub use error::{DecodeError, Result};
pub use types::{Attempt, DecoderMeta};
