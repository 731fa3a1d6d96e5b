use super::Decoder;
use crate::error::{DecodeError, Result};
use crate::types::DecoderMeta;

const ALPHABET: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstu";

pub struct Ascii85;

impl Decoder for Ascii85 {
    fn meta(&self) -> DecoderMeta {
        DecoderMeta {
            name: "ascii85",
            aliases: &["a85", "base85"],
            alphabet: ALPHABET,
            description: "Ascii85, Adobe variant when wrapped in <~ ~>",
        }
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        if let Some(body) = input.strip_prefix("<~").and_then(|s| s.strip_suffix("~>")) {
            decode_body(body, true)
        } else {
            decode_body(input, false)
        }
    }
}

/// The `z` zero-group shorthand is an Adobe extension; plain Ascii85 treats
/// `z` as out of alphabet.
fn decode_body(body: &str, allow_z: bool) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(body.len() * 4 / 5 + 4);
    let mut group: Vec<u32> = Vec::with_capacity(5);

    for (pos, c) in body.chars().enumerate() {
        if c == 'z' && allow_z {
            if !group.is_empty() {
                return Err(DecodeError::invalid_input("'z' inside a partial group"));
            }
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }

        if !('!'..='u').contains(&c) {
            return Err(DecodeError::InvalidCharacter { char: c, position: pos });
        }
        group.push(c as u32 - 33);

        if group.len() == 5 {
            let val = group_value(&group)?;
            out.extend_from_slice(&val.to_be_bytes());
            group.clear();
        }
    }

    match group.len() {
        0 => {}
        1 => return Err(DecodeError::invalid_input("truncated final group")),
        n => {
            let pad = 5 - n;
            group.extend(std::iter::repeat_n(84, pad));
            let val = group_value(&group)?;
            out.extend_from_slice(&val.to_be_bytes()[..4 - pad]);
        }
    }

    Ok(out)
}

fn group_value(group: &[u32]) -> Result<u32> {
    let val = group.iter().fold(0u64, |acc, &v| acc * 85 + v as u64);
    u32::try_from(val).map_err(|_| DecodeError::invalid_input("group value overflows 32 bits"))
}
