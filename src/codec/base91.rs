use super::Decoder;
use crate::error::{DecodeError, Result};
use crate::types::DecoderMeta;

const ALPHABET: &[u8; 91] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~\"";

fn decode_table() -> [i8; 256] {
    let mut table = [-1i8; 256];
    for (i, &c) in ALPHABET.iter().enumerate() {
        table[c as usize] = i as i8;
    }
    table
}

pub struct Base91;

impl Decoder for Base91 {
    fn meta(&self) -> DecoderMeta {
        DecoderMeta {
            name: "base91",
            aliases: &["b91"],
            alphabet: std::str::from_utf8(ALPHABET).unwrap(),
            description: "basE91, character pairs into a bit accumulator",
        }
    }

    // Reference basE91 algorithm. Characters are consumed in pairs carrying
    // 13 or 14 significant bits; a leftover single character still emits one
    // byte, a quirk kept for compatibility with the reference encoder.
    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        let table = decode_table();

        let mut out = Vec::with_capacity(input.len() * 14 / 16 + 1);
        let mut queue: u32 = 0;
        let mut nbits: u32 = 0;
        let mut val: i32 = -1;

        for (pos, c) in input.chars().enumerate() {
            let d = if c.is_ascii() { table[c as usize] } else { -1 };
            if d == -1 {
                return Err(DecodeError::InvalidCharacter { char: c, position: pos });
            }

            if val == -1 {
                val = d as i32;
                continue;
            }

            val += (d as i32) * 91;
            queue |= (val as u32) << nbits;
            nbits += if (val & 8191) > 88 { 13 } else { 14 };

            while nbits > 7 {
                out.push((queue & 255) as u8);
                queue >>= 8;
                nbits -= 8;
            }
            val = -1;
        }

        if val != -1 {
            out.push((queue | ((val as u32) << nbits)) as u8);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference basE91 encoder, kept here for round-trip coverage.
    fn encode(input: &[u8]) -> String {
        let mut result = Vec::with_capacity(input.len() * 16 / 13 + 2);
        let mut queue: u32 = 0;
        let mut nbits: u32 = 0;

        for &byte in input {
            queue |= (byte as u32) << nbits;
            nbits += 8;

            if nbits > 13 {
                let mut val = queue & 8191;
                if val > 88 {
                    queue >>= 13;
                    nbits -= 13;
                } else {
                    val = queue & 16383;
                    queue >>= 14;
                    nbits -= 14;
                }
                result.push(ALPHABET[(val % 91) as usize]);
                result.push(ALPHABET[(val / 91) as usize]);
            }
        }

        if nbits > 0 {
            result.push(ALPHABET[(queue % 91) as usize]);
            if nbits > 7 || queue > 90 {
                result.push(ALPHABET[(queue / 91) as usize]);
            }
        }

        String::from_utf8(result).unwrap()
    }

    #[test]
    fn test_base91_empty() {
        assert_eq!(Base91.decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base91_hello_world() {
        assert_eq!(Base91.decode(">OwJh>Io0Tv!8PE").unwrap(), b"Hello World!");
    }

    #[test]
    fn test_base91_single_character_emits_one_byte() {
        // Leftover pending value with no pair partner.
        assert_eq!(Base91.decode("A").unwrap(), vec![0]);
        assert_eq!(Base91.decode("B").unwrap(), vec![1]);
    }

    #[test]
    fn test_base91_invalid_character() {
        let result = Base91.decode("Hello World");
        match result {
            Err(DecodeError::InvalidCharacter { char: ch, position }) => {
                assert_eq!(ch, ' ');
                assert_eq!(position, 5);
            }
            _ => panic!("expected InvalidCharacter error"),
        }
    }

    #[test]
    fn test_base91_rejects_non_ascii() {
        assert!(Base91.decode("Aé").is_err());
    }

    #[test]
    fn test_base91_roundtrip() {
        let inputs = [
            b"".to_vec(),
            b"a".to_vec(),
            b"ab".to_vec(),
            b"abc".to_vec(),
            b"Hello".to_vec(),
            b"The quick brown fox jumps over the lazy dog".to_vec(),
            (0..=255).collect::<Vec<u8>>(),
        ];
        for input in inputs {
            let encoded = encode(&input);
            let decoded = Base91.decode(&encoded).unwrap();
            assert_eq!(decoded, input, "roundtrip failed for {:?}", input);
        }
    }

    #[test]
    fn test_base91_idempotent() {
        let first = Base91.decode(">OwJh>Io0Tv!8PE").unwrap();
        let second = Base91.decode(">OwJh>Io0Tv!8PE").unwrap();
        assert_eq!(first, second);
    }
}
