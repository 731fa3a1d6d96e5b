use std::collections::HashMap;
use std::sync::OnceLock;

use super::Decoder;
use crate::error::{DecodeError, Result};
use crate::types::{Attempt, DecoderMeta};

macro_rules! register_decoders {
    ($($module:ident :: $decoder:ident),* $(,)?) => {
        fn build_registry() -> Registry {
            let decoders: Vec<Box<dyn Decoder>> = vec![
                $(Box::new(super::$module::$decoder)),*
            ];

            let mut name_map = HashMap::new();
            for (idx, decoder) in decoders.iter().enumerate() {
                name_map.insert(decoder.name(), idx);
                for alias in decoder.meta().aliases {
                    name_map.insert(*alias, idx);
                }
            }

            Registry { decoders, name_map }
        }

        // Public for testing - generates list of expected scheme names
        pub fn expected_scheme_names() -> Vec<&'static str> {
            use crate::codec::Decoder;
            vec![
                $(super::$module::$decoder.name(),)*
            ]
        }
    };
}

// Registration order is the output order of `decode_all`.
register_decoders! {
    base64::Base64,
    base32::Base32,
    base58::Base58,
    base62::Base62,
    base91::Base91,
    base16::Hex,
    base2::Binary,
    base85::Ascii85,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub struct Registry {
    decoders: Vec<Box<dyn Decoder>>,
    name_map: HashMap<&'static str, usize>,
}

impl Registry {
    fn new() -> Self {
        build_registry()
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    pub fn get(&self, name: &str) -> Result<&dyn Decoder> {
        let name_lower = name.to_lowercase();
        self.name_map
            .get(name_lower.as_str())
            .map(|&idx| self.decoders[idx].as_ref())
            .ok_or_else(|| DecodeError::unknown_scheme(name))
    }

    pub fn list(&self) -> Vec<DecoderMeta> {
        self.decoders.iter().map(|d| d.meta()).collect()
    }

    /// One attempt per decoder, in registration order. Errors are carried in
    /// the attempt, never propagated.
    pub fn decode_all(&self, input: &str) -> Vec<Attempt> {
        self.decoders
            .iter()
            .map(|decoder| Attempt {
                scheme: decoder.name(),
                outcome: decoder.decode(input),
            })
            .collect()
    }
}
