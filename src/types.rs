use serde::Serialize;

use crate::error::DecodeError;

/// Static description of one registered decoder.
#[derive(Debug, Clone, Serialize)]
pub struct DecoderMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub alphabet: &'static str,
    pub description: &'static str,
}

/// The result of running one decoder against one input. Created inside a
/// single `decode_all` call and never shared or mutated afterwards.
#[derive(Debug)]
pub struct Attempt {
    pub scheme: &'static str,
    pub outcome: Result<Vec<u8>, DecodeError>,
}

impl Attempt {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}
