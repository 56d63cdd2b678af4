//! Base64 transport wrapper — six-bit units over the standard base64 alphabet.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::bits::UnitWidth;
use crate::compress::compress;
use crate::decompress::decompress;
use crate::error::{CodecError, Result};

/// Standard base64 symbols followed by the pad character.
pub const BASE64_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// Pad character; never carries a symbol value.
pub const PAD: char = '=';

/// Symbol table with its reverse lookup, built once per alphabet.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    reverse: HashMap<char, u32>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let reverse = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u32))
            .collect();
        Self { symbols, reverse }
    }

    /// Shared base64 alphabet.
    pub fn base64() -> &'static Alphabet {
        static BASE64: OnceLock<Alphabet> = OnceLock::new();
        BASE64.get_or_init(|| Alphabet::new(BASE64_ALPHABET))
    }

    /// Symbol for `value`. Values come from the encoder and are always in range.
    pub fn symbol(&self, value: u32) -> char {
        self.symbols[value as usize]
    }

    pub fn value_of(&self, c: char) -> Option<u32> {
        self.reverse.get(&c).copied()
    }
}

/// Length after padding to a multiple of four.
pub fn padded_len(len: usize) -> usize {
    len + (4 - len % 4) % 4
}

/// Compress `input` into a `=`-padded base64 string.
pub fn compress_to_base64(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let alphabet = Alphabet::base64();
    let mut out = compress(input, UnitWidth::SIX, |v| alphabet.symbol(v));
    let pad = padded_len(out.len()) - out.len();
    out.extend(std::iter::repeat(PAD).take(pad));
    out
}

/// Decode a string produced by [`compress_to_base64`].
///
/// Characters outside the alphabet (whitespace, line breaks) are discarded first.
pub fn decompress_from_base64(input: &str) -> Result<String> {
    let alphabet = Alphabet::base64();
    let units: Vec<u32> = input.chars().filter_map(|c| alphabet.value_of(c)).collect();
    if units.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let dropped = input.chars().count() - units.len();
    if dropped > 0 {
        tracing::debug!(dropped, "discarded characters outside the base64 alphabet");
    }
    decompress(units.len(), UnitWidth::SIX, |i| units[i])
}
