//! Decompression engine — replays the encoder's dictionary growth in lock-step.

use crate::bits::{BitReader, UnitWidth};
use crate::error::{CodecError, Result};
use crate::{END_OF_STREAM, ESCAPE_16, ESCAPE_8};

/// What to do when the units run out before an end-of-stream code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Fail with [`CodecError::Truncated`].
    #[default]
    Reject,
    /// Return whatever was decoded so far.
    Partial,
}

/// Configurable decoder.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    width: UnitWidth,
    truncation: TruncationPolicy,
}

impl Decoder {
    pub fn new(width: UnitWidth) -> Self {
        Self {
            width,
            truncation: TruncationPolicy::default(),
        }
    }

    pub fn truncation(mut self, policy: TruncationPolicy) -> Self {
        self.truncation = policy;
        self
    }

    /// Decode `length` units, fetching unit `i` with `next(i)`.
    ///
    /// `next` is only called for `i < length`. A code that needs bits past the
    /// last unit is a truncation and is handled per the [`TruncationPolicy`].
    pub fn decode<F>(&self, length: usize, mut next: F) -> Result<String>
    where
        F: FnMut(usize) -> u32,
    {
        if length == 0 {
            return Err(CodecError::EmptyInput);
        }
        let mut reader = BitReader::new(self.width, |i| if i < length { next(i) } else { 0 });
        // Every real code lies inside the supplied units, end-of-stream included.
        let limit = length * self.width.bits() as usize;

        // Codes 0..=2 are reserved and never looked up.
        let mut dictionary: Vec<Vec<u16>> = vec![Vec::new(); 3];
        let mut enlarge_in: u32 = 4;
        let mut num_bits: u32 = 3;

        let first = match reader.read(2) {
            _ if reader.bits_read() > limit => return self.truncated(length, &[]),
            ESCAPE_8 => reader.read(8) as u16,
            ESCAPE_16 => reader.read(16) as u16,
            END_OF_STREAM => return Ok(String::new()),
            code => return Err(CodecError::InvalidLeadingCode(code)),
        };
        if reader.bits_read() > limit {
            return self.truncated(length, &[]);
        }
        dictionary.push(vec![first]);
        let mut w = vec![first];
        let mut output = vec![first];

        loop {
            let mut code = reader.read(num_bits) as usize;
            if reader.bits_read() > limit {
                return self.truncated(length, &output);
            }
            match code as u32 {
                ESCAPE_8 | ESCAPE_16 => {
                    let bits = if code as u32 == ESCAPE_8 { 8 } else { 16 };
                    let unit = reader.read(bits) as u16;
                    if reader.bits_read() > limit {
                        return self.truncated(length, &output);
                    }
                    dictionary.push(vec![unit]);
                    code = dictionary.len() - 1;
                    enlarge_in -= 1;
                }
                END_OF_STREAM => return into_string(&output),
                _ => {}
            }

            if enlarge_in == 0 {
                enlarge_in = 1 << num_bits;
                num_bits += 1;
            }

            let entry = if code < dictionary.len() {
                dictionary[code].clone()
            } else if code == dictionary.len() {
                // The encoder emitted the phrase it was just about to add:
                // w followed by its own first unit.
                let mut entry = w.clone();
                entry.push(w[0]);
                entry
            } else {
                return Err(CodecError::UnresolvedCode {
                    code,
                    dict_size: dictionary.len(),
                });
            };

            output.extend_from_slice(&entry);
            w.push(entry[0]);
            dictionary.push(w);
            enlarge_in -= 1;
            w = entry;

            if enlarge_in == 0 {
                enlarge_in = 1 << num_bits;
                num_bits += 1;
            }
        }
    }

    /// A code ran past the last unit; zero fill must never decode as data.
    fn truncated(&self, length: usize, output: &[u16]) -> Result<String> {
        match self.truncation {
            TruncationPolicy::Reject => Err(CodecError::Truncated { units: length }),
            TruncationPolicy::Partial => {
                tracing::warn!(units = length, "stream truncated, returning partial output");
                into_string(output)
            }
        }
    }
}

fn into_string(units: &[u16]) -> Result<String> {
    String::from_utf16(units).map_err(|_| CodecError::InvalidUtf16)
}

/// Decode with the default (rejecting) truncation policy.
pub fn decompress<F>(length: usize, width: UnitWidth, next: F) -> Result<String>
where
    F: FnMut(usize) -> u32,
{
    Decoder::new(width).decode(length, next)
}
