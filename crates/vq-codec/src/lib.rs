//! Vocab sync codec — LZ-style dictionary compression packed into a
//! transport-safe alphabet.
//!
//! Pieces:
//! 1. Bit accumulator (variable-width codes <-> fixed-width units)
//! 2. Compression engine (greedy growing dictionary)
//! 3. Decompression engine (lock-step dictionary replay)
//! 4. Base64 transport wrapper (6-bit units, `=` padded)

pub mod base64;
pub mod bits;
pub mod compress;
pub mod decompress;
pub mod error;

pub use base64::{compress_to_base64, decompress_from_base64, Alphabet, BASE64_ALPHABET};
pub use bits::{BitReader, BitWriter, UnitWidth};
pub use compress::compress;
pub use decompress::{decompress, Decoder, TruncationPolicy};
pub use error::{CodecError, Result};

/// Reserved code: the next 8 bits are a literal code unit.
pub const ESCAPE_8: u32 = 0;
/// Reserved code: the next 16 bits are a literal code unit.
pub const ESCAPE_16: u32 = 1;
/// Reserved code: end of stream.
pub const END_OF_STREAM: u32 = 2;
