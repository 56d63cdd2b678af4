//! Compression engine — greedy LZ78-style dictionary over UTF-16 code units.

use std::collections::HashMap;

use crate::bits::{BitWriter, UnitWidth};
use crate::{END_OF_STREAM, ESCAPE_16, ESCAPE_8};

/// Encoder state for one `compress` call.
struct Encoder<F> {
    writer: BitWriter<F>,
    /// Multi-unit phrases, keyed by (code of prefix, appended unit).
    phrases: HashMap<(u32, u16), u32>,
    /// Codes assigned to single code units.
    singletons: HashMap<u16, u32>,
    /// Singletons not yet sent; they go out as literals the first time.
    pending: HashMap<u32, u16>,
    dict_size: u32,
    num_bits: u32,
    enlarge_in: u32,
}

impl<F: FnMut(u32) -> char> Encoder<F> {
    fn new(width: UnitWidth, emit: F) -> Self {
        Self {
            writer: BitWriter::new(width, emit),
            phrases: HashMap::new(),
            singletons: HashMap::new(),
            pending: HashMap::new(),
            dict_size: 3,
            num_bits: 2,
            enlarge_in: 2,
        }
    }

    fn next_code(&mut self) -> u32 {
        let code = self.dict_size;
        self.dict_size += 1;
        code
    }

    fn singleton(&mut self, unit: u16) -> u32 {
        if let Some(&code) = self.singletons.get(&unit) {
            return code;
        }
        let code = self.next_code();
        self.singletons.insert(unit, code);
        self.pending.insert(code, unit);
        code
    }

    fn tick(&mut self) {
        self.enlarge_in -= 1;
        if self.enlarge_in == 0 {
            self.enlarge_in = 1 << self.num_bits;
            self.num_bits += 1;
        }
    }

    /// Emit phrase `code`, as a literal if it is a singleton never sent before.
    fn emit(&mut self, code: u32) {
        if let Some(unit) = self.pending.remove(&code) {
            if unit < 256 {
                self.writer.write(ESCAPE_8, self.num_bits);
                self.writer.write(u32::from(unit), 8);
            } else {
                self.writer.write(ESCAPE_16, self.num_bits);
                self.writer.write(u32::from(unit), 16);
            }
            // A literal also introduces a dictionary entry on the decode side.
            self.tick();
        } else {
            self.writer.write(code, self.num_bits);
        }
        self.tick();
    }

    fn run(mut self, units: impl Iterator<Item = u16>) -> String {
        let mut w: Option<u32> = None;
        for c in units {
            let c_code = self.singleton(c);
            w = match w {
                None => Some(c_code),
                Some(w_code) => match self.phrases.get(&(w_code, c)).copied() {
                    Some(wc) => Some(wc),
                    None => {
                        self.emit(w_code);
                        let wc = self.next_code();
                        self.phrases.insert((w_code, c), wc);
                        Some(c_code)
                    }
                },
            };
        }
        if let Some(w_code) = w {
            self.emit(w_code);
        }
        self.writer.write(END_OF_STREAM, self.num_bits);
        self.writer.finish()
    }
}

/// Compress `input` into units of `width` bits, mapping each unit to a
/// character with `emit`. Empty input yields an empty string and `emit` is
/// never called.
pub fn compress<F>(input: &str, width: UnitWidth, emit: F) -> String
where
    F: FnMut(u32) -> char,
{
    if input.is_empty() {
        return String::new();
    }
    let out = Encoder::new(width, emit).run(input.encode_utf16());
    tracing::debug!(
        input_units = input.encode_utf16().count(),
        output_units = out.chars().count(),
        "compressed"
    );
    out
}
