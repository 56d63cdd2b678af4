//! Bit accumulator — repacks variable-width codes into fixed-width units and back.
//!
//! Codes are written least-significant bit first. Each output unit fills
//! from its most significant bit down, so the first bit written lands in
//! bit `width - 1` of the first unit.

use crate::error::{CodecError, Result};

/// Width in bits of one output unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitWidth(u32);

impl UnitWidth {
    /// Six-bit units, one per base64 symbol.
    pub const SIX: UnitWidth = UnitWidth(6);

    /// Validate a unit width. Units wider than a UTF-16 code unit are rejected.
    pub fn new(bits: u32) -> Result<Self> {
        if (1..=16).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(CodecError::InvalidUnitWidth(bits))
        }
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Mask of the first bit read from a unit (32 for six-bit units).
    pub fn reset_value(&self) -> u32 {
        1 << (self.0 - 1)
    }
}

/// Accumulates bits and hands each completed unit to `emit`.
pub struct BitWriter<F> {
    width: u32,
    value: u32,
    position: u32,
    emit: F,
    out: String,
}

impl<F: FnMut(u32) -> char> BitWriter<F> {
    pub fn new(width: UnitWidth, emit: F) -> Self {
        Self {
            width: width.bits(),
            value: 0,
            position: 0,
            emit,
            out: String::new(),
        }
    }

    fn push_bit(&mut self, bit: u32) {
        self.value = (self.value << 1) | (bit & 1);
        if self.position == self.width - 1 {
            self.position = 0;
            let unit = self.value;
            self.out.push((self.emit)(unit));
            self.value = 0;
        } else {
            self.position += 1;
        }
    }

    /// Write the low `bits` bits of `value`, least significant first.
    pub fn write(&mut self, value: u32, bits: u32) {
        let mut value = value;
        for _ in 0..bits {
            self.push_bit(value & 1);
            value >>= 1;
        }
    }

    /// Pad with zero bits up to the next unit boundary, emit that unit and
    /// return the output. A unit is always emitted here, even when the
    /// accumulator was empty.
    pub fn finish(mut self) -> String {
        loop {
            self.value <<= 1;
            if self.position == self.width - 1 {
                let unit = self.value;
                self.out.push((self.emit)(unit));
                break;
            }
            self.position += 1;
        }
        self.out
    }
}

/// Pulls fixed-width units from `next` and serves arbitrary-width codes.
pub struct BitReader<F> {
    reset: u32,
    value: u32,
    position: u32,
    index: usize,
    bits_read: usize,
    next: F,
}

impl<F: FnMut(usize) -> u32> BitReader<F> {
    pub fn new(width: UnitWidth, mut next: F) -> Self {
        let value = next(0);
        Self {
            reset: width.reset_value(),
            value,
            position: width.reset_value(),
            index: 1,
            bits_read: 0,
            next,
        }
    }

    fn read_bit(&mut self) -> u32 {
        let bit = self.value & self.position;
        self.position >>= 1;
        self.bits_read += 1;
        if self.position == 0 {
            self.position = self.reset;
            self.value = (self.next)(self.index);
            self.index += 1;
        }
        u32::from(bit != 0)
    }

    /// Read a `bits`-wide code, least significant bit first.
    pub fn read(&mut self, bits: u32) -> u32 {
        let mut code = 0;
        for shift in 0..bits {
            code |= self.read_bit() << shift;
        }
        code
    }

    /// Total bits consumed so far.
    pub fn bits_read(&self) -> usize {
        self.bits_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_emit(v: u32) -> char {
        char::from_digit(v, 16).unwrap()
    }

    #[test]
    fn test_unit_width_bounds() {
        assert!(UnitWidth::new(0).is_err());
        assert!(UnitWidth::new(17).is_err());
        assert_eq!(UnitWidth::new(16).unwrap().bits(), 16);
        assert_eq!(UnitWidth::SIX.reset_value(), 32);
    }

    #[test]
    fn test_writer_fills_from_msb() {
        let mut w = BitWriter::new(UnitWidth::new(4).unwrap(), hex_emit);
        w.write(1, 1);
        w.write(0, 3);
        assert_eq!(w.finish(), "80");
    }

    #[test]
    fn test_writer_lsb_first() {
        // 0b0011 written LSB first lands as 1100 in the unit
        let mut w = BitWriter::new(UnitWidth::new(4).unwrap(), hex_emit);
        w.write(0b0011, 4);
        assert_eq!(w.finish(), "c0");
    }

    #[test]
    fn test_finish_pads_partial_unit() {
        let mut w = BitWriter::new(UnitWidth::new(4).unwrap(), hex_emit);
        w.write(1, 2);
        assert_eq!(w.finish(), "8");
    }

    #[test]
    fn test_reader_inverts_writer() {
        let fields = [(5u32, 3u32), (0, 2), (300, 16), (1, 1), (97, 8)];
        let mut w = BitWriter::new(UnitWidth::SIX, |v| char::from_u32(v + 0x40).unwrap());
        for &(value, bits) in &fields {
            w.write(value, bits);
        }
        let units: Vec<u32> = w.finish().chars().map(|c| c as u32 - 0x40).collect();
        let mut r = BitReader::new(UnitWidth::SIX, |i| units.get(i).copied().unwrap_or(0));
        for &(value, bits) in &fields {
            assert_eq!(r.read(bits), value);
        }
    }

    #[test]
    fn test_reader_fetches_each_unit_once() {
        let units = [0u32; 4];
        let mut fetched = Vec::new();
        let mut r = BitReader::new(UnitWidth::SIX, |i| {
            fetched.push(i);
            units.get(i).copied().unwrap_or(0)
        });
        r.read(5);
        r.read(1);
        r.read(12);
        assert_eq!(r.bits_read(), 18);
        drop(r);
        // The unit after the last bit read is fetched eagerly
        assert_eq!(fetched, vec![0, 1, 2, 3]);
    }
}
