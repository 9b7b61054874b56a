//! Byte order used when a packed word is materialised into, or loaded from, bytes.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::errors::BitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    /// Most significant byte first. Matches the MSB-first bit engine.
    #[default]
    Big,
    Little,
}

fn check_len(buf_len: usize, nbytes: usize) -> Result<(), BitError> {
    if nbytes == 0 || nbytes > 8 {
        return Err(BitError::TooManyBits(nbytes * 8));
    }

    if buf_len < nbytes {
        return Err(BitError::OutOfBounds {
            bit_pos: 0,
            end: nbytes * 8,
            capacity_bits: buf_len * 8,
        });
    }

    Ok(())
}

impl Endianness {
    /// Serialises the low `nbytes` bytes of `value` into the front of `buf`.
    pub fn put(self, value: u64, nbytes: usize, buf: &mut [u8]) -> Result<(), BitError> {
        check_len(buf.len(), nbytes)?;

        let value = if nbytes == 8 {
            value
        } else {
            value & ((1u64 << (nbytes * 8)) - 1)
        };

        match self {
            Endianness::Big => BigEndian::write_uint(buf, value, nbytes),
            Endianness::Little => LittleEndian::write_uint(buf, value, nbytes),
        }

        Ok(())
    }

    /// Loads an `nbytes`-wide unsigned integer from the front of `buf`.
    pub fn get(self, buf: &[u8], nbytes: usize) -> Result<u64, BitError> {
        check_len(buf.len(), nbytes)?;

        Ok(match self {
            Endianness::Big => BigEndian::read_uint(buf, nbytes),
            Endianness::Little => LittleEndian::read_uint(buf, nbytes),
        })
    }
}
