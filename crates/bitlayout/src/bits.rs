//! Low-level bit read and write utilities for byte slices.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first byte.
//! Multi-bit runs may straddle byte boundaries; the first bit of a run is the most
//! significant bit of the value.

use crate::errors::BitError;

/// Largest run of bits a single read or write may cover.
pub const MAX_RUN_BITS: usize = 64;

fn check_range(data: &[u8], bit_pos: usize, n: usize) -> Result<(), BitError> {
    if n > MAX_RUN_BITS {
        return Err(BitError::TooManyBits(n));
    }

    let capacity_bits = data.len() * 8;
    if bit_pos
        .checked_add(n)
        .map_or(true, |end| end > capacity_bits)
    {
        return Err(BitError::OutOfBounds {
            bit_pos,
            end: bit_pos.saturating_add(n),
            capacity_bits,
        });
    }

    Ok(())
}

/// Reads a single bit at `bit_pos` (0 = MSB of first byte). Returns 0 or 1.
pub fn read_bit_at(data: &[u8], bit_pos: usize) -> Result<u8, BitError> {
    check_range(data, bit_pos, 1)?;

    let byte_index = bit_pos / 8;
    let bit_index = bit_pos % 8;

    Ok((data[byte_index] >> (7 - bit_index)) & 1)
}

/// Reads `n` bits starting at `bit_pos` as an unsigned value (max 64 bits). MSB-first.
pub fn read_bits_at(data: &[u8], bit_pos: usize, n: usize) -> Result<u64, BitError> {
    check_range(data, bit_pos, n)?;

    let mut value = 0u64;
    for pos in bit_pos..bit_pos + n {
        let bit = ((data[pos / 8] >> (7 - pos % 8)) & 1) as u64;
        value = (value << 1) | bit;
    }

    Ok(value)
}

/// Sets or clears the bit at `bit_pos`, leaving every other bit of the byte untouched.
pub fn write_bit_at(data: &mut [u8], bit_pos: usize, bit: bool) -> Result<(), BitError> {
    check_range(data, bit_pos, 1)?;

    let mask = 1u8 << (7 - bit_pos % 8);
    let byte = &mut data[bit_pos / 8];
    if bit {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }

    Ok(())
}

/// Writes the low `n` bits of `value` starting at `bit_pos`, most significant bit first.
///
/// Bits of `value` above `n` are ignored. Bits of `data` outside the run keep their
/// previous state.
pub fn write_bits_at(data: &mut [u8], bit_pos: usize, n: usize, value: u64) -> Result<(), BitError> {
    check_range(data, bit_pos, n)?;

    for i in 0..n {
        let pos = bit_pos + i;
        let bit = (value >> (n - i - 1)) & 1 == 1;
        let mask = 1u8 << (7 - pos % 8);
        let byte = &mut data[pos / 8];
        if bit {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    Ok(())
}
