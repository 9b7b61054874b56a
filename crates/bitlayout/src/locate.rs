//! Offset and mask computation for a single field of a layout.

use crate::numbering::{Numbering, field_position};

/// Widest field a layout may declare.
pub const MAX_FIELD_BITS: usize = 64;

/// Mask with the low `width` bits set. Widths of 64 and above give `u64::MAX`.
pub const fn field_mask(width: usize) -> u64 {
    if width >= MAX_FIELD_BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Where a field lives, both inside a packed integer and inside a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldLocation {
    /// Position of the field in its layout.
    pub index: usize,
    /// Declared width in bits.
    pub width: usize,
    /// Shift of the field's least significant bit inside a packed integer.
    pub offset: usize,
    /// First bit of the field inside a buffer, counted MSB-first from the start.
    pub position: usize,
    /// `width` low bits set.
    pub mask: u64,
}

impl FieldLocation {
    pub(crate) const EMPTY: FieldLocation = FieldLocation {
        index: 0,
        width: 0,
        offset: 0,
        position: 0,
        mask: 0,
    };

    /// Extracts the field from `storage`, right-aligned.
    pub const fn extract(&self, storage: u64) -> u64 {
        match storage.checked_shr(self.offset as u32) {
            Some(shifted) => shifted & self.mask,
            None => 0,
        }
    }

    /// Returns `storage` with the field replaced by the low `width` bits of `value`.
    pub const fn insert(&self, storage: u64, value: u64) -> u64 {
        match self.mask.checked_shl(self.offset as u32) {
            Some(placed) => (storage & !placed) | ((value & self.mask) << self.offset),
            None => storage,
        }
    }

    /// Largest value the field can hold.
    pub const fn max_value(&self) -> u64 {
        self.mask
    }

    /// One past the last buffer bit the field occupies.
    pub const fn end(&self) -> usize {
        self.position + self.width
    }
}

/// Computes the location of field `index`, or `None` if the index is out of range.
pub const fn locate(numbering: Numbering, index: usize, widths: &[usize]) -> Option<FieldLocation> {
    let offset = match numbering.field_offset(index, widths) {
        Some(offset) => offset,
        None => return None,
    };
    let position = match field_position(index, widths) {
        Some(position) => position,
        None => return None,
    };

    let width = widths[index];
    Some(FieldLocation {
        index,
        width,
        offset,
        position,
        mask: field_mask(width),
    })
}
