//! Layout: an ordered list of field widths with its precomputed location table.

use crate::{
    errors::{FieldError, LayoutError},
    locate::{FieldLocation, MAX_FIELD_BITS, locate},
    numbering::Numbering,
};

/// A fixed partition of a storage unit into `N` fields.
///
/// Offsets and masks are computed once at construction. Build a layout in a `const`
/// item with [Layout::new] to have malformed layouts rejected at compile time:
///
/// ```
/// use bitlayout::layout::Layout;
///
/// const HEADER: Layout<3> = Layout::msb0([4, 4, 8]);
/// assert_eq!(HEADER.total_bits(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout<const N: usize> {
    numbering: Numbering,
    widths: [usize; N],
    locations: [FieldLocation; N],
    total_bits: usize,
}

impl<const N: usize> Layout<N> {
    /// Builds a layout, panicking on invalid widths (a compile error in `const` context).
    pub const fn new(numbering: Numbering, widths: [usize; N]) -> Self {
        match Self::try_new(numbering, widths) {
            Ok(layout) => layout,
            Err(LayoutError::Empty) => panic!("bit-field layout declares no fields"),
            Err(_) => panic!("bit-field layout has a field width outside 1..=64"),
        }
    }

    pub const fn msb0(widths: [usize; N]) -> Self {
        Self::new(Numbering::Msb0, widths)
    }

    pub const fn lsb0(widths: [usize; N]) -> Self {
        Self::new(Numbering::Lsb0, widths)
    }

    /// Builds a layout, rejecting empty layouts and widths outside `1..=64`.
    pub const fn try_new(numbering: Numbering, widths: [usize; N]) -> Result<Self, LayoutError> {
        if N == 0 {
            return Err(LayoutError::Empty);
        }

        let mut total_bits = 0;
        let mut i = 0;
        while i < N {
            let width = widths[i];
            if width == 0 || width > MAX_FIELD_BITS {
                return Err(LayoutError::InvalidFieldWidth { index: i, width });
            }
            total_bits += width;
            i += 1;
        }

        let mut locations = [FieldLocation::EMPTY; N];
        let mut i = 0;
        while i < N {
            locations[i] = match locate(numbering, i, &widths) {
                Some(location) => location,
                None => return Err(LayoutError::Empty),
            };
            i += 1;
        }

        Ok(Layout {
            numbering,
            widths,
            locations,
            total_bits,
        })
    }

    pub const fn numbering(&self) -> Numbering {
        self.numbering
    }

    pub const fn widths(&self) -> &[usize; N] {
        &self.widths
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Sum of all field widths.
    pub const fn total_bits(&self) -> usize {
        self.total_bits
    }

    pub const fn locations(&self) -> &[FieldLocation; N] {
        &self.locations
    }

    /// Location of field `index`.
    pub fn location(&self, index: usize) -> Result<FieldLocation, FieldError> {
        self.locations
            .get(index)
            .copied()
            .ok_or(FieldError::IndexOutOfRange { index, count: N })
    }

    pub fn width(&self, index: usize) -> Result<usize, FieldError> {
        Ok(self.location(index)?.width)
    }

    /// Largest value field `index` can hold.
    pub fn max_value(&self, index: usize) -> Result<u64, FieldError> {
        Ok(self.location(index)?.max_value())
    }

    /// Checks that the layout fills a word of `storage_bits` bits exactly.
    pub fn check_word(&self, storage_bits: usize) -> Result<(), LayoutError> {
        if self.total_bits != storage_bits {
            return Err(LayoutError::StorageMismatch {
                layout_bits: self.total_bits,
                storage_bits,
            });
        }

        Ok(())
    }

    /// Checks that the layout fits into a buffer of `capacity_bits` bits.
    pub fn check_capacity(&self, capacity_bits: usize) -> Result<(), LayoutError> {
        if self.total_bits > capacity_bits {
            return Err(LayoutError::BufferTooSmall {
                layout_bits: self.total_bits,
                capacity_bits,
            });
        }

        Ok(())
    }
}
