//! Error types for layout construction, field access and bit-level buffer access.

use thiserror::Error;

/// Errors produced when building a [crate::layout::Layout] or binding it to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Layout declares no fields.
    #[error("layout declares no fields")]
    Empty,
    /// Field width is 0 or greater than 64 bits.
    #[error("field {index} has width {width}, expected 1..=64 bits")]
    InvalidFieldWidth { index: usize, width: usize },
    /// Sum of widths differs from the bit width of the backing word.
    #[error("layout spans {layout_bits} bits but the backing word holds {storage_bits}")]
    StorageMismatch {
        layout_bits: usize,
        storage_bits: usize,
    },
    /// Sum of widths exceeds the bit capacity of the backing buffer.
    #[error("layout spans {layout_bits} bits but the buffer holds only {capacity_bits}")]
    BufferTooSmall {
        layout_bits: usize,
        capacity_bits: usize,
    },
    /// A layout description lists a different number of fields than the layout type.
    #[error("layout description has {found} fields, expected {expected}")]
    FieldCount { expected: usize, found: usize },
}

/// Errors produced when accessing a single field through a reader or writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field index is not below the field count.
    #[error("field index {index} out of range for a layout of {count} fields")]
    IndexOutOfRange { index: usize, count: usize },
    /// Requested output type cannot hold every bit of the field.
    #[error("field of {width} bits does not fit into a {target_bits}-bit type")]
    WidthOverflow { width: usize, target_bits: usize },
    /// Value handed to a checked write has bits above the field width.
    #[error("value {value:#x} does not fit into a {width}-bit field")]
    ValueTooWide { value: u64, width: usize },
    /// Underlying bit access failed.
    #[error(transparent)]
    Bits(#[from] BitError),
}

/// Errors produced when reading or writing raw bits of a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitError {
    /// Requested bit range is beyond the end of the data.
    #[error("bits {bit_pos}..{end} are outside a buffer of {capacity_bits} bits")]
    OutOfBounds {
        bit_pos: usize,
        end: usize,
        capacity_bits: usize,
    },
    /// More than 64 bits were requested in a single access.
    #[error("cannot access {0} bits at once, the limit is 64")]
    TooManyBits(usize),
}
