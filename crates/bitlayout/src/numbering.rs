//! Bit numbering conventions for fields packed into a single integer.
//!
//! Offsets are measured from the least significant bit of the whole value.
//!
//! ```text
//! Lsb0                                     Msb0
//! field index: 3   2     1       0         field index: 0   1     2       3
//! field size:  1   2     3       2         field size:  1   2     3       2
//! bit:         7  6 5  4 3 2    1 0        bit:         7  6 5  4 3 2    1 0
//! ```
//!
//! With `Lsb0`, field 2 starts past fields 1 and 0 (offset 5). With `Msb0`, field 1
//! starts past fields 2 and 3 (offset 5).

/// Which end of the value field index 0 occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Numbering {
    /// Field 0 holds the most significant bits.
    #[default]
    Msb0,
    /// Field 0 holds the least significant bits.
    Lsb0,
}

impl Numbering {
    /// Bit offset of the least significant bit of field `index`, or `None` when
    /// `index` is not a valid field of `widths`.
    pub const fn field_offset(self, index: usize, widths: &[usize]) -> Option<usize> {
        if index >= widths.len() {
            return None;
        }

        let (from, to) = match self {
            Numbering::Lsb0 => (0, index),
            Numbering::Msb0 => (index + 1, widths.len()),
        };

        Some(sum_widths(widths, from, to))
    }
}

/// Sequential placement of field `index` counted from the start of a buffer.
///
/// Buffer-backed storage always fills fields front to back in declaration order,
/// whatever the [Numbering] of the layout.
pub const fn field_position(index: usize, widths: &[usize]) -> Option<usize> {
    if index >= widths.len() {
        return None;
    }

    Some(sum_widths(widths, 0, index))
}

const fn sum_widths(widths: &[usize], from: usize, to: usize) -> usize {
    let mut sum = 0;
    let mut i = from;
    while i < to {
        sum += widths[i];
        i += 1;
    }

    sum
}
