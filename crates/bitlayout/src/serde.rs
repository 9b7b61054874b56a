//! JSON-deserializable layout description.
//!
//! These types describe a layout in configuration (for example a protocol
//! description shipped with your application) and convert into [Layout]s whose
//! field count is fixed by the receiving type.

use serde::{Deserialize, Serialize};

use crate::{endian::Endianness, errors::LayoutError, layout::Layout, numbering::Numbering};

/// Bit numbering of packed words.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum NumberingDef {
    /// Field 0 holds the most significant bits.
    #[default]
    Msb0,
    /// Field 0 holds the least significant bits.
    Lsb0,
}

impl From<NumberingDef> for Numbering {
    fn from(value: NumberingDef) -> Self {
        match value {
            NumberingDef::Msb0 => Numbering::Msb0,
            NumberingDef::Lsb0 => Numbering::Lsb0,
        }
    }
}

/// Byte order used when a packed word is serialised.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderDef {
    #[default]
    BigEndian,
    LittleEndian,
}

impl From<ByteOrderDef> for Endianness {
    fn from(value: ByteOrderDef) -> Self {
        match value {
            ByteOrderDef::BigEndian => Endianness::Big,
            ByteOrderDef::LittleEndian => Endianness::Little,
        }
    }
}

/// Top-level layout definition.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LayoutDef {
    /// Numbering of packed words; defaults to MSB 0.
    #[serde(default)]
    pub numbering: NumberingDef,
    /// Field widths in bits, in declaration order.
    pub widths: Vec<usize>,
    /// Byte order for word materialisation; defaults to big endian.
    #[serde(default)]
    pub byte_order: Option<ByteOrderDef>,
}

impl LayoutDef {
    pub fn endianness(&self) -> Endianness {
        self.byte_order.unwrap_or_default().into()
    }
}

impl<const N: usize> TryFrom<&LayoutDef> for Layout<N> {
    type Error = LayoutError;

    fn try_from(value: &LayoutDef) -> Result<Self, Self::Error> {
        let widths: [usize; N] =
            value
                .widths
                .as_slice()
                .try_into()
                .map_err(|_| LayoutError::FieldCount {
                    expected: N,
                    found: value.widths.len(),
                })?;

        Layout::try_new(value.numbering.into(), widths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_json() {
        let def: LayoutDef =
            serde_json::from_str(r#"{ "numbering": "Lsb0", "widths": [4, 4] }"#).unwrap();
        let layout = Layout::<2>::try_from(&def).unwrap();

        assert_eq!(layout.numbering(), Numbering::Lsb0);
        assert_eq!(layout.total_bits(), 8);
        assert_eq!(def.endianness(), Endianness::Big);
    }

    #[test]
    fn test_defaults() {
        let def: LayoutDef =
            serde_json::from_str(r#"{ "widths": [16], "byte_order": "LittleEndian" }"#).unwrap();
        assert_eq!(def.numbering, NumberingDef::Msb0);
        assert_eq!(def.endianness(), Endianness::Little);
    }

    #[test]
    fn test_field_count_mismatch() {
        let def: LayoutDef = serde_json::from_str(r#"{ "widths": [1, 7] }"#).unwrap();
        assert_eq!(
            Layout::<3>::try_from(&def).unwrap_err(),
            LayoutError::FieldCount {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_invalid_width() {
        let def: LayoutDef = serde_json::from_str(r#"{ "widths": [8, 72] }"#).unwrap();
        assert_eq!(
            Layout::<2>::try_from(&def).unwrap_err(),
            LayoutError::InvalidFieldWidth {
                index: 1,
                width: 72
            }
        );
    }
}
