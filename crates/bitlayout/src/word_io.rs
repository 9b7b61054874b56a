//! Readers and writers backed by a single packed integer.
//!
//! Fields are placed inside the word according to the layout's
//! [crate::numbering::Numbering]. The layout must cover every bit of the word.

use log::{debug, trace};

use crate::{
    endian::Endianness,
    errors::{BitError, FieldError, LayoutError},
    field::{Field, FieldSource},
    layout::Layout,
    word::{FromField, IntoField, Word},
};

/// Read-only view of a packed word.
///
/// ```
/// use bitlayout::{layout::Layout, word_io::WordReader};
///
/// let reader = WordReader::new(0x0FF0FF00u32, Layout::msb0([8, 8, 8, 8])).unwrap();
/// assert_eq!(reader.read::<u8>(0).unwrap(), 0x0F);
/// assert_eq!(reader.field_at::<3>().get::<u8>().unwrap(), 0x00);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordReader<W: Word, const N: usize> {
    value: W,
    layout: Layout<N>,
}

impl<W: Word + FieldSource, const N: usize> WordReader<W, N> {
    /// Fails unless the layout spans exactly [Word::BITS] bits.
    pub fn new(value: W, layout: Layout<N>) -> Result<Self, LayoutError> {
        layout.check_word(W::BITS).inspect_err(|err| {
            debug!("rejecting layout {:?} for word reader: {err}", layout.widths());
        })?;

        Ok(WordReader { value, layout })
    }

    /// Loads the word from the front of `bytes` in the given byte order.
    pub fn from_bytes(
        bytes: &[u8],
        endianness: Endianness,
        layout: Layout<N>,
    ) -> Result<Self, LayoutError> {
        let value = endianness
            .get(bytes, W::BYTES)
            .map_err(|_| LayoutError::BufferTooSmall {
                layout_bits: W::BITS,
                capacity_bits: bytes.len() * 8,
            })?;

        Self::new(W::from_bits(value), layout)
    }

    pub fn field(&self, index: usize) -> Result<Field<'_, W>, FieldError> {
        Ok(Field::new(self.layout.location(index)?, &self.value))
    }

    /// Field view for an index checked at compile time.
    pub fn field_at<const I: usize>(&self) -> Field<'_, W> {
        const { assert!(I < N, "field index out of range") };
        Field::new(self.layout.locations()[I], &self.value)
    }

    pub fn read<T: FromField>(&self, index: usize) -> Result<T, FieldError> {
        self.field(index)?.get()
    }

    pub fn value(&self) -> W {
        self.value
    }

    pub fn layout(&self) -> &Layout<N> {
        &self.layout
    }
}

/// Builds a packed word field by field.
///
/// ```
/// use bitlayout::{endian::Endianness, layout::Layout, word_io::WordWriter};
///
/// let mut writer = WordWriter::<u16, 2>::new(Layout::msb0([4, 12])).unwrap();
/// writer.write(0, 0xAu8).unwrap();
/// writer.write(1, 0x123u16).unwrap();
///
/// let mut buf = [0u8; 2];
/// writer.write_to(Endianness::Little, &mut buf).unwrap();
/// assert_eq!(buf, [0x23, 0xA1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordWriter<W: Word, const N: usize> {
    value: W,
    layout: Layout<N>,
}

impl<W: Word + FieldSource, const N: usize> WordWriter<W, N> {
    /// Starts from an all-zero word.
    pub fn new(layout: Layout<N>) -> Result<Self, LayoutError> {
        Self::with_value(W::from_bits(0), layout)
    }

    pub fn with_value(value: W, layout: Layout<N>) -> Result<Self, LayoutError> {
        layout.check_word(W::BITS).inspect_err(|err| {
            debug!("rejecting layout {:?} for word writer: {err}", layout.widths());
        })?;

        Ok(WordWriter { value, layout })
    }

    /// Stores the low bits of `value` in field `index`; higher bits are dropped.
    pub fn write<V: IntoField>(&mut self, index: usize, value: V) -> Result<(), FieldError> {
        let location = self.layout.location(index)?;
        let bits = location.insert(self.value.to_bits(), value.into_field_bits());
        trace!("word write: field {index} ({} bits at offset {})", location.width, location.offset);

        self.value = W::from_bits(bits);
        Ok(())
    }

    /// Like [WordWriter::write], but rejects values that do not fit the field.
    pub fn try_write<V: IntoField>(&mut self, index: usize, value: V) -> Result<(), FieldError> {
        let location = self.layout.location(index)?;
        let value = value.into_field_bits();
        if value > location.max_value() {
            return Err(FieldError::ValueTooWide {
                value,
                width: location.width,
            });
        }

        self.write(index, value)
    }

    pub fn field(&self, index: usize) -> Result<Field<'_, W>, FieldError> {
        Ok(Field::new(self.layout.location(index)?, &self.value))
    }

    pub fn read<T: FromField>(&self, index: usize) -> Result<T, FieldError> {
        self.field(index)?.get()
    }

    /// Serialises the whole word into the front of `buf`.
    pub fn write_to(&self, endianness: Endianness, buf: &mut [u8]) -> Result<(), BitError> {
        trace!("materialising {}-byte word as {endianness:?} endian", W::BYTES);
        endianness.put(self.value.to_bits(), W::BYTES, buf)
    }

    pub fn value(&self) -> W {
        self.value
    }

    pub fn layout(&self) -> &Layout<N> {
        &self.layout
    }

    pub fn to_reader(&self) -> WordReader<W, N> {
        WordReader {
            value: self.value,
            layout: self.layout,
        }
    }
}
