//! Readers and writers over caller-owned byte buffers.
//!
//! Fields are laid out front to back in declaration order, MSB-first, whatever the
//! layout's numbering. The numbering only decides bit significance inside a packed
//! word; changing buffer placement would change the wire format.

use log::{debug, trace};

use crate::{
    bits,
    errors::{FieldError, LayoutError},
    field::Field,
    layout::Layout,
    locate::FieldLocation,
    word::{FromField, IntoField},
};

fn check_buffer<const N: usize>(layout: &Layout<N>, len: usize) -> Result<(), LayoutError> {
    layout.check_capacity(len * 8).inspect_err(|err| {
        debug!("rejecting layout {:?} for {len}-byte buffer: {err}", layout.widths());
    })
}

/// Reads fields from a borrowed byte slice.
#[derive(Debug, Clone, Copy)]
pub struct BufferReader<'a, const N: usize> {
    data: &'a [u8],
    layout: Layout<N>,
}

impl<'a, const N: usize> BufferReader<'a, N> {
    /// Fails if the layout needs more bits than `data` holds.
    pub fn new(data: &'a [u8], layout: Layout<N>) -> Result<Self, LayoutError> {
        check_buffer(&layout, data.len())?;
        Ok(BufferReader { data, layout })
    }

    pub fn field(&self, index: usize) -> Result<Field<'a, [u8]>, FieldError> {
        Ok(Field::new(self.layout.location(index)?, self.data))
    }

    /// Field view for an index checked at compile time.
    pub fn field_at<const I: usize>(&self) -> Field<'a, [u8]> {
        const { assert!(I < N, "field index out of range") };
        Field::new(self.layout.locations()[I], self.data)
    }

    pub fn read<T: FromField>(&self, index: usize) -> Result<T, FieldError> {
        self.field(index)?.get()
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn layout(&self) -> &Layout<N> {
        &self.layout
    }
}

/// Writes fields into a borrowed byte slice in place.
///
/// Bits outside the written field are preserved, so several writers (or other code)
/// may share one buffer as long as their fields do not overlap.
///
/// ```
/// use bitlayout::{buffer_io::BufferWriter, layout::Layout};
///
/// let mut data = [0u8; 2];
/// let mut writer = BufferWriter::new(&mut data, Layout::msb0([1, 8])).unwrap();
/// writer.write(0, true).unwrap();
/// writer.write(1, 128u8).unwrap();
/// assert_eq!(writer.data(), &[0xC0, 0x00]);
/// ```
#[derive(Debug)]
pub struct BufferWriter<'a, const N: usize> {
    data: &'a mut [u8],
    layout: Layout<N>,
}

impl<'a, const N: usize> BufferWriter<'a, N> {
    /// Fails if the layout needs more bits than `data` holds.
    pub fn new(data: &'a mut [u8], layout: Layout<N>) -> Result<Self, LayoutError> {
        check_buffer(&layout, data.len())?;
        Ok(BufferWriter { data, layout })
    }

    /// Stores the low bits of `value` in field `index`; higher bits are dropped.
    pub fn write<V: IntoField>(&mut self, index: usize, value: V) -> Result<(), FieldError> {
        let location = self.layout.location(index)?;
        self.write_location(&location, value.into_field_bits())
    }

    /// Like [BufferWriter::write], but rejects values that do not fit the field.
    pub fn try_write<V: IntoField>(&mut self, index: usize, value: V) -> Result<(), FieldError> {
        let location = self.layout.location(index)?;
        let value = value.into_field_bits();
        if value > location.max_value() {
            return Err(FieldError::ValueTooWide {
                value,
                width: location.width,
            });
        }

        self.write_location(&location, value)
    }

    fn write_location(&mut self, location: &FieldLocation, value: u64) -> Result<(), FieldError> {
        trace!(
            "buffer write: field {} ({} bits at bit {})",
            location.index, location.width, location.position
        );
        bits::write_bits_at(self.data, location.position, location.width, value)?;
        Ok(())
    }

    pub fn field(&self, index: usize) -> Result<Field<'_, [u8]>, FieldError> {
        Ok(Field::new(self.layout.location(index)?, &*self.data))
    }

    pub fn read<T: FromField>(&self, index: usize) -> Result<T, FieldError> {
        self.field(index)?.get()
    }

    pub fn data(&self) -> &[u8] {
        &*self.data
    }

    pub fn layout(&self) -> &Layout<N> {
        &self.layout
    }

    pub fn as_reader(&self) -> BufferReader<'_, N> {
        BufferReader {
            data: &*self.data,
            layout: self.layout,
        }
    }
}
