//! Field view: a handle to one field whose output type is chosen at the access site.

use crate::{
    bits,
    errors::{BitError, FieldError},
    locate::FieldLocation,
    word::{FromField, U24, U40, U48, U56, Word},
};

/// Storage a [Field] can extract its bits from.
pub trait FieldSource {
    /// Returns the field's bits right-aligned.
    fn fetch(&self, location: &FieldLocation) -> Result<u64, BitError>;
}

macro_rules! impl_word_source {
    ($($ty:ty),*) => {
        $(
            impl FieldSource for $ty {
                fn fetch(&self, location: &FieldLocation) -> Result<u64, BitError> {
                    Ok(location.extract(self.to_bits()))
                }
            }
        )*
    };
}

impl_word_source!(u8, u16, u32, u64, U24, U40, U48, U56);

impl FieldSource for [u8] {
    fn fetch(&self, location: &FieldLocation) -> Result<u64, BitError> {
        bits::read_bits_at(self, location.position, location.width)
    }
}

/// One field of a layout, bound to the storage it was taken from.
///
/// Nothing is extracted until [Field::get] names the output type, so a 1-bit field
/// can be read as `bool` while its neighbours are read as integers.
#[derive(Debug)]
pub struct Field<'a, S: FieldSource + ?Sized> {
    location: FieldLocation,
    source: &'a S,
}

impl<'a, S: FieldSource + ?Sized> Field<'a, S> {
    pub(crate) fn new(location: FieldLocation, source: &'a S) -> Self {
        Field { location, source }
    }

    /// Reads the field as `T`, failing if `T` is narrower than the field.
    pub fn get<T: FromField>(&self) -> Result<T, FieldError> {
        if T::BITS < self.location.width {
            return Err(FieldError::WidthOverflow {
                width: self.location.width,
                target_bits: T::BITS,
            });
        }

        Ok(T::from_field_bits(self.raw()?))
    }

    /// Reads the field's bits right-aligned, without a target type.
    pub fn raw(&self) -> Result<u64, FieldError> {
        Ok(self.source.fetch(&self.location)?)
    }

    pub fn location(&self) -> FieldLocation {
        self.location
    }

    pub fn index(&self) -> usize {
        self.location.index
    }

    pub fn width(&self) -> usize {
        self.location.width
    }

    pub fn max_value(&self) -> u64 {
        self.location.max_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{locate::locate, numbering::Numbering};

    #[test]
    fn test_word_field() {
        let location = locate(Numbering::Lsb0, 1, &[1, 7]).unwrap();
        let storage = 0xF1u8;
        let field = Field::new(location, &storage);
        assert_eq!(field.get::<u8>().unwrap(), 0b1111000);
        assert_eq!(field.raw().unwrap(), 0b1111000);
    }

    #[test]
    fn test_buffer_field() {
        let location = locate(Numbering::Lsb0, 1, &[1, 8]).unwrap();
        let data = [0b1100_0000u8, 0];
        let field = Field::new(location, &data[..]);
        assert_eq!(field.get::<u8>().unwrap(), 0x80);
    }

    #[test]
    fn test_width_overflow() {
        let location = locate(Numbering::Msb0, 0, &[9, 7]).unwrap();
        let storage = 0xFFFFu16;
        let field = Field::new(location, &storage);
        assert_eq!(
            field.get::<u8>().unwrap_err(),
            FieldError::WidthOverflow {
                width: 9,
                target_bits: 8
            }
        );
        assert_eq!(field.get::<u16>().unwrap(), 0x1FF);
    }

    #[test]
    fn test_bool_needs_single_bit() {
        let location = locate(Numbering::Msb0, 0, &[2, 6]).unwrap();
        let storage = 0xC0u8;
        let field = Field::new(location, &storage);
        assert!(matches!(
            field.get::<bool>(),
            Err(FieldError::WidthOverflow { width: 2, .. })
        ));
    }

    #[test]
    fn test_buffer_field_out_of_bounds() {
        let location = locate(Numbering::Msb0, 1, &[8, 8]).unwrap();
        let data = [0xFFu8];
        let field = Field::new(location, &data[..]);
        assert!(matches!(
            field.get::<u8>(),
            Err(FieldError::Bits(BitError::OutOfBounds { .. }))
        ));
    }
}
