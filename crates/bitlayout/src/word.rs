//! Backing word types and the numeric conversions used at field access sites.

/// A fixed-width unsigned integer that can back a [crate::word_io::WordReader].
pub trait Word: Copy {
    /// Bit width of the storage.
    const BITS: usize;
    /// Byte width of the storage when serialised.
    const BYTES: usize = Self::BITS / 8;

    fn to_bits(self) -> u64;

    /// Builds a word from the low [Word::BITS] bits of `bits`.
    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_word_primitive {
    ($($ty:ty),*) => {
        $(
            impl Word for $ty {
                const BITS: usize = <$ty>::BITS as usize;

                fn to_bits(self) -> u64 {
                    self as u64
                }

                fn from_bits(bits: u64) -> Self {
                    bits as $ty
                }
            }
        )*
    };
}

impl_word_primitive!(u8, u16, u32, u64);

macro_rules! narrow_word {
    ($(#[$doc:meta] $name:ident($inner:ty, $bits:expr);)*) => {
        $(
            #[$doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            pub struct $name($inner);

            impl $name {
                pub const BITS: usize = $bits;
                pub const MAX: $name = $name(((1u64 << $bits) - 1) as $inner);

                /// Returns `None` when `value` needs more than [Self::BITS] bits.
                pub const fn new(value: $inner) -> Option<Self> {
                    if (value as u64) >> $bits == 0 {
                        Some($name(value))
                    } else {
                        None
                    }
                }

                /// Keeps the low [Self::BITS] bits of `value`.
                pub const fn new_truncated(value: $inner) -> Self {
                    $name(((value as u64) & ((1u64 << $bits) - 1)) as $inner)
                }

                pub const fn get(self) -> $inner {
                    self.0
                }
            }

            impl Word for $name {
                const BITS: usize = $bits;

                fn to_bits(self) -> u64 {
                    self.0 as u64
                }

                fn from_bits(bits: u64) -> Self {
                    $name((bits & ((1u64 << $bits) - 1)) as $inner)
                }
            }

            impl From<$name> for $inner {
                fn from(value: $name) -> $inner {
                    value.0
                }
            }
        )*
    };
}

narrow_word! {
    /// 24-bit unsigned integer stored in a `u32`.
    U24(u32, 24);
    /// 40-bit unsigned integer stored in a `u64`.
    U40(u64, 40);
    /// 48-bit unsigned integer stored in a `u64`.
    U48(u64, 48);
    /// 56-bit unsigned integer stored in a `u64`.
    U56(u64, 56);
}

/// A type a field can be read as.
pub trait FromField: Sized {
    /// Number of field bits the type can hold.
    const BITS: usize;

    /// Converts right-aligned field bits. Callers guarantee `bits` fits in [FromField::BITS].
    fn from_field_bits(bits: u64) -> Self;
}

impl FromField for bool {
    const BITS: usize = 1;

    fn from_field_bits(bits: u64) -> Self {
        bits != 0
    }
}

macro_rules! impl_from_field {
    ($($ty:ty),*) => {
        $(
            impl FromField for $ty {
                const BITS: usize = <$ty>::BITS as usize;

                fn from_field_bits(bits: u64) -> Self {
                    bits as $ty
                }
            }
        )*
    };
}

impl_from_field!(u8, u16, u32, u64, u128, usize);

/// A type a field can be written from.
pub trait IntoField {
    fn into_field_bits(self) -> u64;
}

impl IntoField for bool {
    fn into_field_bits(self) -> u64 {
        self as u64
    }
}

macro_rules! impl_into_field {
    ($($ty:ty),*) => {
        $(
            impl IntoField for $ty {
                fn into_field_bits(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_into_field!(u8, u16, u32, u64, usize);
