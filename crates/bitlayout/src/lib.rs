//! # bitlayout
//!
//! A bit-field codec for wire-format structures whose fields sit at arbitrary,
//! non-byte-aligned bit boundaries.
//!
//! A [layout::Layout] partitions a storage unit into fields of declared widths.
//! Packed words are read with [word_io::WordReader] and built with
//! [word_io::WordWriter], placing fields by [numbering::Numbering] (MSB 0 or LSB 0).
//! Byte buffers are read and written in place with [buffer_io::BufferReader] and
//! [buffer_io::BufferWriter], filling fields front to back, MSB-first.
//!
//! ## Example
//!
//! ```
//! use bitlayout::layout::Layout;
//! use bitlayout::word_io::WordReader;
//!
//! let input = 0x0FF0FF00u32;
//!
//! let lsb0 = WordReader::new(input, Layout::lsb0([8, 8, 8, 8])).unwrap();
//! assert_eq!(lsb0.field(0).unwrap().get::<u8>().unwrap(), 0x00);
//! assert_eq!(lsb0.field(3).unwrap().get::<u8>().unwrap(), 0x0F);
//!
//! let msb0 = WordReader::new(input, Layout::msb0([8, 8, 8, 8])).unwrap();
//! assert_eq!(msb0.field(0).unwrap().get::<u8>().unwrap(), 0x0F);
//! assert_eq!(msb0.field(3).unwrap().get::<u8>().unwrap(), 0x00);
//! ```

pub mod bits;
pub mod buffer_io;
pub mod endian;
pub mod errors;
pub mod field;
pub mod layout;
pub mod locate;
pub mod numbering;
#[cfg(feature = "serde")]
pub mod serde;
pub mod word;
pub mod word_io;
