//! Bounds-checked cursors over caller-owned byte regions.
//!
//! This module holds the byte-level half of the crate. Nothing in here allocates the regions it
//! works on: callers hand in a slice, the cursors track a position within it and check every
//! access against its size before touching memory.
//!
//! # Key Components
//!
//! ## Numeric Codec
//! - [`crate::buffer::io`] - [`crate::Endian`], the sealed [`crate::Primitive`] trait and byte swapping
//!
//! ## Cursor Core
//! - [`crate::buffer::cursor::Bounds`] - Position and size bookkeeping shared by all cursors
//! - [`crate::Cursor`] - Navigation and size queries provided on top of [`crate::buffer::cursor::Bounds`]
//!
//! ## Cursors
//! - [`crate::Reader`] - Read-only cursor over `&[u8]`
//! - [`crate::Writer`] - Write-only cursor over `&mut [u8]`
//! - [`crate::Stream`] - Hands out readers and writers over one `&mut [u8]`
//!
//! # Byte Order
//!
//! Every numeric transfer exists in three flavours: the plain form (`read` / `write`) copies the
//! in-memory image without conversion, the `_le` / `_be` forms convert to and from an explicit
//! order, and the `_with` forms take the order as an [`crate::Endian`] argument. Length prefixes
//! of sized strings follow the order of the method they belong to.
//!
//! # Examples
//!
//! ```rust
//! use bytecursor::{Cursor, Endian, Reader, Writer};
//!
//! let mut buffer = [0u8; 32];
//! let mut writer = Writer::new(&mut buffer);
//! writer.write_with(0x0102_u16, Endian::Big)?;
//! writer.write_sized_string_le("name")?;
//! writer.write_cstring("tag")?;
//! let end = writer.position();
//!
//! let mut reader = Reader::new(&buffer[..end]);
//! assert_eq!(reader.read_with::<u16>(Endian::Big)?, 0x0102);
//! assert_eq!(reader.read_sized_string_utf8_le()?, "name");
//! assert_eq!(reader.read_cstring()?, b"tag");
//! assert!(reader.is_exhausted());
//! # Ok::<(), bytecursor::Error>(())
//! ```

pub mod cursor;
pub mod io;
pub mod reader;
pub mod stream;
pub mod writer;
