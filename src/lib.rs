// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # bytecursor
//!
//! Bounds-checked, endian-aware cursors over caller-owned byte buffers, plus a small
//! type-directed layer for encoding structured values through them.
//!
//! `bytecursor` never allocates or frees the memory it works on. Callers hand in a slice; a
//! [`Reader`] or [`Writer`] tracks a position within it and verifies every access against the
//! slice's size before touching a byte. A failed operation returns an [`Error`] and leaves the
//! position exactly where it was.
//!
//! ## Features
//!
//! - **Explicit byte order** - plain, little-endian, big-endian and [`Endian`]-tagged transfers
//!   for every fixed-width integer and float
//! - **Atomic failures** - bounds are checked before memory is touched
//! - **Strings** - raw, `u32` length-prefixed and zero-terminated, as bytes or validated UTF-8
//! - **Zero-copy views** - borrowed byte and string slices, and subviews over sub-ranges
//! - **Field dispatch** - [`Encode`] / [`Decode`] pick the wire form from the type at compile time
//!
//! ## Quick Start
//!
//! ```rust
//! use bytecursor::prelude::*;
//!
//! let mut buffer = [0u8; 32];
//! let mut writer = Writer::new(&mut buffer);
//!
//! writer.write_le(0xCAFE_BABE_u32)?;
//! writer.write_be(1.5_f32)?;
//! writer.write_sized_string_le("payload")?;
//! writer.write_cstring("end")?;
//!
//! let mut reader = writer.as_reader();
//! assert_eq!(reader.read_le::<u32>()?, 0xCAFE_BABE);
//! assert_eq!(reader.read_be::<f32>()?, 1.5);
//! assert_eq!(reader.read_sized_string_utf8_le()?, "payload");
//! assert_eq!(reader.view_str(3)?, "end");
//! # Ok::<(), bytecursor::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`buffer`] - the byte level: [`Endian`], [`Primitive`], the [`Cursor`] bookkeeping shared
//!   by all cursors, [`Reader`], [`Writer`] and the paired [`Stream`] view
//! - [`field`] - the value level: [`Encode`], [`Decode`], [`Composite`], the list and fixed-size
//!   array codecs, and the [`impl_plain!`] / [`impl_composite!`] registration macros
//!
//! ## Wire Conventions
//!
//! - Length prefixes of strings and lists are unsigned 32-bit integers
//! - `_le` / `_be` methods apply their order to both the prefix and the value
//! - Plain `read` / `write` copy the host's in-memory image and are meant for same-host transfers
//! - Zero-terminated strings cannot contain a zero byte; length-prefixed strings can
//! - List element counts are always little-endian
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use bytecursor::{Error, Reader};
//!
//! let data = [b'a', b'b'];
//! let mut reader = Reader::new(&data);
//!
//! match reader.read_cstring() {
//!     Ok(text) => println!("Read {} bytes", text.len()),
//!     Err(Error::Underflow { needed, remaining }) => {
//!         println!("Missing terminator: needed {needed}, {remaining} remaining")
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo +nightly fuzz run reader --release
//! cargo +nightly fuzz run fields --release -- -jobs=4 -fork=1
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use bytecursor::prelude::*;
///
/// let data = [0x00, 0x2A];
/// let mut reader = Reader::new(&data);
/// assert_eq!(reader.read_be::<u16>()?, 42);
/// # Ok::<(), Error>(())
/// ```
pub mod prelude;

/// Bounds-checked cursors over byte regions.
///
/// # Key Types
///
/// - [`buffer::reader::Reader`] - read-only cursor
/// - [`buffer::writer::Writer`] - write-only cursor
/// - [`buffer::stream::Stream`] - paired reader/writer view
/// - [`buffer::cursor::Bounds`] - bookkeeping shared by all cursors
/// - [`buffer::io::Endian`] - byte order tag
pub mod buffer;

/// Type-directed encoding of structured values.
///
/// See [`Encode`], [`Decode`] and [`Composite`].
pub mod field;

/// `bytecursor` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use bytecursor::{Reader, Result};
///
/// fn header(data: &[u8]) -> Result<(u32, u16)> {
///     let mut reader = Reader::new(data);
///     Ok((reader.read_le()?, reader.read_le()?))
/// }
///
/// assert_eq!(header(&[1, 0, 0, 0, 2, 0])?, (1, 2));
/// assert!(header(&[1, 0]).is_err());
/// # Ok::<(), bytecursor::Error>(())
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `bytecursor` Error type
///
/// Every fallible operation in this crate returns this error. Bounds violations are raised
/// before any byte is read or written.
pub use error::Error;

/// The cursors and the bookkeeping they share.
pub use buffer::{
    cursor::{Access, Bounds, Cursor},
    reader::Reader,
    stream::Stream,
    writer::Writer,
};

/// Byte order selection and the numeric codec.
pub use buffer::io::{byteswap, native_is_big_endian, native_is_little_endian, Endian, Primitive};

/// The field dispatch layer.
pub use field::{
    read_array, read_field, read_field_be, read_field_le, read_list, write_array, write_field,
    write_field_be, write_field_le, write_list, Composite, Decode, Encode,
};

/// Full version string of this crate, e.g. `"0.1.0"`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Major version component.
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Minor version component.
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Patch version component.
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
