//! Read-only cursor over a borrowed byte region.
//!
//! This module provides the [`crate::Reader`] type, a position-tracking view for extracting
//! primitives, raw byte ranges, strings and sub-ranges from a caller-owned slice. The reader never
//! copies or owns the region; values it returns are either copies (`Vec<u8>`, `String`, numbers)
//! or borrows that live as long as the region itself.
//!
//! # Key Components
//!
//! ## Navigation Methods
//! - [`crate::Cursor::seek`] / [`crate::Cursor::skip`] / [`crate::Cursor::rewind`]
//! - [`crate::Reader::align`] - Skip to the next multiple of a power of two
//! - [`crate::Reader::subview`] - Independent reader over a sub-range
//!
//! ## Numeric Methods
//! - [`crate::Reader::read`] - Bytes as stored, no conversion
//! - [`crate::Reader::read_le`] / [`crate::Reader::read_be`] - Explicit byte order
//! - [`crate::Reader::peek`] and friends - Same, without moving
//! - [`crate::Reader::read_array`] and friends - Bulk reads into a slice
//!
//! ## String Methods
//! - [`crate::Reader::read_string`] - Fixed number of raw bytes
//! - [`crate::Reader::read_sized_string_le`] / [`crate::Reader::read_sized_string_be`] - `u32` length prefix
//! - [`crate::Reader::read_cstring`] - Zero-terminated
//! - [`crate::Reader::view_string`] - Borrowed, no copy
//!
//! Every string method has a `_utf8` (or `view_str`) counterpart that validates the bytes and
//! returns Rust text; the byte-level versions accept arbitrary content, including zero bytes.
//!
//! # Examples
//!
//! ```rust
//! use bytecursor::{Cursor, Reader};
//!
//! let data = [0x78, 0x56, 0x34, 0x12, b'h', b'i', 0x00];
//! let mut reader = Reader::new(&data);
//!
//! assert_eq!(reader.read_le::<u32>()?, 0x1234_5678);
//! assert_eq!(reader.read_cstring()?, b"hi");
//! assert!(reader.is_exhausted());
//! # Ok::<(), bytecursor::Error>(())
//! ```

use crate::{
    buffer::{
        cursor::{Access, Bounds, Cursor},
        io::{Endian, Primitive},
    },
    Error, Result,
};

/// A bounds-checked, read-only cursor over a byte region.
///
/// `Reader` tracks a position within the borrowed region; every read checks that enough bytes
/// remain before copying anything, so a failed read leaves the position untouched.
///
/// Peeking does not need mutable access, reading does: the position is the reader's own state,
/// the region is never modified.
///
/// # Examples
///
/// ```rust
/// use bytecursor::{Cursor, Reader};
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.read_be::<u16>()?, 0x0102);
/// assert_eq!(reader.peek_le::<u16>()?, 0x0403);
/// assert_eq!(reader.position(), 2);
///
/// reader.seek(6)?;
/// assert_eq!(reader.read_le::<u16>()?, 0x0807);
/// # Ok::<(), bytecursor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    bounds: Bounds,
}

impl<'a> From<&'a [u8]> for Reader<'a> {
    fn from(data: &'a [u8]) -> Self {
        Reader::new(data)
    }
}

impl Cursor for Reader<'_> {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn bounds_mut(&mut self) -> &mut Bounds {
        &mut self.bounds
    }
}

impl<'a> Reader<'a> {
    /// Create a new [`Reader`] over `data`, positioned at 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::{Cursor, Reader};
    ///
    /// let reader = Reader::new(&[0x01, 0x02, 0x03]);
    /// assert_eq!(reader.size(), 3);
    /// assert_eq!(reader.position(), 0);
    /// ```
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Reader {
            data,
            bounds: Bounds::new(data.len(), Access::Read),
        }
    }

    pub(crate) fn at(data: &'a [u8], position: usize) -> Self {
        Reader {
            data,
            bounds: Bounds::new(data.len(), Access::Read).with_position(position),
        }
    }

    /// The whole region this reader was created over, independent of the position.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Advance to the next multiple of `alignment`. The skipped padding is not inspected.
    ///
    /// # Errors
    /// Returns [`Error::Alignment`] if `alignment` is not a power of two, or
    /// [`Error::Underflow`] if the aligned position would be past the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::{Cursor, Reader};
    ///
    /// let data = [0u8; 8];
    /// let mut reader = Reader::new(&data);
    ///
    /// reader.skip(1)?;
    /// reader.align(4)?;
    /// assert_eq!(reader.position(), 4);
    /// # Ok::<(), bytecursor::Error>(())
    /// ```
    pub fn align(&mut self, alignment: usize) -> Result<()> {
        let padding = self.bounds.padding(alignment)?;
        self.bounds.advance(padding)?;
        Ok(())
    }

    /// Create an independent reader over `[offset, offset + length)` of this region.
    ///
    /// The new reader starts at position 0; this reader's position is not affected. When `length`
    /// is `None` the subview extends to the end of the region.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `offset` or `offset + length` is past the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::{Cursor, Reader};
    ///
    /// let data: Vec<u8> = (0..100).collect();
    /// let reader = Reader::new(&data);
    ///
    /// let mut sub = reader.subview(10, Some(20))?;
    /// assert_eq!(sub.size(), 20);
    /// assert_eq!(sub.read::<u8>()?, 10);
    /// assert_eq!(reader.position(), 0);
    /// # Ok::<(), bytecursor::Error>(())
    /// ```
    pub fn subview(&self, offset: usize, length: Option<usize>) -> Result<Reader<'a>> {
        let range = self.bounds.subrange(offset, length)?;
        Ok(Reader::new(&self.data[range]))
    }

    /// Execute a closure, restoring the position if it fails.
    ///
    /// On success the position reflects whatever the closure consumed.
    ///
    /// # Errors
    /// Returns any error produced by `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::{Cursor, Reader};
    ///
    /// let data = [0x01, 0x02, 0x03];
    /// let mut reader = Reader::new(&data);
    ///
    /// let result = reader.transactional(|r| {
    ///     r.read::<u16>()?;
    ///     r.read::<u16>()
    /// });
    /// assert!(result.is_err());
    /// assert_eq!(reader.position(), 0);
    /// ```
    pub fn transactional<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let saved = self.bounds;
        let result = f(self);
        if result.is_err() {
            self.bounds = saved;
        }
        result
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let range = self.bounds.advance(n)?;
        let data: &'a [u8] = self.data;
        Ok(&data[range])
    }

    /// Read a `T` exactly as its bytes are stored, without byte order conversion.
    ///
    /// Intended for data produced on a host with the same byte order.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `T::SIZE` bytes remain.
    pub fn read<T: Primitive>(&mut self) -> Result<T> {
        let bytes = self.take(T::SIZE)?;
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Read a `T` stored in byte order `endian`.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `T::SIZE` bytes remain.
    pub fn read_with<T: Primitive>(&mut self, endian: Endian) -> Result<T> {
        Ok(self.read::<T>()?.convert(endian))
    }

    /// Read a little-endian `T` and advance.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `T::SIZE` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::Reader;
    ///
    /// let mut reader = Reader::new(&[0x78, 0x56, 0x34, 0x12]);
    /// assert_eq!(reader.read_le::<u32>()?, 0x1234_5678);
    /// # Ok::<(), bytecursor::Error>(())
    /// ```
    pub fn read_le<T: Primitive>(&mut self) -> Result<T> {
        self.read_with(Endian::Little)
    }

    /// Read a big-endian `T` and advance.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `T::SIZE` bytes remain.
    pub fn read_be<T: Primitive>(&mut self) -> Result<T> {
        self.read_with(Endian::Big)
    }

    /// Read a `T` in byte order `endian` without advancing.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `T::SIZE` bytes remain.
    pub fn peek_with<T: Primitive>(&self, endian: Endian) -> Result<T> {
        let range = self.bounds.check(T::SIZE)?;
        let value: T = bytemuck::pod_read_unaligned(&self.data[range]);
        Ok(value.convert(endian))
    }

    /// Read a `T` as stored without advancing.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `T::SIZE` bytes remain.
    pub fn peek<T: Primitive>(&self) -> Result<T> {
        self.peek_with(Endian::Native)
    }

    /// Read a little-endian `T` without advancing.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `T::SIZE` bytes remain.
    pub fn peek_le<T: Primitive>(&self) -> Result<T> {
        self.peek_with(Endian::Little)
    }

    /// Read a big-endian `T` without advancing.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `T::SIZE` bytes remain.
    pub fn peek_be<T: Primitive>(&self) -> Result<T> {
        self.peek_with(Endian::Big)
    }

    /// Copy `dst.len()` raw bytes into `dst` and advance.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `dst.len()` bytes remain.
    pub fn read_bytes(&mut self, dst: &mut [u8]) -> Result<()> {
        let bytes = self.take(dst.len())?;
        dst.copy_from_slice(bytes);
        Ok(())
    }

    /// Borrow the next `n` bytes of the region and advance past them.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `n` bytes remain.
    pub fn read_bytes_ref(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// Read a plain-old-data value by copying its in-memory image verbatim.
    ///
    /// No byte order conversion is applied to any of its fields.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `size_of::<T>()` bytes remain.
    pub fn read_pod<T: bytemuck::Pod>(&mut self) -> Result<T> {
        let bytes = self.take(std::mem::size_of::<T>())?;
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Fill `dst` with consecutive values stored as-is, in a single bulk copy.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if the whole slice cannot be filled; `dst` is untouched then.
    pub fn read_array<T: Primitive>(&mut self, dst: &mut [T]) -> Result<()> {
        let bytes = self.take(dst.len() * T::SIZE)?;
        bytemuck::cast_slice_mut::<T, u8>(dst).copy_from_slice(bytes);
        Ok(())
    }

    /// Fill `dst` with consecutive values stored in byte order `endian`.
    ///
    /// Falls back to a straight bulk copy when no conversion is needed.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if the whole slice cannot be filled; `dst` is untouched then.
    pub fn read_array_with<T: Primitive>(&mut self, dst: &mut [T], endian: Endian) -> Result<()> {
        self.read_array(dst)?;
        if T::SIZE > 1 && endian.needs_swap() {
            for value in dst.iter_mut() {
                *value = value.byteswap();
            }
        }
        Ok(())
    }

    /// Fill `dst` with consecutive little-endian values.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if the whole slice cannot be filled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::Reader;
    ///
    /// let mut reader = Reader::new(&[0x01, 0x00, 0x02, 0x00, 0x03, 0x00]);
    /// let mut values = [0u16; 3];
    /// reader.read_array_le(&mut values)?;
    /// assert_eq!(values, [1, 2, 3]);
    /// # Ok::<(), bytecursor::Error>(())
    /// ```
    pub fn read_array_le<T: Primitive>(&mut self, dst: &mut [T]) -> Result<()> {
        self.read_array_with(dst, Endian::Little)
    }

    /// Fill `dst` with consecutive big-endian values.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if the whole slice cannot be filled.
    pub fn read_array_be<T: Primitive>(&mut self, dst: &mut [T]) -> Result<()> {
        self.read_array_with(dst, Endian::Big)
    }

    /// Copy the next `n` bytes verbatim into an owned byte string.
    ///
    /// The content is not interpreted: zero bytes and invalid UTF-8 are returned as they are.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `n` bytes remain.
    pub fn read_string(&mut self, n: usize) -> Result<Vec<u8>> {
        Ok(self.take(n)?.to_vec())
    }

    /// Copy the next `n` bytes into a `String`, validating UTF-8.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `n` bytes remain, or [`Error::Malformed`] if the
    /// bytes are not UTF-8. The position is unchanged in both cases.
    pub fn read_string_utf8(&mut self, n: usize) -> Result<String> {
        Ok(self.view_str(n)?.to_owned())
    }

    /// Read a `u32` length prefix in byte order `endian`, then that many raw bytes.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if the prefix or the content is truncated; the prefix is not
    /// consumed in that case.
    pub fn read_sized_string_with(&mut self, endian: Endian) -> Result<Vec<u8>> {
        self.transactional(|reader| {
            let length = reader.read_with::<u32>(endian)?;
            reader.read_string(length as usize)
        })
    }

    /// Read a little-endian `u32` length prefix, then that many raw bytes.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if the prefix or the content is truncated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::Reader;
    ///
    /// let data = [0x03, 0x00, 0x00, 0x00, b'a', 0x00, b'c'];
    /// let mut reader = Reader::new(&data);
    /// assert_eq!(reader.read_sized_string_le()?, b"a\0c");
    /// # Ok::<(), bytecursor::Error>(())
    /// ```
    pub fn read_sized_string_le(&mut self) -> Result<Vec<u8>> {
        self.read_sized_string_with(Endian::Little)
    }

    /// Read a big-endian `u32` length prefix, then that many raw bytes.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if the prefix or the content is truncated.
    pub fn read_sized_string_be(&mut self) -> Result<Vec<u8>> {
        self.read_sized_string_with(Endian::Big)
    }

    /// Read a length-prefixed string in byte order `endian` and validate it as UTF-8.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] for truncated input or [`Error::Malformed`] for invalid
    /// UTF-8; the position is unchanged in both cases.
    pub fn read_sized_string_utf8_with(&mut self, endian: Endian) -> Result<String> {
        self.transactional(|reader| {
            let length = reader.read_with::<u32>(endian)?;
            reader.read_string_utf8(length as usize)
        })
    }

    /// Read a little-endian length-prefixed UTF-8 string.
    ///
    /// # Errors
    /// See [`Reader::read_sized_string_utf8_with`].
    pub fn read_sized_string_utf8_le(&mut self) -> Result<String> {
        self.read_sized_string_utf8_with(Endian::Little)
    }

    /// Read a big-endian length-prefixed UTF-8 string.
    ///
    /// # Errors
    /// See [`Reader::read_sized_string_utf8_with`].
    pub fn read_sized_string_utf8_be(&mut self) -> Result<String> {
        self.read_sized_string_utf8_with(Endian::Big)
    }

    fn cstring_len(&self) -> Result<usize> {
        let start = self.bounds.position();
        match self.data[start..].iter().position(|&byte| byte == 0) {
            Some(length) => Ok(length),
            None => Err(Error::Underflow {
                needed: self.remaining() + 1,
                remaining: self.remaining(),
            }),
        }
    }

    /// Read bytes up to the first zero byte and consume the terminator.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if no zero byte exists between the position and the end of
    /// the region.
    pub fn read_cstring(&mut self) -> Result<Vec<u8>> {
        let length = self.cstring_len()?;
        let bytes = self.take(length + 1)?;
        Ok(bytes[..length].to_vec())
    }

    /// Read a zero-terminated string and validate it as UTF-8.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if the terminator is missing or [`Error::Malformed`] for
    /// invalid UTF-8; the position is unchanged in both cases.
    pub fn read_cstring_utf8(&mut self) -> Result<String> {
        let length = self.cstring_len()?;
        let text = self.view_str(length)?.to_owned();
        self.bounds.advance(1)?;
        Ok(text)
    }

    /// Borrow the next `n` bytes of the region without copying them, and advance.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `n` bytes remain.
    pub fn view_string(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// Borrow the next `n` bytes as `&str`, and advance.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if fewer than `n` bytes remain, or [`Error::Malformed`] if the
    /// bytes are not UTF-8. The position is unchanged in both cases.
    pub fn view_str(&mut self, n: usize) -> Result<&'a str> {
        let range = self.bounds.check(n)?;
        let data: &'a [u8] = self.data;
        let text = std::str::from_utf8(&data[range.clone()]).map_err(|error| {
            malformed_error!("Invalid UTF-8 at offset {} - {}", range.start, error)
        })?;
        self.bounds.advance(n)?;
        Ok(text)
    }
}
