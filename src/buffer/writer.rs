//! Write-only cursor over a borrowed, mutable byte region.
//!
//! [`crate::Writer`] mirrors [`crate::Reader`]: the same bounds bookkeeping, the same byte order
//! rules applied in reverse, plus fill and padding helpers. A writer can hand out a reader over
//! the same region for read-back; the borrow checker keeps the two from being used at the same
//! time.
//!
//! # Examples
//!
//! ```rust
//! use bytecursor::{Cursor, Writer};
//!
//! let mut buffer = [0u8; 16];
//! let mut writer = Writer::new(&mut buffer);
//!
//! writer.write_le(0x1234_5678_u32)?;
//! writer.write_cstring("ok")?;
//! writer.align(8)?;
//! assert_eq!(writer.position(), 8);
//!
//! let mut reader = writer.as_reader();
//! assert_eq!(reader.read_le::<u32>()?, 0x1234_5678);
//! # Ok::<(), bytecursor::Error>(())
//! ```

use crate::{
    buffer::{
        cursor::{Access, Bounds, Cursor},
        io::{Endian, Primitive},
        reader::Reader,
    },
    Result,
};

/// A bounds-checked, write-only cursor over a mutable byte region.
///
/// Every write checks that enough room remains before copying anything, so a failed write
/// neither modifies the region nor moves the position.
#[derive(Debug)]
pub struct Writer<'a> {
    data: &'a mut [u8],
    bounds: Bounds,
}

impl<'a> From<&'a mut [u8]> for Writer<'a> {
    fn from(data: &'a mut [u8]) -> Self {
        Writer::new(data)
    }
}

impl Cursor for Writer<'_> {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn bounds_mut(&mut self) -> &mut Bounds {
        &mut self.bounds
    }
}

impl<'a> Writer<'a> {
    /// Create a new [`Writer`] over `data`, positioned at 0.
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        let bounds = Bounds::new(data.len(), Access::Write);
        Writer { data, bounds }
    }

    pub(crate) fn at(data: &'a mut [u8], position: usize) -> Self {
        let bounds = Bounds::new(data.len(), Access::Write).with_position(position);
        Writer { data, bounds }
    }

    /// The whole region, including bytes not written through this writer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..]
    }

    /// The bytes between the start of the region and the current position.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.data[..self.bounds.position()]
    }

    /// A fresh [`Reader`] over the whole region, starting at position 0.
    ///
    /// The reader does not inherit this writer's position.
    #[must_use]
    pub fn as_reader(&self) -> Reader<'_> {
        Reader::new(&self.data[..])
    }

    /// Create an independent writer over `[offset, offset + length)` of this region.
    ///
    /// The new writer starts at position 0 and borrows this writer mutably for its lifetime;
    /// this writer's position is not affected. When `length` is `None` the subview extends to the
    /// end of the region.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfRange`] if `offset` or `offset + length` is past the end.
    pub fn subview(&mut self, offset: usize, length: Option<usize>) -> Result<Writer<'_>> {
        let range = self.bounds.subrange(offset, length)?;
        Ok(Writer::new(&mut self.data[range]))
    }

    /// Run `f` and restore the position if it fails.
    ///
    /// Bytes a failing `f` already wrote past the saved position are not restored; they are
    /// simply overwritten by the next write.
    ///
    /// # Errors
    /// Returns whatever error `f` returns.
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

    fn take(&mut self, n: usize) -> Result<&mut [u8]> {
        let range = self.bounds.advance(n)?;
        Ok(&mut self.data[range])
    }

    /// Write `value` exactly as it is laid out in memory, without byte order conversion.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if fewer than `T::SIZE` bytes remain.
    pub fn write<T: Primitive>(&mut self, value: T) -> Result<()> {
        self.take(T::SIZE)?.copy_from_slice(bytemuck::bytes_of(&value));
        Ok(())
    }

    /// Write `value` in byte order `endian`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if fewer than `T::SIZE` bytes remain.
    pub fn write_with<T: Primitive>(&mut self, value: T, endian: Endian) -> Result<()> {
        self.write(value.convert(endian))
    }

    /// Write `value` in little-endian order.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if fewer than `T::SIZE` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::Writer;
    ///
    /// let mut buffer = [0u8; 4];
    /// Writer::new(&mut buffer).write_le(0x1234_5678_u32)?;
    /// assert_eq!(buffer, [0x78, 0x56, 0x34, 0x12]);
    /// # Ok::<(), bytecursor::Error>(())
    /// ```
    pub fn write_le<T: Primitive>(&mut self, value: T) -> Result<()> {
        self.write_with(value, Endian::Little)
    }

    /// Write `value` in big-endian order.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if fewer than `T::SIZE` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::Writer;
    ///
    /// let mut buffer = [0u8; 4];
    /// Writer::new(&mut buffer).write_be(0x1234_5678_u32)?;
    /// assert_eq!(buffer, [0x12, 0x34, 0x56, 0x78]);
    /// # Ok::<(), bytecursor::Error>(())
    /// ```
    pub fn write_be<T: Primitive>(&mut self, value: T) -> Result<()> {
        self.write_with(value, Endian::Big)
    }

    /// Copy `src` verbatim and advance.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if fewer than `src.len()` bytes remain.
    pub fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        self.take(src.len())?.copy_from_slice(src);
        Ok(())
    }

    /// Copy the in-memory image of a plain-old-data value verbatim.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if fewer than `size_of::<T>()` bytes remain.
    pub fn write_pod<T: bytemuck::Pod>(&mut self, value: &T) -> Result<()> {
        self.write_bytes(bytemuck::bytes_of(value))
    }

    /// Copy a slice of values as laid out in memory, in a single bulk copy.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if the whole slice does not fit; nothing is written then.
    pub fn write_array<T: Primitive>(&mut self, src: &[T]) -> Result<()> {
        self.write_bytes(bytemuck::cast_slice(src))
    }

    /// Write a slice of values in byte order `endian`.
    ///
    /// Falls back to a straight bulk copy when no conversion is needed.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if the whole slice does not fit; nothing is written then.
    pub fn write_array_with<T: Primitive>(&mut self, src: &[T], endian: Endian) -> Result<()> {
        if T::SIZE == 1 || !endian.needs_swap() {
            return self.write_array(src);
        }

        let dst = self.take(src.len() * T::SIZE)?;
        for (chunk, value) in dst.chunks_exact_mut(T::SIZE).zip(src) {
            chunk.copy_from_slice(bytemuck::bytes_of(&value.byteswap()));
        }
        Ok(())
    }

    /// Write a slice of values in little-endian order.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if the whole slice does not fit.
    pub fn write_array_le<T: Primitive>(&mut self, src: &[T]) -> Result<()> {
        self.write_array_with(src, Endian::Little)
    }

    /// Write a slice of values in big-endian order.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if the whole slice does not fit.
    pub fn write_array_be<T: Primitive>(&mut self, src: &[T]) -> Result<()> {
        self.write_array_with(src, Endian::Big)
    }

    /// Write the raw bytes of `text` with no length prefix and no terminator.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if the bytes do not fit.
    pub fn write_string(&mut self, text: impl AsRef<[u8]>) -> Result<()> {
        self.write_bytes(text.as_ref())
    }

    /// Write a `u32` length prefix in byte order `endian`, then the raw bytes of `text`.
    ///
    /// The prefix is `text.len()` truncated to 32 bits; callers must keep strings below 4 GiB.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if prefix and content do not fit together; nothing is
    /// written then.
    pub fn write_sized_string_with(&mut self, text: impl AsRef<[u8]>, endian: Endian) -> Result<()> {
        let bytes = text.as_ref();
        self.ensure_remaining(4 + bytes.len())?;

        #[allow(clippy::cast_possible_truncation)]
        let length = bytes.len() as u32;
        self.write_with(length, endian)?;
        self.write_bytes(bytes)
    }

    /// Write a little-endian `u32` length prefix followed by the raw bytes of `text`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if prefix and content do not fit together.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytecursor::Writer;
    ///
    /// let mut buffer = [0u8; 6];
    /// Writer::new(&mut buffer).write_sized_string_le("hi")?;
    /// assert_eq!(buffer, [0x02, 0x00, 0x00, 0x00, b'h', b'i']);
    /// # Ok::<(), bytecursor::Error>(())
    /// ```
    pub fn write_sized_string_le(&mut self, text: impl AsRef<[u8]>) -> Result<()> {
        self.write_sized_string_with(text, Endian::Little)
    }

    /// Write a big-endian `u32` length prefix followed by the raw bytes of `text`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if prefix and content do not fit together.
    pub fn write_sized_string_be(&mut self, text: impl AsRef<[u8]>) -> Result<()> {
        self.write_sized_string_with(text, Endian::Big)
    }

    /// Write the raw bytes of `text` followed by a single zero byte.
    ///
    /// If `text` itself contains a zero byte the encoding is ambiguous: reading it back with
    /// [`Reader::read_cstring`] stops at the first zero and returns a shorter string. This is not
    /// checked.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if the bytes and terminator do not fit together.
    pub fn write_cstring(&mut self, text: impl AsRef<[u8]>) -> Result<()> {
        let bytes = text.as_ref();
        let dst = self.take(bytes.len() + 1)?;
        let (content, terminator) = dst.split_at_mut(bytes.len());
        content.copy_from_slice(bytes);
        terminator[0] = 0;
        Ok(())
    }

    /// Write `n` copies of `value`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if fewer than `n` bytes remain.
    pub fn fill_bytes(&mut self, value: u8, n: usize) -> Result<()> {
        self.take(n)?.fill(value);
        Ok(())
    }

    /// Write `n` zero bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if fewer than `n` bytes remain.
    pub fn zero_fill(&mut self, n: usize) -> Result<()> {
        self.fill_bytes(0, n)
    }

    /// Pad with zero bytes up to the next multiple of `alignment`.
    ///
    /// # Errors
    /// See [`Writer::align_with`].
    pub fn align(&mut self, alignment: usize) -> Result<()> {
        self.align_with(alignment, 0)
    }

    /// Pad with `fill` bytes up to the next multiple of `alignment`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Alignment`] if `alignment` is not a power of two, or
    /// [`crate::Error::Overflow`] if the padding does not fit.
    pub fn align_with(&mut self, alignment: usize, fill: u8) -> Result<()> {
        let padding = self.bounds.padding(alignment)?;
        self.fill_bytes(fill, padding)
    }
}
