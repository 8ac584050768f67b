//! A paired reader/writer view over one mutable region.
//!
//! [`Stream`] owns the exclusive borrow of a region and hands out short-lived [`Reader`] and
//! [`Writer`] cursors over it. The stream keeps a position of its own which callers may use to
//! coordinate the two sides; cursors created from it do not stay synchronized with it (or with
//! each other) once created.
//!
//! # Examples
//!
//! ```rust
//! use bytecursor::{Cursor, Stream};
//!
//! let mut buffer = [0u8; 8];
//! let mut stream = Stream::new(&mut buffer);
//!
//! let mut writer = stream.writer();
//! writer.write_be(0xDEAD_BEEF_u32)?;
//! let written = writer.position();
//!
//! stream.seek(written)?;
//! stream.writer_at().write_be(0x0BAD_F00D_u32)?;
//!
//! let mut reader = stream.reader();
//! assert_eq!(reader.read_be::<u32>()?, 0xDEAD_BEEF);
//! assert_eq!(reader.read_be::<u32>()?, 0x0BAD_F00D);
//! # Ok::<(), bytecursor::Error>(())
//! ```

use crate::buffer::{
    cursor::{Access, Bounds, Cursor},
    reader::Reader,
    writer::Writer,
};

/// Bidirectional view over a mutable region with its own bookkeeping position.
///
/// Seeking the stream is bounds-checked like seeking any other cursor. Skipping past the end is
/// reported as [`crate::Error::Overflow`].
#[derive(Debug)]
pub struct Stream<'a> {
    data: &'a mut [u8],
    bounds: Bounds,
}

impl<'a> From<&'a mut [u8]> for Stream<'a> {
    fn from(data: &'a mut [u8]) -> Self {
        Stream::new(data)
    }
}

impl Cursor for Stream<'_> {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn bounds_mut(&mut self) -> &mut Bounds {
        &mut self.bounds
    }
}

impl<'a> Stream<'a> {
    /// Create a new [`Stream`] over `data`, positioned at 0.
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        let bounds = Bounds::new(data.len(), Access::Write);
        Stream { data, bounds }
    }

    /// The whole region.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..]
    }

    /// A fresh [`Reader`] over the whole region, starting at 0.
    #[must_use]
    pub fn reader(&self) -> Reader<'_> {
        Reader::new(&self.data[..])
    }

    /// A fresh [`Writer`] over the whole region, starting at 0.
    #[must_use]
    pub fn writer(&mut self) -> Writer<'_> {
        Writer::new(&mut self.data[..])
    }

    /// A [`Reader`] over the whole region, starting at the stream's position.
    #[must_use]
    pub fn reader_at(&self) -> Reader<'_> {
        Reader::at(&self.data[..], self.bounds.position())
    }

    /// A [`Writer`] over the whole region, starting at the stream's position.
    #[must_use]
    pub fn writer_at(&mut self) -> Writer<'_> {
        let position = self.bounds.position();
        Writer::at(&mut self.data[..], position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn fresh_cursors_start_at_zero() {
        let mut buffer = [0u8; 8];
        let mut stream = Stream::new(&mut buffer);
        stream.seek(4).unwrap();

        assert_eq!(stream.reader().position(), 0);
        assert_eq!(stream.writer().position(), 0);
        assert_eq!(stream.reader_at().position(), 4);
        assert_eq!(stream.writer_at().position(), 4);
        assert_eq!(stream.position(), 4);
    }

    #[test]
    fn write_then_read_back() {
        let mut buffer = [0u8; 8];
        let mut stream = Stream::new(&mut buffer);

        let mut writer = stream.writer();
        writer.write_le(0x0102_0304_u32).unwrap();
        writer.write_le(0x0506_0708_u32).unwrap();
        assert_eq!(writer.position(), 8);

        // Writer progress is not reflected in the stream.
        assert_eq!(stream.position(), 0);

        let mut reader = stream.reader();
        assert_eq!(reader.read_le::<u32>().unwrap(), 0x0102_0304);
        assert_eq!(reader.read_le::<u32>().unwrap(), 0x0506_0708);
    }

    #[test]
    fn coordinate_through_position() {
        let mut buffer = [0u8; 6];
        let mut stream = Stream::new(&mut buffer);

        let mut writer = stream.writer_at();
        writer.write_sized_string_le("ab").unwrap();
        let end = writer.position();
        stream.seek(end).unwrap();

        assert!(stream.reader_at().is_exhausted());
        stream.rewind();
        assert_eq!(
            stream.reader_at().read_sized_string_utf8_le().unwrap(),
            "ab"
        );
    }

    #[test]
    fn seek_is_bounds_checked() {
        let mut buffer = [0u8; 4];
        let mut stream = Stream::new(&mut buffer);
        stream.seek(4).unwrap();
        assert!(matches!(
            stream.seek(5),
            Err(Error::OutOfRange { offset: 5, size: 4 })
        ));
        assert_eq!(stream.position(), 4);
        assert!(matches!(stream.skip(1), Err(Error::Overflow { .. })));
    }

    #[test]
    fn empty_region() {
        let mut buffer: [u8; 0] = [];
        let mut stream = Stream::from(&mut buffer[..]);
        assert!(stream.is_empty());
        assert!(stream.reader().read::<u8>().is_err());
        assert!(stream.writer().write(1_u8).is_err());
        assert!(stream.as_bytes().is_empty());
    }
}
