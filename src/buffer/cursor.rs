//! Shared position tracking and bounds checking for [`crate::Reader`] and [`crate::Writer`].
//!
//! Both cursors keep a [`Bounds`] value describing the region size and their current position.
//! Every accessor asks [`Bounds`] for the byte range it is about to touch before touching memory;
//! if the request does not fit, the error is returned and the position is left as it was. This
//! keeps the off-by-one arithmetic in a single place for both the read and the write path.
//!
//! # Invariant
//!
//! `0 <= position <= size` holds at every observable point. Seeking to exactly `size` is allowed
//! and leaves the cursor exhausted.
//!
//! # Error Mapping
//!
//! | Operation                    | Reader           | Writer          |
//! |------------------------------|------------------|-----------------|
//! | advance / skip / align       | `Underflow`      | `Overflow`      |
//! | seek / subview               | `OutOfRange`     | `OutOfRange`    |

use std::ops::Range;

use crate::{Error, Result};

/// Which side of the buffer a cursor works on; decides how a short buffer is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Non-mutating cursor, short buffers are [`Error::Underflow`]
    Read,
    /// Mutating cursor, short buffers are [`Error::Overflow`]
    Write,
}

impl Access {
    fn short(self, needed: usize, remaining: usize) -> Error {
        match self {
            Access::Read => Error::Underflow { needed, remaining },
            Access::Write => Error::Overflow { needed, remaining },
        }
    }
}

/// Size and position bookkeeping of a cursor.
///
/// The position is traversal state of the cursor itself; moving it never touches the bytes of
/// the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    size: usize,
    position: usize,
    access: Access,
}

impl Bounds {
    /// Create bookkeeping for a region of `size` bytes with the position at 0.
    #[must_use]
    pub fn new(size: usize, access: Access) -> Self {
        Bounds {
            size,
            position: 0,
            access,
        }
    }

    /// Same bookkeeping with the position moved to `position`, which must not exceed the size.
    pub(crate) fn with_position(mut self, position: usize) -> Self {
        debug_assert!(position <= self.size);
        self.position = position.min(self.size);
        self
    }

    /// Size of the region in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current position within the region.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes between the position and the end of the region.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.size - self.position
    }

    /// The side of the buffer this cursor works on.
    #[must_use]
    pub fn access(&self) -> Access {
        self.access
    }

    /// Verify that `n` bytes are available and return their range, without moving.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] or [`Error::Overflow`] (depending on [`Access`]) if fewer than
    /// `n` bytes remain.
    pub fn check(&self, n: usize) -> Result<Range<usize>> {
        if n > self.remaining() {
            return Err(self.access.short(n, self.remaining()));
        }

        Ok(self.position..self.position + n)
    }

    /// Verify that `n` bytes are available, move past them and return their range.
    ///
    /// # Errors
    /// Same as [`Bounds::check`]; on error the position is unchanged.
    pub fn advance(&mut self, n: usize) -> Result<Range<usize>> {
        let range = self.check(n)?;
        self.position = range.end;
        Ok(range)
    }

    /// Set the position directly.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `pos > size`.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.size {
            return Err(Error::OutOfRange {
                offset: pos,
                size: self.size,
            });
        }

        self.position = pos;
        Ok(())
    }

    /// Reset the position to 0.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Number of bytes needed to move the position to the next multiple of `alignment`.
    ///
    /// # Errors
    /// Returns [`Error::Alignment`] for a zero or non power-of-two alignment, and
    /// [`Error::Underflow`] / [`Error::Overflow`] if the aligned position would lie past the end.
    pub fn padding(&self, alignment: usize) -> Result<usize> {
        if !alignment.is_power_of_two() {
            return Err(Error::Alignment(alignment));
        }

        let mask = alignment - 1;
        let padding = (alignment - (self.position & mask)) & mask;
        self.check(padding)?;
        Ok(padding)
    }

    /// Returns `true` if the position is a multiple of `alignment`.
    ///
    /// An alignment of zero is never satisfied.
    #[must_use]
    pub fn is_aligned(&self, alignment: usize) -> bool {
        alignment != 0 && self.position % alignment == 0
    }

    /// Resolve the range `[offset, offset + length)` of a subview.
    ///
    /// When `length` is `None` the range extends to the end of the region.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `offset > size` or `offset + length > size`.
    pub fn subrange(&self, offset: usize, length: Option<usize>) -> Result<Range<usize>> {
        if offset > self.size {
            return Err(Error::OutOfRange {
                offset,
                size: self.size,
            });
        }

        let length = length.unwrap_or(self.size - offset);
        match offset.checked_add(length) {
            Some(end) if end <= self.size => Ok(offset..end),
            _ => Err(Error::OutOfRange {
                offset: offset.saturating_add(length),
                size: self.size,
            }),
        }
    }
}

/// Position and size queries shared by every cursor in this crate.
///
/// Implementors only expose their [`Bounds`]; all queries and the navigation operations that do
/// not touch memory are provided on top of it, so readers and writers behave identically.
///
/// # Examples
///
/// ```rust
/// use bytecursor::{Cursor, Reader};
///
/// let data = [0u8; 8];
/// let mut reader = Reader::new(&data);
///
/// reader.skip(3)?;
/// assert_eq!(reader.position(), 3);
/// assert_eq!(reader.remaining(), 5);
///
/// reader.seek(8)?;
/// assert!(reader.is_exhausted());
/// assert!(reader.skip(1).is_err());
/// # Ok::<(), bytecursor::Error>(())
/// ```
pub trait Cursor {
    /// Bookkeeping of this cursor
    fn bounds(&self) -> &Bounds;

    /// Mutable bookkeeping of this cursor
    fn bounds_mut(&mut self) -> &mut Bounds;

    /// Size of the region in bytes.
    fn size(&self) -> usize {
        self.bounds().size()
    }

    /// Current position within the region.
    fn position(&self) -> usize {
        self.bounds().position()
    }

    /// Number of bytes left between the position and the end of the region.
    fn remaining(&self) -> usize {
        self.bounds().remaining()
    }

    /// Returns `true` if the region has no bytes at all.
    fn is_empty(&self) -> bool {
        self.bounds().size() == 0
    }

    /// Returns `true` if the position has reached the end of the region.
    fn is_exhausted(&self) -> bool {
        self.bounds().position() >= self.bounds().size()
    }

    /// Move the position to `pos`; landing exactly on the end of the region is allowed.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `pos` is beyond the region's size.
    fn seek(&mut self, pos: usize) -> Result<()> {
        self.bounds_mut().seek(pos)
    }

    /// Move the position back to the start of the region.
    fn rewind(&mut self) {
        self.bounds_mut().rewind();
    }

    /// Advance the position by `n` bytes without inspecting or modifying them.
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] (readers) or [`Error::Overflow`] (writers) if fewer than `n`
    /// bytes remain.
    fn skip(&mut self, n: usize) -> Result<()> {
        self.bounds_mut().advance(n).map(|_| ())
    }

    /// Ensure at least `n` bytes remain without moving.
    ///
    /// # Errors
    /// Same as [`Cursor::skip`].
    fn ensure_remaining(&self, n: usize) -> Result<()> {
        self.bounds().check(n).map(|_| ())
    }

    /// Returns `true` if the position is a multiple of `alignment`.
    fn is_aligned(&self, alignment: usize) -> bool {
        self.bounds().is_aligned(alignment)
    }
}
