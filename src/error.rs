use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every bounds violation is detected before the buffer is touched, so a returned error
/// always means the cursor position is unchanged and no bytes were read or written by the
/// failing call.
///
/// # Error Categories
///
/// ## Bounds Errors
/// - [`Error::Underflow`] - A read needed more bytes than remain, or a terminator was missing
/// - [`Error::Overflow`] - A write needed more room than remains
/// - [`Error::OutOfRange`] - A seek or subview addressed a position beyond the region
///
/// ## Argument Errors
/// - [`Error::Alignment`] - An alignment that is not a non-zero power of two
///
/// ## Content Errors
/// - [`Error::Malformed`] - Decoded bytes do not form the requested value (e.g. invalid UTF-8)
///
/// # Examples
///
/// ```rust
/// use bytecursor::{Error, Reader};
///
/// let data = [0x01, 0x02];
/// let mut reader = Reader::new(&data);
///
/// match reader.read_le::<u32>() {
///     Err(Error::Underflow { needed, remaining }) => {
///         assert_eq!(needed, 4);
///         assert_eq!(remaining, 2);
///     }
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A read-side operation needed more bytes than remain in the region.
    ///
    /// Also raised when a required terminator, such as the zero byte ending a
    /// C-style string, is not found before the end of the region.
    #[error("Buffer underflow - needed {needed} bytes, {remaining} remaining")]
    Underflow {
        /// Number of bytes the operation required
        needed: usize,
        /// Number of bytes left between the position and the end of the region
        remaining: usize,
    },

    /// A write-side operation needed more room than remains in the region.
    #[error("Buffer overflow - needed {needed} bytes, {remaining} remaining")]
    Overflow {
        /// Number of bytes the operation required
        needed: usize,
        /// Number of bytes left between the position and the end of the region
        remaining: usize,
    },

    /// A seek or subview specified an offset beyond the region's size.
    ///
    /// Seeking exactly to `size` is valid and does not raise this error.
    #[error("Offset {offset} is out of range for a region of {size} bytes")]
    OutOfRange {
        /// The offending offset (or end offset for subviews)
        offset: usize,
        /// The size of the region the offset was checked against
        size: usize,
    },

    /// The requested alignment is zero or not a power of two.
    #[error("Invalid alignment - {0} is not a power of two")]
    Alignment(usize),

    /// The bytes were read successfully but do not form the requested value.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}

impl Error {
    /// Returns `true` for [`Error::Underflow`].
    #[must_use]
    pub fn is_underflow(&self) -> bool {
        matches!(self, Error::Underflow { .. })
    }

    /// Returns `true` for [`Error::Overflow`].
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow { .. })
    }

    /// Returns `true` for [`Error::OutOfRange`].
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}
