//! Type-directed encoding of values through the cursors.
//!
//! The field layer picks the encode and decode routine for a value from its type, at compile
//! time. A type takes part by implementing [`Encode`] and [`Decode`]; which implementation
//! applies decides the wire form:
//!
//! 1. **Text** (`str`, `String`) - little-endian `u32` byte length followed by the raw UTF-8 bytes
//! 2. **Custom** - the type's own implementation; types built from other fields implement
//!    [`Composite`] and register through [`crate::impl_composite!`]
//! 3. **Plain** - primitives and `bytemuck::Pod` types registered through [`crate::impl_plain!`]
//!    are copied verbatim, without byte order conversion
//! 4. **Anything else** does not implement the traits and fails to compile
//!
//! Collections recurse into their elements: `Vec<T>` and `[T]` use the dynamic list codec
//! ([`write_list`] / [`read_list`]), `[T; N]` the fixed-size array codec ([`write_array`] /
//! [`read_array`]).
//!
//! # Field Order
//!
//! No field names or tags are written. The position in the encoding is the only link between a
//! writer and a reader, so both sides must handle fields in the same order. Decoding in a
//! different order is not detected; it produces wrong values.
//!
//! # Examples
//!
//! ```rust
//! use bytecursor::{impl_composite, read_fields, write_fields};
//! use bytecursor::{read_field, write_field, Composite, Reader, Result, Writer};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Entry {
//!     id: u32,
//!     name: String,
//!     tags: Vec<u16>,
//! }
//!
//! impl Composite for Entry {
//!     fn encode_fields(&self, writer: &mut Writer<'_>) -> Result<()> {
//!         write_fields!(writer, self.id, self.name, self.tags)
//!     }
//!
//!     fn decode_fields(&mut self, reader: &mut Reader<'_>) -> Result<()> {
//!         read_fields!(reader, self.id, self.name, self.tags)
//!     }
//! }
//!
//! impl_composite!(Entry);
//!
//! let entry = Entry { id: 7, name: "seven".into(), tags: vec![1, 2] };
//!
//! let mut buffer = [0u8; 64];
//! let mut writer = Writer::new(&mut buffer);
//! write_field(&mut writer, &entry)?;
//!
//! let mut reader = writer.as_reader();
//! let decoded: Entry = read_field(&mut reader)?;
//! assert_eq!(decoded, entry);
//! # Ok::<(), bytecursor::Error>(())
//! ```

mod impls;

use crate::{Cursor, Primitive, Reader, Result, Writer};

/// A value that knows how to write itself through a [`Writer`].
pub trait Encode {
    /// Write `self` at the writer's position and advance past it.
    ///
    /// # Errors
    /// Returns [`crate::Error::Overflow`] if the encoding does not fit.
    fn encode(&self, writer: &mut Writer<'_>) -> Result<()>;
}

/// A value that knows how to read itself from a [`Reader`].
pub trait Decode: Sized {
    /// Read a value at the reader's position and advance past it.
    ///
    /// # Errors
    /// Returns [`crate::Error::Underflow`] on short input, or [`crate::Error::Malformed`] if the
    /// bytes do not form a valid value.
    fn decode(reader: &mut Reader<'_>) -> Result<Self>;
}

/// A value assembled from other fields, encoded one field after the other.
///
/// Decoding starts from [`Default::default`] and fills the fields in place. Implementors
/// usually register themselves with [`crate::impl_composite!`] to gain [`Encode`] and
/// [`Decode`].
pub trait Composite: Default {
    /// Write every field, in order.
    ///
    /// # Errors
    /// Propagates the first error from any field.
    fn encode_fields(&self, writer: &mut Writer<'_>) -> Result<()>;

    /// Read every field, in the same order [`Composite::encode_fields`] wrote them.
    ///
    /// # Errors
    /// Propagates the first error from any field.
    fn decode_fields(&mut self, reader: &mut Reader<'_>) -> Result<()>;

    /// Encode all fields; on error the writer's position is restored.
    ///
    /// # Errors
    /// Propagates the first error from any field.
    fn encode_composite(&self, writer: &mut Writer<'_>) -> Result<()> {
        writer.transactional(|writer| self.encode_fields(writer))
    }

    /// Decode a default instance field by field; on error the reader's position is restored.
    ///
    /// # Errors
    /// Propagates the first error from any field.
    fn decode_composite(reader: &mut Reader<'_>) -> Result<Self> {
        reader.transactional(|reader| {
            let mut value = Self::default();
            value.decode_fields(reader)?;
            Ok(value)
        })
    }
}

/// Encode `value` with the routine its type selects.
///
/// # Errors
/// Returns [`crate::Error::Overflow`] if the encoding does not fit.
pub fn write_field<T: Encode + ?Sized>(writer: &mut Writer<'_>, value: &T) -> Result<()> {
    value.encode(writer)
}

/// Decode a `T` with the routine its type selects.
///
/// # Errors
/// Returns [`crate::Error::Underflow`] on short input, or [`crate::Error::Malformed`] for
/// content that does not form a `T`.
pub fn read_field<T: Decode>(reader: &mut Reader<'_>) -> Result<T> {
    T::decode(reader)
}

/// Encode a primitive in little-endian order instead of verbatim.
///
/// # Errors
/// Returns [`crate::Error::Overflow`] if the value does not fit.
pub fn write_field_le<T: Primitive>(writer: &mut Writer<'_>, value: T) -> Result<()> {
    writer.write_le(value)
}

/// Encode a primitive in big-endian order instead of verbatim.
///
/// # Errors
/// Returns [`crate::Error::Overflow`] if the value does not fit.
pub fn write_field_be<T: Primitive>(writer: &mut Writer<'_>, value: T) -> Result<()> {
    writer.write_be(value)
}

/// Decode a little-endian primitive.
///
/// # Errors
/// Returns [`crate::Error::Underflow`] on short input.
pub fn read_field_le<T: Primitive>(reader: &mut Reader<'_>) -> Result<T> {
    reader.read_le()
}

/// Decode a big-endian primitive.
///
/// # Errors
/// Returns [`crate::Error::Underflow`] on short input.
pub fn read_field_be<T: Primitive>(reader: &mut Reader<'_>) -> Result<T> {
    reader.read_be()
}

/// Write a little-endian `u32` element count followed by every element.
///
/// The count is always little-endian, whatever order the elements themselves use.
///
/// # Errors
/// Returns [`crate::Error::Overflow`] if the list does not fit (the writer's position is restored),
/// or [`crate::Error::Malformed`] if it has more than `u32::MAX` elements.
///
/// # Examples
///
/// ```rust
/// use bytecursor::{write_list, Writer};
///
/// let mut buffer = [0u8; 8];
/// let mut writer = Writer::new(&mut buffer);
/// write_list(&mut writer, &[0x11_u8, 0x22])?;
/// assert_eq!(writer.written(), &[0x02, 0x00, 0x00, 0x00, 0x11, 0x22]);
/// # Ok::<(), bytecursor::Error>(())
/// ```
pub fn write_list<T: Encode>(writer: &mut Writer<'_>, values: &[T]) -> Result<()> {
    let count = u32::try_from(values.len())
        .map_err(|_| malformed_error!("List of {} elements exceeds u32 count", values.len()))?;

    writer.transactional(|writer| {
        writer.write_le(count)?;
        for value in values {
            value.encode(writer)?;
        }
        Ok(())
    })
}

/// Read a little-endian `u32` element count, then exactly that many elements.
///
/// Preallocation is capped by the bytes remaining, so a corrupt count cannot force a huge
/// allocation before the element reads fail.
///
/// # Errors
/// Returns [`crate::Error::Underflow`] if the input ends early; the reader's position is
/// restored then.
pub fn read_list<T: Decode>(reader: &mut Reader<'_>) -> Result<Vec<T>> {
    reader.transactional(|reader| {
        let count = reader.read_le::<u32>()? as usize;
        let mut values = Vec::with_capacity(count.min(reader.remaining()));
        for _ in 0..count {
            values.push(T::decode(reader)?);
        }
        Ok(values)
    })
}

/// Write every element of a fixed-size array in order, with no count prefix.
///
/// # Errors
/// Returns [`crate::Error::Overflow`] if the array does not fit; the writer's position is restored
/// then.
pub fn write_array<T: Encode, const N: usize>(
    writer: &mut Writer<'_>,
    values: &[T; N],
) -> Result<()> {
    writer.transactional(|writer| {
        for value in values {
            value.encode(writer)?;
        }
        Ok(())
    })
}

/// Read exactly `N` elements in order, with no count prefix.
///
/// # Errors
/// Returns [`crate::Error::Underflow`] if the input ends early; the reader's position is
/// restored then.
pub fn read_array<T: Decode, const N: usize>(reader: &mut Reader<'_>) -> Result<[T; N]> {
    reader.transactional(|reader| {
        let mut values = Vec::with_capacity(N);
        for _ in 0..N {
            values.push(T::decode(reader)?);
        }

        values.try_into().map_err(|values: Vec<T>| {
            malformed_error!("Expected {} elements, got {}", N, values.len())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Record {
        id: u32,
        kind: u16,
        label: String,
    }

    impl Composite for Record {
        fn encode_fields(&self, writer: &mut Writer<'_>) -> Result<()> {
            write_fields!(writer, self.id, self.kind, self.label)
        }

        fn decode_fields(&mut self, reader: &mut Reader<'_>) -> Result<()> {
            read_fields!(reader, self.id, self.kind, self.label)
        }
    }

    impl_composite!(Record);

    /// Same fields as [`Record`], decoded in a different order.
    #[derive(Debug, Default, PartialEq)]
    struct Reordered {
        id: u32,
        kind: u16,
        label: String,
    }

    impl Composite for Reordered {
        fn encode_fields(&self, writer: &mut Writer<'_>) -> Result<()> {
            write_fields!(writer, self.id, self.kind, self.label)
        }

        fn decode_fields(&mut self, reader: &mut Reader<'_>) -> Result<()> {
            read_fields!(reader, self.kind, self.id, self.label)
        }
    }

    impl_composite!(Reordered);

    #[derive(Debug, Default, PartialEq)]
    struct Outer {
        version: u8,
        records: Vec<Record>,
        checksum: [u16; 2],
    }

    impl Composite for Outer {
        fn encode_fields(&self, writer: &mut Writer<'_>) -> Result<()> {
            write_fields!(writer, self.version, self.records, self.checksum)
        }

        fn decode_fields(&mut self, reader: &mut Reader<'_>) -> Result<()> {
            read_fields!(reader, self.version, self.records, self.checksum)
        }
    }

    impl_composite!(Outer);

    fn sample() -> Record {
        Record {
            id: 0x0102_0304,
            kind: 0x0506,
            label: "node".to_string(),
        }
    }

    #[test]
    fn composite_roundtrip() {
        let record = sample();
        let mut buffer = [0u8; 32];
        let mut writer = Writer::new(&mut buffer);
        write_field(&mut writer, &record).unwrap();
        assert_eq!(writer.position(), 4 + 2 + 4 + 4);

        let mut reader = writer.as_reader();
        let decoded: Record = read_field(&mut reader).unwrap();
        assert_eq!(decoded, record);
        assert_eq!(reader.position(), 14);
    }

    #[test]
    fn composite_wrong_order_is_silent() {
        let record = sample();
        let mut buffer = [0u8; 32];
        let mut writer = Writer::new(&mut buffer);
        write_field(&mut writer, &record).unwrap();

        let mut reader = writer.as_reader();
        let decoded: Reordered = read_field(&mut reader).unwrap();

        // The first two bytes of `id` land in `kind`, the rest shifts along.
        let id_bytes = record.id.to_ne_bytes();
        let kind_bytes = record.kind.to_ne_bytes();
        assert_eq!(decoded.kind, u16::from_ne_bytes([id_bytes[0], id_bytes[1]]));
        assert_eq!(
            decoded.id,
            u32::from_ne_bytes([id_bytes[2], id_bytes[3], kind_bytes[0], kind_bytes[1]])
        );
        assert_ne!(decoded.id, record.id);
        assert_ne!(decoded.kind, record.kind);
        assert_eq!(decoded.label, record.label);
    }

    #[test]
    fn nested_composite() {
        let outer = Outer {
            version: 3,
            records: vec![sample(), Record::default()],
            checksum: [0xAAAA, 0x5555],
        };

        let mut buffer = [0u8; 64];
        let mut writer = Writer::new(&mut buffer);
        write_field(&mut writer, &outer).unwrap();
        assert_eq!(writer.position(), 1 + 4 + 14 + 10 + 4);

        let mut reader = writer.as_reader();
        let decoded: Outer = read_field(&mut reader).unwrap();
        assert_eq!(decoded, outer);
    }

    #[test]
    fn composite_failures_are_atomic() {
        let record = sample();
        let mut buffer = [0u8; 10];
        let mut writer = Writer::new(&mut buffer);
        assert!(matches!(
            write_field(&mut writer, &record),
            Err(Error::Overflow { .. })
        ));
        assert_eq!(writer.position(), 0);

        let data = [0u8; 8];
        let mut reader = Reader::new(&data);
        assert!(matches!(
            read_field::<Record>(&mut reader),
            Err(Error::Underflow { .. })
        ));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn list_layout() {
        let mut buffer = [0u8; 16];
        let mut writer = Writer::new(&mut buffer);
        write_list(&mut writer, &[0x0102_u16, 0x0304]).unwrap();
        assert_eq!(writer.position(), 8);
        assert_eq!(&writer.written()[..4], &[2, 0, 0, 0]);

        let mut reader = writer.as_reader();
        let values: Vec<u16> = read_list(&mut reader).unwrap();
        assert_eq!(values, vec![0x0102, 0x0304]);
    }

    #[test]
    fn list_empty() {
        let mut buffer = [0xFF_u8; 4];
        let mut writer = Writer::new(&mut buffer);
        write_list::<u64>(&mut writer, &[]).unwrap();
        assert_eq!(writer.written(), &[0, 0, 0, 0]);

        let mut reader = writer.as_reader();
        let values: Vec<u64> = read_list(&mut reader).unwrap();
        assert!(values.is_empty());
        assert!(reader.is_exhausted());
    }

    #[test]
    fn list_short_input() {
        // Count claims 3 elements, only 2 follow.
        let data = [3, 0, 0, 0, 0xAA, 0xBB];
        let mut reader = Reader::new(&data);
        assert!(matches!(
            read_list::<u8>(&mut reader),
            Err(Error::Underflow { .. })
        ));
        assert_eq!(reader.position(), 0);

        let data = [0xFF, 0xFF, 0xFF, 0xFF];
        let mut reader = Reader::new(&data);
        assert!(read_list::<u32>(&mut reader).is_err());
    }

    #[test]
    fn list_overflow_restores_position() {
        let mut buffer = [0u8; 7];
        let mut writer = Writer::new(&mut buffer);
        assert!(matches!(
            write_list(&mut writer, &[1_u16, 2]),
            Err(Error::Overflow { .. })
        ));
        assert_eq!(writer.position(), 0);
    }

    #[test]
    fn fixed_array() {
        let mut buffer = [0u8; 6];
        let mut writer = Writer::new(&mut buffer);
        write_array(&mut writer, &[1_u16, 2, 3]).unwrap();
        assert!(writer.is_exhausted());

        let mut reader = writer.as_reader();
        let values: [u16; 3] = read_array(&mut reader).unwrap();
        assert_eq!(values, [1, 2, 3]);

        let mut reader = writer.as_reader();
        assert!(read_array::<u16, 4>(&mut reader).is_err());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn fixed_array_of_strings() {
        let mut buffer = [0u8; 16];
        let mut writer = Writer::new(&mut buffer);
        write_array(&mut writer, &["a".to_string(), "bc".to_string()]).unwrap();
        assert_eq!(writer.position(), 11);

        let mut reader = writer.as_reader();
        let values: [String; 2] = read_array(&mut reader).unwrap();
        assert_eq!(values, ["a".to_string(), "bc".to_string()]);
    }

    #[test]
    fn explicit_byte_order() {
        let mut buffer = [0u8; 4];
        let mut writer = Writer::new(&mut buffer);
        write_field_le(&mut writer, 0x0102_u16).unwrap();
        write_field_be(&mut writer, 0x0102_u16).unwrap();
        assert_eq!(buffer, [0x02, 0x01, 0x01, 0x02]);

        let mut reader = Reader::new(&buffer);
        assert_eq!(read_field_le::<u16>(&mut reader).unwrap(), 0x0102);
        assert_eq!(read_field_be::<u16>(&mut reader).unwrap(), 0x0102);
    }

    #[test]
    fn write_fields_stops_at_first_error() {
        let mut buffer = [0u8; 5];
        let mut writer = Writer::new(&mut buffer);
        let result = write_fields!(&mut writer, 1_u32, 2_u32, 3_u8);
        assert!(matches!(result, Err(Error::Overflow { .. })));
        assert_eq!(writer.position(), 4);
    }
}
