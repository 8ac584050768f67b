/// Register plain-old-data types for verbatim encoding.
///
/// Each listed type gains [`crate::Encode`] and [`crate::Decode`] implementations that copy its
/// in-memory image as-is, without byte order conversion. The types must implement
/// `bytemuck::Pod`; anything else fails to compile.
///
/// ```rust
/// use bytecursor::{impl_plain, read_field, write_field, Reader, Writer};
///
/// #[repr(C)]
/// #[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// struct Extent {
///     offset: u32,
///     length: u32,
/// }
///
/// impl_plain!(Extent);
///
/// let extent = Extent { offset: 0x40, length: 0x200 };
/// let mut buffer = [0u8; 8];
/// write_field(&mut Writer::new(&mut buffer), &extent)?;
/// assert_eq!(read_field::<Extent>(&mut Reader::new(&buffer))?, extent);
/// # Ok::<(), bytecursor::Error>(())
/// ```
#[macro_export]
macro_rules! impl_plain {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Encode for $ty {
                fn encode(&self, writer: &mut $crate::Writer<'_>) -> $crate::Result<()> {
                    writer.write_pod(self)
                }
            }

            impl $crate::Decode for $ty {
                fn decode(reader: &mut $crate::Reader<'_>) -> $crate::Result<Self> {
                    reader.read_pod::<$ty>()
                }
            }
        )+
    };
}

/// Register [`crate::Composite`] types as [`crate::Encode`] + [`crate::Decode`].
///
/// Encoding and decoding go through [`crate::Composite::encode_composite`] and
/// [`crate::Composite::decode_composite`], so a failing field leaves the cursor where it was.
#[macro_export]
macro_rules! impl_composite {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Encode for $ty {
                fn encode(&self, writer: &mut $crate::Writer<'_>) -> $crate::Result<()> {
                    $crate::Composite::encode_composite(self, writer)
                }
            }

            impl $crate::Decode for $ty {
                fn decode(reader: &mut $crate::Reader<'_>) -> $crate::Result<Self> {
                    <$ty as $crate::Composite>::decode_composite(reader)
                }
            }
        )+
    };
}

/// Encode each field in turn, stopping at the first error.
///
/// Evaluates to `Result<()>`. The first argument must be a `&mut Writer`.
///
/// ```rust, ignore
/// write_fields!(writer, self.magic, self.version, self.entries)
/// ```
#[macro_export]
macro_rules! write_fields {
    ($writer:expr $(, $field:expr)* $(,)?) => {{
        #[allow(unused_variables)]
        let writer: &mut $crate::Writer<'_> = &mut *$writer;
        let result: $crate::Result<()> = Ok(());
        $(
            let result = result.and_then(|()| $crate::write_field(&mut *writer, &$field));
        )*
        result
    }};
}

/// Decode into each field in turn, stopping at the first error.
///
/// Evaluates to `Result<()>`. The first argument must be a `&mut Reader`; every field must be an
/// assignable place whose type implements [`crate::Decode`].
///
/// ```rust, ignore
/// read_fields!(reader, self.magic, self.version, self.entries)
/// ```
#[macro_export]
macro_rules! read_fields {
    ($reader:expr $(, $field:expr)* $(,)?) => {{
        #[allow(unused_variables)]
        let reader: &mut $crate::Reader<'_> = &mut *$reader;
        let result: $crate::Result<()> = Ok(());
        $(
            let result = result.and_then(|()| {
                $field = $crate::read_field(&mut *reader)?;
                Ok(())
            });
        )*
        result
    }};
}
