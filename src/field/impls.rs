//! [`Encode`] and [`Decode`] for the built-in types.

use crate::{
    field::{read_array, read_list, write_array, write_list, Decode, Encode},
    Reader, Result, Writer,
};

impl_plain!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl Encode for str {
    fn encode(&self, writer: &mut Writer<'_>) -> Result<()> {
        writer.write_sized_string_le(self)
    }
}

impl Encode for String {
    fn encode(&self, writer: &mut Writer<'_>) -> Result<()> {
        writer.write_sized_string_le(self)
    }
}

impl Decode for String {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_sized_string_utf8_le()
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, writer: &mut Writer<'_>) -> Result<()> {
        write_list(writer, self)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut Writer<'_>) -> Result<()> {
        write_list(writer, self)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        read_list(reader)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, writer: &mut Writer<'_>) -> Result<()> {
        write_array(writer, self)
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        read_array(reader)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, writer: &mut Writer<'_>) -> Result<()> {
        (**self).encode(writer)
    }
}
