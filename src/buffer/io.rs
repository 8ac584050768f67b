//! Byte order detection and byte swapping for fixed-width numeric values.
//!
//! This module is the leaf of the crate: it knows nothing about cursors or buffers. It defines
//! the [`Primitive`] trait implemented for every fixed-width arithmetic type the cursors can
//! transfer, the [`Endian`] tag callers use to request a byte order, and the pure conversion
//! helpers built on top of them.
//!
//! # Conversion Rule
//!
//! A value is byte-swapped exactly when the requested order differs from the host's native
//! order. Single-byte values are never swapped, and floating-point values are swapped through
//! their bit pattern rather than numerically.
//!
//! # Supported Types
//!
//! - **Unsigned integers**: `u8`, `u16`, `u32`, `u64`
//! - **Signed integers**: `i8`, `i16`, `i32`, `i64`
//! - **Floating point**: `f32`, `f64`
//!
//! `bool`, `char`, `usize` and `isize` are deliberately not [`Primitive`]: their width or valid
//! bit patterns are platform or value dependent. Using them where a [`Primitive`] is required is a
//! compile error.
//!
//! # Examples
//!
//! ```rust
//! use bytecursor::{byteswap, Endian};
//!
//! assert_eq!(byteswap(0x1234_u16), 0x3412);
//! assert_eq!(byteswap(byteswap(0x1234_5678_u32)), 0x1234_5678);
//!
//! assert!(Endian::Native.is_native());
//! assert_ne!(Endian::Little.needs_swap(), Endian::Big.needs_swap());
//! ```

use strum::{Display, EnumIter, EnumString};

mod sealed {
    pub trait Sealed {}
}

/// Returns `true` if the host stores multi-byte values least significant byte first.
///
/// Resolved at compile time from the target configuration.
#[must_use]
pub const fn native_is_little_endian() -> bool {
    cfg!(target_endian = "little")
}

/// Returns `true` if the host stores multi-byte values most significant byte first.
#[must_use]
pub const fn native_is_big_endian() -> bool {
    !native_is_little_endian()
}

/// A byte order a caller can request for a transfer.
///
/// [`Endian::Native`] always resolves to whichever of [`Endian::Little`] or [`Endian::Big`]
/// the host uses, so requesting it never causes a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Endian {
    /// Whatever order the host uses
    Native,
    /// Least significant byte first
    Little,
    /// Most significant byte first
    Big,
}

impl Endian {
    /// The concrete order of the host, either [`Endian::Little`] or [`Endian::Big`].
    pub const NATIVE: Endian = if native_is_little_endian() {
        Endian::Little
    } else {
        Endian::Big
    };

    /// Maps [`Endian::Native`] to the concrete host order; other tags are returned unchanged.
    #[must_use]
    pub const fn resolve(self) -> Endian {
        match self {
            Endian::Native => Endian::NATIVE,
            other => other,
        }
    }

    /// Returns `true` if this order matches the host's order.
    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(
            (self.resolve(), Endian::NATIVE),
            (Endian::Little, Endian::Little) | (Endian::Big, Endian::Big)
        )
    }

    /// Returns `true` if values transferred in this order must be byte-swapped on this host.
    #[must_use]
    pub const fn needs_swap(self) -> bool {
        !self.is_native()
    }
}

/// A fixed-width arithmetic value that can be copied to and from raw bytes.
///
/// The trait is sealed and implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`,
/// `i64`, `f32` and `f64`, i.e. exactly the types whose width is one of 1, 2, 4 or 8 bytes.
/// Any other type fails to compile where a `Primitive` is required.
///
/// The `bytemuck::Pod` supertrait is what lets the cursors copy values and slices of values
/// without per-byte conversion when no swap is needed.
pub trait Primitive: bytemuck::Pod + PartialEq + std::fmt::Debug + sealed::Sealed {
    /// Width of the value in bytes
    const SIZE: usize;

    /// Reverse the byte order of the value. A no-op for single-byte values.
    #[must_use]
    fn byteswap(self) -> Self;

    /// Convert a value between native order and `endian`.
    ///
    /// The conversion is its own inverse, so the same call is used on the way in and on the way
    /// out of a buffer.
    #[must_use]
    fn convert(self, endian: Endian) -> Self {
        if Self::SIZE > 1 && endian.needs_swap() {
            self.byteswap()
        } else {
            self
        }
    }
}

macro_rules! impl_primitive_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn byteswap(self) -> Self {
                    self.swap_bytes()
                }
            }
        )+
    };
}

macro_rules! impl_primitive_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn byteswap(self) -> Self {
                    <$ty>::from_bits(self.to_bits().swap_bytes())
                }
            }
        )+
    };
}

impl_primitive_int!(u8, i8, u16, i16, u32, i32, u64, i64);
impl_primitive_float!(f32, f64);

const _: () = {
    assert!(<u8 as Primitive>::SIZE == 1);
    assert!(<u16 as Primitive>::SIZE == 2);
    assert!(<u32 as Primitive>::SIZE == 4);
    assert!(<u64 as Primitive>::SIZE == 8);
    assert!(<f32 as Primitive>::SIZE == 4);
    assert!(<f64 as Primitive>::SIZE == 8);
};

/// Reverse the byte order of an arithmetic value.
///
/// # Examples
///
/// ```rust
/// use bytecursor::byteswap;
///
/// assert_eq!(byteswap(0x1234_u16), 0x3412);
/// assert_eq!(byteswap(0x7F_u8), 0x7F);
/// assert_eq!(byteswap(1.0_f32).to_bits(), 1.0_f32.to_bits().swap_bytes());
/// ```
#[must_use]
pub fn byteswap<T: Primitive>(value: T) -> T {
    value.byteswap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn byteswap_unsigned() {
        assert_eq!(byteswap(0x1234_u16), 0x3412);
        assert_eq!(byteswap(0x1234_5678_u32), 0x7856_3412);
        assert_eq!(byteswap(0x0102_0304_0506_0708_u64), 0x0807_0605_0403_0201);
    }

    #[test]
    fn byteswap_signed() {
        assert_eq!(byteswap(0x1234_i16), 0x3412);
        assert_eq!(byteswap(-1_i32), -1);
        assert_eq!(byteswap(0x0000_0080_i32), i32::from_be_bytes([0x80, 0, 0, 0]));
    }

    #[test]
    fn byteswap_single_byte_is_noop() {
        assert_eq!(byteswap(0xAB_u8), 0xAB);
        assert_eq!(byteswap(-5_i8), -5);
    }

    #[test]
    fn byteswap_float_uses_bit_pattern() {
        let value = 3.5_f64;
        let swapped = byteswap(value);
        assert_eq!(swapped.to_bits(), value.to_bits().swap_bytes());

        let value = 1.5_f32;
        assert_eq!(byteswap(value).to_bits(), value.to_bits().swap_bytes());
    }

    #[test]
    fn byteswap_involution() {
        for v in [0_u32, 1, 0xDEAD_BEEF, u32::MAX, 0x8000_0000] {
            assert_eq!(byteswap(byteswap(v)), v);
        }
        for v in [i64::MIN, -1, 0, 42, i64::MAX] {
            assert_eq!(byteswap(byteswap(v)), v);
        }
        for v in [0.0_f64, -0.0, 1.25, f64::MAX, f64::MIN_POSITIVE] {
            assert_eq!(byteswap(byteswap(v)).to_bits(), v.to_bits());
        }
        let nan = f32::from_bits(0x7FC0_0001);
        assert_eq!(byteswap(byteswap(nan)).to_bits(), nan.to_bits());
    }

    #[test]
    fn native_detection() {
        assert_ne!(native_is_little_endian(), native_is_big_endian());
        assert_eq!(
            native_is_little_endian(),
            1_u16.to_ne_bytes() == 1_u16.to_le_bytes()
        );
    }

    #[test]
    fn endian_resolution() {
        assert!(Endian::Native.is_native());
        assert!(!Endian::Native.needs_swap());
        assert_eq!(Endian::Native.resolve(), Endian::NATIVE);
        assert_eq!(Endian::Little.resolve(), Endian::Little);

        if native_is_little_endian() {
            assert!(!Endian::Little.needs_swap());
            assert!(Endian::Big.needs_swap());
        } else {
            assert!(Endian::Little.needs_swap());
            assert!(!Endian::Big.needs_swap());
        }
    }

    #[test]
    fn convert_matches_std() {
        let v = 0x1234_5678_u32;
        assert_eq!(v.convert(Endian::Little).to_ne_bytes(), v.to_le_bytes());
        assert_eq!(v.convert(Endian::Big).to_ne_bytes(), v.to_be_bytes());
        assert_eq!(v.convert(Endian::Native), v);
    }

    #[test]
    fn endian_strum() {
        assert_eq!(Endian::iter().count(), 3);
        assert_eq!(Endian::Big.to_string(), "big");
        assert_eq!(Endian::from_str("little").unwrap(), Endian::Little);
        assert!(Endian::from_str("middle").is_err());
    }
}
