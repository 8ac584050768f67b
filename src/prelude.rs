//! # bytecursor Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the bytecursor library. Import this module to get quick access to the cursors, the
//! byte order tag and the field dispatch traits.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all bytecursor operations
pub use crate::Error;

/// The result type used throughout bytecursor
pub use crate::Result;

// ================================================================================================
// Cursors
// ================================================================================================

/// Position and size queries shared by all cursors
pub use crate::Cursor;

/// Read-only, write-only and paired cursors
pub use crate::{Reader, Stream, Writer};

// ================================================================================================
// Byte Order
// ================================================================================================

/// Byte order tag and the numeric types cursors transfer
pub use crate::{Endian, Primitive};

// ================================================================================================
// Field Dispatch
// ================================================================================================

/// Encoding traits for structured values
pub use crate::{Composite, Decode, Encode};

/// Free functions dispatching on the value's type
pub use crate::{read_field, read_list, write_field, write_list};
