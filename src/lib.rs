//! The Tribits crate is a library of fixed-width bit vectors in which any bit
//! may be unknown.
//! 
//! It provides:
//! 
//!   - [`TriBit`], a three-valued bit, and its truth tables.
//!   - [`BitVector`], a fixed-width vector of definite bits, convertible to and
//!     from the primitive of the same width and to and from bytes.
//!   - [`IncompleteBitVector`], a fixed-width vector of [`TriBit`]s, with the
//!     forward bitwise operators, a reverse solver that recovers an operand
//!     from a result and the other operand, and an engine that enumerates
//!     every concrete [`BitVector`] consistent with the unknown bits.
//! 
//! Widths are [`typenum`] types, and aliases are provided for the primitive
//! widths, e.g. [`IncompleteBitVector32`].
//! 
//! All operations are bitwise and position-independent; there is no carry or
//! borrow between positions.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::panic,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod bit_vector;
mod bytes;
mod completion;
mod errors;
mod incomplete;
mod primitive;
mod render;
mod reverse;
mod tribit;

#[cfg(test)]
#[path = "tests/properties.rs"]
mod properties;



//		Packages

pub use bit_vector::BitVector;
pub use bytes::IncompleteByte;
pub use completion::{Completions, permutations_count};
pub use errors::{BitError, ReverseOperation};
pub use incomplete::IncompleteBitVector;
pub use primitive::BitCodec;
pub use render::{RenderOptions, UNKNOWN_MARKERS};
pub use tribit::{TriBit, zip_with};
pub use typenum::{U8, U16, U32, U64, U128};



//		Type aliases

/// An 8-bit [`BitVector`].
pub type BitVector8   = BitVector<U8>;

/// A 16-bit [`BitVector`].
pub type BitVector16  = BitVector<U16>;

/// A 32-bit [`BitVector`].
pub type BitVector32  = BitVector<U32>;

/// A 64-bit [`BitVector`].
pub type BitVector64  = BitVector<U64>;

/// A 128-bit [`BitVector`].
pub type BitVector128 = BitVector<U128>;

/// An 8-bit [`IncompleteBitVector`].
pub type IncompleteBitVector8   = IncompleteBitVector<U8>;

/// A 16-bit [`IncompleteBitVector`].
pub type IncompleteBitVector16  = IncompleteBitVector<U16>;

/// A 32-bit [`IncompleteBitVector`].
pub type IncompleteBitVector32  = IncompleteBitVector<U32>;

/// A 64-bit [`IncompleteBitVector`].
pub type IncompleteBitVector64  = IncompleteBitVector<U64>;

/// A 128-bit [`IncompleteBitVector`].
pub type IncompleteBitVector128 = IncompleteBitVector<U128>;
