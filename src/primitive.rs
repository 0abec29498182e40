//! Conversions between primitive numbers and bit vectors of the same width.
//! 
//! Every primitive maps onto its bit vector through its little-endian bytes:
//! byte 0 holds bits 0 to 7, byte 1 holds bits 8 to 15, and so on. Floating
//! point values use their IEEE 754 bit pattern, so the conversion is exact in
//! both directions, including for NaN payloads. Decimal types without a Rust
//! primitive use the 128-bit width through their raw 16-byte representation.



//		Modules

#[cfg(test)]
#[path = "tests/primitive.rs"]
mod tests;



//		Packages

use crate::{
	bit_vector::BitVector,
	errors::BitError,
	incomplete::IncompleteBitVector,
	tribit::TriBit,
};
use core::mem::size_of;
use generic_array::{ArrayLength, GenericArray};
use typenum::{U8, U16, U32, U64, U128};



//		Traits

//		BitCodec																
/// A primitive type with a fixed-width bit-vector representation.
pub trait BitCodec: Copy
where
	GenericArray<bool,   Self::Width>: Copy,
	GenericArray<TriBit, Self::Width>: Copy,
{
	/// The width of the primitive, in bits.
	type Width: ArrayLength;
	
	//		from_bit_vector														
	/// Rebuilds the primitive from its bits.
	fn from_bit_vector(bits: BitVector<Self::Width>) -> Self;
	
	//		to_bit_vector														
	/// Represents the primitive as bits.
	fn to_bit_vector(self) -> BitVector<Self::Width>;
	
	//		to_incomplete														
	/// Represents the primitive as bits that are all known.
	fn to_incomplete(self) -> IncompleteBitVector<Self::Width> {
		self.to_bit_vector().incomplete()
	}
}



//		Macros

//		bit_codec!																
/// Implements [`BitCodec`] and the matching [`From`] and [`TryFrom`]
/// conversions for primitives with `to_le_bytes()` and `from_le_bytes()`.
macro_rules! bit_codec {
	($($ty:ty => $width:ty),* $(,)?) => {$(
		//󰭅		BitCodec														
		impl BitCodec for $ty {
			type Width = $width;
			
			//		from_bit_vector												
			fn from_bit_vector(bits: BitVector<Self::Width>) -> Self {
				let mut bytes = [0_u8; size_of::<$ty>()];
				for (slot, byte) in bytes.iter_mut().zip(bits.to_le_bytes()) {
					*slot = byte;
				}
				Self::from_le_bytes(bytes)
			}
			
			//		to_bit_vector												
			fn to_bit_vector(self) -> BitVector<Self::Width> {
				BitVector::from_le_slice(&self.to_le_bytes())
			}
		}
		
		//󰭅		From: primitive -> BitVector									
		impl From<$ty> for BitVector<$width> {
			//		from														
			fn from(v: $ty) -> Self {
				v.to_bit_vector()
			}
		}
		
		//󰭅		From: primitive -> IncompleteBitVector							
		impl From<$ty> for IncompleteBitVector<$width> {
			//		from														
			fn from(v: $ty) -> Self {
				v.to_incomplete()
			}
		}
		
		//󰭅		From: BitVector -> primitive									
		impl From<BitVector<$width>> for $ty {
			//		from														
			fn from(v: BitVector<$width>) -> Self {
				Self::from_bit_vector(v)
			}
		}
		
		//󰭅		TryFrom: IncompleteBitVector -> primitive						
		impl TryFrom<IncompleteBitVector<$width>> for $ty {
			type Error = BitError;
			
			//		try_from													
			fn try_from(v: IncompleteBitVector<$width>) -> Result<Self, Self::Error> {
				BitVector::try_from(v).map(Self::from_bit_vector)
			}
		}
	)*};
}

bit_codec! {
	u8   => U8,
	i8   => U8,
	u16  => U16,
	i16  => U16,
	u32  => U32,
	i32  => U32,
	f32  => U32,
	u64  => U64,
	i64  => U64,
	f64  => U64,
	u128 => U128,
	i128 => U128,
}
