//! Regrouping incomplete vectors into incomplete bytes and back.
//! 
//! This lets incomplete vectors of different widths meet at byte granularity,
//! for instance treating a 32-bit incomplete integer as four incomplete bytes.



//		Modules

#[cfg(test)]
#[path = "tests/bytes.rs"]
mod tests;



//		Packages

use crate::{
	errors::BitError,
	incomplete::IncompleteBitVector,
	tribit::TriBit,
};
use generic_array::{ArrayLength, GenericArray};
use typenum::U8;



//		Type aliases

/// An eight-bit [`IncompleteBitVector`].
pub type IncompleteByte = IncompleteBitVector<U8>;



//󰭅		IncompleteBitVector														
impl<BITS> IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		Constructors														
	
	//		from_bytes															
	/// Concatenates incomplete bytes back into a vector of this width.
	/// 
	/// This is the inverse of [`to_bytes()`](IncompleteBitVector::to_bytes()).
	/// Bits in the final byte beyond the width are dropped.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The incomplete bytes, where byte 0 holds bits 0 to 7.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::LengthMismatch`] if the number of bytes is not
	/// [`Self::BYTES`].
	/// 
	pub fn from_bytes(bytes: &[IncompleteByte]) -> Result<Self, BitError> {
		if bytes.len() != Self::BYTES {
			return Err(BitError::LengthMismatch { expected: Self::BYTES, actual: bytes.len() });
		}
		Ok(Self::from_slice(&concat(bytes)))
	}
	
	//		Public methods														
	
	//		resize																
	/// Regroups into a vector of another width, going through bytes.
	/// 
	/// Widening pads the new high bytes with [`TriBit::False`]; narrowing drops
	/// the high bits.
	/// 
	#[must_use]
	pub fn resize<OTHER>(&self) -> IncompleteBitVector<OTHER>
	where
		OTHER:                       ArrayLength,
		GenericArray<bool,   OTHER>: Copy,
		GenericArray<TriBit, OTHER>: Copy,
	{
		IncompleteBitVector::from_slice(&concat(&self.to_bytes()))
	}
	
	//		to_bytes															
	/// Splits into [`Self::BYTES`] incomplete bytes, preserving bit order.
	/// 
	/// If the width is not a multiple of eight, the final byte is padded with
	/// [`TriBit::False`].
	/// 
	#[must_use]
	pub fn to_bytes(&self) -> Vec<IncompleteByte> {
		self.as_slice().chunks(8).map(IncompleteByte::from_slice).collect()
	}
}



//		Private functions

//		concat																	
/// Joins incomplete bytes into a flat run of bits.
fn concat(bytes: &[IncompleteByte]) -> Vec<TriBit> {
	bytes.iter().flat_map(|byte| byte.bits()).collect()
}
