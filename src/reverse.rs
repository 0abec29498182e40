//! Reverse solving of bitwise operations over incomplete vectors.
//! 
//! Given the result of a bitwise operation and one of its operands, the
//! solvers here find the most constrained value of the other operand that
//! guarantees the result, or report that none exists. The vector forms apply
//! the [`TriBit`] solvers position by position, and only succeed if every
//! position has a solution.



//		Modules

#[cfg(test)]
#[path = "tests/reverse.rs"]
mod tests;



//		Packages

use crate::{
	errors::{BitError, ReverseOperation},
	incomplete::IncompleteBitVector,
	tribit::TriBit,
};
use generic_array::{ArrayLength, GenericArray};
use tracing::debug;



//󰭅		ReverseOperation														
impl ReverseOperation {
	//		is_feasible															
	/// Whether a single bit can be solved for, given the result bit and the
	/// known operand bit.
	#[must_use]
	pub const fn is_feasible(self, result: TriBit, known: TriBit) -> bool {
		match self {
			Self::And  => result.can_reverse_and(known),
			Self::Nand => result.can_reverse_nand(known),
			Self::Nor  => result.can_reverse_nor(known),
			Self::Or   => result.can_reverse_or(known),
			Self::Xnor => result.can_reverse_xnor(known),
			Self::Xor  => result.can_reverse_xor(known),
		}
	}
	
	//		solve																
	/// Solves for a single bit, given the result bit and the known operand bit.
	#[must_use]
	pub const fn solve(self, result: TriBit, known: TriBit) -> Option<TriBit> {
		match self {
			Self::And  => result.reverse_and(known),
			Self::Nand => result.reverse_nand(known),
			Self::Nor  => result.reverse_nor(known),
			Self::Or   => result.reverse_or(known),
			Self::Xnor => result.reverse_xnor(known),
			Self::Xor  => result.reverse_xor(known),
		}
	}
}

//󰭅		IncompleteBitVector														
impl<BITS> IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		Public methods														
	
	//		can_reverse															
	/// Whether [`reverse()`](IncompleteBitVector::reverse()) would succeed.
	/// 
	/// This is the conjunction of the per-bit feasibility of every position.
	/// 
	/// # Parameters
	/// 
	/// * `operation` - The operation that produced `self`.
	/// * `known`     - The operand that is already known.
	/// 
	#[must_use]
	pub fn can_reverse<T: Into<Self>>(&self, operation: ReverseOperation, known: T) -> bool {
		let known = known.into();
		self.as_slice().iter().zip(known.as_slice()).all(|(&result, &known)| operation.is_feasible(result, known))
	}
	
	//		can_reverse_and														
	/// Whether [`reverse_and()`](IncompleteBitVector::reverse_and()) would
	/// succeed.
	#[must_use]
	pub fn can_reverse_and<T: Into<Self>>(&self, known: T) -> bool {
		self.can_reverse(ReverseOperation::And, known)
	}
	
	//		can_reverse_nand													
	/// Whether [`reverse_nand()`](IncompleteBitVector::reverse_nand()) would
	/// succeed.
	#[must_use]
	pub fn can_reverse_nand<T: Into<Self>>(&self, known: T) -> bool {
		self.can_reverse(ReverseOperation::Nand, known)
	}
	
	//		can_reverse_nor														
	/// Whether [`reverse_nor()`](IncompleteBitVector::reverse_nor()) would
	/// succeed.
	#[must_use]
	pub fn can_reverse_nor<T: Into<Self>>(&self, known: T) -> bool {
		self.can_reverse(ReverseOperation::Nor, known)
	}
	
	//		can_reverse_or														
	/// Whether [`reverse_or()`](IncompleteBitVector::reverse_or()) would
	/// succeed.
	#[must_use]
	pub fn can_reverse_or<T: Into<Self>>(&self, known: T) -> bool {
		self.can_reverse(ReverseOperation::Or, known)
	}
	
	//		can_reverse_xnor													
	/// Whether [`reverse_xnor()`](IncompleteBitVector::reverse_xnor()) would
	/// succeed.
	#[must_use]
	pub fn can_reverse_xnor<T: Into<Self>>(&self, known: T) -> bool {
		self.can_reverse(ReverseOperation::Xnor, known)
	}
	
	//		can_reverse_xor														
	/// Whether [`reverse_xor()`](IncompleteBitVector::reverse_xor()) would
	/// succeed.
	#[must_use]
	pub fn can_reverse_xor<T: Into<Self>>(&self, known: T) -> bool {
		self.can_reverse(ReverseOperation::Xor, known)
	}
	
	//		reverse																
	/// Solves `x OP known == self` for `x`, position by position.
	/// 
	/// Either every position is solved, or none is: a partially solved vector
	/// is never returned.
	/// 
	/// # Parameters
	/// 
	/// * `operation` - The operation that produced `self`.
	/// * `known`     - The operand that is already known.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::Infeasible`] with the lowest position that has no
	/// solution.
	/// 
	pub fn reverse<T: Into<Self>>(&self, operation: ReverseOperation, known: T) -> Result<Self, BitError> {
		let known      = known.into();
		let mut solved = GenericArray::<TriBit, BITS>::default();
		
		for (position, (slot, (result, known))) in solved.iter_mut().zip(self.bits().zip(known.bits())).enumerate() {
			*slot = operation.solve(result, known).ok_or_else(|| {
				debug!(%operation, position, %result, %known, "Reverse solve is infeasible");
				BitError::Infeasible { operation, position }
			})?;
		}
		
		Ok(Self::new(solved))
	}
	
	//		reverse_and															
	/// Solves `x AND known == self` for `x`. See [`TriBit::reverse_and()`] for
	/// the per-bit table.
	/// 
	/// # Parameters
	/// 
	/// * `known` - The other operand of the AND, complete or incomplete.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::Infeasible`] if any position has no solution.
	/// 
	pub fn reverse_and<T: Into<Self>>(&self, known: T) -> Result<Self, BitError> {
		self.reverse(ReverseOperation::And, known)
	}
	
	//		reverse_nand														
	/// Solves `x NAND known == self` for `x`.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::Infeasible`] if any position has no solution.
	/// 
	pub fn reverse_nand<T: Into<Self>>(&self, known: T) -> Result<Self, BitError> {
		self.reverse(ReverseOperation::Nand, known)
	}
	
	//		reverse_nor															
	/// Solves `x NOR known == self` for `x`.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::Infeasible`] if any position has no solution.
	/// 
	pub fn reverse_nor<T: Into<Self>>(&self, known: T) -> Result<Self, BitError> {
		self.reverse(ReverseOperation::Nor, known)
	}
	
	//		reverse_or															
	/// Solves `x OR known == self` for `x`. See [`TriBit::reverse_or()`] for
	/// the per-bit table.
	/// 
	/// # Parameters
	/// 
	/// * `known` - The other operand of the OR, complete or incomplete.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::Infeasible`] if any position has no solution.
	/// 
	pub fn reverse_or<T: Into<Self>>(&self, known: T) -> Result<Self, BitError> {
		self.reverse(ReverseOperation::Or, known)
	}
	
	//		reverse_xnor														
	/// Solves `x XNOR known == self` for `x`.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::Infeasible`] if any position has no solution.
	/// 
	pub fn reverse_xnor<T: Into<Self>>(&self, known: T) -> Result<Self, BitError> {
		self.reverse(ReverseOperation::Xnor, known)
	}
	
	//		reverse_xor															
	/// Solves `x XOR known == self` for `x`.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::Infeasible`] if any position has no solution.
	/// 
	pub fn reverse_xor<T: Into<Self>>(&self, known: T) -> Result<Self, BitError> {
		self.reverse(ReverseOperation::Xor, known)
	}
}
