//! Contains error types used throughout the library.



//		Packages

use core::fmt::{Display, Formatter, self};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;



//		Enums

//		BitError																
/// Represents all possible errors that can occur when working with bit
/// vectors.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BitError {
	/// The requested completion index is beyond the number of possible
	/// completions.
	#[error("Completion index {index} out of range for {permutations} permutations")]
	CompletionOutOfRange {
		/// The index that was requested.
		index:        u128,
		
		/// The number of completions available.
		permutations: u128,
	},
	
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// A reverse operation has no solution for the given result and known
	/// operand.
	#[error("Reverse {operation} is infeasible at bit {position}")]
	Infeasible {
		/// The operation being reversed.
		operation: ReverseOperation,
		
		/// The first bit position at which no solution exists.
		position:  usize,
	},
	
	/// The incoming value is not a valid bit character.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The number of bits or bytes supplied does not match the width.
	#[error("Length mismatch: expected {expected}, got {actual}")]
	LengthMismatch {
		/// The required length.
		expected: usize,
		
		/// The length that was supplied.
		actual:   usize,
	},
	
	/// A definite value was required, but the bit at this position is unknown.
	#[error("Bit {position} is unknown")]
	UnknownBit {
		/// The first unknown bit position.
		position: usize,
	},
}

//		ReverseOperation														
/// The bitwise operations that can be reversed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
pub enum ReverseOperation {
	/// Reverse of AND.
	And,
	
	/// Reverse of NAND.
	Nand,
	
	/// Reverse of NOR.
	Nor,
	
	/// Reverse of OR.
	Or,
	
	/// Reverse of XNOR.
	Xnor,
	
	/// Reverse of XOR.
	Xor,
}

//󰭅		Display																	
impl Display for ReverseOperation {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let name = match *self {
			Self::And  => "AND",
			Self::Nand => "NAND",
			Self::Nor  => "NOR",
			Self::Or   => "OR",
			Self::Xnor => "XNOR",
			Self::Xor  => "XOR",
		};
		f.write_str(name)
	}
}
