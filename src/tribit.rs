//! The three-valued bit primitive and its truth tables.



//		Modules

#[cfg(test)]
#[path = "tests/tribit.rs"]
mod tests;



//		Packages

use crate::errors::BitError;
use core::{
	fmt::{Display, Formatter, self},
	ops::{BitAnd, BitOr, BitXor, Not},
};
use serde::{Deserialize, Serialize};



//		Enums

//		TriBit																	
/// A bit that is either known to be set, known to be clear, or unknown.
/// 
/// Unknown is a state in its own right rather than an absent value, so every
/// operation matches on it exhaustively. There is no ordering between the
/// three states, and [`Unknown`](TriBit::Unknown) never compares equal to
/// either of the known states.
/// 
/// # Truth tables
/// 
/// OR follows Kleene logic: the result is known whenever either side is known
/// to be set, or both sides are known to be clear.
/// 
/// AND does *not* follow Kleene logic. Any unknown operand makes the result
/// unknown, even when the other operand is known to be clear. The reverse AND
/// table is derived from this behaviour, so the two must change together.
/// 
/// XOR is unknown whenever either side is unknown.
/// 
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TriBit {
	/// The bit is known to be clear.
	#[default]
	False,
	
	/// The bit is known to be set.
	True,
	
	/// The bit may be either set or clear.
	Unknown,
}

//󰭅		TriBit																	
impl TriBit {
	//		Public constants													
	/// All three states, in declaration order.
	pub const ALL: [Self; 3] = [Self::False, Self::True, Self::Unknown];
	
	//		Public methods														
	
	//		and																	
	/// Logical AND, propagating [`Unknown`](TriBit::Unknown) from either side.
	#[must_use]
	pub const fn and(self, rhs: Self) -> Self {
		match (self, rhs) {
			(Self::Unknown, _) | (_, Self::Unknown) => Self::Unknown,
			(Self::True,    Self::True)             => Self::True,
			_                                       => Self::False,
		}
	}
	
	//		can_reverse_and														
	/// Whether [`reverse_and()`](TriBit::reverse_and()) has a solution when
	/// `self` is the result and `known` is the other operand.
	#[must_use]
	pub const fn can_reverse_and(self, known: Self) -> bool {
		!matches!(
			(self, known),
			(Self::True, Self::Unknown) | (Self::Unknown, Self::False) | (Self::True, Self::False)
		)
	}
	
	//		can_reverse_nand													
	/// Whether [`reverse_nand()`](TriBit::reverse_nand()) has a solution.
	#[must_use]
	pub const fn can_reverse_nand(self, known: Self) -> bool {
		self.not().can_reverse_and(known)
	}
	
	//		can_reverse_nor														
	/// Whether [`reverse_nor()`](TriBit::reverse_nor()) has a solution.
	#[must_use]
	pub const fn can_reverse_nor(self, known: Self) -> bool {
		self.not().can_reverse_or(known)
	}
	
	//		can_reverse_or														
	/// Whether [`reverse_or()`](TriBit::reverse_or()) has a solution when
	/// `self` is the result and `known` is the other operand.
	#[must_use]
	pub const fn can_reverse_or(self, known: Self) -> bool {
		!matches!(
			(self, known),
			(Self::False, Self::Unknown) | (Self::Unknown, Self::True) | (Self::False, Self::True)
		)
	}
	
	//		can_reverse_xnor													
	/// Whether [`reverse_xnor()`](TriBit::reverse_xnor()) has a solution.
	#[must_use]
	pub const fn can_reverse_xnor(self, known: Self) -> bool {
		self.not().can_reverse_xor(known)
	}
	
	//		can_reverse_xor														
	/// Whether [`reverse_xor()`](TriBit::reverse_xor()) has a solution.
	#[must_use]
	pub const fn can_reverse_xor(self, known: Self) -> bool {
		!matches!(
			(self, known),
			(Self::False | Self::True, Self::Unknown)
		)
	}
	
	//		is_known															
	/// Whether the bit is known, i.e. not [`Unknown`](TriBit::Unknown).
	#[must_use]
	pub const fn is_known(self) -> bool {
		!self.is_unknown()
	}
	
	//		is_unknown															
	/// Whether the bit is [`Unknown`](TriBit::Unknown).
	#[must_use]
	pub const fn is_unknown(self) -> bool {
		matches!(self, Self::Unknown)
	}
	
	//		known																
	/// The definite value of the bit, or [`None`] if it is unknown.
	#[must_use]
	pub const fn known(self) -> Option<bool> {
		match self {
			Self::False   => Some(false),
			Self::True    => Some(true),
			Self::Unknown => None,
		}
	}
	
	//		nand																
	/// Logical NAND, i.e. the negation of [`and()`](TriBit::and()).
	#[must_use]
	pub const fn nand(self, rhs: Self) -> Self {
		self.and(rhs).not()
	}
	
	//		nor																	
	/// Logical NOR, i.e. the negation of [`or()`](TriBit::or()).
	#[must_use]
	pub const fn nor(self, rhs: Self) -> Self {
		self.or(rhs).not()
	}
	
	//		not																	
	/// Logical NOT. Unknown stays unknown.
	#[expect(clippy::should_implement_trait, reason = "Const counterpart of the Not implementation")]
	#[must_use]
	pub const fn not(self) -> Self {
		match self {
			Self::False   => Self::True,
			Self::True    => Self::False,
			Self::Unknown => Self::Unknown,
		}
	}
	
	//		or																	
	/// Logical OR, following Kleene logic.
	#[must_use]
	pub const fn or(self, rhs: Self) -> Self {
		match (self, rhs) {
			(Self::True,  _) | (_, Self::True) => Self::True,
			(Self::False, Self::False)         => Self::False,
			_                                  => Self::Unknown,
		}
	}
	
	//		reverse_and															
	/// Solves `x AND known == self` for `x`.
	/// 
	/// The returned bit is the most constrained value that guarantees the
	/// result for every value an unknown `known` might actually take. Returns
	/// [`None`] when no such value exists.
	/// 
	/// | result | known | solution |
	/// |--------|-------|----------|
	/// | U      | U     | U        |
	/// | F      | U     | F        |
	/// | T      | U     | none     |
	/// | U      | F     | none     |
	/// | U      | T     | U        |
	/// | F      | F     | U        |
	/// | F      | T     | F        |
	/// | T      | F     | none     |
	/// | T      | T     | T        |
	/// 
	/// # Parameters
	/// 
	/// * `known` - The operand that is already known.
	/// 
	#[must_use]
	pub const fn reverse_and(self, known: Self) -> Option<Self> {
		match (self, known) {
			(Self::Unknown, Self::Unknown | Self::True) | (Self::False, Self::False) => Some(Self::Unknown),
			(Self::False,   Self::Unknown | Self::True)                              => Some(Self::False),
			(Self::True,    Self::True)                                              => Some(Self::True),
			(Self::True,    Self::Unknown | Self::False) | (Self::Unknown, Self::False) => None,
		}
	}
	
	//		reverse_nand														
	/// Solves `x NAND known == self` for `x`, by reversing AND against the
	/// negated result.
	#[must_use]
	pub const fn reverse_nand(self, known: Self) -> Option<Self> {
		self.not().reverse_and(known)
	}
	
	//		reverse_nor															
	/// Solves `x NOR known == self` for `x`, by reversing OR against the negated
	/// result.
	#[must_use]
	pub const fn reverse_nor(self, known: Self) -> Option<Self> {
		self.not().reverse_or(known)
	}
	
	//		reverse_or															
	/// Solves `x OR known == self` for `x`.
	/// 
	/// | result | known | solution |
	/// |--------|-------|----------|
	/// | U      | U     | U        |
	/// | F      | U     | none     |
	/// | T      | U     | T        |
	/// | U      | F     | U        |
	/// | U      | T     | none     |
	/// | F      | F     | F        |
	/// | F      | T     | none     |
	/// | T      | F     | T        |
	/// | T      | T     | U        |
	/// 
	/// # Parameters
	/// 
	/// * `known` - The operand that is already known.
	/// 
	#[must_use]
	pub const fn reverse_or(self, known: Self) -> Option<Self> {
		match (self, known) {
			(Self::Unknown, Self::Unknown | Self::False) | (Self::True, Self::True) => Some(Self::Unknown),
			(Self::True,    Self::Unknown | Self::False)                            => Some(Self::True),
			(Self::False,   Self::False)                                            => Some(Self::False),
			(Self::False,   Self::Unknown | Self::True) | (Self::Unknown, Self::True) => None,
		}
	}
	
	//		reverse_xnor														
	/// Solves `x XNOR known == self` for `x`.
	#[must_use]
	pub const fn reverse_xnor(self, known: Self) -> Option<Self> {
		self.not().reverse_xor(known)
	}
	
	//		reverse_xor															
	/// Solves `x XOR known == self` for `x`.
	/// 
	/// An unknown result accepts anything. A known result against an unknown
	/// operand cannot be guaranteed, so has no solution.
	/// 
	#[must_use]
	pub const fn reverse_xor(self, known: Self) -> Option<Self> {
		match (self, known) {
			(Self::Unknown, _)                           => Some(Self::Unknown),
			(Self::False | Self::True, Self::Unknown)    => None,
			(Self::False | Self::True, Self::False | Self::True) => Some(self.xor(known)),
		}
	}
	
	//		xnor																
	/// Logical XNOR, i.e. the negation of [`xor()`](TriBit::xor()).
	#[must_use]
	pub const fn xnor(self, rhs: Self) -> Self {
		self.xor(rhs).not()
	}
	
	//		xor																	
	/// Logical XOR. Unknown on either side gives unknown.
	#[must_use]
	pub const fn xor(self, rhs: Self) -> Self {
		match (self, rhs) {
			(Self::Unknown, _) | (_, Self::Unknown)                 => Self::Unknown,
			(Self::False, Self::False) | (Self::True, Self::True)   => Self::False,
			(Self::False, Self::True)  | (Self::True, Self::False)  => Self::True,
		}
	}
}

//󰭅		BitAnd																	
impl BitAnd for TriBit {
	type Output = Self;
	
	//		bitand																
	fn bitand(self, rhs: Self) -> Self::Output {
		self.and(rhs)
	}
}

//󰭅		BitOr																	
impl BitOr for TriBit {
	type Output = Self;
	
	//		bitor																
	fn bitor(self, rhs: Self) -> Self::Output {
		self.or(rhs)
	}
}

//󰭅		BitXor																	
impl BitXor for TriBit {
	type Output = Self;
	
	//		bitxor																
	fn bitxor(self, rhs: Self) -> Self::Output {
		self.xor(rhs)
	}
}

//󰭅		Display																	
impl Display for TriBit {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match *self {
			Self::False   => "0",
			Self::True    => "1",
			Self::Unknown => "*",
		})
	}
}

//󰭅		From: bool -> TriBit													
impl From<bool> for TriBit {
	//		from																
	fn from(v: bool) -> Self {
		if v { Self::True } else { Self::False }
	}
}

//󰭅		From: Option<bool> -> TriBit											
impl From<Option<bool>> for TriBit {
	//		from																
	fn from(v: Option<bool>) -> Self {
		v.map_or(Self::Unknown, Self::from)
	}
}

//󰭅		From: TriBit -> Option<bool>											
impl From<TriBit> for Option<bool> {
	//		from																
	fn from(v: TriBit) -> Self {
		v.known()
	}
}

//󰭅		Not																		
impl Not for TriBit {
	type Output = Self;
	
	//		not																	
	fn not(self) -> Self::Output {
		Self::not(self)
	}
}



//		Public functions

//		zip_with																
/// Applies a binary bit operation position-wise across two slices.
/// 
/// This is the entry point for bits arriving from outside the fixed-width
/// types, where the lengths are only known at runtime.
/// 
/// # Parameters
/// 
/// * `lhs` - The left-hand operand bits.
/// * `rhs` - The right-hand operand bits.
/// * `op`  - The operation to apply to each pair of bits.
/// 
/// # Errors
/// 
/// Returns [`BitError::LengthMismatch`] if the slices differ in length.
/// 
pub fn zip_with<F>(lhs: &[TriBit], rhs: &[TriBit], op: F) -> Result<Vec<TriBit>, BitError>
where
	F: Fn(TriBit, TriBit) -> TriBit,
{
	if lhs.len() != rhs.len() {
		return Err(BitError::LengthMismatch { expected: lhs.len(), actual: rhs.len() });
	}
	Ok(lhs.iter().zip(rhs).map(|(&l, &r)| op(l, r)).collect())
}
