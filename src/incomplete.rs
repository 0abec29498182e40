//! Fixed-width vector of bits that may be unknown.

//	The arrays are sized by BITS at compile time, and every index used here is
//	bounded by that same width.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]



//		Modules

#[cfg(test)]
#[path = "tests/incomplete.rs"]
mod tests;



//		Packages

use crate::{
	bit_vector::BitVector,
	errors::BitError,
	render::RenderOptions,
	tribit::TriBit,
};
use core::{
	fmt::{Debug, Display, Formatter, self},
	marker::PhantomData,
	ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr},
	str::FromStr,
};
use generic_array::{ArrayLength, GenericArray, sequence::GenericSequence};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;



//		Structs

//		IncompleteBitVector														
/// A fixed-width sequence of bits, any of which may be unknown.
/// 
/// This is the carrier of the three-valued bit algebra. Every operation takes
/// the vector by value and returns a new one; nothing is mutated in place.
/// 
/// # Type parameters
/// 
/// * `BITS` - The width, as a [`typenum`] unsigned type such as
///            [`U32`](typenum::U32).
/// 
/// # Layout
/// 
/// Indexing matches [`BitVector`]: bit 0 is the least-significant bit. Building
/// from a shorter sequence pads the most-significant end with
/// [`TriBit::False`] (not [`TriBit::Unknown`]), and a longer sequence is
/// truncated to its first `BITS` entries.
/// 
/// # Completions
/// 
/// A [`BitVector`] is a completion of an [`IncompleteBitVector`] when it agrees
/// with every known bit. There are `2^n` completions for `n` unknown bits; see
/// [`completions()`](IncompleteBitVector::completions()).
/// 
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct IncompleteBitVector<BITS>(GenericArray<TriBit, BITS>)
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
;

//󰭅		IncompleteBitVector														
impl<BITS> IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		Public constants													
	/// Number of bits in the vector.
	pub const BITS:  usize = BITS::USIZE;
	
	/// Number of bytes needed to hold the vector.
	pub const BYTES: usize = BITS::USIZE.div_ceil(8);
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`IncompleteBitVector`] from an array of exactly the right
	/// width.
	/// 
	/// # Parameters
	/// 
	/// * `bits` - The bits, least-significant first.
	/// 
	#[must_use]
	pub const fn new(bits: GenericArray<TriBit, BITS>) -> Self {
		Self(bits)
	}
	
	//		from_slice															
	/// Creates an [`IncompleteBitVector`] from [`TriBit`]s, padding with
	/// [`TriBit::False`] or truncating to the width.
	/// 
	/// # Parameters
	/// 
	/// * `bits` - The bits, least-significant first.
	/// 
	#[must_use]
	pub fn from_slice(bits: &[TriBit]) -> Self {
		Self(GenericArray::generate(|pos| bits.get(pos).copied().unwrap_or_default()))
	}
	
	//		parse_with															
	/// Parses text rendered with the given options.
	/// 
	/// # Parameters
	/// 
	/// * `s`       - The text to parse.
	/// * `options` - The rendering options the text was written with.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the text contains invalid characters, or the wrong
	/// number of bits.
	/// 
	pub fn parse_with(s: &str, options: &RenderOptions) -> Result<Self, BitError> {
		Ok(Self::from_slice(&options.parse(s, Self::BITS)?))
	}
	
	//		unknown																
	/// An [`IncompleteBitVector`] in which every bit is unknown.
	#[must_use]
	pub fn unknown() -> Self {
		Self(GenericArray::generate(|_| TriBit::Unknown))
	}
	
	//		Public methods														
	
	//		and																	
	/// Position-wise AND. See [`TriBit::and()`].
	#[must_use]
	pub fn and<T: Into<Self>>(self, rhs: T) -> Self {
		self.zip(rhs.into(), TriBit::and)
	}
	
	//		as_array															
	/// Represents the internal value as a [`GenericArray`] of [`TriBit`]s.
	#[must_use]
	pub const fn as_array(&self) -> &GenericArray<TriBit, BITS> {
		&self.0
	}
	
	//		as_slice															
	/// Represents the internal value as a slice of [`TriBit`]s,
	/// least-significant first. The length is always [`Self::BITS`].
	#[must_use]
	pub fn as_slice(&self) -> &[TriBit] {
		self.0.as_slice()
	}
	
	//		bit																	
	/// Gets the value of a specific bit.
	/// 
	/// Returns [`TriBit::False`] if the position is out of range, matching the
	/// padding applied during construction.
	/// 
	/// # Parameters
	/// 
	/// * `pos` - The position of the bit, where `0` is the least-significant
	///           bit.
	/// 
	#[must_use]
	pub fn bit(&self, pos: usize) -> TriBit {
		self.0.get(pos).copied().unwrap_or_default()
	}
	
	//		bits																
	/// Iterates over the bits, least-significant first.
	pub fn bits(&self) -> impl DoubleEndedIterator<Item = TriBit> + ExactSizeIterator + '_ {
		self.0.iter().copied()
	}
	
	//		complete															
	/// Converts to a [`BitVector`] if no bit is unknown.
	#[must_use]
	pub fn complete(self) -> Option<BitVector<BITS>> {
		self.is_complete().then(|| BitVector::new(GenericArray::generate(|pos| self.0[pos] == TriBit::True)))
	}
	
	//		contains															
	/// Tests whether `other` is compatible with this vector.
	/// 
	/// Returns `true` if every position where both sides are known holds the
	/// same bit. Unknown positions on either side impose no constraint, so this
	/// is an overlap test rather than a subset test. Given a [`BitVector`], it
	/// tests whether the vector is one of this vector's completions.
	/// 
	/// # Parameters
	/// 
	/// * `other` - A [`BitVector`] or [`IncompleteBitVector`] of the same
	///             width.
	/// 
	#[must_use]
	pub fn contains<T: Into<Self>>(&self, other: T) -> bool {
		let other = other.into();
		self.0.iter().zip(other.0.iter()).all(|(&ours, &theirs)| {
			match (ours.known(), theirs.known()) {
				(Some(a), Some(b)) => a == b,
				_                  => true,
			}
		})
	}
	
	//		from_json															
	/// Deserialises a JSON string into an [`IncompleteBitVector`].
	/// 
	/// # Errors
	/// 
	/// If the JSON string is invalid, or does not describe a vector of this
	/// width, then an error will be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		is_complete															
	/// Whether every bit is known.
	#[must_use]
	pub fn is_complete(&self) -> bool {
		self.0.iter().all(|bit| bit.is_known())
	}
	
	//		nand																
	/// Position-wise NAND. See [`TriBit::nand()`].
	#[must_use]
	pub fn nand<T: Into<Self>>(self, rhs: T) -> Self {
		self.zip(rhs.into(), TriBit::nand)
	}
	
	//		nor																	
	/// Position-wise NOR. See [`TriBit::nor()`].
	#[must_use]
	pub fn nor<T: Into<Self>>(self, rhs: T) -> Self {
		self.zip(rhs.into(), TriBit::nor)
	}
	
	//		or																	
	/// Position-wise OR. See [`TriBit::or()`].
	#[must_use]
	pub fn or<T: Into<Self>>(self, rhs: T) -> Self {
		self.zip(rhs.into(), TriBit::or)
	}
	
	//		render																
	/// Renders the vector with the given marker for unknown bits.
	/// 
	/// Bits are grouped into bytes starting from byte 0, each byte written
	/// most-significant bit first, with groups separated by a space.
	/// 
	/// # Parameters
	/// 
	/// * `missing` - The text to write for each unknown bit.
	/// 
	#[must_use]
	pub fn render(&self, missing: &str) -> String {
		self.render_with(&RenderOptions::new(missing))
	}
	
	//		render_with															
	/// Renders the vector with the given options.
	#[must_use]
	pub fn render_with(&self, options: &RenderOptions) -> String {
		options.render(&self.0)
	}
	
	//		shift_left															
	/// Moves every bit `count` places towards the most-significant end.
	/// 
	/// The vacated low positions become [`TriBit::False`], not
	/// [`TriBit::Unknown`].
	/// 
	#[must_use]
	pub fn shift_left(self, count: usize) -> Self {
		Self(GenericArray::generate(|pos| pos.checked_sub(count).map_or(TriBit::False, |from| self.0[from])))
	}
	
	//		shift_right															
	/// Moves every bit `count` places towards the least-significant end.
	/// 
	/// The vacated high positions become [`TriBit::False`], not
	/// [`TriBit::Unknown`].
	/// 
	#[must_use]
	pub fn shift_right(self, count: usize) -> Self {
		Self(GenericArray::generate(|pos| pos.checked_add(count).map_or(TriBit::False, |from| self.bit(from))))
	}
	
	//		unknown_count														
	/// Counts the unknown bits.
	#[must_use]
	pub fn unknown_count(&self) -> usize {
		self.0.iter().filter(|bit| bit.is_unknown()).count()
	}
	
	//		unknown_positions													
	/// Iterates over the positions of the unknown bits, in ascending order.
	pub fn unknown_positions(&self) -> impl Iterator<Item = usize> + '_ {
		self.0.iter().enumerate().filter(|(_, bit)| bit.is_unknown()).map(|(pos, _)| pos)
	}
	
	//		xnor																
	/// Position-wise XNOR. See [`TriBit::xnor()`].
	#[must_use]
	pub fn xnor<T: Into<Self>>(self, rhs: T) -> Self {
		self.zip(rhs.into(), TriBit::xnor)
	}
	
	//		xor																	
	/// Position-wise XOR. See [`TriBit::xor()`].
	#[must_use]
	pub fn xor<T: Into<Self>>(self, rhs: T) -> Self {
		self.zip(rhs.into(), TriBit::xor)
	}
	
	//		Private methods														
	
	//		zip																	
	/// Applies a bit operation position-wise against another vector.
	fn zip<F>(self, rhs: Self, op: F) -> Self
	where
		F: Fn(TriBit, TriBit) -> TriBit,
	{
		Self(GenericArray::generate(|pos| op(self.0[pos], rhs.0[pos])))
	}
}

//󰭅		BitAnd																	
impl<BITS, T> BitAnd<T> for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
	T:                          Into<Self>,
{
	type Output = Self;
	
	//		bitand																
	fn bitand(self, rhs: T) -> Self::Output {
		self.and(rhs)
	}
}

//󰭅		BitOr																	
impl<BITS, T> BitOr<T> for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
	T:                          Into<Self>,
{
	type Output = Self;
	
	//		bitor																
	fn bitor(self, rhs: T) -> Self::Output {
		self.or(rhs)
	}
}

//󰭅		BitXor																	
impl<BITS, T> BitXor<T> for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
	T:                          Into<Self>,
{
	type Output = Self;
	
	//		bitxor																
	fn bitxor(self, rhs: T) -> Self::Output {
		self.xor(rhs)
	}
}

//󰭅		Debug																	
impl<BITS> Debug for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "IncompleteBitVector::<{}>({})", Self::BITS, self)
	}
}

//󰭅		Deserialize																
impl<'de, BITS> Deserialize<'de> for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(IncompleteBitVectorVisitor::<BITS>(PhantomData))
	}
}

//󰭅		Display																	
impl<BITS> Display for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		RenderOptions::default().write(f, &self.0)
	}
}

//󰭅		FromStr																	
impl<BITS> FromStr for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Err = BitError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse_with(s, &RenderOptions::default())
	}
}

//󰭅		Not																		
impl<BITS> Not for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Output = Self;
	
	//		not																	
	fn not(self) -> Self::Output {
		Self(GenericArray::generate(|pos| !self.0[pos]))
	}
}

//󰭅		Serialize																
impl<BITS> Serialize for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

//󰭅		Shl																		
impl<BITS> Shl<usize> for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Output = Self;
	
	//		shl																	
	fn shl(self, rhs: usize) -> Self::Output {
		self.shift_left(rhs)
	}
}

//󰭅		Shr																		
impl<BITS> Shr<usize> for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Output = Self;
	
	//		shr																	
	fn shr(self, rhs: usize) -> Self::Output {
		self.shift_right(rhs)
	}
}

//󰭅		TryFrom: &[TriBit] -> IncompleteBitVector								
impl<BITS> TryFrom<&[TriBit]> for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Error = BitError;
	
	//		try_from															
	/// Unlike [`from_slice()`](IncompleteBitVector::from_slice()), rejects
	/// input that is not exactly the width.
	fn try_from(v: &[TriBit]) -> Result<Self, Self::Error> {
		if v.len() != Self::BITS {
			return Err(BitError::LengthMismatch { expected: Self::BITS, actual: v.len() });
		}
		Ok(Self::from_slice(v))
	}
}

//		IncompleteBitVectorVisitor												
/// A visitor for parsing incomplete bit vectors from their rendered form.
struct IncompleteBitVectorVisitor<BITS>(PhantomData<BITS>);

//󰭅		Visitor																	
impl<BITS> Visitor<'_> for IncompleteBitVectorVisitor<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Value = IncompleteBitVector<BITS>;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a rendered {}-bit incomplete vector", BITS::USIZE)
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}
