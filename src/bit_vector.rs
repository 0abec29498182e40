//! Fixed-width vector of definite bits.

//	The arrays are sized by BITS at compile time, and every index used here is
//	bounded by that same width.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Shifts and remainders are bounded by the width")]



//		Modules

#[cfg(test)]
#[path = "tests/bit_vector.rs"]
mod tests;



//		Packages

use crate::{
	errors::BitError,
	incomplete::IncompleteBitVector,
	primitive::BitCodec,
	render::RenderOptions,
	tribit::TriBit,
};
use core::{
	fmt::{Binary, Debug, Display, Formatter, LowerHex, UpperHex, self},
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

//		BitVector																
/// A fixed-width sequence of definite bits.
/// 
/// # Type parameters
/// 
/// * `BITS` - The width, as a [`typenum`] unsigned type such as
///            [`U32`](typenum::U32).
/// 
/// # Layout
/// 
/// Bit 0 is the least-significant bit. When converting to and from bytes and
/// primitives, byte 0 holds bits 0 to 7, byte 1 holds bits 8 to 15, and so
/// on, which is the little-endian layout of Rust's primitive integers:
/// 
/// ```text
/// Value:     0x1234
/// Bytes:     [0x34, 0x12]
/// 
/// Byte 0:    0011 0100  (bits 0-7)
/// Byte 1:    0001 0010  (bits 8-15)
/// ```
/// 
/// # Construction
/// 
/// Building from a sequence shorter than the width pads the most-significant
/// end with `false`, and a longer sequence is truncated to its first `BITS`
/// entries. The width is therefore always exactly `BITS`.
/// 
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct BitVector<BITS>(GenericArray<bool, BITS>)
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
;

//󰭅		BitVector																
impl<BITS> BitVector<BITS>
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
	/// Creates a new [`BitVector`] from an array of exactly the right width.
	/// 
	/// # Parameters
	/// 
	/// * `bits` - The bits, least-significant first.
	/// 
	#[must_use]
	pub const fn new(bits: GenericArray<bool, BITS>) -> Self {
		Self(bits)
	}
	
	//		from_le_bytes														
	/// Creates a [`BitVector`] from little-endian bytes.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The bytes, where byte 0 holds bits 0 to 7.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::LengthMismatch`] if the number of bytes is not
	/// [`Self::BYTES`].
	/// 
	pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, BitError> {
		if bytes.len() != Self::BYTES {
			return Err(BitError::LengthMismatch { expected: Self::BYTES, actual: bytes.len() });
		}
		Ok(Self::from_le_slice(bytes))
	}
	
	//		from_le_slice														
	/// Creates a [`BitVector`] from little-endian bytes, padding or truncating
	/// to the width.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The bytes, where byte 0 holds bits 0 to 7.
	/// 
	#[must_use]
	pub fn from_le_slice(bytes: &[u8]) -> Self {
		Self(GenericArray::generate(|pos| {
			#[expect(clippy::integer_division, reason = "Byte index of the bit")]
			let index = pos / 8;
			bytes.get(index).is_some_and(|byte| (byte >> (pos % 8)) & 1 == 1)
		}))
	}
	
	//		from_slice															
	/// Creates a [`BitVector`] from booleans, padding or truncating to the
	/// width.
	/// 
	/// # Parameters
	/// 
	/// * `bits` - The bits, least-significant first.
	/// 
	#[must_use]
	pub fn from_slice(bits: &[bool]) -> Self {
		Self(GenericArray::generate(|pos| bits.get(pos).copied().unwrap_or(false)))
	}
	
	//		ones																
	/// A [`BitVector`] with every bit set.
	#[must_use]
	pub fn ones() -> Self {
		Self(GenericArray::generate(|_| true))
	}
	
	//		zero																
	/// A [`BitVector`] with every bit clear.
	#[must_use]
	pub fn zero() -> Self {
		Self::default()
	}
	
	//		Public methods														
	
	//		as_array															
	/// Represents the internal value as a [`GenericArray`] of booleans.
	#[must_use]
	pub const fn as_array(&self) -> &GenericArray<bool, BITS> {
		&self.0
	}
	
	//		as_slice															
	/// Represents the internal value as a slice of booleans, least-significant
	/// first. The length is always [`Self::BITS`].
	#[must_use]
	pub fn as_slice(&self) -> &[bool] {
		self.0.as_slice()
	}
	
	//		bit																	
	/// Gets the value of a specific bit.
	/// 
	/// Returns `false` if the position is out of range, matching the padding
	/// applied during construction.
	/// 
	/// # Parameters
	/// 
	/// * `pos` - The position of the bit, where `0` is the least-significant
	///           bit.
	/// 
	#[must_use]
	pub fn bit(&self, pos: usize) -> bool {
		self.0.get(pos).copied().unwrap_or(false)
	}
	
	//		bits																
	/// Iterates over the bits, least-significant first.
	pub fn bits(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
		self.0.iter().copied()
	}
	
	//		count_ones															
	/// Counts the number of set bits.
	#[must_use]
	pub fn count_ones(&self) -> usize {
		self.0.iter().filter(|&&bit| bit).count()
	}
	
	//		count_zeros															
	/// Counts the number of clear bits.
	#[must_use]
	pub fn count_zeros(&self) -> usize {
		Self::BITS.saturating_sub(self.count_ones())
	}
	
	//		from_json															
	/// Deserialises a JSON string into a [`BitVector`].
	/// 
	/// # Errors
	/// 
	/// If the JSON string is invalid, or does not describe a value of this
	/// width, then an error will be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		incomplete															
	/// Converts to an [`IncompleteBitVector`] in which every bit is known.
	/// 
	/// No information is lost, and [`IncompleteBitVector::complete()`] gives
	/// back the original.
	/// 
	#[must_use]
	pub fn incomplete(self) -> IncompleteBitVector<BITS> {
		IncompleteBitVector::new(GenericArray::generate(|pos| TriBit::from(self.0[pos])))
	}
	
	//		reverse_and															
	/// Solves `x AND known == self` for `x`. See
	/// [`IncompleteBitVector::reverse_and()`].
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::Infeasible`] if no solution exists.
	/// 
	pub fn reverse_and<T>(self, known: T) -> Result<IncompleteBitVector<BITS>, BitError>
	where
		T: Into<IncompleteBitVector<BITS>>,
	{
		self.incomplete().reverse_and(known)
	}
	
	//		reverse_or															
	/// Solves `x OR known == self` for `x`. See
	/// [`IncompleteBitVector::reverse_or()`].
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::Infeasible`] if no solution exists.
	/// 
	pub fn reverse_or<T>(self, known: T) -> Result<IncompleteBitVector<BITS>, BitError>
	where
		T: Into<IncompleteBitVector<BITS>>,
	{
		self.incomplete().reverse_or(known)
	}
	
	//		shift_left															
	/// Moves every bit `count` places towards the most-significant end. The
	/// vacated low positions are cleared.
	#[must_use]
	pub fn shift_left(self, count: usize) -> Self {
		Self(GenericArray::generate(|pos| pos.checked_sub(count).is_some_and(|from| self.0[from])))
	}
	
	//		shift_right															
	/// Moves every bit `count` places towards the least-significant end. The
	/// vacated high positions are cleared.
	#[must_use]
	pub fn shift_right(self, count: usize) -> Self {
		Self(GenericArray::generate(|pos| pos.checked_add(count).is_some_and(|from| self.bit(from))))
	}
	
	//		to_le_bytes															
	/// Packs the bits into little-endian bytes, [`Self::BYTES`] long.
	#[must_use]
	pub fn to_le_bytes(&self) -> Vec<u8> {
		self.0.chunks(8)
			.map(|group| group.iter().rev().fold(0_u8, |byte, &bit| (byte << 1) | u8::from(bit)))
			.collect()
	}
	
	//		to_primitive														
	/// Converts to the primitive type of the same width.
	#[must_use]
	pub fn to_primitive<P>(self) -> P
	where
		P: BitCodec<Width = BITS>,
	{
		P::from_bit_vector(self)
	}
	
	//		Private methods														
	
	//		to_tribits															
	/// The bits as [`TriBit`]s, for rendering.
	fn to_tribits(self) -> Vec<TriBit> {
		self.0.iter().copied().map(TriBit::from).collect()
	}
	
	//		to_u64																
	/// The value as a [`u64`], if the width allows it.
	fn to_u64(self) -> Option<u64> {
		(Self::BITS <= 64).then(|| {
			self.0.iter().rev().fold(0_u64, |value, &bit| (value << 1) | u64::from(bit))
		})
	}
}

//󰭅		Binary																	
impl<BITS> Binary for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		fmt																	
	/// Writes every bit, most-significant first, without grouping. Leading
	/// zeros are kept so the output is always [`BitVector::BITS`] long.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0b")?;
		}
		for &bit in self.0.iter().rev() {
			f.write_str(if bit { "1" } else { "0" })?;
		}
		Ok(())
	}
}

//󰭅		BitAnd																	
impl<BITS> BitAnd for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Output = Self;
	
	//		bitand																
	fn bitand(self, rhs: Self) -> Self::Output {
		Self(GenericArray::generate(|pos| self.0[pos] & rhs.0[pos]))
	}
}

//󰭅		BitOr																	
impl<BITS> BitOr for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Output = Self;
	
	//		bitor																
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(GenericArray::generate(|pos| self.0[pos] | rhs.0[pos]))
	}
}

//󰭅		BitXor																	
impl<BITS> BitXor for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Output = Self;
	
	//		bitxor																
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(GenericArray::generate(|pos| self.0[pos] ^ rhs.0[pos]))
	}
}

//󰭅		Debug																	
impl<BITS> Debug for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "BitVector::<{}>({})", Self::BITS, self)
	}
}

//󰭅		Deserialize																
impl<'de, BITS> Deserialize<'de> for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(BitVectorVisitor::<BITS>(PhantomData))
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(BitVectorVisitor::<BITS>(PhantomData))
		}
	}
}

//󰭅		Display																	
impl<BITS> Display for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		RenderOptions::default().write(f, &self.to_tribits())
	}
}

//󰭅		From: BitVector -> IncompleteBitVector									
impl<BITS> From<BitVector<BITS>> for IncompleteBitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		from																
	fn from(v: BitVector<BITS>) -> Self {
		v.incomplete()
	}
}

//󰭅		FromStr																	
impl<BITS> FromStr for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Err = BitError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		IncompleteBitVector::<BITS>::from_str(s).and_then(Self::try_from)
	}
}

//󰭅		LowerHex																
impl<BITS> LowerHex for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}
		for byte in self.to_le_bytes().iter().rev() {
			write!(f, "{byte:02x}")?;
		}
		Ok(())
	}
}

//󰭅		Not																		
impl<BITS> Not for BitVector<BITS>
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
impl<BITS> Serialize for BitVector<BITS>
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
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as a number if it fits
			match self.to_u64() {
				Some(value) => serializer.serialize_u64(value),
				None        => serializer.collect_str(self),
			}
		} else {
			//	For binary formats, serialise raw bytes
			serializer.serialize_bytes(&self.to_le_bytes())
		}
	}
}

//󰭅		Shl																		
impl<BITS> Shl<usize> for BitVector<BITS>
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
impl<BITS> Shr<usize> for BitVector<BITS>
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

//󰭅		TryFrom: IncompleteBitVector -> BitVector								
impl<BITS> TryFrom<IncompleteBitVector<BITS>> for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Error = BitError;
	
	//		try_from															
	fn try_from(v: IncompleteBitVector<BITS>) -> Result<Self, Self::Error> {
		v.complete().ok_or_else(|| BitError::UnknownBit {
			position: v.unknown_positions().next().unwrap_or_default(),
		})
	}
}

//󰭅		UpperHex																
impl<BITS> UpperHex for BitVector<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}
		for byte in self.to_le_bytes().iter().rev() {
			write!(f, "{byte:02X}")?;
		}
		Ok(())
	}
}

//		BitVectorVisitor														
/// A visitor for parsing bit vectors from numbers, strings, or bytes.
struct BitVectorVisitor<BITS>(PhantomData<BITS>);

//󰭅		Visitor																	
impl<BITS> Visitor<'_> for BitVectorVisitor<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Value = BitVector<BITS>;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a {}-bit vector", BITS::USIZE)
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		if BITS::USIZE < 64 && v >> BITS::USIZE != 0 {
			return Err(E::custom(format!("value {v} does not fit in {} bits", BITS::USIZE)));
		}
		Ok(BitVector::from_le_slice(&v.to_le_bytes()))
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
	
	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		BitVector::from_le_bytes(v).map_err(|_err| E::invalid_length(v.len(), &self))
	}
}
