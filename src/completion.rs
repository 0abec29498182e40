//! Counting, indexing, and enumerating the completions of incomplete vectors.
//! 
//! A completion assigns a definite value to every unknown bit. Completions are
//! numbered by a completion index `k`: bit `j` of `k` (least-significant first)
//! gives the value of the `j`-th unknown position, taking positions in
//! ascending order. Known positions are fixed and ignore `k`.



//		Modules

#[cfg(test)]
#[path = "tests/completion.rs"]
mod tests;



//		Packages

use crate::{
	bit_vector::BitVector,
	errors::BitError,
	incomplete::IncompleteBitVector,
	tribit::TriBit,
};
use core::iter::FusedIterator;
use generic_array::{ArrayLength, GenericArray, sequence::GenericSequence};
use tracing::trace;



//		Public functions

//		permutations_count														
/// Counts the arrangements of `slots` positions each taking one of `base`
/// values, i.e. `base ^ slots`.
/// 
/// The count is informational, so rather than overflowing it saturates at
/// [`u128::MAX`].
/// 
/// # Parameters
/// 
/// * `base`  - The number of values each position may take.
/// * `slots` - The number of positions.
/// 
#[must_use]
pub fn permutations_count(base: u128, slots: usize) -> u128 {
	match (base, slots) {
		(_, 0) => 1,
		(0, _) => 0,
		(1, _) => 1,
		_      => u32::try_from(slots).ok()
			.and_then(|exponent| base.checked_pow(exponent))
			.unwrap_or_else(|| {
				trace!(base, slots, "Permutation count saturated");
				u128::MAX
			}),
	}
}



//		Structs

//		Completions																
/// A lazy iterator over the completions of an [`IncompleteBitVector`], in
/// ascending order of completion index.
/// 
/// Each item is built directly from its index, so the iterator holds no state
/// beyond the range still to be visited. Cloning it, or calling
/// [`IncompleteBitVector::completions()`] again, restarts the sequence.
/// 
/// Iterating over a vector with many unknown bits is astronomically long. The
/// iterator does not guard against this; callers must bound it themselves,
/// e.g. with [`take()`](Iterator::take()).
/// 
#[derive(Clone, Debug)]
pub struct Completions<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	/// The vector whose completions are produced.
	vector: IncompleteBitVector<BITS>,
	
	/// The next index to produce from the front.
	front:  u128,
	
	/// The next index to produce from the back, inclusive.
	back:   u128,
	
	/// Whether the range has been exhausted.
	done:   bool,
}

//󰭅		Completions																
impl<BITS> Completions<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		remaining															
	/// The number of completions still to be produced, if it fits in a
	/// [`u128`].
	fn remaining(&self) -> Option<u128> {
		if self.done {
			Some(0)
		} else {
			self.back.checked_sub(self.front).and_then(|span| span.checked_add(1))
		}
	}
}

//󰭅		DoubleEndedIterator														
impl<BITS> DoubleEndedIterator for Completions<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	//		next_back															
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}
		let item = self.vector.completion_unchecked(self.back);
		if self.back == self.front {
			self.done = true;
		} else {
			self.back = self.back.saturating_sub(1);
		}
		Some(item)
	}
}

//󰭅		FusedIterator															
impl<BITS> FusedIterator for Completions<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{}

//󰭅		Iterator																
impl<BITS> Iterator for Completions<BITS>
where
	BITS:                       ArrayLength,
	GenericArray<bool,   BITS>: Copy,
	GenericArray<TriBit, BITS>: Copy,
{
	type Item = BitVector<BITS>;
	
	//		next																
	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}
		let item = self.vector.completion_unchecked(self.front);
		if self.front == self.back {
			self.done = true;
		} else {
			self.front = self.front.saturating_add(1);
		}
		Some(item)
	}
	
	//		nth																	
	/// Skips straight to the requested completion without building the ones in
	/// between.
	fn nth(&mut self, n: usize) -> Option<Self::Item> {
		if self.done {
			return None;
		}
		let skip = u128::try_from(n).unwrap_or(u128::MAX);
		if skip > self.back.saturating_sub(self.front) {
			self.done = true;
			return None;
		}
		self.front = self.front.saturating_add(skip);
		self.next()
	}
	
	//		size_hint															
	fn size_hint(&self) -> (usize, Option<usize>) {
		let exact = self.remaining().and_then(|count| usize::try_from(count).ok());
		(exact.unwrap_or(usize::MAX), exact)
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
	
	//		completion															
	/// Builds the completion with the given index, without enumerating the
	/// ones before it.
	/// 
	/// # Parameters
	/// 
	/// * `index` - The completion index, below
	///             [`permutations()`](IncompleteBitVector::permutations()).
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::CompletionOutOfRange`] if the index is too large.
	/// 
	pub fn completion(&self, index: u128) -> Result<BitVector<BITS>, BitError> {
		let in_range = u32::try_from(self.unknown_count()).ok()
			.and_then(|unknown| index.checked_shr(unknown))
			.map_or(true, |rest| rest == 0);
		if !in_range {
			return Err(BitError::CompletionOutOfRange { index, permutations: self.permutations() });
		}
		Ok(self.completion_unchecked(index))
	}
	
	//		completions															
	/// Iterates lazily over every completion, in ascending index order.
	/// 
	/// The iterator yields exactly
	/// [`permutations()`](IncompleteBitVector::permutations()) items, and a
	/// complete vector yields just itself.
	/// 
	#[must_use]
	pub fn completions(&self) -> Completions<BITS> {
		//	Every index is valid once there are 128 or more unknown bits
		let back = if self.unknown_count() >= 128 { u128::MAX } else { self.permutations().saturating_sub(1) };
		Completions {
			vector: *self,
			front:  0,
			back,
			done:   false,
		}
	}
	
	//		permutations														
	/// The number of completions, i.e. `2 ^ unknown_count()`, saturating at
	/// [`u128::MAX`].
	#[must_use]
	pub fn permutations(&self) -> u128 {
		permutations_count(2, self.unknown_count())
	}
	
	//		Private methods														
	
	//		completion_unchecked												
	/// Builds a completion, taking successive bits of `index` for successive
	/// unknown positions. Bits of `index` beyond the unknown count are ignored.
	fn completion_unchecked(&self, index: u128) -> BitVector<BITS> {
		let mut cursor = 0_u32;
		BitVector::new(GenericArray::generate(|pos| match self.bit(pos) {
			TriBit::False   => false,
			TriBit::True    => true,
			TriBit::Unknown => {
				let bit = index.checked_shr(cursor).is_some_and(|rest| rest & 1 == 1);
				cursor  = cursor.saturating_add(1);
				bit
			},
		}))
	}
}
