//! Text rendering and parsing of bit vectors.



//		Modules

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;



//		Packages

use crate::{
	errors::BitError,
	tribit::TriBit,
};
use core::fmt::{self, Write};
use serde::{Deserialize, Serialize};



//		Constants

/// Characters always accepted as unknown bits when parsing, in addition to the
/// configured marker.
pub const UNKNOWN_MARKERS: [char; 4] = ['*', '?', 'x', 'X'];



//		Structs

//		RenderOptions															
/// Configuration for how bit vectors are rendered to and parsed from text.
/// 
/// Bits are written in groups of eight, one group per byte, starting with the
/// byte holding bits 0 to 7. Within each group the most-significant bit comes
/// first, so each group reads like a conventional binary byte.
/// 
/// This is a plain value passed by the caller. Nothing here is global.
/// 
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default)]
pub struct RenderOptions {
	/// The text written in place of an unknown bit.
	pub missing:   String,
	
	/// The text written between byte groups.
	pub separator: String,
}

//󰭅		RenderOptions															
impl RenderOptions {
	//		Constructors														
	
	//		new																	
	/// Creates a new [`RenderOptions`] with the given missing-bit marker and
	/// the default separator.
	/// 
	/// # Parameters
	/// 
	/// * `missing` - The text to write for each unknown bit.
	/// 
	#[must_use]
	pub fn new(missing: &str) -> Self {
		Self {
			missing: missing.to_owned(),
			..Self::default()
		}
	}
	
	//		Public methods														
	
	//		parse																
	/// Parses rendered text back into bits, least-significant first.
	/// 
	/// Whitespace, underscores, and the configured separator are ignored. Any
	/// of [`UNKNOWN_MARKERS`] or the configured missing marker produce an
	/// unknown bit. The number of bits found must equal `width` exactly.
	/// 
	/// # Parameters
	/// 
	/// * `s`     - The text to parse.
	/// * `width` - The number of bits expected.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitError::EmptyValue`] if no bits are present,
	/// [`BitError::InvalidDigit`] for an unrecognised character, and
	/// [`BitError::LengthMismatch`] if the number of bits differs from `width`.
	/// 
	pub fn parse(&self, s: &str, width: usize) -> Result<Vec<TriBit>, BitError> {
		let mut symbols = Vec::with_capacity(width);
		let mut rest    = s.trim();
		
		while let Some(c) = rest.chars().next() {
			if !self.separator.is_empty() && rest.starts_with(self.separator.as_str()) {
				rest = rest.get(self.separator.len()..).unwrap_or_default();
				continue;
			}
			if !self.missing.is_empty() && rest.starts_with(self.missing.as_str()) {
				symbols.push(TriBit::Unknown);
				rest = rest.get(self.missing.len()..).unwrap_or_default();
				continue;
			}
			match c {
				'0'                                => symbols.push(TriBit::False),
				'1'                                => symbols.push(TriBit::True),
				_ if UNKNOWN_MARKERS.contains(&c)  => symbols.push(TriBit::Unknown),
				_ if c == '_' || c.is_whitespace() => {},
				_                                  => return Err(BitError::InvalidDigit(c)),
			}
			rest = rest.get(c.len_utf8()..).unwrap_or_default();
		}
		
		if symbols.is_empty() {
			return Err(BitError::EmptyValue);
		}
		if symbols.len() != width {
			return Err(BitError::LengthMismatch { expected: width, actual: symbols.len() });
		}
		
		//	Each group was written most-significant first
		Ok(symbols.chunks(8).flat_map(|group| group.iter().rev().copied()).collect())
	}
	
	//		render																
	/// Renders bits, given least-significant first, into a [`String`].
	/// 
	/// # Parameters
	/// 
	/// * `bits` - The bits to render.
	/// 
	#[must_use]
	pub fn render(&self, bits: &[TriBit]) -> String {
		self.pieces(bits).collect()
	}
	
	//		write																
	/// Writes bits, given least-significant first, to a formatter or other
	/// [`Write`] target.
	/// 
	/// # Parameters
	/// 
	/// * `out`  - Where to write the rendered text.
	/// * `bits` - The bits to render.
	/// 
	/// # Errors
	/// 
	/// Propagates any error from the underlying writer.
	/// 
	pub fn write<W: Write>(&self, out: &mut W, bits: &[TriBit]) -> fmt::Result {
		self.pieces(bits).try_for_each(|piece| out.write_str(piece))
	}
	
	//		Private methods														
	
	//		pieces																
	/// The rendered text as a run of string slices, one per bit plus one per
	/// separator.
	fn pieces<'a>(&'a self, bits: &'a [TriBit]) -> impl Iterator<Item = &'a str> + 'a {
		bits.chunks(8).enumerate().flat_map(move |(index, group)| {
			let separator = (index > 0).then_some(self.separator.as_str());
			separator.into_iter().chain(group.iter().rev().map(move |bit| match *bit {
				TriBit::False   => "0",
				TriBit::True    => "1",
				TriBit::Unknown => self.missing.as_str(),
			}))
		})
	}
}

//󰭅		Default																	
impl Default for RenderOptions {
	//		default																
	fn default() -> Self {
		Self {
			missing:   "*".to_owned(),
			separator: " ".to_owned(),
		}
	}
}
