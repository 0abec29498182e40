//		Packages

use super::*;
use crate::{BitVector8, BitVector16, BitVector32, BitVector128, ReverseOperation};
use claims::{assert_err, assert_err_eq, assert_ok_eq};
use rubedo::sugar::s;
use std::collections::HashSet;
use typenum::U12;



//		Tests

mod constructors {
	use super::*;
	
	//		from_le_bytes														
	#[test]
	fn from_le_bytes__valid() {
		assert_ok_eq!(BitVector16::from_le_bytes(&[0x34, 0x12]), BitVector16::from(0x1234_u16));
	}
	#[test]
	fn from_le_bytes__wrong_length() {
		let err = BitVector16::from_le_bytes(&[0x34]);
		assert_err_eq!(&err, &BitError::LengthMismatch { expected: 2, actual: 1 });
		assert_err_eq!(BitVector16::from_le_bytes(&[1, 2, 3]), BitError::LengthMismatch { expected: 2, actual: 3 });
	}
	
	//		from_le_slice														
	#[test]
	fn from_le_slice__pads_and_truncates() {
		assert_eq!(BitVector16::from_le_slice(&[0xFF]),             BitVector16::from(0x00FF_u16));
		assert_eq!(BitVector8::from_le_slice(&[0x0F, 0xFF, 0xFF]), BitVector8::from(0x0F_u8));
	}
	
	//		from_slice															
	#[test]
	fn from_slice__exact() {
		let bits = BitVector8::from_slice(&[true, true, false, false, false, false, false, false]);
		assert_eq!(bits, BitVector8::from(3_u8));
	}
	#[test]
	fn from_slice__pads_most_significant_end() {
		let bits = BitVector8::from_slice(&[true, false, true]);
		assert_eq!(bits, BitVector8::from(5_u8));
		assert_eq!(bits.as_slice().len(), 8);
	}
	#[test]
	fn from_slice__truncates() {
		let mut input = vec![true; 8];
		input.extend([true; 4]);
		assert_eq!(BitVector8::from_slice(&input), BitVector8::ones());
	}
	
	//		ones																
	#[test]
	fn ones() {
		assert_eq!(BitVector32::ones(), BitVector32::from(u32::MAX));
	}
	
	//		zero																
	#[test]
	fn zero() {
		assert_eq!(BitVector32::zero(), BitVector32::from(0_u32));
	}
}

mod public_methods {
	use super::*;
	
	//		as_slice															
	#[test]
	fn as_slice() {
		let bits = BitVector8::from(0b1000_0001_u8);
		assert_eq!(bits.as_slice(), &[true, false, false, false, false, false, false, true]);
		assert_eq!(bits.as_array().len(), 8);
	}
	
	//		bit																	
	#[test]
	fn bit__in_range() {
		let bits = BitVector16::from(0x8001_u16);
		assert!( bits.bit(0));
		assert!(!bits.bit(1));
		assert!( bits.bit(15));
	}
	#[test]
	fn bit__out_of_range() {
		assert!(!BitVector8::ones().bit(8));
		assert!(!BitVector8::ones().bit(usize::MAX));
	}
	
	//		bits																
	#[test]
	fn bits() {
		let bits: Vec<bool> = BitVector8::from(6_u8).bits().collect();
		assert_eq!(bits, vec![false, true, true, false, false, false, false, false]);
	}
	
	//		count_ones															
	#[test]
	fn count_ones() {
		assert_eq!(BitVector32::from(0b1010_1010_u32).count_ones(),  4);
		assert_eq!(BitVector32::from(0b1010_1010_u32).count_zeros(), 28);
		assert_eq!(BitVector128::ones().count_ones(),                 128);
	}
	
	//		from_json															
	#[test]
	fn from_json() {
		assert_ok_eq!(BitVector8::from_json("42"),             BitVector8::from(42_u8));
		assert_ok_eq!(BitVector8::from_json(r#""00101010""#),  BitVector8::from(42_u8));
		assert_err!(BitVector8::from_json("256"));
	}
	
	//		incomplete															
	#[test]
	fn incomplete__round_trips() {
		let bits = BitVector32::from(0xDEAD_BEEF_u32);
		let incomplete = bits.incomplete();
		assert!(incomplete.is_complete());
		assert_eq!(incomplete.complete(), Some(bits));
	}
	
	//		reverse_and															
	#[test]
	fn reverse_and__from_complete_result() {
		let known  = BitVector8::from(0b0000_0101_u8);
		let solved = BitVector8::from(0b0000_0001_u8).reverse_and(known).unwrap();
		assert!(solved.contains(BitVector8::from(0b0000_0011_u8)));
	}
	
	//		reverse_or															
	#[test]
	fn reverse_or__infeasible() {
		let err = BitVector8::from(0_u8).reverse_or(BitVector8::from(1_u8));
		assert_err_eq!(err, BitError::Infeasible { operation: ReverseOperation::Or, position: 0 });
	}
	
	//		shift_left															
	#[test]
	fn shift_left() {
		let bits = BitVector8::from(0b0000_0011_u8);
		assert_eq!(bits.shift_left(2), BitVector8::from(0b0000_1100_u8));
		assert_eq!(bits.shift_left(7), BitVector8::from(0b1000_0000_u8));
		assert_eq!(bits.shift_left(8), BitVector8::zero());
		assert_eq!(bits.shift_left(0), bits);
	}
	
	//		shift_right															
	#[test]
	fn shift_right() {
		let bits = BitVector8::from(0b1100_0000_u8);
		assert_eq!(bits.shift_right(2),          BitVector8::from(0b0011_0000_u8));
		assert_eq!(bits.shift_right(7),          BitVector8::from(0b0000_0001_u8));
		assert_eq!(bits.shift_right(usize::MAX), BitVector8::zero());
	}
	
	//		to_le_bytes															
	#[test]
	fn to_le_bytes() {
		assert_eq!(BitVector32::from(0x1234_5678_u32).to_le_bytes(), vec![0x78, 0x56, 0x34, 0x12]);
	}
	#[test]
	fn to_le_bytes__partial_byte() {
		let bits = BitVector::<U12>::from_slice(&[true; 12]);
		assert_eq!(bits.to_le_bytes(), vec![0xFF, 0x0F]);
		assert_eq!(BitVector::<U12>::BYTES, 2);
	}
	
	//		to_primitive														
	#[test]
	fn to_primitive() {
		let bits = BitVector32::from(-1_i32);
		assert_eq!(bits.to_primitive::<u32>(), u32::MAX);
		assert_eq!(bits.to_primitive::<i32>(), -1);
	}
}

mod derived_traits {
	use super::*;
	
	//		Default																
	#[test]
	fn default() {
		assert_eq!(BitVector16::default(), BitVector16::zero());
	}
	
	//		Eq																	
	#[test]
	fn eq() {
		assert_eq!(BitVector8::from(7_u8), BitVector8::from(7_u8));
		assert_ne!(BitVector8::from(7_u8), BitVector8::from(6_u8));
	}
	
	//		Hash																
	#[test]
	fn hash() {
		let mut set = HashSet::new();
		_ = set.insert(BitVector8::from(42_u8));
		assert!( set.contains(&BitVector8::from(42_u8)));
		assert!(!set.contains(&BitVector8::from(43_u8)));
	}
}

mod traits {
	use super::*;
	
	//		Binary																
	#[test]
	fn binary() {
		assert_eq!(format!("{:b}",  BitVector8::from(5_u8)),      "00000101");
		assert_eq!(format!("{:#b}", BitVector16::from(0x0102_u16)), "0b0000000100000010");
	}
	
	//		BitAnd																
	#[test]
	fn bitand() {
		assert_eq!(BitVector8::from(0b1100_u8) & BitVector8::from(0b1010_u8), BitVector8::from(0b1000_u8));
	}
	
	//		BitOr																
	#[test]
	fn bitor() {
		assert_eq!(BitVector8::from(0b1100_u8) | BitVector8::from(0b1010_u8), BitVector8::from(0b1110_u8));
	}
	
	//		BitXor																
	#[test]
	fn bitxor() {
		assert_eq!(BitVector8::from(0b1100_u8) ^ BitVector8::from(0b1010_u8), BitVector8::from(0b0110_u8));
	}
	
	//		Debug																
	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", BitVector8::from(3_u8)), "BitVector::<8>(00000011)");
	}
	
	//		Deserialize															
	#[test]
	fn deserialize__number() {
		assert_ok_eq!(serde_json::from_str::<BitVector16>("4660"), BitVector16::from(0x1234_u16));
	}
	#[test]
	fn deserialize__string() {
		assert_ok_eq!(serde_json::from_str::<BitVector16>(r#""00110100 00010010""#), BitVector16::from(0x1234_u16));
	}
	#[test]
	fn deserialize__too_large() {
		assert_err!(serde_json::from_str::<BitVector8>("300"));
	}
	
	//		Display																
	#[test]
	fn display() {
		assert_eq!(BitVector8::from(3_u8).to_string(),         s!("00000011"));
		assert_eq!(BitVector16::from(0x1234_u16).to_string(), s!("00110100 00010010"));
	}
	
	//		FromStr																
	#[test]
	fn from_str__valid() {
		assert_ok_eq!("00000011".parse::<BitVector8>(), BitVector8::from(3_u8));
	}
	#[test]
	fn from_str__unknown_bit() {
		let err = "0000*011".parse::<BitVector8>();
		assert_err_eq!(&err, &BitError::UnknownBit { position: 3 });
		assert_eq!(err.unwrap_err().to_string(), s!("Bit 3 is unknown"));
	}
	
	//		LowerHex															
	#[test]
	fn lower_hex() {
		assert_eq!(format!("{:x}",  BitVector16::from(0xBEEF_u16)), "beef");
		assert_eq!(format!("{:#x}", BitVector16::from(0x00EF_u16)), "0x00ef");
	}
	
	//		Not																	
	#[test]
	fn not() {
		assert_eq!(!BitVector8::from(0b1111_0000_u8), BitVector8::from(0b0000_1111_u8));
	}
	
	//		Serialize															
	#[test]
	fn serialize__fits_u64() {
		assert_ok_eq!(serde_json::to_string(&BitVector16::from(0x1234_u16)), s!("4660"));
	}
	#[test]
	fn serialize__wider_than_u64() {
		let json = serde_json::to_string(&BitVector128::from(1_u128)).unwrap();
		assert!(json.starts_with("\"00000001 00000000"));
		assert_ok_eq!(serde_json::from_str::<BitVector128>(&json), BitVector128::from(1_u128));
	}
	
	//		Shl																	
	#[test]
	fn shl() {
		assert_eq!(BitVector8::from(1_u8) << 3, BitVector8::from(8_u8));
	}
	
	//		Shr																	
	#[test]
	fn shr() {
		assert_eq!(BitVector8::from(8_u8) >> 3, BitVector8::from(1_u8));
	}
	
	//		UpperHex															
	#[test]
	fn upper_hex() {
		assert_eq!(format!("{:X}", BitVector32::from(0xDEAD_BEEF_u32)), "DEADBEEF");
	}
}

mod conversions {
	use super::*;
	
	//		TryFrom: IncompleteBitVector -> BitVector							
	#[test]
	fn try_from__incomplete_complete() {
		let incomplete = BitVector8::from(9_u8).incomplete();
		assert_ok_eq!(BitVector8::try_from(incomplete), BitVector8::from(9_u8));
	}
	#[test]
	fn try_from__incomplete_with_unknowns() {
		let mut bits = [TriBit::False; 8];
		bits[5] = TriBit::Unknown;
		bits[6] = TriBit::Unknown;
		let incomplete = IncompleteBitVector::from_slice(&bits);
		assert_err_eq!(BitVector8::try_from(incomplete), BitError::UnknownBit { position: 5 });
	}
}
