//		Packages

use super::*;
use crate::{
	BitVector8,
	BitVector16,
	BitVector32,
	BitVector64,
	BitVector128,
	IncompleteBitVector8,
	IncompleteBitVector32,
};
use claims::{assert_err_eq, assert_ok_eq};



//		Tests

mod bit_codec {
	use super::*;
	
	//		from_bit_vector														
	#[test]
	fn from_bit_vector() {
		assert_eq!(u16::from_bit_vector(BitVector16::from_le_slice(&[0x34, 0x12])), 0x1234);
		assert_eq!(i8::from_bit_vector(BitVector8::ones()),                          -1);
	}
	
	//		to_bit_vector														
	#[test]
	fn to_bit_vector__byte_zero_holds_low_bits() {
		let bits = 0x1234_u16.to_bit_vector();
		assert_eq!(bits.to_le_bytes(), vec![0x34, 0x12]);
		//	0x34 is 0011 0100
		assert!(!bits.bit(0));
		assert!( bits.bit(2));
		assert!( bits.bit(4));
		assert!( bits.bit(5));
		//	0x12 is 0001 0010
		assert!( bits.bit(9));
		assert!( bits.bit(12));
		assert!(!bits.bit(15));
	}
	
	//		to_incomplete														
	#[test]
	fn to_incomplete() {
		let bits = 0xCAFE_u16.to_incomplete();
		assert!(bits.is_complete());
		assert_eq!(bits.to_string(), "11111110 11001010");
	}
}

mod conversions {
	use super::*;
	
	//		From: u8 -> BitVector												
	#[test]
	fn from__u8() {
		let bits = BitVector8::from(0xA5_u8);
		assert_eq!(bits.to_string(), "10100101");
		assert_eq!(u8::from(bits),   0xA5);
	}
	
	//		From: i8 -> BitVector												
	#[test]
	fn from__i8() {
		assert_eq!(BitVector8::from(-1_i8),          BitVector8::ones());
		assert_eq!(BitVector8::from(i8::MIN),        BitVector8::from(0x80_u8));
		assert_eq!(i8::from(BitVector8::from(0x80_u8)), i8::MIN);
	}
	
	//		From: i32 -> BitVector												
	#[test]
	fn from__i32() {
		let bits = BitVector32::from(-2_i32);
		assert!(!bits.bit(0));
		assert_eq!(bits.count_ones(), 31);
		assert_eq!(i32::from(bits),   -2);
		assert_eq!(u32::from(bits),   0xFFFF_FFFE);
	}
	
	//		From: f32 -> BitVector												
	#[test]
	fn from__f32() {
		let bits = BitVector32::from(1.0_f32);
		assert_eq!(bits, BitVector32::from(0x3F80_0000_u32));
		assert_eq!(f32::from(bits).to_bits(), 1.0_f32.to_bits());
	}
	
	//		From: f64 -> BitVector												
	#[test]
	fn from__f64_keeps_nan_payload() {
		let nan  = f64::from_bits(0x7FF8_0000_0000_1234);
		let bits = BitVector64::from(nan);
		assert_eq!(bits.to_primitive::<u64>(), 0x7FF8_0000_0000_1234);
		assert_eq!(f64::from(bits).to_bits(),  nan.to_bits());
	}
	
	//		From: u128 -> BitVector												
	#[test]
	fn from__u128() {
		let value = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210_u128;
		let bits  = BitVector128::from(value);
		assert_eq!(bits.to_le_bytes(), value.to_le_bytes().to_vec());
		assert_eq!(u128::from(bits),   value);
		assert_eq!(i128::from(bits),   i128::from_le_bytes(value.to_le_bytes()));
	}
	
	//		From: primitive -> IncompleteBitVector								
	#[test]
	fn from__primitive_to_incomplete() {
		assert_eq!(IncompleteBitVector8::from(0x0F_u8).to_string(), "00001111");
		assert_eq!(IncompleteBitVector32::from(-1_i32), BitVector32::ones().incomplete());
	}
	
	//		TryFrom: IncompleteBitVector -> primitive							
	#[test]
	fn try_from__complete() {
		assert_ok_eq!(u32::try_from(IncompleteBitVector32::from(0xDEAD_BEEF_u32)), 0xDEAD_BEEF);
		assert_ok_eq!(i8::try_from(IncompleteBitVector8::from(-5_i8)),             -5);
	}
	#[test]
	fn try_from__unknown_bit() {
		let bits = "0000*101".parse::<IncompleteBitVector8>().unwrap();
		assert_err_eq!(u8::try_from(bits), BitError::UnknownBit { position: 3 });
	}
}
