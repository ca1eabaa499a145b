//! Fixtures and drivers for the three XOR challenges exposed by the binary.

use tracing::debug;

use crate::crypto::common::CipherBuffer;
use crate::crypto::xor::{self, attack::{self, Recovered}};
use crate::stats::ENGLISH;
use crate::util::{decode_hex, decode_text, Error};

pub const FIXED_XOR_LEFT: &str = "1c0111001f010100061a024b53535009181c";
pub const FIXED_XOR_RIGHT: &str = "686974207468652062756c6c277320657965";
pub const SINGLE_BYTE_XOR_CIPHER: &str = "1b37373331363f78151b7f2b783431333d78397828372d363c78373e783a393b3736";

const KEY1: [u8; 26] = hex!("a6c8b6733c9b22de7bc0253266a3867df55acde8635e19c73313");
const KEY2_KEY1: [u8; 26] = hex!("37dcb292030faa90d07eec17e3b1c6d8daf94c35d4c9191a5e1e");
const KEY2_KEY3: [u8; 26] = hex!("c1545756687e7573db23aa1c3452a098b71a7fbf0fddddde5fc1");
const FLAG_KEY1_KEY3_KEY2: [u8; 26] = hex!("04ee9855208a2cd59091d04767ae47963170d1660df7f56f5faf");

/// Peels KEY1, KEY2 and KEY3 off the flag one XOR at a time.
pub fn xor_properties() -> Result<String, Error> {
    let key2 = xor::fixed_xor(&KEY2_KEY1, &KEY1)?;
    let key3 = xor::fixed_xor(&key2, &KEY2_KEY3)?;
    debug!(key2 = %hex::encode(&key2), key3 = %hex::encode(&key3), "recovered intermediate keys");
    let flag = xor::xor_all(&[&FLAG_KEY1_KEY3_KEY2[..], &key2[..], &key3[..], &KEY1[..]])?;
    decode_text(&flag)
}

#[test]
fn test_xor_properties() {
    assert_eq!(Ok(String::from("crypto{x0r_i5_ass0c1at1v3}")), xor_properties());
}

pub fn fixed_xor(left: &str, right: &str) -> Result<String, Error> {
    let xored = xor::fixed_xor(&decode_hex(left)?, &decode_hex(right)?)?;
    decode_text(&xored)
}

#[test]
fn test_fixed_xor() {
    assert_eq!(Ok(String::from("the kid don't play")), fixed_xor(FIXED_XOR_LEFT, FIXED_XOR_RIGHT));
    assert!(matches!(fixed_xor("1c01", "686"), Err(Error::InputFormat { .. })));
    assert_eq!(
        Err(Error::LengthMismatch { left: 2, right: 3 }),
        fixed_xor("1c01", "686974"));
}

pub fn single_byte_xor(input: &str) -> Result<Recovered, Error> {
    let cipher = CipherBuffer::from_hex(input)?;
    attack::break_single_byte_xor(&cipher, &ENGLISH)
}

#[test]
fn test_single_byte_xor() {
    let expected = Recovered {
        key: 0x58,
        plaintext: String::from("Cooking MC's like a pound of bacon"),
    };
    assert_eq!(Ok(expected), single_byte_xor(SINGLE_BYTE_XOR_CIPHER));
    assert_eq!(Ok(Recovered { key: 0, plaintext: String::new() }), single_byte_xor(""));
    assert!(matches!(single_byte_xor("1b3"), Err(Error::InputFormat { .. })));
    assert!(matches!(single_byte_xor("0080"), Err(Error::Decode { .. })));
}
