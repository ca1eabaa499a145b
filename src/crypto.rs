pub mod common;
pub mod xor;

#[cfg(test)]
mod generic_tests {
    use crate::crypto::*;
    use crate::stats::ENGLISH;

    #[test]
    fn test_break_hex_encoded_single_byte_xor() {
        let cipher = common::CipherBuffer::from_hex("1b37373331363f78151b7f2b783431333d78397828372d363c78373e783a393b3736")
            .expect("Hex decoding failed");
        let recovered = xor::attack::break_single_byte_xor(&cipher, &ENGLISH)
            .expect("Winning candidate should be text");
        assert_eq!(88, recovered.key);
        assert_eq!("Cooking MC's like a pound of bacon", recovered.plaintext);
        assert_eq!(cipher.as_bytes(), xor::byte_xor(recovered.plaintext.as_bytes(), recovered.key));
    }
}
