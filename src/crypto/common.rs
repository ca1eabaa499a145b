use std::str::FromStr;

use crate::util::{decode_hex, Error};

/// Ciphertext under attack. Never modified once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherBuffer(Vec<u8>);

impl CipherBuffer {
    pub fn from_hex(input: &str) -> Result<CipherBuffer, Error> {
        decode_hex(input.trim()).map(CipherBuffer)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for CipherBuffer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherBuffer::from_hex(s)
    }
}

impl From<Vec<u8>> for CipherBuffer {
    fn from(buf: Vec<u8>) -> Self {
        CipherBuffer(buf)
    }
}

impl From<&[u8]> for CipherBuffer {
    fn from(buf: &[u8]) -> Self {
        CipherBuffer(buf.to_vec())
    }
}

impl AsRef<[u8]> for CipherBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[test]
fn test_cipher_buffer_from_hex() {
    let cipher: CipherBuffer = "1b3737\n".parse().expect("Hex decoding failed");
    assert_eq!(&hex!("1b3737"), cipher.as_bytes());
    assert_eq!(3, cipher.len());
    assert!(!cipher.is_empty());
    assert!(CipherBuffer::from_hex("").expect("empty is valid hex").is_empty());
    assert!(matches!(CipherBuffer::from_hex("1b373"), Err(Error::InputFormat { .. })));
    assert!(matches!(CipherBuffer::from_hex("xx"), Err(Error::InputFormat { .. })));
}
