use itertools::Itertools;
use snafu::ensure;

use crate::util::{Error, LengthMismatchSnafu};

pub mod attack;

pub fn fixed_xor(buf1: &[u8], buf2: &[u8]) -> Result<Vec<u8>, Error> {
    ensure!(buf1.len() == buf2.len(), LengthMismatchSnafu { left: buf1.len(), right: buf2.len() });
    Ok(buf1.iter()
        .zip_eq(buf2.iter())
        .map(|(x,y)| x ^ y)
        .collect())
}

#[test]
fn test_fixed_xor() {
    let case_buf1 = hex!("1c0111001f010100061a024b53535009181c");
    let case_buf2 = hex!("686974207468652062756c6c277320657965");
    let expected = hex!("746865206b696420646f6e277420706c6179");
    let result = fixed_xor(&case_buf1, &case_buf2);
    assert_eq!(Ok(expected.to_vec()), result);
    assert_eq!(Err(Error::LengthMismatch { left: 18, right: 17 }), fixed_xor(&case_buf1, &case_buf2[1..]));
}

pub fn byte_xor(buf: &[u8], b: u8) -> Vec<u8> {
    buf.iter()
        .map(|x| x ^ b )
        .collect()
}

#[test]
fn test_byte_xor_is_an_involution() {
    use rand::{Rng, RngCore};

    let mut rng = rand::thread_rng();
    for key in 0..=u8::MAX {
        let mut buf = vec![0u8; rng.gen_range(0..64)];
        rng.fill_bytes(&mut buf);
        assert_eq!(buf, byte_xor(&byte_xor(&buf, key), key));
    }
    assert_eq!(Vec::<u8>::new(), byte_xor(b"", 0x58));
    assert_eq!(b"Cooking".to_vec(), byte_xor(&hex!("1b37373331363f"), 0x58));
}

// XOR is associative and commutative, so the order the buffers are folded
// in does not matter
pub fn xor_all(bufs: &[&[u8]]) -> Result<Vec<u8>, Error> {
    match bufs.split_first() {
        Some((first, rest)) => rest.iter()
            .try_fold(first.to_vec(), |acc, buf| fixed_xor(&acc, buf)),
        None => Ok(Vec::new()),
    }
}

#[test]
fn test_xor_all() {
    let a = hex!("a6c8b6733c9b22de");
    let b = hex!("37dcb292030faa90");
    let c = hex!("c1545756687e7573");
    let abc = xor_all(&[&a[..], &b[..], &c[..]]).expect("equal lengths");
    assert_eq!(Ok(abc.clone()), xor_all(&[&c[..], &a[..], &b[..]]));
    assert_eq!(Ok(abc), fixed_xor(&a, &fixed_xor(&b, &c).expect("equal lengths")));
    assert_eq!(Ok(vec![0u8; 8]), xor_all(&[&a[..], &a[..]]));
    assert_eq!(Ok(a.to_vec()), xor_all(&[&a[..]]));
    assert_eq!(Ok(vec![]), xor_all(&[]));
    assert!(matches!(xor_all(&[&a[..], &b[..4]]), Err(Error::LengthMismatch { left: 8, right: 4 })));
}
