use tracing::{debug, trace};

use crate::crypto::common::CipherBuffer;
use crate::crypto::xor;
use crate::stats::{byte_frequencies, total_deviation, FrequencyTable};
use crate::util::{decode_text, Error};

/// One key guess and how far its decryption strays from the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub key: u8,
    pub plaintext: Vec<u8>,
    pub score: f64,
}

impl Candidate {
    pub fn new(cipher: &CipherBuffer, key: u8, table: &FrequencyTable) -> Candidate {
        let plaintext = xor::byte_xor(cipher.as_bytes(), key);
        let score = score_english(&plaintext, table);
        Candidate { key, plaintext, score }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered {
    pub key: u8,
    pub plaintext: String,
}

// Only the candidate is case-folded; the table stays lowercase-only, so
// anything that is not a letter scores as unmatched
pub fn score_english(buf: &[u8], table: &FrequencyTable) -> f64 {
    let folded = buf.to_ascii_lowercase();
    total_deviation(&byte_frequencies(&folded), table)
}

#[test]
fn test_score_english() {
    use crate::stats::ENGLISH;

    let lower = score_english(b"the quick brown fox", &ENGLISH);
    assert_eq!(lower, score_english(b"THE QUICK BROWN FOX", &ENGLISH));
    assert_eq!(lower, score_english(b"tHe QuIcK bRoWn FoX", &ENGLISH));
    assert!(lower < score_english(b"\x0c0\x1d0\x1d0\x1d", &ENGLISH));
    assert!((score_english(b"", &ENGLISH) - 0.9998).abs() < 1e-9);
}

// Keys are scanned in ascending order and only a strictly lower score
// replaces the current best, so ties go to the smallest key
pub fn best_candidate(cipher: &CipherBuffer, table: &FrequencyTable) -> Candidate {
    (1..=u8::MAX).fold(Candidate::new(cipher, 0, table), |best, key| {
        let candidate = Candidate::new(cipher, key, table);
        trace!(key, score = candidate.score, "scored candidate");
        if candidate.score < best.score { candidate } else { best }
    })
}

pub fn break_single_byte_xor(cipher: &CipherBuffer, table: &FrequencyTable) -> Result<Recovered, Error> {
    let best = best_candidate(cipher, table);
    debug!(key = best.key, score = best.score, len = cipher.len(), "selected single-byte key");
    let plaintext = decode_text(&best.plaintext)?;
    Ok(Recovered {
        key: best.key,
        plaintext: plaintext.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::stats::ENGLISH;

    static CORPUS: [&[u8]; 5] = [
        b"now that the party is jumping",
        b"the quick brown fox jumps over the lazy dog",
        b"it was the best of times it was the worst of times",
        b"frequency analysis breaks single byte xor ciphers",
        b"Cooking MC's like a pound of bacon",
    ];

    fn encrypt(plaintext: &[u8], key: u8) -> CipherBuffer {
        CipherBuffer::from(xor::byte_xor(plaintext, key))
    }

    #[test]
    fn test_break_single_byte_xor_fixture() {
        let case: [u8; 34] = hex!("1b37373331363f78151b7f2b783431333d78397828372d363c78373e783a393b3736");
        let expected = Recovered {
            key: 88,
            plaintext: String::from("Cooking MC's like a pound of bacon"),
        };
        let result = break_single_byte_xor(&CipherBuffer::from(&case[..]), &ENGLISH);
        assert_eq!(Ok(expected), result);
    }

    #[test]
    fn test_recovers_keys_on_english_corpus() {
        let keys = [0x00, 0x01, 0x13, 0x42, 0x58, 0x9a, 0xc5];
        for (plaintext, key) in CORPUS.iter().cartesian_product(keys) {
            let recovered = break_single_byte_xor(&encrypt(plaintext, key), &ENGLISH)
                .expect("English plaintext should decode");
            assert_eq!(key, recovered.key);
            assert_eq!(std::str::from_utf8(plaintext).expect("ascii corpus"), recovered.plaintext);
        }
    }

    // Flipping 0x20 only swaps letter case (and turns spaces into NULs), which
    // the case-folded score cannot see. The smaller key of each pair wins.
    #[test]
    fn test_case_bit_is_indistinguishable() {
        for (plaintext, key) in CORPUS.iter().cartesian_product(0..=u8::MAX) {
            let cipher = encrypt(plaintext, key);
            let best = best_candidate(&cipher, &ENGLISH);
            assert_eq!(key & !0x20, best.key);
            assert_eq!(
                Candidate::new(&cipher, key, &ENGLISH).score,
                Candidate::new(&cipher, key ^ 0x20, &ENGLISH).score);
        }
    }

    #[test]
    fn test_break_is_deterministic() {
        let cipher = encrypt(CORPUS[1], 0x42);
        let first = best_candidate(&cipher, &ENGLISH);
        let second = best_candidate(&cipher, &ENGLISH);
        assert_eq!(first.score.to_bits(), second.score.to_bits());
        assert_eq!(first, second);
        assert_eq!(
            break_single_byte_xor(&cipher, &ENGLISH),
            break_single_byte_xor(&cipher, &ENGLISH));
    }

    #[test]
    fn test_empty_buffer_ties_to_key_zero() {
        let cipher = CipherBuffer::from(Vec::new());
        let scores: Vec<f64> = (0..=u8::MAX)
            .map(|key| Candidate::new(&cipher, key, &ENGLISH).score)
            .collect();
        assert!(scores.iter().all_equal());

        let result = break_single_byte_xor(&cipher, &ENGLISH);
        assert_eq!(Ok(Recovered { key: 0, plaintext: String::new() }), result);
    }

    #[test]
    fn test_strips_surrounding_whitespace() {
        let plaintext = b"  the quick brown fox jumps over the lazy dog\n";
        let result = break_single_byte_xor(&encrypt(plaintext, 0x13), &ENGLISH);
        assert_eq!(
            Ok(Recovered { key: 0x13, plaintext: String::from("the quick brown fox jumps over the lazy dog") }),
            result);
    }

    #[test]
    fn test_non_text_winner_is_a_decode_error() {
        // Every key leaves one of the two bytes above 0x7f
        let result = break_single_byte_xor(&CipherBuffer::from(vec![0x00, 0x80]), &ENGLISH);
        assert!(matches!(result, Err(Error::Decode { .. })));
        assert_eq!(69, best_candidate(&CipherBuffer::from(vec![0x00, 0x80]), &ENGLISH).key);
    }
}
