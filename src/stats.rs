use lazy_static::lazy_static;
use snafu::ensure;

use crate::util::{Error, InvalidFrequencySnafu};

// Relative frequencies of lowercase letters in English text.
// Everything else (uppercase, digits, whitespace, punctuation) is 0.
static ENGLISH_LETTER_FREQUENCIES: [(u8, f64); 26] = [
    (b'e', 0.1249),
    (b't', 0.0928),
    (b'a', 0.0804),
    (b'o', 0.0764),
    (b'i', 0.0757),
    (b'n', 0.0723),
    (b's', 0.0651),
    (b'r', 0.0628),
    (b'h', 0.0505),
    (b'l', 0.0407),
    (b'd', 0.0382),
    (b'c', 0.0334),
    (b'u', 0.0273),
    (b'm', 0.0251),
    (b'f', 0.0240),
    (b'p', 0.0214),
    (b'g', 0.0187),
    (b'w', 0.0168),
    (b'y', 0.0166),
    (b'b', 0.0148),
    (b'v', 0.0105),
    (b'k', 0.0054),
    (b'x', 0.0023),
    (b'j', 0.0016),
    (b'q', 0.0012),
    (b'z', 0.0009),
    ];

lazy_static! {
    pub static ref ENGLISH: FrequencyTable = FrequencyTable::fill(&ENGLISH_LETTER_FREQUENCIES);
}

/// Expected relative frequency of every byte value, read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable([f64; 256]);

impl FrequencyTable {
    pub fn from_pairs(pairs: &[(u8, f64)]) -> Result<FrequencyTable, Error> {
        for &(byte, frequency) in pairs {
            ensure!((0.0..=1.0).contains(&frequency), InvalidFrequencySnafu { byte, frequency });
        }
        Ok(FrequencyTable::fill(pairs))
    }

    fn fill(pairs: &[(u8, f64)]) -> FrequencyTable {
        let mut table = [0f64; 256];
        for &(byte, frequency) in pairs {
            table[byte as usize] = frequency;
        }
        FrequencyTable(table)
    }

    pub fn frequency_of(&self, byte: u8) -> f64 {
        self.0[byte as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        (0..=u8::MAX).zip(self.0.iter().copied())
    }
}

#[test]
fn test_english_table() {
    assert_eq!(0.1249, ENGLISH.frequency_of(b'e'));
    assert_eq!(0.0009, ENGLISH.frequency_of(b'z'));
    assert_eq!(0.0, ENGLISH.frequency_of(b'E'));
    assert_eq!(0.0, ENGLISH.frequency_of(b' '));
    assert_eq!(0.0, ENGLISH.frequency_of(b'7'));
    assert_eq!(0.0, ENGLISH.frequency_of(0xff));
    assert_eq!(256, ENGLISH.iter().count());
    assert_eq!(26, ENGLISH.iter().filter(|&(_, f)| f > 0.0).count());
    assert!(ENGLISH.iter().all(|(b, f)| f == 0.0 || b.is_ascii_lowercase()));
}

#[test]
fn test_from_pairs() {
    let table = FrequencyTable::from_pairs(&[(b'a', 0.5), (b'b', 0.25)]).expect("valid table");
    assert_eq!(0.5, table.frequency_of(b'a'));
    assert_eq!(0.0, table.frequency_of(b'c'));
    assert_eq!(
        Err(Error::InvalidFrequency { byte: b'x', frequency: 1.5 }),
        FrequencyTable::from_pairs(&[(b'x', 1.5)]));
    assert!(FrequencyTable::from_pairs(&[(b'x', f64::NAN)]).is_err());
    assert_eq!(Ok(ENGLISH.clone()), FrequencyTable::from_pairs(&ENGLISH_LETTER_FREQUENCIES));
}

// Proportion of the buffer taken by each byte value. An empty buffer has
// no observations at all rather than 0/0.
pub fn byte_frequencies(buf: &[u8]) -> [f64; 256] {
    if buf.is_empty() {
        return [0f64; 256];
    }
    let mut counts = [0usize; 256];
    buf.iter().for_each(|&b| counts[b as usize] += 1);
    let n = buf.len() as f64;
    counts.map(|c| (c as f64) / n)
}

#[test]
fn test_byte_frequencies() {
    let freqs = byte_frequencies(b"aab ");
    assert_eq!(0.5, freqs[b'a' as usize]);
    assert_eq!(0.25, freqs[b'b' as usize]);
    assert_eq!(0.25, freqs[b' ' as usize]);
    assert_eq!(0.0, freqs[b'c' as usize]);
    assert!(byte_frequencies(b"").iter().all(|&f| f == 0.0));
}

// Summed in ascending byte order so the same input always gives the same bits
pub fn total_deviation(observed: &[f64; 256], expected: &FrequencyTable) -> f64 {
    observed.iter()
        .zip(expected.0.iter())
        .map(|(o, e)| (o - e).abs())
        .sum()
}

#[test]
fn test_total_deviation() {
    let str_with_near_exact_frequencies: Vec<u8> = ENGLISH_LETTER_FREQUENCIES
        .iter()
        .map(|&(c, f)| vec![c; (f * 10000f64).round() as usize] )
        .fold(Vec::new(), |mut acc, mut elt| {
            acc.append(&mut elt);
            acc
        });
    // The table sums to 0.9998, so each count is off by a factor of 10000/9998
    let deviation = total_deviation(&byte_frequencies(&str_with_near_exact_frequencies), &ENGLISH);
    assert!((deviation - 0.0002).abs() < 1e-9);

    let empty = total_deviation(&byte_frequencies(b""), &ENGLISH);
    assert!((empty - 0.9998).abs() < 1e-9);

    // Nothing in the table: the whole observed mass plus the whole table
    let unmatched = total_deviation(&byte_frequencies(b"ETAOIN"), &ENGLISH);
    assert!((unmatched - 1.9998).abs() < 1e-9);
}
