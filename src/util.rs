use hex::FromHexError;
use snafu::{ResultExt, Snafu};
use tracing::Level;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("malformed hex input: {source}"))]
    InputFormat { source: FromHexError },

    #[snafu(display("buffers differ in length ({left} vs {right} bytes)"))]
    LengthMismatch { left: usize, right: usize },

    #[snafu(display("decrypted bytes are not valid text: {source}"))]
    Decode { source: std::str::Utf8Error },

    #[snafu(display("frequency {frequency} for byte {byte:#04x} is outside [0, 1]"))]
    InvalidFrequency { byte: u8, frequency: f64 },
}

pub fn decode_hex(input: &str) -> Result<Vec<u8>, Error> {
    hex::decode(input).context(InputFormatSnafu)
}

#[test]
fn test_decode_hex() {
    assert_eq!(Ok(b"the kid don't play".to_vec()), decode_hex("746865206b696420646f6e277420706c6179"));
    assert_eq!(Ok(vec![0xab, 0xcd]), decode_hex("ABcd"));
    assert_eq!(Ok(vec![]), decode_hex(""));
    assert_eq!(
        Err(Error::InputFormat { source: FromHexError::OddLength }),
        decode_hex("1b3"));
    assert_eq!(
        Err(Error::InputFormat { source: FromHexError::InvalidHexCharacter { c: 'z', index: 1 } }),
        decode_hex("0z"));
}

pub fn decode_text(buf: &[u8]) -> Result<String, Error> {
    std::str::from_utf8(buf)
        .map(str::to_owned)
        .context(DecodeSnafu)
}

#[test]
fn test_decode_text() {
    assert_eq!(Ok(String::from("Cooking MC's")), decode_text(b"Cooking MC's"));
    assert!(matches!(decode_text(b"E\xc5"), Err(Error::Decode { .. })));
}

// Output goes to stderr; stdout is reserved for challenge answers
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
