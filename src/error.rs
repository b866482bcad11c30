use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input bytes are not a valid UTF-8 character sequence.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[test]
fn test_invalid_utf8_message() {
    let e = Error::from(std::str::from_utf8(&[b'a', 0xff]).unwrap_err());
    assert_eq!(e, Error::InvalidUtf8 { valid_up_to: 1 });
    assert_eq!(
        e.to_string(),
        "input is not valid UTF-8 (valid up to byte 1)"
    );
}
