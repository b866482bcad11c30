//! Run-length encoding of strings: every maximal run of equal characters is
//! written as its decimal length followed by the character, so `"aaabbc"`
//! becomes `"3a2b1c"`.

pub mod error;
pub mod rle;

pub use error::Error;
pub use rle::{encode, encode_bytes, encode_utf8};
