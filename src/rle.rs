// functions for run length encodings

use crate::error::Result;

/// Calls `flush(count, symbol)` once for each maximal run of `items`, left to right.
/// Nothing is flushed for an empty sequence.
fn scan<T, I, F>(items: I, mut flush: F)
where
    T: PartialEq + Copy,
    I: IntoIterator<Item = T>,
    F: FnMut(usize, T),
{
    let mut items = items.into_iter();
    let mut prev = match items.next() {
        Some(c) => c,
        None => return,
    };
    let mut count = 1;
    for c in items {
        if c == prev {
            count += 1;
        } else {
            flush(count, prev);
            prev = c;
            count = 1;
        }
    }
    flush(count, prev);
}

// number of decimal digits of n
fn digits(mut n: usize) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

/// number of runs of s
pub fn runlength(s: &[u8]) -> usize {
    let mut res = 0;
    scan(s.iter().copied(), |_, _| res += 1);
    res
}

/// number of runs of s, counted over chars
pub fn char_runlength(s: &str) -> usize {
    let mut res = 0;
    scan(s.chars(), |_, _| res += 1);
    res
}

/// runs of s as (symbol, exponent) pairs
pub fn runs(s: &[u8]) -> Vec<(u8, usize)> {
    let mut res = Vec::new();
    scan(s.iter().copied(), |exp, c| res.push((c, exp)));
    res
}

/// length of `encode_bytes(s)`, computed without building it
pub fn encoded_len(s: &[u8]) -> usize {
    let mut res = 0;
    scan(s.iter().copied(), |exp, _| res += digits(exp) + 1);
    res
}

/// Run-length encodes `s`, writing each run as its decimal length followed by
/// the character.
///
/// Runs are maximal sequences of equal `char`s; equal runs separated by another
/// character are kept apart.
///
/// ```
/// assert_eq!(zipstring::rle::encode("aaabbc"), "3a2b1c");
/// assert_eq!(zipstring::rle::encode(""), "");
/// ```
pub fn encode(s: &str) -> String {
    let mut res = String::new();
    scan(s.chars(), |exp, c| {
        res.push_str(&exp.to_string());
        res.push(c);
    });
    res
}

/// Same as [`encode`] over raw code units.
pub fn encode_bytes(s: &[u8]) -> Vec<u8> {
    let mut res = Vec::new();
    scan(s.iter().copied(), |exp, c| {
        res.extend_from_slice(exp.to_string().as_bytes());
        res.push(c);
    });
    res
}

/// Validates `s` as UTF-8 and encodes it with [`encode`].
pub fn encode_utf8(s: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(s)?;
    Ok(encode(text))
}

#[test]
fn test_encode() {
    assert_eq!(encode(""), "");
    assert_eq!(encode("a"), "1a");
    assert_eq!(encode("aaabbc"), "3a2b1c");
    assert_eq!(encode("abcd"), "1a1b1c1d");
    assert_eq!(encode("aabbaa"), "2a2b2a");
    assert_eq!(encode("aaaaaaaaaaaab"), "12a1b");
}

#[test]
fn test_encode_digits_and_multibyte() {
    assert_eq!(encode("111"), "31");
    assert_eq!(encode("1122"), "2122");
    assert_eq!(encode("ééa"), "2é1a");
    assert_eq!(encode("  \n"), "2 1\n");
}

#[test]
fn test_encode_bytes() {
    assert_eq!(encode_bytes(b""), b"".to_vec());
    assert_eq!(encode_bytes(b"aabbaa"), b"2a2b2a".to_vec());
    assert_eq!(
        encode_bytes(&[0xff, 0xff, 0x00]),
        vec![b'2', 0xff, b'1', 0x00]
    );
}

#[test]
fn test_encode_utf8() {
    assert_eq!(encode_utf8(b"aaabbc"), Ok("3a2b1c".to_string()));
    assert_eq!(
        encode_utf8(&[b'a', b'a', 0xc3]),
        Err(crate::error::Error::InvalidUtf8 { valid_up_to: 2 })
    );
}

#[test]
fn test_rle() {
    assert_eq!(runlength(&vec![1, 1, 2, 1, 1, 3, 3, 3, 1]), 5);
    assert_eq!(runlength(&vec![1, 1, 2, 1, 1, 3, 3, 3]), 4);
    assert_eq!(runlength(b""), 0);
    assert_eq!(char_runlength("ééa"), 2);
    assert_eq!(runlength("ééa".as_bytes()), 5);
}

#[test]
fn test_runs() {
    assert_eq!(
        runs(&vec![1, 2, 2, 2, 2, 3, 3, 3, 2, 2, 2]),
        vec![(1, 1), (2, 4), (3, 3), (2, 3)]
    );
    assert_eq!(runs(b"a"), vec![(b'a', 1)]);
    assert!(runs(b"").is_empty());
}

#[test]
fn test_encoded_len() {
    assert_eq!(encoded_len(b""), 0);
    assert_eq!(encoded_len(b"aaabbc"), 6);
    assert_eq!(encoded_len(&[b'x'; 9]), 2);
    assert_eq!(encoded_len(&[b'x'; 10]), 3);
    assert_eq!(encoded_len(&[b'x'; 100]), 4);
}
