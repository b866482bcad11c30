use proptest::prelude::*;
use zipstring::rle::{self, encode, encode_bytes};

// expands (count, char) pairs; symbols must not be decimal digits
fn decode(encoded: &str) -> String {
    let mut res = String::new();
    let mut count = 0usize;
    for c in encoded.chars() {
        match c.to_digit(10) {
            Some(d) => count = count * 10 + d as usize,
            None => {
                for _ in 0..count {
                    res.push(c);
                }
                count = 0;
            }
        }
    }
    res
}

#[test]
fn test_decode_examples() {
    for s in ["", "a", "aaabbc", "abcd", "aabbaa", "ééé  x"] {
        assert_eq!(decode(&encode(s)), s);
    }
    assert_eq!(decode("12a1b"), "aaaaaaaaaaaab");
}

#[test]
fn test_single_run_length() {
    let mut prev = 0;
    for n in 1..=1200 {
        let s = "x".repeat(n);
        let len = encode(&s).len();
        assert_eq!(len, n.to_string().len() + 1);
        assert!(len >= prev);
        if len > prev && prev != 0 {
            // the count just gained a digit
            assert!([10, 100, 1000].contains(&n));
        }
        prev = len;
    }
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(s in "[^0-9]{0,64}") {
        prop_assert_eq!(decode(&encode(&s)), s);
    }

    #[test]
    fn prop_decode_inverts_encode_long_runs(s in "[ab]{0,300}") {
        prop_assert_eq!(decode(&encode(&s)), s);
    }

    #[test]
    fn prop_runs_expand_to_input(s in proptest::collection::vec(0u8..4, 0..256)) {
        let runs = rle::runs(&s);
        let mut expanded = Vec::new();
        for &(c, exp) in &runs {
            prop_assert!(exp >= 1);
            expanded.extend(std::iter::repeat(c).take(exp));
        }
        prop_assert_eq!(runs.iter().map(|&(_, exp)| exp).sum::<usize>(), s.len());
        prop_assert!(runs.windows(2).all(|w| w[0].0 != w[1].0));
        prop_assert_eq!(expanded, s);
    }

    #[test]
    fn prop_encoded_len_matches(s in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(rle::encoded_len(&s), encode_bytes(&s).len());
        prop_assert_eq!(rle::runlength(&s), rle::runs(&s).len());
    }

    #[test]
    fn prop_distinct_chars_double(
        s in proptest::sample::subsequence(('a'..='z').collect::<Vec<char>>(), 0..=26)
    ) {
        let s: String = s.into_iter().collect();
        prop_assert_eq!(encode(&s).len(), 2 * s.len());
    }

    #[test]
    fn prop_ascii_text_matches_bytes(s in "[ -~]{0,64}") {
        prop_assert_eq!(encode(&s).into_bytes(), encode_bytes(s.as_bytes()));
        prop_assert_eq!(rle::char_runlength(&s), rle::runlength(s.as_bytes()));
    }

    #[test]
    fn prop_encode_utf8_agrees(s in "\\PC{0,64}") {
        prop_assert_eq!(zipstring::encode_utf8(s.as_bytes()), Ok(encode(&s)));
    }
}
