/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A correct, small, but not especially fast base64 implementation.

const BASE64_ENCODE_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

pub fn encode<T: AsRef<[u8]>>(inp: T) -> String {
    let inp = inp.as_ref();
    // Base 64 encodes groups of 6 bits into characters—this means that each
    // 3 byte group (24 bits) is encoded into 4 base64 characters.
    let char_ct = ((inp.len() + 2) / 3) * 4;
    let mut output = String::with_capacity(char_ct);
    for chunk in inp.chunks(3) {
        let mut block: i32 = 0;
        // Write the chunks into the beginning of a 32 bit int
        for (idx, chunk) in chunk.iter().enumerate() {
            block |= (*chunk as i32) << ((3 - idx) * 8);
        }
        let num_sextets = ((chunk.len() * 8) + 5) / 6;
        for idx in 0..num_sextets {
            let slice = block >> (26 - (6 * idx));
            let idx = (slice as u8) & 0b0011_1111;
            output.push(BASE64_ENCODE_TABLE[idx as usize] as char);
        }
        for _ in 0..(4 - num_sextets) {
            output.push('=');
        }
    }
    debug_assert_eq!(output.capacity(), char_ct);
    output
}

#[derive(Debug, PartialEq, Eq)]
pub struct DecodeError(&'static str);

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid base64: {}", self.0)
    }
}

impl std::error::Error for DecodeError {}

fn decode_sextet(c: u8) -> Result<u8, DecodeError> {
    match c {
        b'A'..=b'Z' => Ok(c - b'A'),
        b'a'..=b'z' => Ok(c - b'a' + 26),
        b'0'..=b'9' => Ok(c - b'0' + 52),
        b'+' => Ok(62),
        b'/' => Ok(63),
        _ => Err(DecodeError("character outside of the base64 alphabet")),
    }
}

pub fn decode<T: AsRef<str>>(inp: T) -> Result<Vec<u8>, DecodeError> {
    let inp = inp.as_ref().trim_end_matches('=').as_bytes();
    let mut output = Vec::with_capacity((inp.len() * 3) / 4);
    for chunk in inp.chunks(4) {
        if chunk.len() == 1 {
            return Err(DecodeError("trailing group is too short"));
        }
        let mut block: u32 = 0;
        for (idx, c) in chunk.iter().enumerate() {
            block |= (decode_sextet(*c)? as u32) << (26 - 6 * idx);
        }
        let num_bytes = (chunk.len() * 6) / 8;
        for idx in 0..num_bytes {
            output.push((block >> (24 - 8 * idx)) as u8);
        }
    }
    Ok(output)
}

#[cfg(test)]
mod test {
    use crate::base64::{decode, encode};
    use proptest::prelude::*;

    #[test]
    fn test_base64() {
        assert_eq!(encode("abc"), "YWJj");
        assert_eq!(encode("anything you want."), "YW55dGhpbmcgeW91IHdhbnQu");
        assert_eq!(encode("anything you want"), "YW55dGhpbmcgeW91IHdhbnQ=");
        assert_eq!(encode("anything you wan"), "YW55dGhpbmcgeW91IHdhbg==");
    }

    #[test]
    fn test_base64_utf8() {
        let decoded = "ユニコードとはか？";
        let encoded = "44Om44OL44Kz44O844OJ44Go44Gv44GL77yf";
        assert_eq!(encode(decoded), encoded);
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("YWJj").unwrap(), b"abc");
        assert_eq!(decode("YW55dGhpbmcgeW91IHdhbnQ=").unwrap(), b"anything you want");
        assert_eq!(decode("YW55dGhpbmcgeW91IHdhbg==").unwrap(), b"anything you wan");
        assert!(decode("not base64!").is_err());
    }

    proptest! {
        #[test]
        fn round_trip(data: Vec<u8>) {
            prop_assert_eq!(decode(encode(&data)).unwrap(), data);
        }
    }
}
