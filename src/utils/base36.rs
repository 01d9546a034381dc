//! Base-36 short identifier encoding.
//!
//! Short ids are the base-36 rendering of the global sequence counter,
//! using `0-9` followed by lowercase `a-z`, most significant digit first.

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encodes a counter value as a base-36 short id.
///
/// No zero-padding is applied. Zero encodes as `"0"`, so every input maps
/// to a non-empty id and the encoding is injective over `u64`.
///
/// # Examples
///
/// ```
/// use shortly::utils::base36::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(35), "z");
/// assert_eq!(encode(36), "10");
/// assert_eq!(encode(1295), "zz");
/// ```
pub fn encode(mut number: u64) -> String {
    if number == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(13);
    while number != 0 {
        digits.push(ALPHABET[(number % 36) as usize]);
        number /= 36;
    }
    digits.reverse();

    // Every byte comes from ALPHABET, which is ASCII.
    digits.into_iter().map(char::from).collect()
}
