//! Prefix-delta transform for signed integer columns.
//!
//! Monotonic or slowly varying columns (identities, coordinates,
//! timestamps) shrink well under the container's variable-length integer
//! encoding once expressed as successive differences. Both directions take
//! the buffer by value and return it: the input is consumed, and the
//! transform happens in place with no reallocation.
//!
//! Signs are preserved natively; there is no zigzag mapping at this layer.
//! Arithmetic wraps, so `decode(encode(x)) == x` holds for every input,
//! including sequences whose differences overflow.

/// Replaces each element with its difference from the previous one; the
/// first element is the difference from an implicit zero.
pub fn encode_i64(mut vals: Vec<i64>) -> Vec<i64> {
    let mut prev = 0i64;
    for v in &mut vals {
        let current = *v;
        *v = current.wrapping_sub(prev);
        prev = current;
    }
    vals
}

/// Replaces each element with the running sum up to and including it.
pub fn decode_i64(mut vals: Vec<i64>) -> Vec<i64> {
    let mut prev = 0i64;
    for v in &mut vals {
        prev = prev.wrapping_add(*v);
        *v = prev;
    }
    vals
}

/// [`encode_i64`] for 32-bit columns.
pub fn encode_i32(mut vals: Vec<i32>) -> Vec<i32> {
    let mut prev = 0i32;
    for v in &mut vals {
        let current = *v;
        *v = current.wrapping_sub(prev);
        prev = current;
    }
    vals
}

/// [`decode_i64`] for 32-bit columns.
pub fn decode_i32(mut vals: Vec<i32>) -> Vec<i32> {
    let mut prev = 0i32;
    for v in &mut vals {
        prev = prev.wrapping_add(*v);
        *v = prev;
    }
    vals
}
