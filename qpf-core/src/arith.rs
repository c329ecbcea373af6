//! Modular arithmetic over `u128`
//!
//! The oracle factors, the verifier's recomputed public values, and the
//! continued-fraction post-processing all work on `u128` operands, so the
//! multiplication routine must not overflow on products of two 127-bit
//! values.

/// Modular multiplication by shift-and-add, safe for any `u128` operands.
#[inline]
pub fn mul_mod(mut a: u128, mut b: u128, m: u128) -> u128 {
    if m == 1 {
        return 0;
    }
    a %= m;
    let mut result = 0u128;
    while b > 0 {
        if b & 1 == 1 {
            result = add_mod(result, a, m);
        }
        b >>= 1;
        a = add_mod(a, a, m);
    }
    result
}

#[inline]
fn add_mod(a: u128, b: u128, m: u128) -> u128 {
    // a, b < m <= u128::MAX; avoid the overflowing sum
    if a >= m - b {
        a - (m - b)
    } else {
        a + b
    }
}

/// Modular exponentiation: `base^exp mod modulus` by square-and-multiply.
#[inline]
pub fn pow_mod(mut base: u128, mut exp: u128, modulus: u128) -> u128 {
    if modulus == 1 {
        return 0;
    }
    let mut result = 1u128;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        exp >>= 1;
        base = mul_mod(base, base, modulus);
    }
    result
}

/// Greatest common divisor (Euclidean algorithm).
#[inline]
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Number of bits needed to represent `value` (0 for 0).
#[inline]
pub const fn bits(value: u128) -> usize {
    (128 - value.leading_zeros()) as usize
}
