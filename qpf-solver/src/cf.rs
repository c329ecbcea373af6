//! Best rational approximation with a bounded denominator

/// Find the fraction closest to `numerator / denominator` whose
/// denominator does not exceed `max_denominator`.
///
/// Walks the continued-fraction convergents of the input until the next
/// denominator would pass the bound, then picks between the last
/// convergent and the best semiconvergent by exact integer comparison.
/// The result is returned in lowest terms.
///
/// Callers keep `numerator <= denominator` and arrange widths so that
/// `2 * denominator * max_denominator` fits a `u128`; the period
/// extractor guards this before building the fraction.
pub fn limit_denominator(
    numerator: u128,
    denominator: u128,
    max_denominator: u128,
) -> (u128, u128) {
    let max_denominator = max_denominator.max(1);

    let g = gcd(numerator, denominator);
    let (num, den) = (numerator / g, denominator / g);
    if den <= max_denominator {
        return (num, den);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0u128, 1u128, 1u128, 0u128);
    let (mut n, mut d) = (num, den);
    loop {
        let a = n / d;
        let q2 = q0 + a * q1;
        if q2 > max_denominator {
            break;
        }
        let p2 = p0 + a * p1;
        p0 = p1;
        q0 = q1;
        p1 = p2;
        q1 = q2;
        let r = n - a * d;
        n = d;
        d = r;
    }

    // The semiconvergent k steps past (p0, q0) and the last convergent
    // (p1, q1) bracket the input; the closer one wins.
    let k = (max_denominator - q0) / q1;
    if 2 * d * (q0 + k * q1) <= den {
        (p1, q1)
    } else {
        (p0 + k * p1, q0 + k * q1)
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.max(1)
}
