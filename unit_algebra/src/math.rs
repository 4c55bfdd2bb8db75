/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Integer helpers shared by the converter and product unit algebra.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

/// Reduce a fraction of big integers by their greatest common divisor.
/// With a positive denominator the sign stays on the numerator.
pub(crate) fn reduce_ratio(num: &BigInt, den: &BigInt) -> (BigInt, BigInt) {
    let gcd = num.gcd(den);
    match gcd.is_one() || gcd.is_zero() {
        true => (num.clone(), den.clone()),
        false => (num / &gcd, den / &gcd),
    }
}

/// Big integer to double, taking the cheap path for values that fit
/// an `i64`.
pub(crate) fn to_double(n: &BigInt) -> f64 {
    match n.to_i64() {
        Some(v) => v as f64,
        None => n.to_f64().unwrap_or(f64::NAN),
    }
}
