/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

/// Precision and rounding applied by the exact (decimal) conversion
/// path wherever a conversion step cannot be carried out exactly.
#[derive(Clone, Debug)]
pub struct MathContext {
    context: Context,
}

impl MathContext {
    pub fn new(precision: NonZeroU64, rounding: RoundingMode) -> Self {
        Self {
            context: Context::new(precision, rounding),
        }
    }

    /// 34 significant digits, rounding half to even.
    pub fn decimal128() -> Self {
        Self::new(NonZeroU64::MIN.saturating_add(33), RoundingMode::HalfEven)
    }

    pub fn precision(&self) -> NonZeroU64 {
        self.context.precision()
    }

    pub fn rounding(&self) -> RoundingMode {
        self.context.rounding_mode()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        self.context.round_decimal(value)
    }

    /// The quotient rounded once, to this context. A zero divisor
    /// gives zero.
    pub fn divide(
        &self,
        dividend: &BigDecimal,
        divisor: &BigDecimal,
    ) -> BigDecimal {
        let (a, a_scale) = dividend.as_bigint_and_exponent();
        let (b, b_scale) = divisor.as_bigint_and_exponent();
        if a.is_zero() || b.is_zero() {
            return BigDecimal::zero();
        }

        let sign = match a.is_negative() == b.is_negative() {
            true => Sign::Plus,
            false => Sign::Minus,
        };
        let (a, b) = (a.abs(), b.abs());

        /* Shift so that the integer quotient has at least one digit
         * beyond the requested precision. */
        let precision = self.precision().get();
        let shift = i64::try_from(precision)
            .unwrap_or(i64::MAX)
            .saturating_add(1)
            .saturating_add(decimal_digits(&b))
            .saturating_sub(decimal_digits(&a));
        let (num, den) = match shift >= 0 {
            true => (a * pow10(shift.unsigned_abs()), b),
            false => (a, b * pow10(shift.unsigned_abs())),
        };
        let (quotient, remainder) = num.div_rem(&den);

        let extra = decimal_digits(&quotient)
            .saturating_sub(i64::try_from(precision).unwrap_or(i64::MAX))
            .max(1)
            .unsigned_abs();
        let (kept, dropped) = quotient.div_rem(&pow10(extra));
        let (first, rest) = dropped.div_rem(&pow10(extra - 1));
        let last = (&kept % 10u32).to_u8().unwrap_or(0);
        let next = first.to_u8().unwrap_or(0);
        let trailing_zeros = rest.is_zero() && remainder.is_zero();
        let rounded = self.rounding().round_pair(
            sign,
            (last, next),
            trailing_zeros,
        );
        let kept = kept - BigInt::from(last) + BigInt::from(rounded);

        let digits = match sign {
            Sign::Minus => -kept,
            _ => kept,
        };
        let scale = a_scale
            .saturating_sub(b_scale)
            .saturating_add(shift)
            .saturating_sub(extra as i64);
        BigDecimal::new(digits, scale)
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::decimal128()
    }
}

impl Display for MathContext {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "precision={} rounding={:?}",
            self.precision(),
            self.rounding()
        )
    }
}

fn pow10(n: u64) -> BigInt {
    BigInt::from(10u32).pow(u32::try_from(n).unwrap_or(u32::MAX))
}

fn decimal_digits(n: &BigInt) -> i64 {
    match n.is_zero() {
        true => 1,
        false => i64::try_from(n.magnitude().to_str_radix(10).len())
            .unwrap_or(i64::MAX),
    }
}
