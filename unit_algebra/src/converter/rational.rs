/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};

use super::{Converter, MathContext, PowerOfTenConverter};
use crate::error::UnitError;
use crate::math::{reduce_ratio, to_double};

/// Largest power of ten a rational step absorbs. Beyond this, the
/// two steps stay in a chain rather than growing the integers.
const MAX_ABSORBED_EXPONENT: u32 = 4096;

/// Exact multiplication by `numerator / denominator`. The denominator
/// is always positive; the pair need not be in lowest terms.
#[derive(
    Serialize, Deserialize, PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug,
)]
#[serde(try_from = "RawRationalConverter")]
pub struct RationalConverter {
    numerator: BigInt,
    denominator: BigInt,
}

#[derive(Deserialize)]
struct RawRationalConverter {
    numerator: BigInt,
    denominator: BigInt,
}

impl TryFrom<RawRationalConverter> for RationalConverter {
    type Error = UnitError;
    fn try_from(raw: RawRationalConverter) -> Result<Self, UnitError> {
        Self::new(raw.numerator, raw.denominator)
    }
}

impl RationalConverter {
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Self, UnitError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if !denominator.is_positive() {
            return Err(UnitError::InvalidConverter(format!(
                "negative or zero denominator: {}",
                denominator
            )));
        }
        if numerator == denominator {
            return Err(UnitError::InvalidConverter(format!(
                "{}/{} would result in an identity converter",
                numerator, denominator
            )));
        }
        if numerator.is_zero() {
            return Err(UnitError::InvalidConverter(
                "zero scale factor cannot be inverted".to_string(),
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn factor(&self) -> f64 {
        to_double(&self.numerator) / to_double(&self.denominator)
    }

    pub fn convert(&self, value: f64) -> f64 {
        value * to_double(&self.numerator) / to_double(&self.denominator)
    }

    /// Exact unless the denominator differs from one, in which case the
    /// division is rounded to `ctx`.
    pub fn convert_exact(
        &self,
        value: &BigDecimal,
        ctx: &MathContext,
    ) -> BigDecimal {
        let multiplied = value * &BigDecimal::new(self.numerator.clone(), 0);
        match self.denominator.is_one() {
            true => multiplied,
            false => ctx.divide(
                &multiplied,
                &BigDecimal::new(self.denominator.clone(), 0),
            ),
        }
    }

    pub fn inverse(&self) -> Self {
        match self.numerator.is_negative() {
            true => Self {
                numerator: -&self.denominator,
                denominator: -&self.numerator,
            },
            false => Self {
                numerator: self.denominator.clone(),
                denominator: self.numerator.clone(),
            },
        }
    }

    pub(super) fn concatenate_rational(&self, other: &Self) -> Converter {
        Self::canonical(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    pub(super) fn concatenate_power_of_ten(
        &self,
        other: &PowerOfTenConverter,
    ) -> Option<Converter> {
        let exponent = other.exponent().unsigned_abs();
        if exponent > MAX_ABSORBED_EXPONENT {
            return None;
        }
        let scale = BigInt::from(10).pow(exponent);
        Some(match other.exponent() > 0 {
            true => Self::canonical(
                &self.numerator * scale,
                self.denominator.clone(),
            ),
            false => Self::canonical(
                self.numerator.clone(),
                &self.denominator * scale,
            ),
        })
    }

    /// Reduce a ratio with positive denominator and return its unique
    /// representative: identity, a power of ten or a reduced rational.
    pub(super) fn canonical(
        numerator: BigInt,
        denominator: BigInt,
    ) -> Converter {
        let (numerator, denominator) = reduce_ratio(&numerator, &denominator);
        if denominator.is_one() {
            if numerator.is_one() {
                return Converter::Identity;
            }
            if let Some(n) = power_of_ten_exponent(&numerator) {
                return Converter::PowerOfTen(PowerOfTenConverter(n));
            }
        } else if numerator.is_one() {
            if let Some(n) = power_of_ten_exponent(&denominator) {
                return Converter::PowerOfTen(PowerOfTenConverter(-n));
            }
        }
        Converter::Rational(Self {
            numerator,
            denominator,
        })
    }
}

/// `n` if the value is `10^n` for some `n > 0`.
fn power_of_ten_exponent(value: &BigInt) -> Option<i32> {
    if !value.is_positive() {
        return None;
    }
    let digits = value.to_str_radix(10);
    let zeros = digits.strip_prefix('1')?;
    match !zeros.is_empty() && zeros.bytes().all(|b| b == b'0') {
        true => i32::try_from(zeros.len()).ok(),
        false => None,
    }
}

impl Display for RationalConverter {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "Rational({},{})", self.numerator, self.denominator)
    }
}
