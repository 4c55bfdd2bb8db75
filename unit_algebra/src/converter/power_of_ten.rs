/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::Converter;
use crate::error::UnitError;

/* Lookup tables for fast double conversion. */

static POSITIVE_FACTORS: [f64; 25] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13,
    1e14, 1e15, 1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22, 1e23, 1e24,
];

static NEGATIVE_FACTORS: [f64; 25] = [
    1e0, 1e-1, 1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7, 1e-8, 1e-9, 1e-10, 1e-11,
    1e-12, 1e-13, 1e-14, 1e-15, 1e-16, 1e-17, 1e-18, 1e-19, 1e-20, 1e-21,
    1e-22, 1e-23, 1e-24,
];

/// Multiplication by `10^exponent`. The exponent is non-zero and never
/// `i32::MIN`, so that every converter has an inverse.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct PowerOfTenConverter(pub(super) i32);

impl PowerOfTenConverter {
    pub fn new(exponent: i32) -> Result<Self, UnitError> {
        match exponent {
            0 => Err(UnitError::InvalidConverter(
                "power of ten 0 would result in an identity converter"
                    .to_string(),
            )),
            i32::MIN => Err(UnitError::InvalidConverter(format!(
                "power of ten {} has no inverse",
                exponent
            ))),
            n => Ok(Self(n)),
        }
    }

    pub fn exponent(&self) -> i32 {
        self.0
    }

    /// The scale factor as a double. Exponents outside the lookup
    /// table are computed and may be off in the last bit; the decimal
    /// path is exact.
    pub fn factor(&self) -> f64 {
        match self.0 {
            0..=24 => POSITIVE_FACTORS[self.0 as usize],
            -24..=-1 => NEGATIVE_FACTORS[self.0.unsigned_abs() as usize],
            n => 10f64.powf(n as f64),
        }
    }

    pub fn convert(&self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Shifts the decimal point; never rounds.
    pub fn convert_exact(&self, value: &BigDecimal) -> BigDecimal {
        let (digits, scale) = value.as_bigint_and_exponent();
        BigDecimal::new(digits, scale - i64::from(self.0))
    }

    pub fn inverse(&self) -> Self {
        Self(-self.0)
    }

    /// The combined shift, unless it leaves the exponent range.
    pub(super) fn concatenate(&self, other: &Self) -> Option<Converter> {
        match self.0.checked_add(other.0)? {
            0 => Some(Converter::Identity),
            i32::MIN => None,
            n => Some(Converter::PowerOfTen(Self(n))),
        }
    }
}

impl TryFrom<i32> for PowerOfTenConverter {
    type Error = UnitError;
    fn try_from(exponent: i32) -> Result<Self, UnitError> {
        Self::new(exponent)
    }
}

impl From<PowerOfTenConverter> for i32 {
    fn from(converter: PowerOfTenConverter) -> i32 {
        converter.0
    }
}

impl Display for PowerOfTenConverter {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "PowerOfTen({})", self.0)
    }
}
