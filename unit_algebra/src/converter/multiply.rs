/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use super::{Converter, MathContext};
use crate::error::UnitError;

/// Scaling by a factor that has no exact rational form (such as pi).
/// The inverse divides by the same factor instead of storing its
/// reciprocal, so inverting twice gives back the same converter. The
/// decimal factor is authoritative; the double is derived from it.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(try_from = "RawMultiplyConverter")]
pub struct MultiplyConverter {
    #[serde(skip)]
    factor: f64,
    exact: BigDecimal,
    divide: bool,
}

#[derive(Deserialize)]
struct RawMultiplyConverter {
    exact: BigDecimal,
    divide: bool,
}

impl MultiplyConverter {
    pub fn new(factor: f64) -> Result<Self, UnitError> {
        match BigDecimal::from_f64(factor) {
            Some(exact) if factor.is_finite() => Self::checked(exact, false),
            _ => Err(UnitError::InvalidConverter(format!(
                "invalid scale factor: {}",
                factor
            ))),
        }
    }

    fn checked(exact: BigDecimal, divide: bool) -> Result<Self, UnitError> {
        if exact.is_zero() || exact.is_one() {
            return Err(UnitError::InvalidConverter(format!(
                "invalid scale factor: {}",
                exact
            )));
        }
        Self::from_exact(exact.clone(), divide).ok_or_else(|| {
            UnitError::InvalidConverter(format!(
                "scale factor {} is not representable as a double",
                exact
            ))
        })
    }

    fn from_exact(exact: BigDecimal, divide: bool) -> Option<Self> {
        match exact.to_f64() {
            Some(factor) if factor.is_finite() && factor != 0.0 => {
                Some(Self {
                    factor,
                    exact,
                    divide,
                })
            }
            _ => None,
        }
    }

    /// The effective scale factor.
    pub fn factor(&self) -> f64 {
        match self.divide {
            true => 1.0 / self.factor,
            false => self.factor,
        }
    }

    pub fn convert(&self, value: f64) -> f64 {
        match self.divide {
            true => value / self.factor,
            false => value * self.factor,
        }
    }

    pub fn convert_exact(
        &self,
        value: &BigDecimal,
        ctx: &MathContext,
    ) -> BigDecimal {
        match self.divide {
            true => ctx.divide(value, &self.exact),
            false => value * &self.exact,
        }
    }

    pub fn inverse(&self) -> Self {
        Self {
            divide: !self.divide,
            ..self.clone()
        }
    }

    /// Merge with another multiplication when the result stays a single
    /// step: a converter and its own inverse cancel, and two steps in
    /// the same direction combine their factors.
    pub(super) fn concatenate(&self, other: &Self) -> Option<Converter> {
        match (self.divide == other.divide, self.exact == other.exact) {
            (false, true) => Some(Converter::Identity),
            (false, false) => None,
            (true, _) => {
                let exact = &self.exact * &other.exact;
                match exact.is_one() {
                    true => Some(Converter::Identity),
                    false => Self::from_exact(exact, self.divide)
                        .map(Converter::Multiply),
                }
            }
        }
    }
}

impl TryFrom<RawMultiplyConverter> for MultiplyConverter {
    type Error = UnitError;
    fn try_from(raw: RawMultiplyConverter) -> Result<Self, UnitError> {
        Self::checked(raw.exact, raw.divide)
    }
}

impl PartialEq for MultiplyConverter {
    fn eq(&self, other: &Self) -> bool {
        self.exact == other.exact && self.divide == other.divide
    }
}

impl Eq for MultiplyConverter {}

impl Hash for MultiplyConverter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exact.hash(state);
        self.divide.hash(state);
    }
}

impl PartialOrd for MultiplyConverter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MultiplyConverter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.exact
            .cmp(&other.exact)
            .then_with(|| self.divide.cmp(&other.divide))
    }
}

impl Display for MultiplyConverter {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.divide {
            true => write!(f, "Divide({})", self.factor),
            false => write!(f, "Multiply({})", self.factor),
        }
    }
}
