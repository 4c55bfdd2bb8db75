/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use super::Converter;
use crate::error::UnitError;

/// Affine shift `x + offset`. Not linear, so it never takes part in
/// product unit system converters. The decimal offset is
/// authoritative; the double is derived from it.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(try_from = "BigDecimal", into = "BigDecimal")]
pub struct AddConverter {
    offset: f64,
    exact: BigDecimal,
}

impl AddConverter {
    pub fn new(offset: BigDecimal) -> Result<Self, UnitError> {
        if offset.is_zero() {
            return Err(UnitError::InvalidConverter(
                "zero offset would result in an identity converter"
                    .to_string(),
            ));
        }
        Self::from_exact(offset.clone()).ok_or_else(|| {
            UnitError::InvalidConverter(format!(
                "offset {} is not representable as a double",
                offset
            ))
        })
    }

    pub fn from_f64(offset: f64) -> Result<Self, UnitError> {
        match BigDecimal::from_f64(offset) {
            Some(exact) if offset.is_finite() => Self::new(exact),
            _ => Err(UnitError::InvalidConverter(format!(
                "invalid offset: {}",
                offset
            ))),
        }
    }

    /// `None` if the offset overflows a double.
    pub(crate) fn from_exact(exact: BigDecimal) -> Option<Self> {
        match exact.to_f64() {
            Some(offset) if offset.is_finite() => Some(Self { offset, exact }),
            _ => None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn exact_offset(&self) -> &BigDecimal {
        &self.exact
    }

    pub fn convert(&self, value: f64) -> f64 {
        value + self.offset
    }

    pub fn convert_exact(&self, value: &BigDecimal) -> BigDecimal {
        value + &self.exact
    }

    pub fn inverse(&self) -> Self {
        Self {
            offset: -self.offset,
            exact: -self.exact.clone(),
        }
    }

    /// The summed offset, unless it overflows a double.
    pub(super) fn concatenate(&self, other: &Self) -> Option<Converter> {
        let exact = &self.exact + &other.exact;
        match exact.is_zero() {
            true => Some(Converter::Identity),
            false => Self::from_exact(exact).map(Converter::Add),
        }
    }
}

impl TryFrom<BigDecimal> for AddConverter {
    type Error = UnitError;
    fn try_from(offset: BigDecimal) -> Result<Self, UnitError> {
        Self::new(offset)
    }
}

impl From<AddConverter> for BigDecimal {
    fn from(converter: AddConverter) -> BigDecimal {
        converter.exact
    }
}

impl PartialEq for AddConverter {
    fn eq(&self, other: &Self) -> bool {
        self.exact == other.exact
    }
}

impl Eq for AddConverter {}

impl Hash for AddConverter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exact.hash(state);
    }
}

impl PartialOrd for AddConverter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AddConverter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.exact.cmp(&other.exact)
    }
}

impl Display for AddConverter {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "Add({})", self.exact)
    }
}
