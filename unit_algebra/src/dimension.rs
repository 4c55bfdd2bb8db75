/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use super::error::UnitError;

/// Independent base quantities.
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
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
    Information,
}

static BASE_DIMENSIONS: [BaseDimension; 8] = [
    BaseDimension::Length,
    BaseDimension::Mass,
    BaseDimension::Time,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::AmountOfSubstance,
    BaseDimension::LuminousIntensity,
    BaseDimension::Information,
];

impl BaseDimension {
    pub const LIST: &[Self] = &BASE_DIMENSIONS;

    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::AmountOfSubstance => "N",
            BaseDimension::LuminousIntensity => "J",
            BaseDimension::Information => "i",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::AmountOfSubstance => "amount of substance",
            BaseDimension::LuminousIntensity => "luminous intensity",
            BaseDimension::Information => "information",
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

/// A dimension, as rational exponents over the base dimensions.
/// Conversion is possible only between units of the same dimension.
/// Zero exponents are never stored and the others are in lowest terms,
/// so equal dimensions compare equal.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Default,
    Debug,
)]
#[serde(from = "BTreeMap<BaseDimension, BigRational>")]
pub struct Dimension(BTreeMap<BaseDimension, BigRational>);

impl Dimension {
    pub const NONE: Self = Dimension(BTreeMap::new());

    pub fn base(dimension: BaseDimension) -> Self {
        Dimension(BTreeMap::from([(dimension, BigRational::one())]))
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    pub fn exponent(&self, dimension: BaseDimension) -> BigRational {
        self.0.get(&dimension).cloned().unwrap_or_else(BigRational::zero)
    }

    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&BaseDimension, &BigRational)> {
        self.0.iter()
    }

    pub fn multiply(&self, other: &Self) -> Self {
        Dimension(other.0.iter().fold(self.0.clone(), |mut m, (d, e)| {
            let exp = m.remove(d).unwrap_or_else(BigRational::zero) + e;
            if !exp.is_zero() {
                m.insert(*d, exp);
            }
            m
        }))
    }

    pub fn divide(&self, other: &Self) -> Self {
        self.multiply(&other.pow(-1))
    }

    pub fn pow(&self, n: i32) -> Self {
        self.raise(&BigInt::from(n), &BigInt::one())
    }

    pub fn root(&self, n: i32) -> Result<Self, UnitError> {
        match n > 0 {
            true => Ok(self.raise(&BigInt::one(), &BigInt::from(n))),
            false => Err(UnitError::InvalidRootOrder(n)),
        }
    }

    /// Raise to `pow / root`, for a positive root.
    pub(crate) fn raise(&self, pow: &BigInt, root: &BigInt) -> Self {
        match pow.is_zero() {
            true => Self::NONE,
            false => {
                let exp = BigRational::new(pow.clone(), root.clone());
                Dimension(
                    self.0.iter().map(|(d, e)| (*d, e * &exp)).collect(),
                )
            }
        }
    }
}

impl From<BTreeMap<BaseDimension, BigRational>> for Dimension {
    fn from(exponents: BTreeMap<BaseDimension, BigRational>) -> Self {
        Dimension(
            exponents
                .into_iter()
                .filter(|(_, e)| !e.is_zero())
                .map(|(d, e)| {
                    (d, BigRational::new(e.numer().clone(), e.denom().clone()))
                })
                .collect(),
        )
    }
}

impl From<BaseDimension> for Dimension {
    fn from(dimension: BaseDimension) -> Self {
        Self::base(dimension)
    }
}

impl Mul<&Dimension> for &Dimension {
    type Output = Dimension;
    fn mul(self, rhs: &Dimension) -> Dimension {
        self.multiply(rhs)
    }
}

impl Div<&Dimension> for &Dimension {
    type Output = Dimension;
    fn div(self, rhs: &Dimension) -> Dimension {
        self.divide(rhs)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if self.is_none() {
            return write!(f, "dimensionless");
        }
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|(d, e)| match (e.is_integer(), e.is_one()) {
                    (true, true) => d.to_string(),
                    (true, false) => format!("{}^{}", d, e.numer()),
                    (false, _) => format!("{}^({})", d, e),
                })
                .collect::<Vec<String>>()
                .join("·")
        )
    }
}
