/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod add;
pub mod chain;
pub mod math_context;
pub mod multiply;
pub mod power_of_ten;
pub mod rational;

use std::fmt::{self, Display, Formatter};
use std::num::NonZeroU64;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::error::UnitError;

pub use add::AddConverter;
pub use chain::ConverterChain;
pub use math_context::MathContext;
pub use multiply::MultiplyConverter;
pub use power_of_ten::PowerOfTenConverter;
pub use rational::RationalConverter;

/// Unit converter. Values are kept in canonical form: concatenation
/// simplifies wherever the result is again a single primitive step,
/// so equal scale factors reached along different paths compare
/// equal.
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
pub enum Converter {
    #[default]
    Identity,
    PowerOfTen(PowerOfTenConverter),
    Rational(RationalConverter),
    Add(AddConverter),
    Multiply(MultiplyConverter),
    Chain(ConverterChain),
}

impl Converter {
    pub fn power_of_ten(exponent: i32) -> Result<Self, UnitError> {
        Ok(Converter::PowerOfTen(PowerOfTenConverter::new(exponent)?))
    }

    /// Scaling by `10^exponent`; the identity for a zero exponent.
    pub fn pow10(exponent: i32) -> Self {
        match exponent {
            0 => Converter::Identity,
            i32::MIN => Converter::Chain(ConverterChain::from_steps(vec![
                Converter::pow10(-1),
                Converter::pow10(i32::MIN + 1),
            ])),
            n => Converter::PowerOfTen(PowerOfTenConverter(n)),
        }
    }

    /// Scaling by a positive fraction, in canonical form.
    pub fn fraction(numerator: NonZeroU64, denominator: NonZeroU64) -> Self {
        RationalConverter::canonical(
            BigInt::from(numerator.get()),
            BigInt::from(denominator.get()),
        )
    }

    pub fn rational<N, D>(
        numerator: N,
        denominator: D,
    ) -> Result<Self, UnitError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        Ok(Converter::Rational(RationalConverter::new(
            numerator,
            denominator,
        )?))
    }

    /// Scaling by `numerator / denominator` in canonical form: the
    /// identity, a power of ten or a reduced rational.
    pub fn ratio<N, D>(
        numerator: N,
        denominator: D,
    ) -> Result<Self, UnitError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if numerator.is_zero() || denominator.is_zero() {
            return Err(UnitError::InvalidConverter(format!(
                "invalid ratio: {}/{}",
                numerator, denominator
            )));
        }
        Ok(match denominator.is_negative() {
            true => RationalConverter::canonical(-numerator, -denominator),
            false => RationalConverter::canonical(numerator, denominator),
        })
    }

    pub fn offset(offset: BigDecimal) -> Result<Self, UnitError> {
        Ok(Converter::Add(AddConverter::new(offset)?))
    }

    pub fn multiply(factor: f64) -> Result<Self, UnitError> {
        Ok(Converter::Multiply(MultiplyConverter::new(factor)?))
    }

    pub fn convert(&self, value: f64) -> f64 {
        match self {
            Converter::Identity => value,
            Converter::PowerOfTen(c) => c.convert(value),
            Converter::Rational(c) => c.convert(value),
            Converter::Add(c) => c.convert(value),
            Converter::Multiply(c) => c.convert(value),
            Converter::Chain(c) => c.convert(value),
        }
    }

    pub fn convert_exact(
        &self,
        value: &BigDecimal,
        ctx: &MathContext,
    ) -> BigDecimal {
        match self {
            Converter::Identity => value.clone(),
            Converter::PowerOfTen(c) => c.convert_exact(value),
            Converter::Rational(c) => c.convert_exact(value, ctx),
            Converter::Add(c) => c.convert_exact(value),
            Converter::Multiply(c) => c.convert_exact(value, ctx),
            Converter::Chain(c) => c.convert_exact(value, ctx),
        }
    }

    /// The converter equivalent to applying `other` first and `self`
    /// second.
    pub fn concatenate(&self, other: &Converter) -> Converter {
        match (self, other) {
            (Converter::Identity, _) => other.clone(),
            (_, Converter::Identity) => self.clone(),
            _ => match self.merge(other) {
                Some(merged) => merged,
                None => ConverterChain::compose(self, other),
            },
        }
    }

    pub fn inverse(&self) -> Converter {
        match self {
            Converter::Identity => Converter::Identity,
            Converter::PowerOfTen(c) => Converter::PowerOfTen(c.inverse()),
            Converter::Rational(c) => Converter::Rational(c.inverse()),
            Converter::Add(c) => Converter::Add(c.inverse()),
            Converter::Multiply(c) => Converter::Multiply(c.inverse()),
            Converter::Chain(c) => Converter::Chain(c.inverse()),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Converter::Identity)
    }

    pub fn is_linear(&self) -> bool {
        match self {
            Converter::Add(_) => false,
            Converter::Chain(c) => c.is_linear(),
            _ => true,
        }
    }

    /// The scale factor of a linear converter.
    pub fn factor(&self) -> Option<f64> {
        match self {
            Converter::Identity => Some(1.0),
            Converter::PowerOfTen(c) => Some(c.factor()),
            Converter::Rational(c) => Some(c.factor()),
            Converter::Multiply(c) => Some(c.factor()),
            Converter::Add(_) => None,
            Converter::Chain(c) => c
                .steps()
                .iter()
                .try_fold(1.0, |acc, step| Some(acc * step.factor()?)),
        }
    }

    /// Primitive conversion steps, in composition order. The identity
    /// has none.
    pub fn steps(&self) -> Vec<Converter> {
        match self {
            Converter::Identity => Vec::new(),
            Converter::Chain(c) => c.steps().to_vec(),
            _ => vec![self.clone()],
        }
    }

    /// Combine two primitive steps into one, if their kinds allow it.
    /// Rational steps absorb powers of ten.
    fn merge(&self, other: &Converter) -> Option<Converter> {
        match (self, other) {
            (Converter::PowerOfTen(a), Converter::PowerOfTen(b)) => {
                a.concatenate(b)
            }
            (Converter::PowerOfTen(p), Converter::Rational(r))
            | (Converter::Rational(r), Converter::PowerOfTen(p)) => {
                r.concatenate_power_of_ten(p)
            }
            (Converter::Rational(a), Converter::Rational(b)) => {
                Some(a.concatenate_rational(b))
            }
            (Converter::Add(a), Converter::Add(b)) => a.concatenate(b),
            (Converter::Multiply(a), Converter::Multiply(b)) => {
                a.concatenate(b)
            }
            _ => None,
        }
    }
}

impl Display for Converter {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Converter::Identity => write!(f, "Identity"),
            Converter::PowerOfTen(c) => c.fmt(f),
            Converter::Rational(c) => c.fmt(f),
            Converter::Add(c) => c.fmt(f),
            Converter::Multiply(c) => c.fmt(f),
            Converter::Chain(c) => c.fmt(f),
        }
    }
}
