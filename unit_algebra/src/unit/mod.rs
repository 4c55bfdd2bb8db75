/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod base_unit;
pub mod product_unit;
pub mod transformed_unit;

use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::converter::Converter;
use crate::dimension::Dimension;
use crate::error::UnitError;

pub use base_unit::BaseUnit;
pub use product_unit::{
    power_of, product_of, quotient_of, root_of, ProductElement, ProductUnit,
};
pub use transformed_unit::TransformedUnit;

/// A unit of measurement. Units are immutable values compared
/// structurally: every arithmetic operation returns the canonical
/// representative, so equal units built along different paths compare
/// equal.
#[derive(
    Serialize, Deserialize, PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug,
)]
pub enum Unit {
    Base(BaseUnit),
    Transformed(TransformedUnit),
    Product(ProductUnit),
}

impl Unit {
    /// The dimensionless unit.
    pub const ONE: Unit = Unit::Product(ProductUnit::ONE);

    pub fn base<S: Into<String>>(symbol: S, dimension: Dimension) -> Self {
        Unit::Base(BaseUnit::new(symbol, dimension))
    }

    /// Display symbol, if the unit has one of its own.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Unit::Base(u) => Some(u.symbol()),
            Unit::Transformed(u) => u.symbol(),
            Unit::Product(_) => None,
        }
    }

    /// Name a transformed unit. Other units keep their symbol.
    pub fn with_symbol<S: Into<String>>(self, symbol: S) -> Self {
        match self {
            Unit::Transformed(u) => Unit::Transformed(u.with_symbol(symbol)),
            u => u,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Base(u) => u.dimension().clone(),
            Unit::Transformed(u) => u.dimension(),
            Unit::Product(u) => u.dimension(),
        }
    }

    pub fn system_unit(&self) -> Unit {
        match self {
            Unit::Base(_) => self.clone(),
            Unit::Transformed(u) => u.system_unit(),
            Unit::Product(u) => u.system_unit(),
        }
    }

    pub fn is_system_unit(&self) -> bool {
        self.system_unit() == *self
    }

    /// Converter from this unit to its system unit.
    pub fn system_converter(&self) -> Result<Converter, UnitError> {
        match self {
            Unit::Base(_) => Ok(Converter::Identity),
            Unit::Transformed(u) => u.system_converter(),
            Unit::Product(u) => u.system_converter(),
        }
    }

    /// Converter from this unit to `target`. Both must share the same
    /// system unit.
    pub fn converter_to(&self, target: &Unit) -> Result<Converter, UnitError> {
        if self == target {
            return Ok(Converter::Identity);
        }
        if self.system_unit() != target.system_unit() {
            log::debug!("cannot convert {} to {}", self, target);
            return Err(UnitError::Incompatible(
                self.dimension(),
                target.dimension(),
            ));
        }
        let to_system = self.system_converter()?;
        let from_system = target.system_converter()?.inverse();
        Ok(from_system.concatenate(&to_system))
    }

    /// Factors of this unit as a product. A plain unit is its own single
    /// factor.
    pub fn elements(&self) -> Vec<ProductElement> {
        product_unit::elements_of(self)
    }

    /// The unit defined by `converter` to this unit. Transforming a
    /// transformed unit folds both converters onto the parent.
    pub fn transform(&self, converter: &Converter) -> Unit {
        match (self, converter.is_identity()) {
            (_, true) => self.clone(),
            (Unit::Transformed(u), false) => u
                .parent()
                .transform(&u.converter().concatenate(converter)),
            (_, false) => Unit::Transformed(TransformedUnit::new(
                self.clone(),
                converter.clone(),
            )),
        }
    }

    /// This unit scaled by `numerator / denominator`.
    pub fn multiply_by<N, D>(
        &self,
        numerator: N,
        denominator: D,
    ) -> Result<Unit, UnitError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        Ok(self.transform(&Converter::ratio(numerator, denominator)?))
    }

    pub fn divide_by<D: Into<BigInt>>(
        &self,
        divisor: D,
    ) -> Result<Unit, UnitError> {
        self.multiply_by(1, divisor)
    }

    pub fn multiply(&self, other: &Unit) -> Unit {
        product_of(self, other)
    }

    pub fn divide(&self, other: &Unit) -> Unit {
        product_of(self, &other.inverse())
    }

    pub fn inverse(&self) -> Unit {
        quotient_of(&Unit::ONE, self)
    }

    pub fn pow(&self, n: i32) -> Unit {
        power_of(self, n)
    }

    pub fn root(&self, n: i32) -> Result<Unit, UnitError> {
        root_of(self, n)
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::ONE
    }
}

impl From<BaseUnit> for Unit {
    fn from(unit: BaseUnit) -> Self {
        Unit::Base(unit)
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Unit::Base(u) => u.fmt(f),
            Unit::Transformed(u) => u.fmt(f),
            Unit::Product(u) => u.fmt(f),
        }
    }
}

impl Mul<&Unit> for &Unit {
    type Output = Unit;
    fn mul(self, rhs: &Unit) -> Unit {
        self.multiply(rhs)
    }
}

impl Div<&Unit> for &Unit {
    type Output = Unit;
    fn div(self, rhs: &Unit) -> Unit {
        self.divide(rhs)
    }
}
