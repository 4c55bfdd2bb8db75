/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! A small catalogue of commonly used units.

use std::num::NonZeroU64;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::converter::{AddConverter, Converter};
use crate::dimension::{BaseDimension, Dimension};
use crate::unit::Unit;

const fn non_zero(n: u64) -> NonZeroU64 {
    match NonZeroU64::new(n) {
        Some(n) => n,
        None => panic!("zero factor"),
    }
}

const SECONDS_PER_MINUTE: NonZeroU64 = non_zero(60);
const SECONDS_PER_HOUR: NonZeroU64 = non_zero(3600);
const SECONDS_PER_DAY: NonZeroU64 = non_zero(86400);
const BITS_PER_BYTE: NonZeroU64 = non_zero(8);

pub const ONE: Unit = Unit::ONE;

fn base(symbol: &str, dimension: BaseDimension) -> Unit {
    Unit::base(symbol, Dimension::base(dimension))
}

fn scaled(unit: Unit, factor: NonZeroU64, symbol: &str) -> Unit {
    unit.transform(&Converter::fraction(factor, NonZeroU64::MIN))
        .with_symbol(symbol)
}

pub fn metre() -> Unit {
    base("m", BaseDimension::Length)
}

pub fn kilogram() -> Unit {
    base("kg", BaseDimension::Mass)
}

pub fn second() -> Unit {
    base("s", BaseDimension::Time)
}

pub fn ampere() -> Unit {
    base("A", BaseDimension::Current)
}

pub fn kelvin() -> Unit {
    base("K", BaseDimension::Temperature)
}

pub fn mole() -> Unit {
    base("mol", BaseDimension::AmountOfSubstance)
}

pub fn candela() -> Unit {
    base("cd", BaseDimension::LuminousIntensity)
}

pub fn bit() -> Unit {
    base("bit", BaseDimension::Information)
}

/// Watt, kept as its own base unit of dimension M·L²·T⁻³.
pub fn watt() -> Unit {
    let dimension = Dimension::base(BaseDimension::Mass)
        .multiply(&Dimension::base(BaseDimension::Length).pow(2))
        .divide(&Dimension::base(BaseDimension::Time).pow(3));
    Unit::base("W", dimension)
}

pub fn gram() -> Unit {
    kilogram().transform(&Converter::pow10(-3)).with_symbol("g")
}

pub fn minute() -> Unit {
    scaled(second(), SECONDS_PER_MINUTE, "min")
}

pub fn hour() -> Unit {
    scaled(second(), SECONDS_PER_HOUR, "h")
}

pub fn day() -> Unit {
    scaled(second(), SECONDS_PER_DAY, "d")
}

pub fn byte() -> Unit {
    scaled(bit(), BITS_PER_BYTE, "B")
}

pub fn square_metre() -> Unit {
    metre().pow(2)
}

pub fn cubic_metre() -> Unit {
    metre().pow(3)
}

pub fn litre() -> Unit {
    cubic_metre().transform(&Converter::pow10(-3)).with_symbol("l")
}

/// Degree Celsius: kelvin offset by 273.15.
pub fn celsius() -> Unit {
    /* 273.15 is a finite double, so this is never the identity. */
    let offset = AddConverter::from_exact(BigDecimal::new(
        BigInt::from(27315),
        2,
    ))
    .map(Converter::Add)
    .unwrap_or_default();
    kelvin().transform(&offset).with_symbol("°C")
}
