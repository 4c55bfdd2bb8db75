/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use super::Unit;
use crate::converter::Converter;
use crate::dimension::Dimension;
use crate::error::UnitError;
use crate::math::reduce_ratio;

/// One factor `unit^(power/root)` of a product unit. The exponent is
/// kept in lowest terms with a positive root.
#[derive(
    Serialize, Deserialize, PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug,
)]
pub struct ProductElement {
    unit: Unit,
    power: BigInt,
    root: BigInt,
}

impl ProductElement {
    fn new(unit: Unit, power: BigInt, root: BigInt) -> Self {
        Self { unit, power, root }
    }

    fn reduced(unit: Unit, power: &BigInt, root: &BigInt) -> Self {
        let (power, root) = reduce_ratio(power, root);
        Self { unit, power, root }
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn power(&self) -> &BigInt {
        &self.power
    }

    pub fn root(&self) -> &BigInt {
        &self.root
    }
}

/// Product of units raised to rational powers, in canonical form: one
/// element per distinct unit, no zero powers, elements sorted. Only
/// the functions in this module construct product units, and a
/// product of a single unit to the power one is returned as that unit.
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
#[serde(try_from = "RawProductUnit")]
pub struct ProductUnit {
    elements: Vec<ProductElement>,
}

#[derive(Deserialize)]
struct RawProductUnit {
    elements: Vec<ProductElement>,
}

/// Only canonical products are accepted: re-canonicalizing the
/// elements must give back the same product.
impl TryFrom<RawProductUnit> for ProductUnit {
    type Error = UnitError;
    fn try_from(raw: RawProductUnit) -> Result<Self, UnitError> {
        if let Some(e) = raw.elements.iter().find(|e| !e.root.is_positive()) {
            return Err(UnitError::InvalidUnit(format!(
                "{} has non-positive root {}",
                e.unit, e.root
            )));
        }
        if let Some(e) = raw
            .elements
            .iter()
            .find(|e| matches!(e.unit, Unit::Product(_)))
        {
            return Err(UnitError::InvalidUnit(format!(
                "nested product {}",
                e.unit
            )));
        }
        let product = ProductUnit {
            elements: raw.elements,
        };
        let canonical = from_elements(product.elements.iter().fold(
            Vec::new(),
            |elements, e| {
                let e =
                    ProductElement::reduced(e.unit.clone(), &e.power, &e.root);
                merge(&elements, &[e])
            },
        ));
        match canonical {
            Unit::Product(p) if p == product => Ok(product),
            _ => Err(UnitError::InvalidUnit(format!(
                "{} is not in canonical form",
                product
            ))),
        }
    }
}

impl ProductUnit {
    /// The dimensionless unit.
    pub const ONE: Self = ProductUnit {
        elements: Vec::new(),
    };

    pub fn elements(&self) -> &[ProductElement] {
        &self.elements
    }

    pub fn is_one(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn dimension(&self) -> Dimension {
        self.elements.iter().fold(Dimension::NONE, |dim, e| {
            dim.multiply(&e.unit.dimension().raise(&e.power, &e.root))
        })
    }

    pub fn system_unit(&self) -> Unit {
        self.elements.iter().fold(Unit::ONE, |unit, e| {
            product_of(&unit, &raise(&e.unit.system_unit(), &e.power, &e.root))
        })
    }

    /// Compose the elements' system converters. Elements with a
    /// fractional exponent or a non-linear system converter have no
    /// scale-factor equivalent and are rejected.
    pub fn system_converter(&self) -> Result<Converter, UnitError> {
        self.elements
            .iter()
            .try_fold(Converter::Identity, |converter, e| {
                if !e.root.is_one() {
                    log::debug!(
                        "no system converter for {}: {} has exponent {}/{}",
                        self,
                        e.unit,
                        e.power,
                        e.root
                    );
                    return Err(UnitError::UnsupportedConversion(format!(
                        "{} holds a base unit with fractional exponent",
                        e.unit
                    )));
                }
                let step = e.unit.system_converter()?;
                if step.is_identity() {
                    return Ok(converter);
                }
                if !step.is_linear() {
                    log::debug!(
                        "no system converter for {}: {} is non-linear",
                        self,
                        e.unit
                    );
                    return Err(UnitError::UnsupportedConversion(format!(
                        "{} is non-linear, cannot convert",
                        e.unit
                    )));
                }
                let step = match e.power.is_negative() {
                    true => step.inverse(),
                    false => step,
                };
                let times = e.power.magnitude().to_u32().ok_or_else(|| {
                    log::debug!(
                        "no system converter for {}: exponent {} of {} \
                         out of range",
                        self,
                        e.power,
                        e.unit
                    );
                    UnitError::UnsupportedConversion(format!(
                        "{} has exponent {} out of range",
                        e.unit, e.power
                    ))
                })?;
                Ok(converter.concatenate(&repeat(&step, times)))
            })
    }
}

/// `step` composed with itself `times` times, by repeated squaring.
fn repeat(step: &Converter, times: u32) -> Converter {
    let mut result = Converter::Identity;
    let mut square = step.clone();
    let mut rest = times;
    while rest > 0 {
        if rest & 1 == 1 {
            result = result.concatenate(&square);
        }
        rest >>= 1;
        if rest > 0 {
            square = square.concatenate(&square);
        }
    }
    result
}

/// A product unit equals a bare unit when it wraps exactly that unit.
impl PartialEq<Unit> for ProductUnit {
    fn eq(&self, other: &Unit) -> bool {
        match other {
            Unit::Product(p) => self == p,
            _ => matches!(
                self.elements.as_slice(),
                [e] if e.power == e.root && e.unit == *other
            ),
        }
    }
}

/// Canonical product `left * right`. A transformed operand whose
/// parent is a product unit is unwrapped, so that its converter ends up
/// on the result.
pub fn product_of(left: &Unit, right: &Unit) -> Unit {
    product_with(left, right, Converter::Identity)
}

fn product_with(left: &Unit, right: &Unit, converter: Converter) -> Unit {
    if let Unit::Transformed(t) = left {
        if let Unit::Product(_) = t.parent() {
            return product_with(
                t.parent(),
                right,
                converter.concatenate(t.converter()),
            );
        }
    }
    if let Unit::Transformed(t) = right {
        if let Unit::Product(_) = t.parent() {
            return product_with(
                left,
                t.parent(),
                converter.concatenate(t.converter()),
            );
        }
    }
    from_elements(merge(&elements_of(left), &elements_of(right)))
        .transform(&converter)
}

/// Canonical quotient `left / right`.
pub fn quotient_of(left: &Unit, right: &Unit) -> Unit {
    from_elements(merge(&elements_of(left), &invert(&elements_of(right))))
}

/// Canonical power `unit^n`.
pub fn power_of(unit: &Unit, n: i32) -> Unit {
    raise(unit, &BigInt::from(n), &BigInt::one())
}

/// Canonical root `unit^(1/n)`, for `n > 0`.
pub fn root_of(unit: &Unit, n: i32) -> Result<Unit, UnitError> {
    match n > 0 {
        true => Ok(raise(unit, &BigInt::one(), &BigInt::from(n))),
        false => Err(UnitError::InvalidRootOrder(n)),
    }
}

/// Raise to `pow / root`; the root must be positive.
pub(crate) fn raise(unit: &Unit, pow: &BigInt, root: &BigInt) -> Unit {
    let elements = elements_of(unit)
        .into_iter()
        .map(|e| {
            ProductElement::reduced(e.unit, &(e.power * pow), &(e.root * root))
        })
        .collect::<Vec<_>>();
    from_elements(merge(&elements, &[]))
}

pub(super) fn elements_of(unit: &Unit) -> Vec<ProductElement> {
    match unit {
        Unit::Product(p) => p.elements.clone(),
        _ => vec![ProductElement::new(
            unit.clone(),
            BigInt::one(),
            BigInt::one(),
        )],
    }
}

fn invert(elements: &[ProductElement]) -> Vec<ProductElement> {
    elements
        .iter()
        .map(|e| {
            ProductElement::new(e.unit.clone(), -&e.power, e.root.clone())
        })
        .collect()
}

/// Merge two element lists: exponents of the same unit are added, zero
/// exponents dropped and unmatched right elements appended.
fn merge(
    left: &[ProductElement],
    right: &[ProductElement],
) -> Vec<ProductElement> {
    let mut result = left
        .iter()
        .filter_map(|l| {
            let e = match right.iter().find(|r| r.unit == l.unit) {
                Some(r) => ProductElement::reduced(
                    l.unit.clone(),
                    &(&l.power * &r.root + &r.power * &l.root),
                    &(&l.root * &r.root),
                ),
                None => l.clone(),
            };
            match e.power.is_zero() {
                true => None,
                false => Some(e),
            }
        })
        .collect::<Vec<_>>();
    result.extend(
        right
            .iter()
            .filter(|r| !r.power.is_zero())
            .filter(|r| !left.iter().any(|l| l.unit == r.unit))
            .cloned(),
    );
    result
}

fn from_elements(mut elements: Vec<ProductElement>) -> Unit {
    let unit = match elements.len() {
        0 => Unit::ONE,
        1 if elements[0].power == elements[0].root => elements.remove(0).unit,
        _ => {
            elements.sort();
            Unit::Product(ProductUnit { elements })
        }
    };
    log::trace!("canonical product: {}", unit);
    unit
}

impl Display for ProductUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let numerator = self
            .elements
            .iter()
            .filter(|e| e.power.is_positive())
            .map(|e| factor(e, &e.power))
            .collect::<Vec<String>>();
        let denominator = self
            .elements
            .iter()
            .filter(|e| e.power.is_negative())
            .map(|e| factor(e, &-&e.power))
            .collect::<Vec<String>>();
        match numerator.is_empty() {
            true => write!(f, "1")?,
            false => write!(f, "{}", numerator.join("\u{22c5}"))?,
        }
        if !denominator.is_empty() {
            write!(f, "/{}", denominator.join("\u{22c5}"))?;
        }
        Ok(())
    }
}

fn factor(element: &ProductElement, power: &BigInt) -> String {
    match element.root.is_one() {
        true => format!("{}{}", element.unit, superscript(power)),
        false => format!("{}^({}/{})", element.unit, power, element.root),
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

fn superscript(val: &BigInt) -> String {
    match val.is_one() {
        true => String::new(),
        false => val
            .to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None => c,
            })
            .collect(),
    }
}
