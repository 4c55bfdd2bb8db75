/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod converter;
pub mod dimension;
pub mod error;
pub mod prefix;
pub mod unit;
pub mod units;

mod math;

pub use converter::{
    AddConverter, Converter, ConverterChain, MathContext, MultiplyConverter,
    PowerOfTenConverter, RationalConverter,
};
pub use dimension::{BaseDimension, Dimension};
pub use error::UnitError;
pub use unit::{
    power_of, product_of, quotient_of, root_of, BaseUnit, ProductElement,
    ProductUnit, TransformedUnit, Unit,
};

pub use prefix::{BinaryPrefix, MetricPrefix, Prefix};
