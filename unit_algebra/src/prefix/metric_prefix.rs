/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::prefix_trait::Prefix;
use crate::converter::Converter;

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
pub enum MetricPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

const METRIC_PREFIXES: [MetricPrefix; 20] = [
    MetricPrefix::Yocto,
    MetricPrefix::Zepto,
    MetricPrefix::Atto,
    MetricPrefix::Femto,
    MetricPrefix::Pico,
    MetricPrefix::Nano,
    MetricPrefix::Micro,
    MetricPrefix::Milli,
    MetricPrefix::Centi,
    MetricPrefix::Deci,
    MetricPrefix::Deca,
    MetricPrefix::Hecto,
    MetricPrefix::Kilo,
    MetricPrefix::Mega,
    MetricPrefix::Giga,
    MetricPrefix::Tera,
    MetricPrefix::Peta,
    MetricPrefix::Exa,
    MetricPrefix::Zetta,
    MetricPrefix::Yotta,
];

impl Prefix for MetricPrefix {
    const BASE: u64 = 10;
    const SCALE: &[Self] = &METRIC_PREFIXES;

    fn power(&self) -> i32 {
        match self {
            MetricPrefix::Yocto => -24,
            MetricPrefix::Zepto => -21,
            MetricPrefix::Atto => -18,
            MetricPrefix::Femto => -15,
            MetricPrefix::Pico => -12,
            MetricPrefix::Nano => -9,
            MetricPrefix::Micro => -6,
            MetricPrefix::Milli => -3,
            MetricPrefix::Centi => -2,
            MetricPrefix::Deci => -1,
            MetricPrefix::Deca => 1,
            MetricPrefix::Hecto => 2,
            MetricPrefix::Kilo => 3,
            MetricPrefix::Mega => 6,
            MetricPrefix::Giga => 9,
            MetricPrefix::Tera => 12,
            MetricPrefix::Peta => 15,
            MetricPrefix::Exa => 18,
            MetricPrefix::Zetta => 21,
            MetricPrefix::Yotta => 24,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            MetricPrefix::Yocto => "y",
            MetricPrefix::Zepto => "z",
            MetricPrefix::Atto => "a",
            MetricPrefix::Femto => "f",
            MetricPrefix::Pico => "p",
            MetricPrefix::Nano => "n",
            MetricPrefix::Micro => "µ",
            MetricPrefix::Milli => "m",
            MetricPrefix::Centi => "c",
            MetricPrefix::Deci => "d",
            MetricPrefix::Deca => "da",
            MetricPrefix::Hecto => "h",
            MetricPrefix::Kilo => "k",
            MetricPrefix::Mega => "M",
            MetricPrefix::Giga => "G",
            MetricPrefix::Tera => "T",
            MetricPrefix::Peta => "P",
            MetricPrefix::Exa => "E",
            MetricPrefix::Zetta => "Z",
            MetricPrefix::Yotta => "Y",
        }
    }

    fn converter(&self) -> Converter {
        Converter::pow10(self.power())
    }
}

impl Display for MetricPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.prefix())
    }
}
