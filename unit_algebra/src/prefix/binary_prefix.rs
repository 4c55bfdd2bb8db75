/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use super::prefix_trait::Prefix;
use crate::converter::Converter;

const KIBI: NonZeroU64 = match NonZeroU64::new(1024) {
    Some(n) => n,
    None => panic!("zero base"),
};

/// Binary (base 1024) prefixes
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
pub enum BinaryPrefix {
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl Prefix for BinaryPrefix {
    const BASE: u64 = 1024;
    const SCALE: &'static [Self] = &[
        Self::Kibi,
        Self::Mebi,
        Self::Gibi,
        Self::Tebi,
        Self::Pebi,
        Self::Exbi,
        Self::Zebi,
        Self::Yobi,
    ];

    fn power(&self) -> i32 {
        match self {
            BinaryPrefix::Kibi => 1,
            BinaryPrefix::Mebi => 2,
            BinaryPrefix::Gibi => 3,
            BinaryPrefix::Tebi => 4,
            BinaryPrefix::Pebi => 5,
            BinaryPrefix::Exbi => 6,
            BinaryPrefix::Zebi => 7,
            BinaryPrefix::Yobi => 8,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            BinaryPrefix::Kibi => "Ki",
            BinaryPrefix::Mebi => "Mi",
            BinaryPrefix::Gibi => "Gi",
            BinaryPrefix::Tebi => "Ti",
            BinaryPrefix::Pebi => "Pi",
            BinaryPrefix::Exbi => "Ei",
            BinaryPrefix::Zebi => "Zi",
            BinaryPrefix::Yobi => "Yi",
        }
    }

    /// Rational `1024^n / 1`.
    fn converter(&self) -> Converter {
        let kibi = Converter::fraction(KIBI, NonZeroU64::MIN);
        (0..self.power())
            .fold(Converter::Identity, |acc, _| acc.concatenate(&kibi))
    }
}

impl Display for BinaryPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.prefix())
    }
}
