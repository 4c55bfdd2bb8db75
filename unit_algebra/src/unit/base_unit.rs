/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Dimensionally independent unit. Its own system unit, with an
/// identity system converter.
#[derive(
    Serialize, Deserialize, PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug,
)]
pub struct BaseUnit {
    symbol: String,
    dimension: Dimension,
}

impl BaseUnit {
    pub fn new<S: Into<String>>(symbol: S, dimension: Dimension) -> Self {
        Self {
            symbol: symbol.into(),
            dimension,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }
}

impl Display for BaseUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol)
    }
}
