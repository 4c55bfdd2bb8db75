/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Unit;
use crate::converter::Converter;
use crate::dimension::Dimension;
use crate::error::UnitError;

/// A unit derived from a parent unit by a converter (to the parent).
/// The display symbol does not take part in comparisons.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(try_from = "RawTransformedUnit")]
pub struct TransformedUnit {
    parent: Arc<Unit>,
    converter: Converter,
    symbol: Option<String>,
}

#[derive(Deserialize)]
struct RawTransformedUnit {
    parent: Arc<Unit>,
    converter: Converter,
    symbol: Option<String>,
}

/// The parent is never itself transformed, and the converter is never
/// the identity.
impl TryFrom<RawTransformedUnit> for TransformedUnit {
    type Error = UnitError;
    fn try_from(raw: RawTransformedUnit) -> Result<Self, UnitError> {
        if raw.converter.is_identity() {
            return Err(UnitError::InvalidUnit(format!(
                "{} transformed by the identity",
                raw.parent
            )));
        }
        if let Unit::Transformed(_) = raw.parent.as_ref() {
            return Err(UnitError::InvalidUnit(format!(
                "{} is already transformed",
                raw.parent
            )));
        }
        Ok(Self {
            parent: raw.parent,
            converter: raw.converter,
            symbol: raw.symbol,
        })
    }
}

impl TransformedUnit {
    pub(super) fn new(parent: Unit, converter: Converter) -> Self {
        Self {
            parent: Arc::new(parent),
            converter,
            symbol: None,
        }
    }

    pub fn parent(&self) -> &Unit {
        &self.parent
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn with_symbol<S: Into<String>>(self, symbol: S) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..self
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.parent.dimension()
    }

    pub fn system_unit(&self) -> Unit {
        self.parent.system_unit()
    }

    pub fn system_converter(&self) -> Result<Converter, UnitError> {
        Ok(self.parent.system_converter()?.concatenate(&self.converter))
    }
}

impl PartialEq for TransformedUnit {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent && self.converter == other.converter
    }
}

impl Eq for TransformedUnit {}

impl Hash for TransformedUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent.hash(state);
        self.converter.hash(state);
    }
}

impl PartialOrd for TransformedUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TransformedUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parent
            .cmp(&other.parent)
            .then_with(|| self.converter.cmp(&other.converter))
    }
}

impl Display for TransformedUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match &self.symbol {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "{}[{}]", self.parent, self.converter),
        }
    }
}
