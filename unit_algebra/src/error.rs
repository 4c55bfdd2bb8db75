/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("Invalid converter: {0}")]
    InvalidConverter(String),
    #[error("Unsupported conversion: {0}")]
    UnsupportedConversion(String),
    #[error("Invalid root order: {0}")]
    InvalidRootOrder(i32),
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
    #[error("Incompatible units: {0} <-> {1}")]
    Incompatible(Dimension, Dimension),
}
