/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::{Converter, MathContext};
use crate::error::UnitError;

/// Composition of primitive steps that do not simplify any further,
/// in composition order: the last step is applied first.
#[derive(
    Serialize, Deserialize, PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug,
)]
#[serde(try_from = "Vec<Converter>")]
pub struct ConverterChain(Vec<Converter>);

/// Only chains that composing their steps would produce are accepted.
impl TryFrom<Vec<Converter>> for ConverterChain {
    type Error = UnitError;
    fn try_from(steps: Vec<Converter>) -> Result<Self, UnitError> {
        if steps
            .iter()
            .any(|s| matches!(s, Converter::Identity | Converter::Chain(_)))
        {
            return Err(UnitError::InvalidConverter(
                "chain steps must be primitive converters".to_string(),
            ));
        }
        let composed = steps
            .iter()
            .fold(Converter::Identity, |c, step| c.concatenate(step));
        match composed {
            Converter::Chain(chain) if chain.0 == steps => Ok(chain),
            c => Err(UnitError::InvalidConverter(format!(
                "chain simplifies to {}",
                c
            ))),
        }
    }
}

impl ConverterChain {
    /// Compose `left ∘ right`, merging adjacent steps where possible.
    pub(super) fn compose(left: &Converter, right: &Converter) -> Converter {
        let mut steps = Vec::new();
        for step in left.steps().into_iter().chain(right.steps()) {
            push_step(&mut steps, step);
        }
        let result = match steps.len() {
            0 => Converter::Identity,
            1 => steps.remove(0),
            _ => Converter::Chain(Self(steps)),
        };
        log::trace!("{} ∘ {} = {}", left, right, result);
        result
    }

    /// For steps already known not to merge.
    pub(super) fn from_steps(steps: Vec<Converter>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[Converter] {
        &self.0
    }

    pub fn is_linear(&self) -> bool {
        self.0.iter().all(Converter::is_linear)
    }

    pub fn convert(&self, value: f64) -> f64 {
        self.0.iter().rev().fold(value, |v, step| step.convert(v))
    }

    pub fn convert_exact(
        &self,
        value: &BigDecimal,
        ctx: &MathContext,
    ) -> BigDecimal {
        self.0
            .iter()
            .rev()
            .fold(value.clone(), |v, step| step.convert_exact(&v, ctx))
    }

    pub fn inverse(&self) -> Self {
        Self(self.0.iter().rev().map(Converter::inverse).collect())
    }
}

fn push_step(steps: &mut Vec<Converter>, step: Converter) {
    let mut step = step;
    while let Some(last) = steps.pop() {
        match last.merge(&step) {
            Some(Converter::Identity) => return,
            Some(merged) => step = merged,
            None => {
                steps.push(last);
                break;
            }
        }
    }
    steps.push(step);
}

impl Display for ConverterChain {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|step| step.to_string())
                .collect::<Vec<String>>()
                .join(" ∘ ")
        )
    }
}
