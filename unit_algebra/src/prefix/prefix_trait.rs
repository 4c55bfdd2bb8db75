/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::converter::Converter;
use crate::unit::Unit;

pub trait Prefix: Sized + Copy + 'static {
    const BASE: u64;
    const SCALE: &'static [Self];

    fn power(&self) -> i32;
    fn prefix(&self) -> &'static str;
    fn converter(&self) -> Converter;

    fn from_power(n: i32) -> Option<Self> {
        Self::SCALE.iter().copied().find(|p| p.power() == n)
    }

    fn multiplier(&self) -> f64 {
        (Self::BASE as f64).powi(self.power())
    }

    /// The prefixed unit. Named units get the prefix in front of their
    /// symbol.
    fn apply(self, unit: &Unit) -> Unit {
        let prefixed = unit.transform(&self.converter());
        match unit.symbol() {
            Some(symbol) => {
                prefixed.with_symbol(format!("{}{}", self.prefix(), symbol))
            }
            None => prefixed,
        }
    }
}
