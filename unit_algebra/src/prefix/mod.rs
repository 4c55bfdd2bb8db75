/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod prefix_trait;

pub mod binary_prefix;
pub mod metric_prefix;

pub use prefix_trait::Prefix;

pub use binary_prefix::BinaryPrefix;
pub use metric_prefix::MetricPrefix;
