//! Engine configuration.

use serde::{Deserialize, Deserializer, Serialize};

/// Largest accepted [`EngineConfig::precision`].
pub const MAX_PRECISION: usize = 100;

/// Unit used by trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
	#[default]
	Rad,
	Deg,
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
	pub angle_unit: AngleUnit,
	/// Maximum digits after the decimal point, at most [`MAX_PRECISION`].
	#[serde(deserialize_with = "bounded_precision")]
	pub precision: usize,
	/// Separator inserted between thousands groups of the integer part.
	pub grouping_separator: Option<char>,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			angle_unit: AngleUnit::Rad,
			precision: 10,
			grouping_separator: None,
		}
	}
}

fn bounded_precision<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
	let precision = usize::deserialize(deserializer)?;
	if precision > MAX_PRECISION {
		return Err(serde::de::Error::custom(format!(
			"precision {precision} exceeds the maximum of {MAX_PRECISION}"
		)));
	}
	Ok(precision)
}
