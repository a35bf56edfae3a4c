use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Identifies the retrieval strategies exposed as tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
	#[default]
	Dense,
	Sparse,
	Hybrid,
}

impl SearchMode {
	/// Stable string identifier for the mode, used in configuration and logs.
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			SearchMode::Dense => "dense",
			SearchMode::Sparse => "sparse",
			SearchMode::Hybrid => "hybrid",
		}
	}

	/// Label shown on the tab when the configuration does not override it.
	#[must_use]
	pub const fn default_label(self) -> &'static str {
		match self {
			SearchMode::Dense => "Dense",
			SearchMode::Sparse => "Sparse",
			SearchMode::Hybrid => "Hybrid",
		}
	}

	/// List of all supported modes in their default order.
	#[must_use]
	pub const fn all() -> [SearchMode; 3] {
		[SearchMode::Dense, SearchMode::Sparse, SearchMode::Hybrid]
	}

	/// Mode following `self` in tab order, wrapping around.
	#[must_use]
	pub fn next(self) -> SearchMode {
		let modes = Self::all();
		let index = self.position();
		modes[(index + 1) % modes.len()]
	}

	/// Mode preceding `self` in tab order, wrapping around.
	#[must_use]
	pub fn previous(self) -> SearchMode {
		let modes = Self::all();
		let index = self.position();
		modes[(index + modes.len() - 1) % modes.len()]
	}

	fn position(self) -> usize {
		Self::all()
			.iter()
			.position(|mode| *mode == self)
			.unwrap_or(0)
	}
}

impl fmt::Display for SearchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Returned when a string does not name a known [`SearchMode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search mode '{0}' (expected one of: dense, sparse, hybrid)")]
pub struct UnknownMode(pub String);

impl FromStr for SearchMode {
	type Err = UnknownMode;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Self::all()
			.into_iter()
			.find(|mode| mode.id() == normalized)
			.ok_or(UnknownMode(normalized))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cycling_wraps_in_both_directions() {
		assert_eq!(SearchMode::Hybrid.next(), SearchMode::Dense);
		assert_eq!(SearchMode::Dense.previous(), SearchMode::Hybrid);
		assert_eq!(SearchMode::Dense.next(), SearchMode::Sparse);
	}

	#[test]
	fn parses_ids_case_insensitively() {
		assert_eq!(" Sparse ".parse::<SearchMode>(), Ok(SearchMode::Sparse));
		assert!("semantic".parse::<SearchMode>().is_err());
	}
}
