use super::types::Caps;

/// Inclusive range a user-adjustable number is clamped into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limit {
	pub min: u32,
	pub max: u32,
	pub default: u32,
}

impl Limit {
	pub const fn new(min: u32, max: u32, default: u32) -> Self {
		Self { min, max, default }
	}

	pub fn clamp(&self, value: i64) -> u32 {
		value.clamp(self.min as i64, self.max as i64) as u32
	}

	/// Clamps text from an input control; anything that is not an integer
	/// falls back to the default.
	pub fn parse(&self, raw: &str) -> u32 {
		raw.trim()
			.parse::<i64>()
			.map(|v| self.clamp(v))
			.unwrap_or_else(|_| self.clamp(self.default as i64))
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapLimits {
	pub max_nodes: Limit,
	pub max_edges: Limit,
}

impl CapLimits {
	pub fn clamp(&self, max_nodes: i64, max_edges: i64) -> Caps {
		Caps {
			max_nodes: self.max_nodes.clamp(max_nodes),
			max_edges: self.max_edges.clamp(max_edges),
		}
	}

	pub fn defaults(&self) -> Caps {
		self.clamp(self.max_nodes.default as i64, self.max_edges.default as i64)
	}
}

impl Default for CapLimits {
	fn default() -> Self {
		Self {
			max_nodes: Limit::new(1, 2000, 100),
			max_edges: Limit::new(1, 5000, 300),
		}
	}
}

/// Bounds for the random graph generator inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateLimits {
	pub nodes: Limit,
	pub edges: Limit,
}

impl Default for GenerateLimits {
	fn default() -> Self {
		Self {
			nodes: Limit::new(1, 2000, 30),
			edges: Limit::new(0, 5000, 40),
		}
	}
}

/// Interaction parameters handed to the pan/zoom widget on every attach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomOptions {
	pub controls_enabled: bool,
	pub zoom_scale_sensitivity: f64,
	pub min_zoom: f64,
	pub max_zoom: f64,
}

impl Default for PanZoomOptions {
	fn default() -> Self {
		Self {
			controls_enabled: true,
			zoom_scale_sensitivity: 0.2,
			min_zoom: 0.1,
			max_zoom: 10.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerConfig {
	pub caps: CapLimits,
	pub generate: GenerateLimits,
	pub pan_zoom: PanZoomOptions,
	pub highlight_fill: String,
}

impl Default for ExplorerConfig {
	fn default() -> Self {
		Self {
			caps: CapLimits::default(),
			generate: GenerateLimits::default(),
			pan_zoom: PanZoomOptions::default(),
			highlight_fill: "#ffd54f".into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(-5)]
	#[case(0)]
	#[case(1)]
	#[case(100)]
	#[case(2000)]
	#[case(2001)]
	#[case(i64::MAX)]
	fn clamping_is_idempotent_and_bounded(#[case] value: i64) {
		let limit = CapLimits::default().max_nodes;
		let once = limit.clamp(value);
		assert_eq!(once, limit.clamp(once as i64));
		assert!(once > 0 && once <= limit.max);
	}

	#[test]
	fn smaller_caps_are_honored() {
		let caps = CapLimits::default().clamp(7, 3);
		assert_eq!(caps, Caps { max_nodes: 7, max_edges: 3 });
	}

	#[rstest]
	#[case("12", 12)]
	#[case(" 40 ", 40)]
	#[case("99999", 2000)]
	#[case("abc", 30)]
	#[case("", 30)]
	fn generate_inputs_parse(#[case] raw: &str, #[case] expected: u32) {
		assert_eq!(GenerateLimits::default().nodes.parse(raw), expected);
	}

	#[test]
	fn edge_generation_allows_zero() {
		assert_eq!(GenerateLimits::default().edges.parse("0"), 0);
	}
}
