//! Reference ellipsoids.
//!
//! An [`Ellipsoid`] carries the semi-major axis `a`, the semi-minor axis `b` and the
//! flattening `f` separately. The solver uses all three exactly as given and does not
//! check that `b == a * (1 - f)`; call [`Ellipsoid::check`] if you want that guarantee.
//!
//! # Examples
//!
//! ```
//! use vincenty_core::{Ellipsoid, WGS84};
//!
//! assert_eq!(Ellipsoid::default(), WGS84);
//!
//! let sphere = Ellipsoid::from_flattening(6_371_000.0, 0.0);
//! assert_eq!(sphere.b, 6_371_000.0);
//! ```

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Maximum accepted mismatch between `b` and `a * (1 - f)` in [`Ellipsoid::check`], in meters.
const AXIS_TOLERANCE: f64 = 1e-3;

/// WGS84, the reference ellipsoid used by GPS.
pub const WGS84: Ellipsoid = Ellipsoid {
	a: 6_378_137.0,
	b: 6_356_752.314_245,
	f: 1.0 / 298.257_223_563,
};

/// An oblate ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Ellipsoid {
	/// Semi-major (equatorial) axis in meters.
	pub a: f64,
	/// Semi-minor (polar) axis in meters.
	pub b: f64,
	/// Flattening `(a - b) / a`.
	pub f: f64,
}

impl Ellipsoid {
	/// Creates an ellipsoid from all three parameters, stored verbatim.
	#[must_use]
	pub const fn new(a: f64, b: f64, f: f64) -> Self {
		Self { a, b, f }
	}

	/// Creates an ellipsoid from its semi-major axis and flattening, deriving `b = a * (1 - f)`.
	///
	/// ```
	/// use vincenty_core::Ellipsoid;
	///
	/// let e = Ellipsoid::from_flattening(6_378_137.0, 1.0 / 298.257_223_563);
	/// assert!((e.b - 6_356_752.314_245).abs() < 1e-6);
	/// ```
	#[must_use]
	pub fn from_flattening(a: f64, f: f64) -> Self {
		Self { a, b: a * (1.0 - f), f }
	}

	/// `(a² - b²) / b²`, the squared second eccentricity.
	#[must_use]
	pub fn second_eccentricity_squared(&self) -> f64 {
		let b2 = self.b * self.b;
		(self.a * self.a - b2) / b2
	}

	/// Verifies that the three parameters describe one consistent oblate ellipsoid.
	///
	/// The distance computation never calls this. It is meant for callers that build
	/// ellipsoids from user input.
	pub fn check(&self) -> Result<()> {
		ensure!(self.a.is_finite() && self.a > 0.0, "semi-major axis ({}) must be > 0", self.a);
		ensure!(self.b.is_finite() && self.b > 0.0, "semi-minor axis ({}) must be > 0", self.b);
		ensure!(
			self.b <= self.a,
			"semi-minor axis ({}) must be <= semi-major axis ({})",
			self.b,
			self.a
		);
		ensure!(
			(0.0..1.0).contains(&self.f),
			"flattening ({}) must be in the range [0, 1)",
			self.f
		);
		let expected_b = self.a * (1.0 - self.f);
		ensure!(
			(self.b - expected_b).abs() <= AXIS_TOLERANCE,
			"semi-minor axis ({}) does not match a * (1 - f) ({expected_b})",
			self.b
		);
		Ok(())
	}
}

impl Default for Ellipsoid {
	fn default() -> Self {
		WGS84
	}
}

impl Display for Ellipsoid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "a={} b={} f=1/{}", self.a, self.b, 1.0 / self.f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	#[test]
	fn wgs84_constants() {
		assert_eq!(WGS84.a, 6_378_137.0);
		assert_eq!(WGS84.b, 6_356_752.314_245);
		assert_relative_eq!(1.0 / WGS84.f, 298.257_223_563, epsilon = 1e-9);
	}

	#[test]
	fn default_is_wgs84() {
		assert_eq!(Ellipsoid::default(), WGS84);
	}

	#[test]
	fn from_flattening_derives_b() {
		let e = Ellipsoid::from_flattening(WGS84.a, WGS84.f);
		assert_relative_eq!(e.b, WGS84.b, epsilon = 1e-6);
		assert_eq!(e.a, WGS84.a);
	}

	#[test]
	fn new_keeps_values_verbatim() {
		// inconsistent on purpose, the constructor must not correct it
		let e = Ellipsoid::new(10.0, 3.0, 0.5);
		assert_eq!((e.a, e.b, e.f), (10.0, 3.0, 0.5));
	}

	#[test]
	fn second_eccentricity() {
		assert_relative_eq!(WGS84.second_eccentricity_squared(), 0.006_739_496_742_3, epsilon = 1e-12);
		assert_eq!(Ellipsoid::from_flattening(1.0, 0.0).second_eccentricity_squared(), 0.0);
	}

	#[test]
	fn check_accepts_wgs84() {
		assert!(WGS84.check().is_ok());
	}

	#[rstest]
	#[case(Ellipsoid::new(-1.0, 1.0, 0.0), "semi-major axis (-1) must be > 0")]
	#[case(Ellipsoid::new(1.0, 0.0, 0.0), "semi-minor axis (0) must be > 0")]
	#[case(Ellipsoid::new(1.0, 2.0, 0.0), "semi-minor axis (2) must be <= semi-major axis (1)")]
	#[case(Ellipsoid::new(1.0, 1.0, 1.5), "flattening (1.5) must be in the range [0, 1)")]
	#[case(Ellipsoid::new(6_378_137.0, 6_356_000.0, WGS84.f), "does not match a * (1 - f)")]
	fn check_rejects(#[case] ellipsoid: Ellipsoid, #[case] message: &str) {
		let err = ellipsoid.check().unwrap_err().to_string();
		assert!(err.contains(message), "unexpected error: {err}");
	}

	#[test]
	fn display() {
		assert_eq!(
			Ellipsoid::new(2.0, 1.0, 0.5).to_string(),
			"a=2 b=1 f=1/2"
		);
	}
}
