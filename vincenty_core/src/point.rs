//! Geodetic positions.
//!
//! [`GeodeticPoint`] holds latitude and longitude in decimal degrees and parses from
//! the `"lat,lon"` notation used on the command line.

use anyhow::{Context, Result, ensure};
use std::{fmt::Display, str::FromStr};

/// A position on the ellipsoid given as latitude and longitude in decimal degrees.
///
/// Values are not range checked. Longitudes outside `[-180, 180]` work arithmetically,
/// latitudes outside `[-90, 90]` produce meaningless distances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticPoint {
	pub lat: f64,
	pub lon: f64,
}

impl GeodeticPoint {
	#[must_use]
	pub const fn new(lat: f64, lon: f64) -> Self {
		Self { lat, lon }
	}

	#[must_use]
	pub fn lat_rad(&self) -> f64 {
		self.lat.to_radians()
	}

	#[must_use]
	pub fn lon_rad(&self) -> f64 {
		self.lon.to_radians()
	}
}

impl From<(f64, f64)> for GeodeticPoint {
	fn from(value: (f64, f64)) -> Self {
		Self::new(value.0, value.1)
	}
}

/// Parses `"lat,lon"`, e.g. `"50.06632, -5.71475"`.
impl FromStr for GeodeticPoint {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let parts: Vec<&str> = s.split(',').map(str::trim).collect();
		ensure!(parts.len() == 2, "expected \"lat,lon\", got {s:?}");
		let lat = parts[0]
			.parse::<f64>()
			.with_context(|| format!("invalid latitude {:?}", parts[0]))?;
		let lon = parts[1]
			.parse::<f64>()
			.with_context(|| format!("invalid longitude {:?}", parts[1]))?;
		Ok(Self::new(lat, lon))
	}
}

impl Display for GeodeticPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{},{}", self.lat, self.lon)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	#[test]
	fn new_and_radians() {
		let p = GeodeticPoint::new(90.0, -180.0);
		assert_eq!(p.lat, 90.0);
		assert_eq!(p.lon, -180.0);
		assert_relative_eq!(p.lat_rad(), std::f64::consts::FRAC_PI_2);
		assert_relative_eq!(p.lon_rad(), -std::f64::consts::PI);
	}

	#[test]
	fn from_tuple() {
		assert_eq!(GeodeticPoint::from((1.5, 2.5)), GeodeticPoint::new(1.5, 2.5));
		assert_eq!(GeodeticPoint::from((3.0, -4.0)), GeodeticPoint::new(3.0, -4.0));
	}

	#[rstest]
	#[case("50.06632,-5.71475", 50.06632, -5.71475)]
	#[case(" 58.64402 , -3.07 ", 58.64402, -3.07)]
	#[case("0,0", 0.0, 0.0)]
	#[case("-90,180", -90.0, 180.0)]
	fn parse(#[case] input: &str, #[case] lat: f64, #[case] lon: f64) {
		assert_eq!(input.parse::<GeodeticPoint>().unwrap(), GeodeticPoint::new(lat, lon));
	}

	#[rstest]
	#[case("", "expected \"lat,lon\"")]
	#[case("1,2,3", "expected \"lat,lon\"")]
	#[case("north,2", "invalid latitude \"north\"")]
	#[case("1,", "invalid longitude \"\"")]
	fn parse_errors(#[case] input: &str, #[case] message: &str) {
		let err = input.parse::<GeodeticPoint>().unwrap_err().to_string();
		assert!(err.starts_with(message), "unexpected error: {err}");
	}

	#[test]
	fn display_round_trips() {
		let p = GeodeticPoint::new(-33.5, 151.25);
		assert_eq!(p.to_string(), "-33.5,151.25");
		assert_eq!(p.to_string().parse::<GeodeticPoint>().unwrap(), p);
	}
}
