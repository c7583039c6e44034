//! Failure outcomes of the inverse computation.

use std::fmt::Display;

/// Ways the inverse solution can fail.
///
/// The numerical kernel reports these instead of letting NaN propagate or looping
/// forever. Everything above the kernel works with `anyhow::Result`, into which this
/// error converts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeodesicError {
	/// `sin σ` vanished with `cos σ < 0`: the points are antipodal on the auxiliary
	/// sphere and the equatorial azimuth is indeterminate.
	AntipodalPoints,
	/// λ was still changing by `delta` radians after `iterations` updates.
	DidNotConverge { iterations: usize, delta: f64 },
	/// The iteration or the final distance produced NaN or an infinity.
	NonFinite,
}

impl Display for GeodesicError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeodesicError::AntipodalPoints => f.write_str("points are antipodal, geodesic is not unique"),
			GeodesicError::DidNotConverge { iterations, delta } => {
				write!(f, "did not converge after {iterations} iterations (last change of lambda: {delta:e} rad)")
			}
			GeodesicError::NonFinite => f.write_str("computation produced a non-finite value"),
		}
	}
}

impl std::error::Error for GeodesicError {}
