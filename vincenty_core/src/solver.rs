//! Vincenty's inverse method.
//!
//! Given two points on an ellipsoid the solver iterates the longitude difference `λ`
//! on the auxiliary sphere until it settles, then evaluates the series for the
//! geodesic length. Accuracy is well below a millimeter for everything except
//! nearly antipodal points, where the iteration may fail to converge.
//!
//! ```
//! use vincenty_core::{GeodeticPoint, distance};
//!
//! let lands_end = GeodeticPoint::new(50.06632, -5.71475);
//! let john_o_groats = GeodeticPoint::new(58.64402, -3.07009);
//! let meters = distance(&lands_end, &john_o_groats).unwrap();
//! assert!((meters - 969_954.166).abs() < 1e-3);
//! ```

use crate::{Ellipsoid, GeodesicError, GeodeticPoint, WGS84};

pub const DEFAULT_TOLERANCE: f64 = 1e-12;
pub const DEFAULT_MAX_ITERATIONS: usize = 200;

/// Below this `sin σ` is treated as zero, i.e. the points coincide or are antipodal.
const SIN_SIGMA_EPSILON: f64 = 1e-15;

/// Distance in meters between two points on WGS84.
pub fn distance(p1: &GeodeticPoint, p2: &GeodeticPoint) -> Result<f64, GeodesicError> {
	GeodesicSolver::default().distance(p1, p2)
}

/// Result of a successful inverse computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inverse {
	/// Length of the geodesic in meters.
	pub distance: f64,
	/// Angular separation of the points on the auxiliary sphere, in radians.
	pub sigma: f64,
	/// Number of updates of λ until convergence.
	pub iterations: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicSolver {
	ellipsoid: Ellipsoid,
	tolerance: f64,
	max_iterations: usize,
}

impl GeodesicSolver {
	#[must_use]
	pub fn new(ellipsoid: Ellipsoid) -> Self {
		Self {
			ellipsoid,
			tolerance: DEFAULT_TOLERANCE,
			max_iterations: DEFAULT_MAX_ITERATIONS,
		}
	}

	/// Convergence threshold for the change of λ between iterations, in radians.
	#[must_use]
	pub fn with_tolerance(mut self, tolerance: f64) -> Self {
		self.tolerance = tolerance;
		self
	}

	/// Upper bound for the number of λ updates. At least one update is always made,
	/// so `0` is treated as `1`.
	#[must_use]
	pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
		self.max_iterations = max_iterations.max(1);
		self
	}

	#[must_use]
	pub fn ellipsoid(&self) -> &Ellipsoid {
		&self.ellipsoid
	}

	#[must_use]
	pub fn tolerance(&self) -> f64 {
		self.tolerance
	}

	#[must_use]
	pub fn max_iterations(&self) -> usize {
		self.max_iterations
	}

	/// Distance in meters between `p1` and `p2`.
	pub fn distance(&self, p1: &GeodeticPoint, p2: &GeodeticPoint) -> Result<f64, GeodesicError> {
		self.inverse(p1, p2).map(|inverse| inverse.distance)
	}

	/// Solves the inverse problem between `p1` and `p2`.
	pub fn inverse(&self, p1: &GeodeticPoint, p2: &GeodeticPoint) -> Result<Inverse, GeodesicError> {
		let Ellipsoid { b, f, .. } = self.ellipsoid;

		// reduced latitudes
		let (sin_u1, cos_u1) = ((1.0 - f) * p1.lat_rad().tan()).atan().sin_cos();
		let (sin_u2, cos_u2) = ((1.0 - f) * p2.lat_rad().tan()).atan().sin_cos();
		let sphere = AuxiliarySphere {
			sin_u1,
			cos_u1,
			sin_u2,
			cos_u2,
		};

		let l = p2.lon_rad() - p1.lon_rad();
		let mut lambda = l;
		let mut iterations = 0;

		let state = loop {
			let state = sphere.evaluate(lambda);

			if state.sin_sigma.abs() < SIN_SIGMA_EPSILON {
				if state.cos_sigma > 0.0 {
					log::debug!("points {p1} and {p2} coincide");
					return Ok(Inverse {
						distance: 0.0,
						sigma: 0.0,
						iterations,
					});
				}
				log::debug!("points {p1} and {p2} are antipodal");
				return Err(GeodesicError::AntipodalPoints);
			}

			let next = state.next_lambda(l, f);
			iterations += 1;
			if !next.is_finite() {
				return Err(GeodesicError::NonFinite);
			}

			let delta = (next - lambda).abs();
			log::trace!("iteration {iterations}: lambda={next} delta={delta:e}");
			lambda = next;

			if delta < self.tolerance {
				break state;
			}
			if iterations >= self.max_iterations {
				log::debug!("no convergence between {p1} and {p2} after {iterations} iterations");
				return Err(GeodesicError::DidNotConverge { iterations, delta });
			}
		};

		let u2 = state.cos2_alpha * self.ellipsoid.second_eccentricity_squared();
		let big_a = 1.0 + (u2 / 16384.0) * (4096.0 + u2 * (-768.0 + u2 * (320.0 - 175.0 * u2)));
		let big_b = (u2 / 1024.0) * (256.0 + u2 * (-128.0 + u2 * (74.0 - 47.0 * u2)));

		let IterationState {
			sin_sigma,
			cos_sigma,
			sigma,
			cos_2sigma_m,
			..
		} = state;
		let cos2_2sigma_m = cos_2sigma_m * cos_2sigma_m;
		let delta_sigma = big_b
			* sin_sigma
			* (cos_2sigma_m
				+ (big_b / 4.0)
					* (cos_sigma * (-1.0 + 2.0 * cos2_2sigma_m)
						- (big_b / 6.0)
							* cos_2sigma_m * (-3.0 + 4.0 * sin_sigma * sin_sigma)
							* (-3.0 + 4.0 * cos2_2sigma_m)));

		let distance = b * big_a * (sigma - delta_sigma);
		if !distance.is_finite() {
			return Err(GeodesicError::NonFinite);
		}

		log::debug!("distance {p1} -> {p2}: {distance} m after {iterations} iterations");
		Ok(Inverse {
			distance,
			sigma,
			iterations,
		})
	}
}

impl Default for GeodesicSolver {
	fn default() -> Self {
		Self::new(WGS84)
	}
}

/// Sines and cosines of both reduced latitudes, fixed for one computation.
struct AuxiliarySphere {
	sin_u1: f64,
	cos_u1: f64,
	sin_u2: f64,
	cos_u2: f64,
}

/// Quantities derived from one estimate of λ.
#[derive(Clone, Copy, Debug)]
struct IterationState {
	sin_sigma: f64,
	cos_sigma: f64,
	sigma: f64,
	sin_alpha: f64,
	cos2_alpha: f64,
	cos_2sigma_m: f64,
}

impl AuxiliarySphere {
	fn evaluate(&self, lambda: f64) -> IterationState {
		let AuxiliarySphere {
			sin_u1,
			cos_u1,
			sin_u2,
			cos_u2,
		} = *self;
		let (sin_lambda, cos_lambda) = lambda.sin_cos();

		// sin σ via the vector norm keeps its precision near the poles and the equator
		let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
			+ (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
		.sqrt();
		let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
		let sigma = sin_sigma.atan2(cos_sigma);

		let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
		let cos2_alpha = 1.0 - sin_alpha * sin_alpha;

		// equatorial line: cos²α and sinU1·sinU2 both vanish
		let cos_2sigma_m = if cos2_alpha == 0.0 {
			0.0
		} else {
			cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha
		};

		IterationState {
			sin_sigma,
			cos_sigma,
			sigma,
			sin_alpha,
			cos2_alpha,
			cos_2sigma_m,
		}
	}
}

impl IterationState {
	fn next_lambda(&self, l: f64, f: f64) -> f64 {
		let c = (f / 16.0) * self.cos2_alpha * (4.0 + f * (4.0 - 3.0 * self.cos2_alpha));
		l + (1.0 - c)
			* f * self.sin_alpha
			* (self.sigma
				+ c * self.sin_sigma * (self.cos_2sigma_m + c * self.cos_sigma * (-1.0 + 2.0 * self.cos_2sigma_m.powi(2))))
	}
}
