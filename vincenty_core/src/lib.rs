//! # vincenty_core
//!
//! Geodesic distances on an ellipsoid of revolution, computed with Vincenty's
//! iterative inverse formula.
//!
//! ## Usage Example
//!
//! ```rust
//! use vincenty_core::{Ellipsoid, GeodesicSolver, GeodeticPoint, WGS84};
//!
//! let berlin = GeodeticPoint::new(52.520008, 13.404954);
//! let paris = GeodeticPoint::new(48.856613, 2.352222);
//!
//! // WGS84 with default convergence settings
//! let meters = vincenty_core::distance(&berlin, &paris).unwrap();
//! assert!((meters - 879_694.663).abs() < 1e-3);
//!
//! // any other ellipsoid
//! let grs80 = Ellipsoid::from_flattening(6_378_137.0, 1.0 / 298.257_222_101);
//! let solver = GeodesicSolver::new(grs80).with_max_iterations(50);
//! let meters_grs80 = solver.distance(&berlin, &paris).unwrap();
//! assert!((meters - meters_grs80).abs() < 1e-3);
//! # assert_eq!(GeodesicSolver::default().ellipsoid(), &WGS84);
//! ```

mod config;
mod ellipsoid;
mod error;
mod point;
pub mod solver;

pub use config::*;
pub use ellipsoid::*;
pub use error::*;
pub use point::*;
pub use solver::{GeodesicSolver, Inverse, distance};
