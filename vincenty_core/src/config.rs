//! Solver configuration.
//!
//! [`SolverConfig`] bundles the ellipsoid with the convergence settings and can be
//! loaded from YAML.

use crate::{
	Ellipsoid, GeodesicSolver,
	solver::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE},
};
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Solver settings, usually read from a YAML file.
///
/// ```yaml
/// ellipsoid:
///   a: 6378137.0
///   b: 6356752.314245
///   f: 0.0033528106647474805
/// max_iterations: 200
/// tolerance: 1.0e-12
/// ```
///
/// Every field is optional; missing fields fall back to WGS84 and the solver defaults.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct SolverConfig {
	pub ellipsoid: Ellipsoid,
	pub max_iterations: usize,
	pub tolerance: f64,
}

impl Default for SolverConfig {
	fn default() -> Self {
		Self {
			ellipsoid: Ellipsoid::default(),
			max_iterations: DEFAULT_MAX_ITERATIONS,
			tolerance: DEFAULT_TOLERANCE,
		}
	}
}

impl SolverConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config {path:?}"))?;
		SolverConfig::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config {path:?}"))
	}

	/// Rejects settings the solver cannot work with.
	pub fn check(&self) -> Result<()> {
		ensure!(self.max_iterations > 0, "max_iterations must be > 0");
		ensure!(
			self.tolerance.is_finite() && self.tolerance > 0.0,
			"tolerance ({}) must be a positive number",
			self.tolerance
		);
		self.ellipsoid.check().context("invalid ellipsoid")
	}

	#[must_use]
	pub fn solver(&self) -> GeodesicSolver {
		GeodesicSolver::new(self.ellipsoid)
			.with_max_iterations(self.max_iterations)
			.with_tolerance(self.tolerance)
	}
}
