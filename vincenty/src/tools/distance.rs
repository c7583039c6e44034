use anyhow::{Context, Result};
use std::path::PathBuf;
use vincenty_core::{Ellipsoid, GeodeticPoint, SolverConfig};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// start point in decimal degrees
	#[arg(value_name = "LAT,LON", allow_hyphen_values = true)]
	from: GeodeticPoint,

	/// end point in decimal degrees
	#[arg(value_name = "LAT,LON", allow_hyphen_values = true)]
	to: GeodeticPoint,

	/// YAML file with solver settings, see `SolverConfig`
	#[arg(long, short, value_name = "FILE", display_order = 1)]
	config: Option<PathBuf>,

	/// semi-major axis of the ellipsoid in meters [default: WGS84]
	#[arg(long, value_name = "METERS", display_order = 2)]
	semi_major: Option<f64>,

	/// semi-minor axis of the ellipsoid in meters [default: semi_major * (1 - flattening)]
	#[arg(long, value_name = "METERS", display_order = 2)]
	semi_minor: Option<f64>,

	/// flattening of the ellipsoid [default: WGS84]
	#[arg(long, value_name = "FLOAT", display_order = 2)]
	flattening: Option<f64>,

	/// give up after this many iterations
	#[arg(long, value_name = "INT", display_order = 3)]
	max_iterations: Option<usize>,

	/// convergence threshold for lambda in radians
	#[arg(long, value_name = "RADIANS", display_order = 3)]
	tolerance: Option<f64>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = build_config(arguments)?;
	log::debug!("using ellipsoid {}", config.ellipsoid);

	let inverse = config
		.solver()
		.inverse(&arguments.from, &arguments.to)
		.with_context(|| format!("failed to compute distance from {} to {}", arguments.from, arguments.to))?;
	log::info!("converged after {} iterations", inverse.iterations);

	println!("{:.3}", inverse.distance);
	Ok(())
}

/// Loads the config file, if any, and lets command line flags override it.
fn build_config(arguments: &Subcommand) -> Result<SolverConfig> {
	let mut config = match &arguments.config {
		Some(path) => SolverConfig::from_path(path)?,
		None => SolverConfig::default(),
	};

	if arguments.semi_major.is_some() || arguments.semi_minor.is_some() || arguments.flattening.is_some() {
		let a = arguments.semi_major.unwrap_or(config.ellipsoid.a);
		let f = arguments.flattening.unwrap_or(config.ellipsoid.f);
		let b = arguments.semi_minor.unwrap_or(a * (1.0 - f));
		config.ellipsoid = Ellipsoid::new(a, b, f);
	}
	if let Some(max_iterations) = arguments.max_iterations {
		config.max_iterations = max_iterations;
	}
	if let Some(tolerance) = arguments.tolerance {
		config.tolerance = tolerance;
	}

	config.check()?;
	Ok(config)
}
