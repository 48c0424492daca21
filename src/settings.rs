use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use config::{Config, Environment, File};
use log::info;
use num_complex::Complex64;
#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::layer::Layer;
use crate::simulate::{Energy, Request};

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_layer_triplet() {
        let layer = parse_layer("97.5,1.38,0.0").unwrap();
        assert_eq!(layer, Layer::new(97.5, Complex64::new(1.38, 0.0)));
    }

    #[test]
    fn parse_layer_rejects_bad_input() {
        assert!(parse_layer("97.5,1.38").is_err());
        assert!(parse_layer("97.5,n,0.0").is_err());
    }

    #[test]
    fn default_config_is_valid() {
        let settings = load_default_config().unwrap();
        assert!(settings.wavelength > 0.0);
        assert!(!settings.layers.is_empty());
    }

    #[test]
    fn validation_rejects_non_positive_values() {
        let mut settings = load_default_config().unwrap();
        settings.wavelength = 0.0;
        assert!(validate_config(&settings).is_err());

        let mut settings = load_default_config().unwrap();
        settings.layers[0].thickness = -1.0;
        assert!(validate_config(&settings).is_err());
    }

    #[test]
    fn incidence_angle_to_cosine() {
        let mut settings = load_default_config().unwrap();
        settings.incidence = 60.0;
        assert!((settings.incident_cos_theta().re - 0.5).abs() < 1e-12);
        assert_eq!(settings.incident_cos_theta().im, 0.0);
    }
}

/// Runtime configuration for a single illumination condition.
///
/// Angles are given in degrees.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub wavelength: f64,
    #[serde(default)]
    pub incidence: f64,
    #[serde(default)]
    pub polarization: f64,
    pub medium_refr_index: Complex64,
    pub exit_refr_index: Complex64,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default = "default_request")]
    pub request: Request,
    #[serde(default)]
    pub json: bool,
}

fn default_request() -> Request {
    Request::all()
}

#[cfg(feature = "python")]
#[pymethods]
impl Settings {
    #[new]
    #[pyo3(signature = (wavelength, incidence, polarization, medium_refr_index, exit_refr_index, layers))]
    fn py_new(
        wavelength: f64,
        incidence: f64,
        polarization: f64,
        medium_refr_index: (f64, f64),
        exit_refr_index: (f64, f64),
        layers: Vec<(f64, f64, f64)>,
    ) -> PyResult<Self> {
        let settings = Settings {
            wavelength,
            incidence,
            polarization,
            medium_refr_index: Complex64::new(medium_refr_index.0, medium_refr_index.1),
            exit_refr_index: Complex64::new(exit_refr_index.0, exit_refr_index.1),
            layers: layers
                .into_iter()
                .map(|(d, re, im)| Layer::new(d, Complex64::new(re, im)))
                .collect(),
            request: Request::all(),
            json: false,
        };
        validate_config(&settings)
            .map_err(|err| pyo3::exceptions::PyValueError::new_err(err.to_string()))?;
        Ok(settings)
    }

    fn __repr__(&self) -> String {
        format!("{}", self)
    }
}

impl Settings {
    /// Complex cosine of the angle of incidence.
    pub fn incident_cos_theta(&self) -> Complex64 {
        Complex64::new(self.incidence.to_radians().cos(), 0.0)
    }
}

pub fn load_default_config() -> Result<Settings> {
    let root = retrieve_project_root()?;
    let default_config_file = root.join("config/default.toml");

    let settings = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .context("Error loading configuration")?;

    let config: Settings = settings
        .try_deserialize()
        .context("Error deserializing configuration")?;

    validate_config(&config)?;

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    let root = retrieve_project_root()?;

    let default_config_file = root.join("config/default.toml");
    let local_config = root.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        info!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        info!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("thinfilm"))
        .build()
        .context("Error loading configuration")?;

    let mut config: Settings = settings
        .try_deserialize()
        .context("Error deserializing configuration")?;

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(wavelength) = args.w {
        config.wavelength = wavelength;
    }
    if let Some(aoi) = args.aoi {
        config.incidence = aoi;
    }
    if let Some(pol) = args.pol {
        config.polarization = pol;
    }
    if let Some(medium) = args.ri0 {
        config.medium_refr_index = medium;
    }
    if let Some(exit) = args.ri_exit {
        config.exit_refr_index = exit;
    }
    if let Some(layers) = args.layer {
        config.layers = layers;
    }
    if let Some(energy) = args.energy {
        config.request.energy = energy;
    }
    if args.psi_delta {
        config.request.ellipsometry = true;
    }
    if args.json {
        config.json = true;
    }

    validate_config(&config)?;

    info!("{}", config);

    Ok(config)
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the THINFILM_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
fn retrieve_project_root() -> Result<PathBuf> {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        return Ok(PathBuf::from(manifest_dir));
    }
    if let Ok(path) = env::var("THINFILM_ROOT_DIR") {
        return Ok(PathBuf::from(path));
    }

    let exe_path = env::current_exe().context("Failed to get current executable path")?;
    exe_path
        .ancestors()
        .skip(1)
        .find(|dir| dir.join("config").is_dir())
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Could not find project root directory"))
}

/// Checks the caller-side preconditions of a simulation.
pub fn validate_config(config: &Settings) -> Result<()> {
    if !(config.wavelength > 0.0) {
        bail!("Wavelength must be greater than 0, got {}", config.wavelength);
    }
    if let Some((i, layer)) = config
        .layers
        .iter()
        .enumerate()
        .find(|(_, layer)| !(layer.thickness > 0.0))
    {
        bail!(
            "Layer {} thickness must be greater than 0, got {}",
            i,
            layer.thickness
        );
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "thinfilm - optical response of planar multilayer coatings"
)]
pub struct CliArgs {
    /// Wavelength, in the same unit as the layer thicknesses.
    #[arg(short, long)]
    w: Option<f64>,

    /// Angle of incidence in degrees.
    #[arg(long)]
    aoi: Option<f64>,

    /// Polarization angle in degrees. 0 is pure P, 90 is pure S.
    #[arg(long)]
    pol: Option<f64>,

    /// The refractive index of the incident medium, e.g. 1.0+0i.
    #[arg(long)]
    ri0: Option<Complex64>,

    /// The refractive index of the exit medium (substrate), e.g. 1.52+0i.
    #[arg(long)]
    ri_exit: Option<Complex64>,

    /// The layers of the coating from the incident side to the exit side, separated by spaces.
    /// Format: thickness,n,k thickness,n,k ...
    #[arg(short, long, value_parser = parse_layer, num_args = 1.., value_delimiter = ' ')]
    layer: Option<Vec<Layer>>,

    /// Which energy quantities to compute. Each level includes the ones before it.
    #[arg(long, value_enum)]
    energy: Option<Energy>,

    /// Also compute the ellipsometric parameters psi and delta.
    #[arg(long)]
    psi_delta: bool,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

/// Parse a layer in the format "thickness,re,im"
fn parse_layer(s: &str) -> Result<Layer, String> {
    let values: Vec<&str> = s.split(',').collect();
    if values.len() != 3 {
        return Err(format!(
            "Invalid layer format: '{}'. Expected 'thickness,re,im'",
            s
        ));
    }

    let parse = |name: &str, value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Failed to parse layer {}: {}", name, value))
    };

    let thickness = parse("thickness", values[0])?;
    let re = parse("refractive index", values[1])?;
    let im = parse("extinction", values[2])?;

    Ok(Layer::new(thickness, Complex64::new(re, im)))
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Wavelength: {:.6}
  - Incidence (deg): {:.6}
  - Polarization (deg): {:.6}
  - Medium Refractive Index: {:.6} + {:.6}i
  - Exit Refractive Index: {:.6} + {:.6}i
  - Layers: {}
  - Request: {:?}
  ",
            self.wavelength,
            self.incidence,
            self.polarization,
            self.medium_refr_index.re,
            self.medium_refr_index.im,
            self.exit_refr_index.re,
            self.exit_refr_index.im,
            self.layers.len(),
            self.request,
        )
    }
}
