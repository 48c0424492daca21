#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::Serialize;
use std::fmt;

/// Optical response of a coating for one illumination condition.
///
/// Only the quantities that were asked for are `Some`.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Optics {
    #[cfg_attr(feature = "python", pyo3(get))]
    pub reflectance: Option<f64>,
    #[cfg_attr(feature = "python", pyo3(get))]
    pub transmittance: Option<f64>,
    #[cfg_attr(feature = "python", pyo3(get))]
    pub absorptance: Option<f64>,
    /// Ellipsometric amplitude ratio angle, in radians.
    #[cfg_attr(feature = "python", pyo3(get))]
    pub psi: Option<f64>,
    /// Ellipsometric phase difference, in radians.
    #[cfg_attr(feature = "python", pyo3(get))]
    pub delta: Option<f64>,
}

#[cfg(feature = "python")]
#[pymethods]
impl Optics {
    fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for Optics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("Reflectance", self.reflectance),
            ("Transmittance", self.transmittance),
            ("Absorptance", self.absorptance),
            ("Psi (rad)", self.psi),
            ("Delta (rad)", self.delta),
        ];
        writeln!(f, "Optics:")?;
        for (name, value) in rows {
            if let Some(value) = value {
                writeln!(f, "  - {}: {:.6}", name, value)?;
            }
        }
        Ok(())
    }
}
