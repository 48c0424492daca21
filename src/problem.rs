use log::info;
#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::{result::Optics, settings::Settings, simulate::simulate};

#[cfg(test)]
mod tests {

    use super::*;
    use crate::layer::Layer;
    use crate::simulate::Request;
    use num_complex::Complex64;

    #[test]
    fn solve_bare_substrate() {
        let settings = Settings {
            wavelength: 633.0,
            incidence: 0.0,
            polarization: 0.0,
            medium_refr_index: Complex64::new(1.0, 0.0),
            exit_refr_index: Complex64::new(1.5, 0.0),
            layers: Vec::new(),
            request: Request::all(),
            json: false,
        };
        let optics = Problem::new(settings).solve();
        assert!((optics.reflectance.unwrap() - 0.04).abs() < 1e-12);
        assert!((optics.transmittance.unwrap() - 0.64).abs() < 1e-12);
        assert!((optics.absorptance.unwrap() - 0.32).abs() < 1e-12);
    }

    #[test]
    fn polarization_is_read_in_degrees() {
        let base = Settings {
            wavelength: 633.0,
            incidence: 45.0,
            polarization: 0.0,
            medium_refr_index: Complex64::new(1.0, 0.0),
            exit_refr_index: Complex64::new(1.5, 0.0),
            layers: vec![Layer::new(120.0, Complex64::new(2.1, 0.0))],
            request: Request::new().with_reflectance(),
            json: false,
        };
        let p = Problem::new(base.clone()).solve().reflectance.unwrap();
        let s = Problem::new(Settings {
            polarization: 90.0,
            ..base.clone()
        })
        .solve()
        .reflectance
        .unwrap();
        let mixed = Problem::new(Settings {
            polarization: 45.0,
            ..base
        })
        .solve()
        .reflectance
        .unwrap();
        assert!((mixed - 0.5 * (p + s)).abs() < 1e-12);
    }
}

/// A single illumination condition to evaluate.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Debug, Clone)]
pub struct Problem {
    pub settings: Settings, // runtime settings
}

#[cfg(feature = "python")]
#[pymethods]
impl Problem {
    #[new]
    fn py_new(settings: Settings) -> Self {
        Problem::new(settings)
    }

    /// Getter function for the problem settings
    #[getter]
    pub fn get_settings(&self) -> Settings {
        self.settings.clone()
    }

    #[pyo3(name = "solve")]
    pub fn py_solve(&self) -> PyResult<Optics> {
        Ok(self.solve())
    }
}

impl Problem {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs the simulation for the configured condition.
    pub fn solve(&self) -> Optics {
        let settings = &self.settings;
        info!(
            "Solving {} layer(s) at wavelength {}",
            settings.layers.len(),
            settings.wavelength
        );
        simulate(
            settings.incident_cos_theta(),
            settings.wavelength,
            settings.polarization.to_radians(),
            settings.medium_refr_index,
            settings.exit_refr_index,
            &settings.layers,
            settings.request,
        )
    }
}
