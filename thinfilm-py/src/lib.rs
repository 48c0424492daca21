use num_complex::Complex64;
use pyo3::prelude::*;
use thinfilm::{problem::Problem, result::Optics, settings::Settings, Layer, Request};

/// Optical response of a multilayer coating for one illumination condition.
///
/// Complex values are passed as `(re, im)` tuples and layers as
/// `(thickness, re, im)` tuples, ordered from the incident side. Angles are
/// in radians. All outputs are computed.
#[pyfunction]
#[pyo3(signature = (incident_cos_theta, wavelength, polarization, n_incident, n_exit, layers))]
fn simulate(
    incident_cos_theta: (f64, f64),
    wavelength: f64,
    polarization: f64,
    n_incident: (f64, f64),
    n_exit: (f64, f64),
    layers: Vec<(f64, f64, f64)>,
) -> PyResult<Optics> {
    let layers: Vec<Layer> = layers
        .into_iter()
        .map(|(d, re, im)| Layer::new(d, Complex64::new(re, im)))
        .collect();
    Ok(thinfilm::simulate(
        Complex64::new(incident_cos_theta.0, incident_cos_theta.1),
        wavelength,
        polarization,
        Complex64::new(n_incident.0, n_incident.1),
        Complex64::new(n_exit.0, n_exit.1),
        &layers,
        Request::all(),
    ))
}

/// A Python module implemented in Rust.
#[pymodule]
fn _thinfilm_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_class::<Settings>()?;
    m.add_class::<Problem>()?;
    m.add_class::<Optics>()?;
    Ok(())
}
