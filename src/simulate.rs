//! Characteristic matrix simulation of a multilayer coating.
//!
//! The coating is a sequence of layers between a semi-infinite incident
//! medium and a semi-infinite exit medium:
//!
//! ```text
//!  \             /  reflectance
//!   \           /
//!    v         /
//!        incident medium  n - ik
//!  -------------------------------
//!        layer 0          d0 (n0 - ik0)
//!  -------------------------------
//!              ...
//!  -------------------------------
//!        layer n          dn (nn - ikn)
//!  -------------------------------
//!        exit medium      n - ik
//!                   \
//!                    v  transmittance
//! ```
//!
//! For each polarization the layer matrices are multiplied in the order
//! the light meets them. The product, terminated on the exit medium, gives
//! the reflection and transmission coefficients of the whole stack.

use clap::ValueEnum;
use log::warn;
use num_complex::Complex64;
use serde::Deserialize;
use std::f64::consts::PI;

use crate::{
    fresnel,
    layer::Layer,
    matrix::TransferMatrix,
    result::Optics,
    snell::{self, Admittance},
};


/// Energy quantities that can be requested, in order of dependency.
///
/// Each level includes every level below it, so transmittance can only be
/// asked for together with reflectance, and absorptance together with both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    #[default]
    Off,
    Reflectance,
    Transmittance,
    Absorptance,
}

/// Selects which outputs [`simulate`] computes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub energy: Energy,
    /// Psi and delta, always computed as a pair.
    #[serde(default)]
    pub ellipsometry: bool,
}

impl Request {
    /// A request for nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A request for every output.
    pub fn all() -> Self {
        Self::new().with_absorptance().with_ellipsometry()
    }

    pub fn with_reflectance(self) -> Self {
        self.with_energy(Energy::Reflectance)
    }

    pub fn with_transmittance(self) -> Self {
        self.with_energy(Energy::Transmittance)
    }

    pub fn with_absorptance(self) -> Self {
        self.with_energy(Energy::Absorptance)
    }

    pub fn with_ellipsometry(self) -> Self {
        Self {
            ellipsometry: true,
            ..self
        }
    }

    fn with_energy(self, energy: Energy) -> Self {
        Self {
            energy: self.energy.max(energy),
            ..self
        }
    }

    pub fn reflectance(&self) -> bool {
        self.energy >= Energy::Reflectance
    }

    pub fn transmittance(&self) -> bool {
        self.energy >= Energy::Transmittance
    }

    pub fn absorptance(&self) -> bool {
        self.energy >= Energy::Absorptance
    }
}

/// Computes the optical response of a multilayer coating.
///
/// - `incident_cos_theta`: cosine of the angle of incidence, complex to allow
///   an absorbing incident medium.
/// - `wavelength`: in the same unit as the layer thicknesses.
/// - `polarization`: angle in radians, `0` for pure P and `π/2` for pure S.
///   Intermediate angles weight P by `cos²` and S by `sin²`.
/// - `n_incident`, `n_exit`: refractive indices `n - ik` of the bounding media.
/// - `layers`: the stack, from the incident side to the exit side.
///
/// Transmittance is `cos²·|t_P|² + sin²·|t_S|²` with the tangential-field
/// coefficients `t = 2 / (B + C/Y0)`, the P one scaled by
/// `cosθ_inc / cosθ_exit`. No admittance ratio of the bounding media is
/// applied, so bare glass at normal incidence gives 0.64 and the remainder
/// shows up in the absorptance.
///
/// Inputs are not validated. Degenerate conditions such as grazing
/// incidence produce infinities or NaNs in the result instead of failing.
/// If transmittance is requested while the incident medium absorbs, a
/// warning is logged, since the result is then only approximate.
pub fn simulate(
    incident_cos_theta: Complex64,
    wavelength: f64,
    polarization: f64,
    n_incident: Complex64,
    n_exit: Complex64,
    layers: &[Layer],
    request: Request,
) -> Optics {
    let incident = Admittance::new(n_incident, incident_cos_theta);
    let exit_cos_theta = snell::get_cos_theta_t(incident_cos_theta, n_incident, n_exit);
    let exit = Admittance::new(n_exit, exit_cos_theta);

    let (product_p, product_s) = layers.iter().fold(
        (TransferMatrix::identity(), TransferMatrix::identity()),
        |(product_p, product_s), layer| {
            let cos_theta = snell::get_cos_theta_t(incident_cos_theta, n_incident, layer.refr_index);
            let admittance = Admittance::new(layer.refr_index, cos_theta);
            let phase = phase_thickness(layer, cos_theta, wavelength);
            (
                product_p * TransferMatrix::characteristic(phase, admittance.p),
                product_s * TransferMatrix::characteristic(phase, admittance.s),
            )
        },
    );

    let (b_p, c_p) = product_p.terminate(exit.p);
    let (b_s, c_s) = product_s.terminate(exit.s);

    let r_p = fresnel::refl(b_p, c_p, incident.p);
    let r_s = fresnel::refl(b_s, c_s, incident.s);

    let weight_p = polarization.cos().powi(2);
    let weight_s = polarization.sin().powi(2);

    let mut optics = Optics::default();

    if request.reflectance() {
        let reflectance = weight_p * r_p.norm_sqr() + weight_s * r_s.norm_sqr();
        optics.reflectance = Some(reflectance);

        if request.transmittance() {
            if n_incident.im != 0.0 {
                warn!(
                    "transmittance may be inaccurate for an absorbing incident medium (n = {})",
                    n_incident
                );
            }

            let t_p = fresnel::refr(b_p, c_p, incident.p) * incident_cos_theta / exit_cos_theta;
            let t_s = fresnel::refr(b_s, c_s, incident.s);
            let transmittance = weight_p * t_p.norm_sqr() + weight_s * t_s.norm_sqr();
            optics.transmittance = Some(transmittance);

            if request.absorptance() {
                optics.absorptance = Some(1.0 - reflectance - transmittance);
            }
        }
    }

    if request.ellipsometry {
        optics.psi = Some(r_p.norm().atan2(r_s.norm()));
        optics.delta = Some(r_p.arg() - r_s.arg());
    }

    optics
}

/// Phase thickness `-2π n d cos θ / λ` of a layer.
fn phase_thickness(layer: &Layer, cos_theta: Complex64, wavelength: f64) -> Complex64 {
    -2.0 * PI * layer.refr_index * layer.thickness * cos_theta / wavelength
}
