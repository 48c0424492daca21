use num_complex::Complex64;
use serde::Deserialize;


/// A single homogeneous stratum of a coating.
///
/// The thickness must be in the same unit as the wavelength. The refractive
/// index is written `n - ik` with `k <= 0`, so absorbing layers carry a
/// positive imaginary part, e.g. `0.12 + 3.3i` for silver in the visible.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Layer {
    pub thickness: f64,
    pub refr_index: Complex64,
}

impl Layer {
    pub fn new(thickness: f64, refr_index: Complex64) -> Self {
        Self {
            thickness,
            refr_index,
        }
    }

    /// A layer whose optical thickness is a quarter of `wavelength` at
    /// normal incidence.
    pub fn quarter_wave(refr_index: Complex64, wavelength: f64) -> Self {
        Self::new(wavelength / (4.0 * refr_index.re), refr_index)
    }
}
