//! Generalized Snell's law for complex refractive indices.
//!
//! Absorbing media have complex refractive indices, so the propagation angle
//! inside them is complex too. Rather than the angle itself, this module
//! works with its cosine, which is all the characteristic matrix needs:
//!
//! ```text
//!   sin(θ0) n0 = sin(θ1) n1
//!   c1 = sqrt(1 - (1 - c0²) (n0 / n1)²)
//! ```
//!
//! The square root is the principal branch of the complex root. For a
//! lossless medium beyond the critical angle it yields a purely imaginary
//! cosine, i.e. an evanescent wave.
//!
//! The same cosine feeds the tilted admittances of [`Admittance`], which
//! replace the refractive index in the Fresnel formulas at oblique
//! incidence so that P and S can both be treated as normal-incidence
//! problems.

use num_complex::Complex64;

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn normal_incidence_same_media() {
        let m = Complex64::new(1.0, 0.0);
        let cos_t = get_cos_theta_t(Complex64::new(1.0, 0.0), m, m);
        assert_abs_diff_eq!(cos_t.re, 1.0);
        assert_abs_diff_eq!(cos_t.im, 0.0);
    }

    #[test]
    fn normal_incidence() {
        let cos_t = get_cos_theta_t(
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(1.31, 0.0),
        );
        assert_abs_diff_eq!(cos_t.re, 1.0, epsilon = f64::EPSILON);
        assert_abs_diff_eq!(cos_t.im, 0.0);
    }

    #[test]
    fn angle30_incidence() {
        let theta_i: f64 = 30.0 * PI / 180.0;
        let cos_t = get_cos_theta_t(
            Complex64::new(theta_i.cos(), 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(1.31, 0.0),
        );
        assert_abs_diff_eq!(cos_t.re, 0.3916126_f64.cos(), epsilon = 1e-6);
        assert_abs_diff_eq!(cos_t.im, 0.0);
    }

    #[test]
    fn beyond_critical_angle_is_evanescent() {
        let theta_i: f64 = 60.0 * PI / 180.0;
        let cos_t = get_cos_theta_t(
            Complex64::new(theta_i.cos(), 0.0),
            Complex64::new(1.5, 0.0),
            Complex64::new(1.0, 0.0),
        );
        assert_abs_diff_eq!(cos_t.re, 0.0, epsilon = 1e-12);
        assert!(cos_t.im.abs() > 0.0);
    }

    #[test]
    fn admittances_at_normal_incidence_coincide() {
        let n = Complex64::new(2.1, -0.05);
        let y = Admittance::new(n, Complex64::new(1.0, 0.0));
        assert_eq!(y.p, n);
        assert_eq!(y.s, n);
    }
}

/// Computes the complex cosine of the transmitted angle in medium `m2` for
/// light arriving from medium `m1` with complex angle cosine `cos_theta_i`.
///
/// **Context**: The invariant across a planar stack is `n sin θ`, so every
/// layer can be reached directly from the incident medium without chaining
/// through the layers above it.
///
/// **How it Works**: Applies `sqrt(1 - (1 - c²)(m1/m2)²)` with the principal
/// complex square root. Same media return the incident cosine.
///
/// # Example
/// ```rust
/// use num_complex::Complex64;
/// use thinfilm::snell::get_cos_theta_t;
///
/// let air = Complex64::new(1.0, 0.0);
/// let glass = Complex64::new(1.5, 0.0);
/// let cos_45 = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
/// let cos_t = get_cos_theta_t(cos_45, air, glass);
/// assert!((cos_t.re - (1.0 - 0.5 / 2.25_f64).sqrt()).abs() < 1e-12);
/// ```
pub fn get_cos_theta_t(cos_theta_i: Complex64, m1: Complex64, m2: Complex64) -> Complex64 {
    let ratio = m1 / m2;
    (1.0 - (1.0 - cos_theta_i * cos_theta_i) * ratio * ratio).sqrt()
}

/// Tilted optical admittances of a medium for both polarizations.
///
/// P uses `n / cos θ` and S uses `n cos θ`, in units of the free-space
/// admittance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Admittance {
    pub p: Complex64,
    pub s: Complex64,
}

impl Admittance {
    /// Tilted admittances of a medium of index `refr_index` in which light
    /// propagates at an angle of cosine `cos_theta`.
    pub fn new(refr_index: Complex64, cos_theta: Complex64) -> Self {
        Self {
            p: refr_index / cos_theta,
            s: refr_index * cos_theta,
        }
    }
}
