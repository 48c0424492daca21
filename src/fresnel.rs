//! Amplitude coefficients of a terminated stack.
//!
//! Once the product of the layer matrices has been terminated on the exit
//! medium, the whole coating behaves like a single surface of input
//! admittance `Y = C / B`. The coefficients in this module are the Fresnel
//! formulas for that surface, seen from the incident medium.
//!
//! The coefficient functions provide:
//! - The reflection coefficient of the stack for one polarization
//! - The transmission coefficient of the tangential field for one polarization
//! - Complex admittance support for absorbing media
//!
//! # Physical Foundation
//!
//! With `(B, C)` the normalised tangential electric and magnetic fields at
//! the front surface, continuity of the tangential fields across that
//! surface gives
//!
//! ```text
//! r = (B - C/Y0) / (B + C/Y0)
//! t = 2 / (B + C/Y0)
//! ```
//!
//! where `Y0` is the tilted admittance of the incident medium. Both
//! coefficients are per polarization: the caller passes the P or S
//! admittances and terminated fields. Turning `t` into a transmittance for P
//! additionally needs the `cosθ_inc / cosθ_exit` amplitude scaling, which is
//! applied in [`crate::simulate`].

use num_complex::Complex64;

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_abs_diff_eq;

    // A bare substrate terminates to (B, C) = (1, Y_exit).
    fn bare(exit: f64) -> (Complex64, Complex64) {
        (Complex64::new(1.0, 0.0), Complex64::new(exit, 0.0))
    }

    #[test]
    fn bare_glass_reflection() {
        let (b, c) = bare(1.5);
        let r = refl(b, c, Complex64::new(1.0, 0.0));
        assert_abs_diff_eq!(r.re, -0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(r.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn bare_glass_transmission() {
        let (b, c) = bare(1.5);
        let t = refr(b, c, Complex64::new(1.0, 0.0));
        assert_abs_diff_eq!(t.re, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(t.im, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.norm_sqr(), 0.64, epsilon = 1e-12);
    }

    #[test]
    fn matched_media_are_transparent() {
        let y = Complex64::new(1.33, 0.0);
        let (b, c) = (Complex64::new(1.0, 0.0), y);
        assert_abs_diff_eq!(refl(b, c, y).norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(refr(b, c, y).re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(refr(b, c, y).im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn single_interface_field_is_continuous() {
        // With B = 1 the stack is one interface, where 1 + r = t.
        let (b, c) = (Complex64::new(1.0, 0.0), Complex64::new(1.9, -0.4));
        let y = Complex64::new(1.2, 0.05);
        let sum = 1.0 + refl(b, c, y) - refr(b, c, y);
        assert_abs_diff_eq!(sum.norm(), 0.0, epsilon = 1e-12);
    }
}

/// Computes the amplitude reflection coefficient of a terminated stack.
///
/// **Context**: A coating of any number of layers reflects like a single
/// surface whose admittance is `C / B`. The reflection coefficient of the
/// stack then follows from the same Fresnel formula as a bare interface,
/// with the terminated fields in place of the substrate admittance.
///
/// **How it Works**: Evaluates `(B - C/Y0) / (B + C/Y0)` with `incident` as
/// `Y0`. The result is complex; its squared modulus is the reflectance and
/// its argument the phase change on reflection for this polarization.
///
/// # Example
/// ```rust
/// use num_complex::Complex64;
/// use thinfilm::fresnel;
///
/// // bare glass at normal incidence terminates to (B, C) = (1, 1.5)
/// let r = fresnel::refl(
///     Complex64::new(1.0, 0.0),
///     Complex64::new(1.5, 0.0),
///     Complex64::new(1.0, 0.0),
/// );
/// assert!((r.norm_sqr() - 0.04).abs() < 1e-12);
/// ```
pub fn refl(b: Complex64, c: Complex64, incident: Complex64) -> Complex64 {
    let ratio = c / incident;
    (b - ratio) / (b + ratio)
}

/// Computes the amplitude transmission coefficient of a terminated stack.
///
/// **Context**: The tangential electric field leaving the last layer is
/// normalised to one by the termination, so the field entering the stack
/// fixes the amplitude carried into the exit medium.
///
/// **How it Works**: Evaluates `2 / (B + C/Y0)` with `incident` as `Y0`.
/// This is the tangential-field coefficient; for P the caller scales it by
/// `cosθ_inc / cosθ_exit` before squaring.
///
/// # Example
/// ```rust
/// use num_complex::Complex64;
/// use thinfilm::fresnel;
///
/// let t = fresnel::refr(
///     Complex64::new(1.0, 0.0),
///     Complex64::new(1.5, 0.0),
///     Complex64::new(1.0, 0.0),
/// );
/// assert!((t.re - 0.8).abs() < 1e-12);
/// ```
pub fn refr(b: Complex64, c: Complex64, incident: Complex64) -> Complex64 {
    2.0 / (b + c / incident)
}
