//! Inverse trigonometric functions over the complex plane.
//!
//! Both functions use the logarithmic closed forms and inherit their branch
//! behavior from [`Complex64::sqrt`] and [`Complex64::ln`], which take the
//! principal value and honour the sign of a zero imaginary part. The branch
//! cuts lie on the real axis outside `[-1, 1]`; on a cut, the sign of the
//! imaginary zero of the argument selects the side.

use num_complex::Complex64;

/// The imaginary unit.
pub const ONEI: Complex64 = Complex64::new(0.0, 1.0);

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn asin_matches_real_inside_unit_interval() {
        for x in [-1.0, -0.75, -0.5, -0.1, 0.0, 0.3, 0.5, 0.9, 1.0] {
            let z = asin(Complex64::new(x, 0.0));
            assert_abs_diff_eq!(z.re, f64::asin(x), epsilon = 1e-12);
            assert_abs_diff_eq!(z.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn acos_matches_real_inside_unit_interval() {
        for x in [-1.0, -0.75, -0.5, -0.1, 0.0, 0.3, 0.5, 0.9, 1.0] {
            let z = acos(Complex64::new(x, 0.0));
            assert_abs_diff_eq!(z.re, f64::acos(x), epsilon = 1e-7);
            assert_abs_diff_eq!(z.im, 0.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn complex_round_trip() {
        let z = Complex64::new(0.4, -1.3);
        let s = asin(z).sin();
        let c = acos(z).cos();
        assert_abs_diff_eq!(s.re, z.re, epsilon = 1e-12);
        assert_abs_diff_eq!(s.im, z.im, epsilon = 1e-12);
        assert_abs_diff_eq!(c.re, z.re, epsilon = 1e-12);
        assert_abs_diff_eq!(c.im, z.im, epsilon = 1e-12);
    }

    #[test]
    fn asin_plus_acos_is_half_pi() {
        let z = Complex64::new(2.5, 0.7);
        let sum = asin(z) + acos(z);
        assert_abs_diff_eq!(sum.re, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(sum.im, 0.0, epsilon = 1e-12);
    }
}

/// Complex arcsine, `-i ln(iz + sqrt(1 - z^2))`.
pub fn asin(z: Complex64) -> Complex64 {
    -ONEI * (ONEI * z + (1.0 - z * z).sqrt()).ln()
}

/// Complex arccosine, `-i ln(z + sqrt(z^2 - 1))`.
///
/// The root is taken as `i sqrt(1 - z^2)`, which squares to the same value
/// but always selects the principal branch, so that `asin(z) + acos(z)` is
/// `π/2` and `acos(-0.5)` is `2π/3` rather than its negative.
pub fn acos(z: Complex64) -> Complex64 {
    -ONEI * (z + ONEI * (1.0 - z * z).sqrt()).ln()
}
