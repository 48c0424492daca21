//! Characteristic (transfer) matrices of thin layers.
//!
//! Each layer of a coating acts on the tangential electric and magnetic
//! fields at its boundaries through a 2x2 complex matrix. The matrix of a
//! sub-stack is the ordered product of its layer matrices, taken from the
//! incident side towards the exit side.
//!
//! The matrix type provides:
//! - Construction from four elements or from a layer's phase and admittance
//! - The identity, which is also the matrix of an empty stack
//! - An associative, non-commutative product (`*` and [`Iterator::product`])
//! - Termination on the exit medium, giving the front-surface fields
//!
//! # Physical Foundation
//!
//! For a homogeneous layer of phase thickness `δ` and tilted admittance `Y`,
//! the tangential fields at its front surface follow from those at its back
//! surface through
//!
//! ```text
//! ( E_a )   ( cos δ        i sin δ / Y ) ( E_b )
//! ( H_a ) = ( i Y sin δ    cos δ       ) ( H_b )
//! ```
//!
//! Continuity of the tangential fields at every internal boundary lets the
//! matrices of consecutive layers be chained by multiplication. The
//! determinant of a lossless layer matrix is one.

use nalgebra::Matrix2;
use num_complex::Complex64;
use std::iter::Product;
use std::ops::Mul;

use crate::trig::ONEI;


/// The characteristic matrix of a layer or of an ordered sub-stack.
///
/// ```text
/// ( m11   m12 )
/// ( m21   m22 )
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferMatrix(Matrix2<Complex64>);

impl TransferMatrix {
    /// Creates a matrix from its elements in row-major order.
    pub fn new(m11: Complex64, m12: Complex64, m21: Complex64, m22: Complex64) -> Self {
        Self(Matrix2::new(m11, m12, m21, m22))
    }

    /// The neutral element of the product, `[[1, 0], [0, 1]]`.
    ///
    /// This is the matrix of a stack with no layers, so terminating it on a
    /// substrate gives the bare substrate fields `(1, Y_exit)`.
    ///
    /// # Example
    /// ```rust
    /// use num_complex::Complex64;
    /// use thinfilm::TransferMatrix;
    ///
    /// let exit = Complex64::new(1.52, 0.0);
    /// let (b, c) = TransferMatrix::identity().terminate(exit);
    /// assert_eq!((b, c), (Complex64::new(1.0, 0.0), exit));
    /// ```
    pub fn identity() -> Self {
        Self(Matrix2::identity())
    }

    /// Builds the characteristic matrix of a single layer.
    ///
    /// **Context**: A homogeneous layer changes the tangential fields across
    /// its thickness by an amount fixed only by its phase thickness and its
    /// tilted admittance for the polarization of interest. Absorbing layers
    /// make both values complex.
    ///
    /// **How it Works**: Evaluates `c = cos δ` and `s = i sin δ` with the
    /// complex trigonometric functions and returns `[[c, s/Y], [s·Y, c]]`.
    ///
    /// # Example
    /// ```rust
    /// use num_complex::Complex64;
    /// use std::f64::consts::FRAC_PI_2;
    /// use thinfilm::TransferMatrix;
    ///
    /// // a quarter-wave layer swaps the roles of E and H
    /// let y = Complex64::new(1.38, 0.0);
    /// let m = TransferMatrix::characteristic(Complex64::new(FRAC_PI_2, 0.0), y);
    /// assert!(m.m11().norm() < 1e-12);
    /// assert!((m.m21() - Complex64::new(0.0, 1.38)).norm() < 1e-12);
    /// ```
    pub fn characteristic(phase: Complex64, admittance: Complex64) -> Self {
        let c = phase.cos();
        let s = ONEI * phase.sin();
        Self::new(c, s / admittance, s * admittance, c)
    }

    /// Top-left element, relating the front electric field to the back one.
    pub fn m11(&self) -> Complex64 {
        self.0[(0, 0)]
    }

    /// Top-right element, the electric field contributed by the back
    /// magnetic field.
    pub fn m12(&self) -> Complex64 {
        self.0[(0, 1)]
    }

    /// Bottom-left element, the magnetic field contributed by the back
    /// electric field.
    pub fn m21(&self) -> Complex64 {
        self.0[(1, 0)]
    }

    /// Bottom-right element, relating the front magnetic field to the back
    /// one.
    pub fn m22(&self) -> Complex64 {
        self.0[(1, 1)]
    }

    /// Terminates the stack on a substrate of admittance `exit`.
    ///
    /// **Context**: In the exit medium only a forward wave exists, so its
    /// tangential fields are `(1, Y_exit)` once normalised to the electric
    /// field.
    ///
    /// **How it Works**: Multiplies the matrix by the column `(1, exit)` and
    /// returns the normalised front-surface fields `(B, C)`, whose ratio
    /// `C / B` is the input admittance of the whole coating.
    pub fn terminate(&self, exit: Complex64) -> (Complex64, Complex64) {
        (
            self.m11() + self.m12() * exit,
            self.m21() + self.m22() * exit,
        )
    }
}

impl Default for TransferMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for TransferMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Product for TransferMatrix {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), Mul::mul)
    }
}

impl std::fmt::Display for TransferMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[[{}, {}], [{}, {}]]",
            self.m11(),
            self.m12(),
            self.m21(),
            self.m22()
        )
    }
}
