//! Optical response of planar multilayer coatings.
//!
//! Reflectance, transmittance, absorptance and the ellipsometric parameters
//! psi and delta are computed with the characteristic matrix method for a
//! plane wave incident on a stack of homogeneous layers between two
//! semi-infinite media.
//!
//! ```rust
//! use num_complex::Complex64;
//! use thinfilm::{simulate, Layer, Request};
//!
//! let n = Complex64::new(1.5_f64.sqrt(), 0.0);
//! let coating = [Layer::quarter_wave(n, 550.0)];
//! let optics = simulate(
//!     Complex64::new(1.0, 0.0),
//!     550.0,
//!     0.0,
//!     Complex64::new(1.0, 0.0),
//!     Complex64::new(1.5, 0.0),
//!     &coating,
//!     Request::new().with_reflectance(),
//! );
//! assert!(optics.reflectance.unwrap() < 1e-12);
//! ```

pub mod fresnel;
pub mod layer;
pub mod matrix;
pub mod problem;
pub mod result;
pub mod settings;
pub mod simulate;
pub mod snell;
pub mod trig;

pub use layer::Layer;
pub use matrix::TransferMatrix;
pub use result::Optics;
pub use simulate::{simulate, Energy, Request};
