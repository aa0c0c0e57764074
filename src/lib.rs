//! Lattice-constrained approximations of a quarter circle.
//!
//! A [`Waveform`] samples a circular arc on the integer grid `[0, 250]²`,
//! keeps the lattice points that lie close enough to the ideal curve,
//! and mirrors them across the diagonal `y = x` into a symmetric [`Polyline`].
//! Its performance is the area under that polyline divided by its length.
//!
//! ```
//! use lattice_wave::Waveform;
//!
//! let wf = Waveform::new(250, 250, 0.5).unwrap(); // the square
//! assert_eq!(wf.performance(), 125.0);
//! ```

extern crate num_traits;
extern crate tinyvec;

pub mod error;
pub mod mirror;
pub mod point;
pub mod polyline;
pub mod waveform;

#[cfg(feature = "plot")]
pub mod plot;

pub use error::WaveformError;
pub use mirror::mirror;
pub use point::{LatticePoint, Point};
pub use polyline::Polyline;
pub use waveform::{Waveform, WaveformConfig};

/// Float type used for all metric computations
pub type NativeFloat = f64;

/// Tolerance for float comparisons in tests and degenerate-length checks
pub const EPSILON: NativeFloat = 1e-9;

/// Upper bound of the lattice on both axes
pub const GRID_MAX: i64 = 250;

/// Inline capacity of a [`Polyline`]: one half curve plus its mirror image
pub const MAX_POINTS: usize = 2 * (GRID_MAX as usize + 1);
