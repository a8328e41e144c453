//! strokefit: sampled polyline → piecewise cubic bezier.
//!
//! Fits a chain of cubic bezier segments through an ordered sequence of 3D
//! points, splitting recursively until every segment is within the
//! requested tolerance.
//!
//! # Example
//!
//! ```
//! use strokefit::{fit_curve, Vec3};
//!
//! let points = [
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 1.0, 0.0),
//!     Vec3::new(2.0, 0.0, 0.0),
//!     Vec3::new(3.0, 1.0, 0.0),
//!     Vec3::new(4.0, 0.0, 0.0),
//! ];
//! let result = fit_curve(&points, 0.01)?;
//! assert_eq!(result.start, points[0]);
//! assert_eq!(result.end(), points[4]);
//! # Ok::<(), strokefit::FitError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod fit;
mod geom;
mod result;

pub mod bezier;
pub mod error;
pub mod eval;
pub mod param;
pub mod prepare;
pub mod refit;
pub mod segment;
pub mod tangent;

// Re-export kurbo so downstream users get the same version
// used by FitResult::to_bezpath.
pub use kurbo;

pub use bezier::CubicBez3;
pub use config::FitConfig;
pub use error::FitError;
pub use fit::{fit_cubic, fit_curve, fit_curve_with};
pub use geom::Vec3;
pub use result::{FitResult, FittedSegment};
