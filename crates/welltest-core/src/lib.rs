//! Analytical well-test solvers for groundwater teaching tools.
//!
//! Closed-form solutions of the radial diffusion equation — the Theis
//! pumping-test model and the Bouwer–Rice slug-test model — together with
//! the exponential-integral well function, type-curve helpers, fit metrics,
//! and reproducible synthetic-data generation for estimation exercises.
//!
//! The crate is pure computation: no I/O, no globals, no hidden state.
//! Presentation layers (Streamlit pages, notebooks) call in with numbers on
//! every widget change and plot what comes back; the only stateful object is
//! the explicit random-generator handle a caller owns.
pub mod bouwer_rice;
pub mod error;
pub mod metrics;
pub mod rng;
pub mod series;
pub mod synthetic;
pub mod theis;
pub mod traits;
pub mod wellfn;

pub use error::DomainError;
pub use rng::Lcg;
pub use series::{Sample, TimeSeries};
pub use traits::AnalyticalModel;
pub use wellfn::{well_function, well_function_checked, well_function_series, PrecisionWarning};
