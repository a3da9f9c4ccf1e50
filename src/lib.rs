//! # sa-source
//!
//! Source-term evaluation for the one-equation Spalart-Allmaras (SA)
//! turbulence closure family.
//!
//! Given the local flow/turbulence state at one mesh control volume, the
//! crate computes the production, destruction and cross-diffusion
//! contributions to the ν̃ transport equation plus the analytic Jacobian of
//! the net source term with respect to ν̃, for consumption by an external
//! implicit solver.
//!
//! The model is not monolithic: it is assembled at construction from five
//! independently swappable correction families, each a closed set of
//! variants:
//! - vorticity definition ([`VorticityModel`])
//! - trip-term activation ([`TripTerm`])
//! - modified-vorticity definition ([`ModifiedVorticity`])
//! - near-wall damping function ([`WallDamping`])
//! - source assembly ([`SourceTerms`])
//!
//! Three combinations match production practice and get presets on
//! [`SaModel`]: `baseline()`, `edwards()` (SA-E) and `negative()` (SA-neg).
//!
//! # Example
//! ```
//! use sa_source::{FlowState, SaModel, SourceEvaluator};
//!
//! let mut evaluator = SourceEvaluator::new(SaModel::negative());
//!
//! let state = FlowState::new(5e-5, 1.2, 1.8e-5, 0.02, 1e-6)
//!     .with_vorticity([0.0, 0.0, 120.0])
//!     .with_nu_tilde_gradient([2e-3, 0.0, 0.0]);
//!
//! let result = evaluator.evaluate(&state);
//! println!("residual = {}, jacobian = {}", result.residual(), result.jacobian());
//! ```
//!
//! Evaluation is purely arithmetic: no allocation after construction, no
//! error paths, NaN/Inf propagate without early termination. For parallel
//! sweeps use one evaluator per thread (helpers in [`field`]).

pub mod constants;
pub mod corrections;
pub mod evaluator;
pub mod field;
pub mod model;
pub mod state;
pub mod vars;

pub use constants::{ConstantsError, SAConstants};
pub use corrections::{
    ModifiedVorticity, SourceContributions, SourceTerms, TripTerm, VorticityModel, WallDamping,
};
pub use evaluator::{viscosity_ratio, ResidualView, SourceEvaluator, WALL_DISTANCE_FLOOR};
#[cfg(feature = "parallel")]
pub use field::evaluate_field_parallel;
pub use field::{evaluate_field, PointSource};
pub use model::SaModel;
pub use state::{FlowState, StateError};
pub use vars::ModelVars;
