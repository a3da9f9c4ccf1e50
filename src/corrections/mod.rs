//! Swappable model corrections.
//!
//! The SA family is assembled from five independent strategy families, each a
//! closed set of variants selected once at model construction:
//!
//! - [`VorticityModel`]: vorticity/strain magnitude Ω
//! - [`TripTerm`]: transition trip term ft2
//! - [`ModifiedVorticity`]: effective vorticity Shat
//! - [`WallDamping`]: auxiliary damping function r
//! - [`SourceTerms`]: production/destruction/cross-production assembly
//!
//! Variants communicate only through the shared
//! [`ModelVars`](crate::vars::ModelVars) record, written in fixed pipeline
//! order; the only direct delegation is the Negative variants falling back to
//! Baseline for ν̃ > 0.

mod damping;
mod modified_vorticity;
mod source_terms;
mod trip;
mod vorticity;

pub use damping::{blend_fw, damping_r_baseline, damping_r_edwards, WallDamping};
pub use modified_vorticity::{
    modified_vorticity_baseline, modified_vorticity_edwards, modified_vorticity_negative,
    ModifiedVorticity,
};
pub use source_terms::{
    cross_production_baseline, destruction_baseline, destruction_negative, production_baseline,
    production_negative, SourceContributions, SourceTerms,
};
pub use trip::{trip_term_nonzero, trip_term_off, TripTerm};
pub use vorticity::{strain_magnitude, vorticity_magnitude, VorticityModel};
