//! Model assembly: one variant per correction family plus the calibration
//! constants, fixed for the lifetime of an evaluator.
//!
//! Only three combinations are exercised in production practice and they get
//! named presets; arbitrary combinations remain reachable through the `with_*`
//! overrides for model studies.

use crate::constants::SAConstants;
use crate::corrections::{ModifiedVorticity, SourceTerms, TripTerm, VorticityModel, WallDamping};

/// A fully specified SA model variant.
///
/// Immutable once handed to a
/// [`SourceEvaluator`](crate::SourceEvaluator): one evaluator instance is one
/// never-reconfigured model.
///
/// # Example
/// ```
/// use sa_source::{SaModel, TripTerm};
///
/// let standard = SaModel::baseline();
/// let tripped = SaModel::baseline().with_trip_term(TripTerm::NonZero);
/// assert_eq!(standard.name(), "sa-baseline");
/// assert_ne!(standard.trip, tripped.trip);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SaModel {
    /// Calibration constants
    pub constants: SAConstants,
    /// Vorticity definition
    pub vorticity: VorticityModel,
    /// Trip-term activation
    pub trip: TripTerm,
    /// Modified-vorticity definition
    pub modified_vorticity: ModifiedVorticity,
    /// Damping-function definition
    pub damping: WallDamping,
    /// Source-assembly policy
    pub source_terms: SourceTerms,
}

impl SaModel {
    /// Original SA model: baseline everything, trip term off.
    pub fn baseline() -> Self {
        Self {
            constants: SAConstants::default(),
            vorticity: VorticityModel::Baseline,
            trip: TripTerm::Off,
            modified_vorticity: ModifiedVorticity::Baseline,
            damping: WallDamping::Baseline,
            source_terms: SourceTerms::Baseline,
        }
    }

    /// Edwards modification (SA-E): strain-rate vorticity, Edwards modified
    /// vorticity and tanh damping, baseline source assembly.
    pub fn edwards() -> Self {
        Self {
            vorticity: VorticityModel::Edwards,
            modified_vorticity: ModifiedVorticity::Edwards,
            damping: WallDamping::Edwards,
            ..Self::baseline()
        }
    }

    /// Negative-ν̃ model (SA-neg): baseline stack with the Negative modified
    /// vorticity and source assembly.
    pub fn negative() -> Self {
        Self {
            modified_vorticity: ModifiedVorticity::Negative,
            source_terms: SourceTerms::Negative,
            ..Self::baseline()
        }
    }

    /// Replace the calibration constants.
    pub fn with_constants(mut self, constants: SAConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Override the vorticity definition.
    pub fn with_vorticity(mut self, vorticity: VorticityModel) -> Self {
        self.vorticity = vorticity;
        self
    }

    /// Override the trip-term activation.
    pub fn with_trip_term(mut self, trip: TripTerm) -> Self {
        self.trip = trip;
        self
    }

    /// Override the modified-vorticity definition.
    pub fn with_modified_vorticity(mut self, modified_vorticity: ModifiedVorticity) -> Self {
        self.modified_vorticity = modified_vorticity;
        self
    }

    /// Override the damping-function definition.
    pub fn with_damping(mut self, damping: WallDamping) -> Self {
        self.damping = damping;
        self
    }

    /// Override the source-assembly policy.
    pub fn with_source_terms(mut self, source_terms: SourceTerms) -> Self {
        self.source_terms = source_terms;
        self
    }

    /// Human-readable name of the closest named preset, for diagnostics.
    pub fn name(&self) -> &'static str {
        match (self.modified_vorticity, self.source_terms, self.vorticity) {
            (ModifiedVorticity::Edwards, SourceTerms::Baseline, VorticityModel::Edwards) => {
                "sa-edwards"
            }
            (ModifiedVorticity::Negative, SourceTerms::Negative, _) => "sa-negative",
            (ModifiedVorticity::Baseline, SourceTerms::Baseline, VorticityModel::Baseline) => {
                "sa-baseline"
            }
            _ => "sa-custom",
        }
    }
}

impl Default for SaModel {
    fn default() -> Self {
        Self::baseline()
    }
}
