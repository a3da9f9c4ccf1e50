//! Source-term evaluator: the fixed per-point evaluation pipeline.
//!
//! [`SourceEvaluator`] owns one fully specified [`SaModel`] and runs the same
//! thirteen steps for every control volume, whatever the selected variants:
//!
//! 1. reset accumulators and scratch record
//! 2. read point primitives (ν = μ/ρ)
//! 3. vorticity variant → Ω
//! 4. rotating-frame correction on Ω
//! 5. wall-distance guard (≤ 1e-10 short-circuits to zero residual/Jacobian)
//! 6. roughness-modified viscosity ratio Ji
//! 7. viscous damping functions fv1, fv2
//! 8. trip-term variant → ft2
//! 9. modified-vorticity variant → Shat
//! 10. damping variant → r, then the fixed fw chain
//! 11. squared gradient norm
//! 12. source assembly → P, D, C and Jacobian
//! 13. scale by cell volume
//!
//! The evaluator is purely arithmetic: no error paths, NaN/Inf propagate.
//! It is `Send`; use one instance per thread for parallel sweeps (see
//! [`field`](crate::field)).

use crate::corrections::blend_fw;
use crate::model::SaModel;
use crate::state::FlowState;
use crate::vars::ModelVars;

/// Wall-distance threshold below which the source terms are not evaluated.
pub const WALL_DISTANCE_FLOOR: f64 = 1.0e-10;

/// Epsilon added to the wall distance in the roughness term.
const EPS: f64 = 1.0e-16;

/// Roughness-modified eddy-viscosity ratio and its ν̃-derivative:
///
/// Ji = ν̃/ν + cr1·roughness/(d + ε), d_Ji = 1/ν.
///
/// Reduces to the standard ratio for smooth walls (roughness = 0).
/// Ref: Aupoix & Spalart (2003), Int. J. Heat Fluid Flow 24, 454-462.
#[inline]
pub fn viscosity_ratio(nue: f64, nu: f64, cr1: f64, roughness: f64, dist: f64) -> (f64, f64) {
    let ji = nue / nu + cr1 * (roughness / (dist + EPS));
    (ji, 1.0 / nu)
}

/// Viscous damping functions fv1, fv2 and their ν̃-derivatives, closed-form
/// rationals of Ji. fv2 uses the modified relation from the NASA turbulence
/// modeling resource so that Shat keeps its fv2 dependence under roughness.
#[inline]
fn viscous_damping(vars: &mut ModelVars, nue: f64, nu: f64) {
    let ji_2 = vars.ji * vars.ji;
    let ji_3 = ji_2 * vars.ji;

    vars.fv1 = ji_3 / (ji_3 + vars.cv1_3);
    vars.d_fv1 = 3.0 * ji_2 * vars.cv1_3 / (nu * (ji_3 + vars.cv1_3).powi(2));

    vars.fv2 = 1.0 - nue / (nu + nue * vars.fv1);
    vars.d_fv2 = -(1.0 / nu - ji_2 * vars.d_fv1) / (1.0 + vars.ji * vars.fv1).powi(2);
}

/// Read-only view of one evaluation result.
///
/// Borrows the evaluator, so the values must be copied out before the next
/// `evaluate` call on the same instance.
#[derive(Clone, Copy, Debug)]
pub struct ResidualView<'a> {
    evaluator: &'a SourceEvaluator,
}

impl ResidualView<'_> {
    /// Net source residual, scaled by cell volume.
    #[inline]
    pub fn residual(&self) -> f64 {
        self.evaluator.residual
    }

    /// d(residual)/dν̃, scaled by cell volume.
    #[inline]
    pub fn jacobian(&self) -> f64 {
        self.evaluator.jacobian
    }
}

/// Per-point SA source-term evaluator.
///
/// # Example
/// ```
/// use sa_source::{FlowState, SaModel, SourceEvaluator};
///
/// let mut evaluator = SourceEvaluator::new(SaModel::baseline());
///
/// let state = FlowState::new(1e-4, 1.2, 1.8e-5, 0.01, 1e-6)
///     .with_vorticity([0.0, 0.0, 250.0])
///     .with_nu_tilde_gradient([1e-3, 0.0, 0.0]);
///
/// let result = evaluator.evaluate(&state);
/// let (residual, jacobian) = (result.residual(), result.jacobian());
/// assert!(residual.is_finite() && jacobian.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct SourceEvaluator {
    model: SaModel,

    // Source term components
    production: f64,
    destruction: f64,
    cross_production: f64,
    add_source_term: f64,

    // Residual and Jacobian
    residual: f64,
    jacobian: f64,
}

impl SourceEvaluator {
    /// Create an evaluator for the given model variant. The variant is fixed
    /// for the lifetime of the evaluator.
    pub fn new(model: SaModel) -> Self {
        Self {
            model,
            production: 0.0,
            destruction: 0.0,
            cross_production: 0.0,
            add_source_term: 0.0,
            residual: 0.0,
            jacobian: 0.0,
        }
    }

    /// The model variant this evaluator was built with.
    pub fn model(&self) -> &SaModel {
        &self.model
    }

    /// Evaluate the source terms at one control volume.
    ///
    /// Returns a read-only view of (residual, Jacobian), valid until the next
    /// call on this instance.
    pub fn evaluate(&mut self, state: &FlowState) -> ResidualView<'_> {
        let mut vars = ModelVars::new(&self.model.constants);

        self.residual = 0.0;
        self.production = 0.0;
        self.destruction = 0.0;
        self.cross_production = 0.0;
        self.add_source_term = 0.0;
        self.jacobian = 0.0;

        let nue = state.nu_tilde;
        let nu = state.kinematic_viscosity();
        let dist = state.wall_distance;

        vars.omega = self.model.vorticity.compute(state);

        // Rotational correction term
        if state.rotating_frame {
            vars.omega += 2.0 * (state.strain_magnitude - vars.omega).min(0.0);
        }

        if dist > WALL_DISTANCE_FLOOR {
            vars.s = vars.omega;

            vars.dist_2 = dist * dist;
            vars.inv_k2_d2 = 1.0 / (vars.k2 * vars.dist_2);

            let (ji, d_ji) = viscosity_ratio(nue, nu, vars.cr1, state.roughness, dist);
            vars.ji = ji;
            vars.d_ji = d_ji;

            viscous_damping(&mut vars, nue, nu);

            self.model.trip.compute(&mut vars);

            self.model.modified_vorticity.compute(&mut vars, nue, nu);
            vars.inv_shat = 1.0 / vars.shat;

            self.model.damping.compute(&mut vars, nue);
            blend_fw(&mut vars);

            vars.norm2_grad = state.nu_tilde_gradient[..state.n_dim]
                .iter()
                .map(|g| g * g)
                .sum();

            let terms = self
                .model
                .source_terms
                .compute(&vars, nue, &mut self.jacobian);
            self.production = terms.production;
            self.destruction = terms.destruction;
            self.cross_production = terms.cross_production;

            self.residual = self.production - self.destruction
                + self.cross_production
                + self.add_source_term;
            self.residual *= state.volume;

            self.jacobian *= state.volume;
        }

        ResidualView { evaluator: self }
    }

    /// Production term from the most recent evaluation.
    #[inline]
    pub fn production(&self) -> f64 {
        self.production
    }

    /// Destruction term from the most recent evaluation.
    #[inline]
    pub fn destruction(&self) -> f64 {
        self.destruction
    }

    /// Cross-production term from the most recent evaluation.
    #[inline]
    pub fn cross_production(&self) -> f64 {
        self.cross_production
    }
}
