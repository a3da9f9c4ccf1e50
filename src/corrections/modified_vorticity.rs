//! Modified vorticity Shat and its ν̃-derivative.
//!
//! Shat is the effective strain/vorticity magnitude that drives production
//! and the destruction damping chain. The three variants share the fixed
//! pipeline's fv1/fv2/Ji values and never recompute them.
//!
//! Reads `s`, `ji`, `fv1`, `d_fv1`, `fv2`, `d_fv2`, `inv_k2_d2`; writes
//! `shat`/`d_shat`.

use crate::vars::ModelVars;

const SHAT_FLOOR: f64 = 1.0e-10;

/// Baseline: Shat = S + ν̃·fv2/(κ²d²), floored at 1e-10.
#[inline]
pub fn modified_vorticity_baseline(vars: &mut ModelVars, nue: f64) {
    let sbar = nue * vars.fv2 * vars.inv_k2_d2;

    vars.shat = (vars.s + sbar).max(SHAT_FLOOR);

    let d_sbar = (vars.fv2 + nue * vars.d_fv2) * vars.inv_k2_d2;
    vars.d_shat = if vars.shat <= SHAT_FLOOR { 0.0 } else { d_sbar };
}

/// Edwards: Shat = S·(1/max(Ji, 1e-16) + fv1), floored at 1e-16 then 1e-10.
///
/// `nu` is the kinematic laminar viscosity.
#[inline]
pub fn modified_vorticity_edwards(vars: &mut ModelVars, nu: f64) {
    vars.shat = (vars.s * (1.0 / vars.ji.max(1.0e-16) + vars.fv1)).max(1.0e-16);
    vars.shat = vars.shat.max(SHAT_FLOOR);

    vars.d_shat = if vars.shat <= SHAT_FLOOR {
        0.0
    } else {
        -vars.s / (vars.ji * vars.ji * nu) + vars.s * vars.d_fv1
    };
}

/// Negative-ν̃-aware: baseline for ν̃ > 0, otherwise `shat`/`d_shat` stay at
/// their reset value. The negative branch of the source assembly never reads
/// them (Allmaras, Johnson & Spalart 2012, eq. 12 does not need Sbar there).
#[inline]
pub fn modified_vorticity_negative(vars: &mut ModelVars, nue: f64) {
    if nue > 0.0 {
        modified_vorticity_baseline(vars, nue);
    }
}

/// Modified-vorticity definition selected at model construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModifiedVorticity {
    /// Original SA definition
    #[default]
    Baseline,
    /// Edwards & Chandra form (SA-E)
    Edwards,
    /// Negative-ν̃ handling (SA-neg); delegates to Baseline for ν̃ > 0
    Negative,
}

impl ModifiedVorticity {
    /// Write shat and d_shat into the record.
    ///
    /// `nue` is ν̃ at the point, `nu` the kinematic laminar viscosity.
    #[inline]
    pub fn compute(&self, vars: &mut ModelVars, nue: f64, nu: f64) {
        match self {
            ModifiedVorticity::Baseline => modified_vorticity_baseline(vars, nue),
            ModifiedVorticity::Edwards => modified_vorticity_edwards(vars, nu),
            ModifiedVorticity::Negative => modified_vorticity_negative(vars, nue),
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ModifiedVorticity::Baseline => "modvort-baseline",
            ModifiedVorticity::Edwards => "modvort-edwards",
            ModifiedVorticity::Negative => "modvort-negative",
        }
    }
}
