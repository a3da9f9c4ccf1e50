//! Source assembly: production, destruction, cross-production and the
//! Jacobian of the net source term with respect to ν̃.
//!
//! Production and destruction each accumulate into the shared Jacobian;
//! cross-production deliberately contributes nothing to it (its
//! linearization is dropped, a standard implicit-SA choice).
//!
//! Reads `shat`, `d_shat`, `ft2`, `d_ft2`, `fw`, `d_fw`, `s`, `dist_2`,
//! `norm2_grad` and constants.

use crate::vars::ModelVars;

/// Output of one source assembly: the three term values. The Jacobian is
/// accumulated separately through the `&mut f64` passed to the helpers.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceContributions {
    /// Production term
    pub production: f64,
    /// Destruction term
    pub destruction: f64,
    /// Cross-diffusion production term
    pub cross_production: f64,
}

/// Baseline production: cb1·(1 − ft2)·Shat·ν̃.
#[inline]
pub fn production_baseline(vars: &ModelVars, nue: f64, jacobian: &mut f64) -> f64 {
    *jacobian += vars.cb1
        * (-vars.shat * nue * vars.d_ft2 + (1.0 - vars.ft2) * (nue * vars.d_shat + vars.shat));
    vars.cb1 * (1.0 - vars.ft2) * vars.shat * nue
}

/// Baseline destruction: (cw1·fw − cb1·ft2/κ²)·ν̃²/d².
#[inline]
pub fn destruction_baseline(vars: &ModelVars, nue: f64, jacobian: &mut f64) -> f64 {
    *jacobian -= (vars.cw1 * vars.d_fw - vars.cb1 / vars.k2 * vars.d_ft2) * nue * nue / vars.dist_2
        + (vars.cw1 * vars.fw - vars.cb1 * vars.ft2 / vars.k2) * 2.0 * nue / vars.dist_2;
    (vars.cw1 * vars.fw - vars.cb1 * vars.ft2 / vars.k2) * nue * nue / vars.dist_2
}

/// Cross-production: cb2/σ·‖∇ν̃‖². No Jacobian contribution.
#[inline]
pub fn cross_production_baseline(vars: &ModelVars) -> f64 {
    vars.cb2_sigma * vars.norm2_grad
}

/// Negative-branch production: cb1·(1 − ct3)·S·ν̃, linear in ν̃.
#[inline]
pub fn production_negative(vars: &ModelVars, nue: f64, jacobian: &mut f64) -> f64 {
    *jacobian += vars.cb1 * (1.0 - vars.ct3) * vars.s;
    vars.cb1 * (1.0 - vars.ct3) * vars.s * nue
}

/// Negative-branch destruction: cw1·ν̃²/d².
#[inline]
pub fn destruction_negative(vars: &ModelVars, nue: f64, jacobian: &mut f64) -> f64 {
    *jacobian -= 2.0 * vars.cw1 * nue / vars.dist_2;
    vars.cw1 * nue * nue / vars.dist_2
}

/// Source-assembly policy selected at model construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceTerms {
    /// Original SA assembly
    #[default]
    Baseline,
    /// SA-neg assembly: baseline for ν̃ > 0, dedicated forms otherwise
    Negative,
}

impl SourceTerms {
    /// Assemble the three terms and accumulate the Jacobian.
    #[inline]
    pub fn compute(&self, vars: &ModelVars, nue: f64, jacobian: &mut f64) -> SourceContributions {
        match self {
            SourceTerms::Baseline => Self::compute_baseline(vars, nue, jacobian),
            SourceTerms::Negative => {
                if nue > 0.0 {
                    Self::compute_baseline(vars, nue, jacobian)
                } else {
                    SourceContributions {
                        production: production_negative(vars, nue, jacobian),
                        destruction: destruction_negative(vars, nue, jacobian),
                        // Same cross production as baseline
                        cross_production: cross_production_baseline(vars),
                    }
                }
            }
        }
    }

    #[inline]
    fn compute_baseline(vars: &ModelVars, nue: f64, jacobian: &mut f64) -> SourceContributions {
        SourceContributions {
            production: production_baseline(vars, nue, jacobian),
            destruction: destruction_baseline(vars, nue, jacobian),
            cross_production: cross_production_baseline(vars),
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            SourceTerms::Baseline => "source-baseline",
            SourceTerms::Negative => "source-negative",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SAConstants;

    const TOL: f64 = 1e-14;

    fn filled_vars() -> ModelVars {
        let mut vars = ModelVars::new(&SAConstants::default());
        vars.shat = 3.0;
        vars.d_shat = 0.4;
        vars.ft2 = 0.0;
        vars.d_ft2 = 0.0;
        vars.fw = 0.8;
        vars.d_fw = 0.1;
        vars.s = 5.0;
        vars.dist_2 = 0.04;
        vars.norm2_grad = 0.25;
        vars
    }

    #[test]
    fn test_baseline_production() {
        let vars = filled_vars();
        let mut jac = 0.0;
        let nue = 0.2;
        let p = production_baseline(&vars, nue, &mut jac);

        assert!((p - vars.cb1 * 3.0 * 0.2).abs() < TOL);
        assert!((jac - vars.cb1 * (0.2 * 0.4 + 3.0)).abs() < TOL);
    }

    #[test]
    fn test_baseline_destruction() {
        let vars = filled_vars();
        let mut jac = 0.0;
        let nue = 0.2;
        let d = destruction_baseline(&vars, nue, &mut jac);

        let coeff = vars.cw1 * 0.8;
        assert!((d - coeff * 0.04 / 0.04).abs() < TOL);
        let expected_jac = -(vars.cw1 * 0.1 * 0.04 / 0.04 + coeff * 0.4 / 0.04);
        assert!((jac - expected_jac).abs() < 1e-12);
    }

    #[test]
    fn test_cross_production_no_jacobian() {
        let vars = filled_vars();
        let c = cross_production_baseline(&vars);
        assert!((c - vars.cb2_sigma * 0.25).abs() < TOL);
    }

    #[test]
    fn test_negative_delegates_for_positive_nue() {
        let vars = filled_vars();
        let nue = 0.2;

        let mut jac_a = 0.0;
        let a = SourceTerms::Baseline.compute(&vars, nue, &mut jac_a);
        let mut jac_b = 0.0;
        let b = SourceTerms::Negative.compute(&vars, nue, &mut jac_b);

        assert!((a.production - b.production).abs() < TOL);
        assert!((a.destruction - b.destruction).abs() < TOL);
        assert!((a.cross_production - b.cross_production).abs() < TOL);
        assert!((jac_a - jac_b).abs() < TOL);
    }

    #[test]
    fn test_negative_branch_forms() {
        let vars = filled_vars();
        let nue = -0.1;
        let mut jac = 0.0;
        let out = SourceTerms::Negative.compute(&vars, nue, &mut jac);

        // P = cb1 * (1 - ct3) * S * nue
        let p = vars.cb1 * (1.0 - vars.ct3) * 5.0 * nue;
        assert!((out.production - p).abs() < TOL);

        // D = cw1 * nue^2 / d^2
        let d = vars.cw1 * 0.01 / 0.04;
        assert!((out.destruction - d).abs() < TOL);

        // Cross production unchanged from baseline
        assert!((out.cross_production - vars.cb2_sigma * 0.25).abs() < TOL);

        // J = cb1*(1-ct3)*S - 2*cw1*nue/d^2
        let expected_jac = vars.cb1 * (1.0 - vars.ct3) * 5.0 - 2.0 * vars.cw1 * nue / 0.04;
        assert!((jac - expected_jac).abs() < 1e-12);
    }

    #[test]
    fn test_negative_branch_ignores_damping_chain() {
        // NaN in the unused fields must not leak into the negative branch
        let mut vars = filled_vars();
        vars.shat = f64::NAN;
        vars.d_shat = f64::NAN;
        vars.fw = f64::NAN;
        vars.d_fw = f64::NAN;
        vars.ft2 = f64::NAN;

        let mut jac = 0.0;
        let out = SourceTerms::Negative.compute(&vars, -0.1, &mut jac);

        assert!(out.production.is_finite());
        assert!(out.destruction.is_finite());
        assert!(out.cross_production.is_finite());
        assert!(jac.is_finite());
    }
}
