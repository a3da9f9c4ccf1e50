//! Near-wall destruction damping: the auxiliary function r and the fixed
//! g/glim/fw chain built on top of it.
//!
//! Only the definition of r (and d_r) is strategy-selectable; the blending
//! chain that turns r into the destruction damping factor fw is a fixed
//! pipeline step shared by every model variant.
//!
//! Reads `shat`, `d_shat`, `inv_shat`, `inv_k2_d2`; writes `r`, `d_r`, then
//! [`blend_fw`] writes `g`, `g_6`, `glim`, `fw`, `d_g`, `d_fw`.

use crate::vars::ModelVars;

const R_CLAMP: f64 = 10.0;

/// Baseline: r = min(ν̃/(Shat·κ²d²), 10), derivative zeroed at the clamp.
#[inline]
pub fn damping_r_baseline(vars: &mut ModelVars, nue: f64) {
    vars.r = (nue * vars.inv_shat * vars.inv_k2_d2).min(R_CLAMP);
    vars.d_r = (vars.shat - nue * vars.d_shat) * vars.inv_shat * vars.inv_shat * vars.inv_k2_d2;
    if vars.r == R_CLAMP {
        vars.d_r = 0.0;
    }
}

/// Edwards: baseline r passed through tanh(r)/tanh(1).
///
/// The derivative factor (1 − tanh(r)²) is evaluated with the transformed r,
/// matching the reference implementation; the clamp does not zero d_r here.
#[inline]
pub fn damping_r_edwards(vars: &mut ModelVars, nue: f64) {
    vars.r = (nue * vars.inv_shat * vars.inv_k2_d2).min(R_CLAMP);
    vars.r = vars.r.tanh() / 1.0_f64.tanh();

    vars.d_r = (vars.shat - nue * vars.d_shat) * vars.inv_shat * vars.inv_shat * vars.inv_k2_d2;
    vars.d_r = (1.0 - vars.r.tanh().powi(2)) * vars.d_r / 1.0_f64.tanh();
}

/// Fixed blending chain from r to the destruction damping factor fw:
///
/// g = r + cw2(r⁶ − r), glim = ((1 + cw3⁶)/(g⁶ + cw3⁶))^(1/6), fw = g·glim,
/// with the matching derivatives d_g and d_fw.
#[inline]
pub fn blend_fw(vars: &mut ModelVars) {
    vars.g = vars.r + vars.cw2 * (vars.r.powi(6) - vars.r);
    vars.g_6 = vars.g.powi(6);
    vars.glim = ((1.0 + vars.cw3_6) / (vars.g_6 + vars.cw3_6)).powf(1.0 / 6.0);
    vars.fw = vars.g * vars.glim;

    vars.d_g = vars.d_r * (1.0 + vars.cw2 * (6.0 * vars.r.powi(5) - 1.0));
    vars.d_fw = vars.d_g * vars.glim * (1.0 - vars.g_6 / (vars.g_6 + vars.cw3_6));
}

/// Damping-function definition selected at model construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WallDamping {
    /// Clamped rational form (original SA)
    #[default]
    Baseline,
    /// tanh-saturated form (SA-E)
    Edwards,
}

impl WallDamping {
    /// Write r and d_r into the record.
    #[inline]
    pub fn compute(&self, vars: &mut ModelVars, nue: f64) {
        match self {
            WallDamping::Baseline => damping_r_baseline(vars, nue),
            WallDamping::Edwards => damping_r_edwards(vars, nue),
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            WallDamping::Baseline => "damping-baseline",
            WallDamping::Edwards => "damping-edwards",
        }
    }
}
