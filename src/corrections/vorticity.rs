//! Vorticity magnitude driving the production term.
//!
//! Two interchangeable definitions of Ω:
//! - [`VorticityModel::Baseline`]: magnitude of the vorticity vector, the
//!   original SA choice.
//! - [`VorticityModel::Edwards`]: strain-rate magnitude built from the
//!   velocity-gradient tensor (Edwards & Chandra 1996), used by the SA-E
//!   variant.

use crate::state::FlowState;

/// Baseline: Ω = ‖∇×U‖₂.
#[inline]
pub fn vorticity_magnitude(vorticity: &[f64; 3]) -> f64 {
    (vorticity[0] * vorticity[0] + vorticity[1] * vorticity[1] + vorticity[2] * vorticity[2])
        .sqrt()
}

/// Edwards: Ω is the strain-rate magnitude
///
/// Sbar = Σᵢⱼ (∂Uᵢ/∂xⱼ + ∂Uⱼ/∂xᵢ)·∂Uᵢ/∂xⱼ − (2/3)·Σᵢ (∂Uᵢ/∂xᵢ)²,
/// Ω = sqrt(max(Sbar, 0)).
///
/// The clamp guards against round-off driving the radicand slightly negative
/// in nearly strain-free flow.
pub fn strain_magnitude(velocity_gradient: &[[f64; 3]; 3], n_dim: usize) -> f64 {
    let mut sbar = 0.0;
    for i in 0..n_dim {
        for j in 0..n_dim {
            sbar += (velocity_gradient[i][j] + velocity_gradient[j][i]) * velocity_gradient[i][j];
        }
    }
    for i in 0..n_dim {
        sbar -= (2.0 / 3.0) * velocity_gradient[i][i] * velocity_gradient[i][i];
    }

    sbar.max(0.0).sqrt()
}

/// Vorticity definition selected at model construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VorticityModel {
    /// Magnitude of the vorticity vector (original SA)
    #[default]
    Baseline,
    /// Strain-rate magnitude from the velocity-gradient tensor (SA-E)
    Edwards,
}

impl VorticityModel {
    /// Compute Ω for the given point state.
    #[inline]
    pub fn compute(&self, state: &FlowState) -> f64 {
        match self {
            VorticityModel::Baseline => vorticity_magnitude(&state.vorticity),
            VorticityModel::Edwards => strain_magnitude(&state.velocity_gradient, state.n_dim),
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            VorticityModel::Baseline => "vorticity-baseline",
            VorticityModel::Edwards => "vorticity-edwards",
        }
    }
}
