//! Per-point flow state consumed by the source evaluator.
//!
//! The evaluator is deliberately ignorant of meshes and global field storage;
//! the caller gathers everything the source terms need at one control volume
//! into a [`FlowState`] and hands it over by reference.
//!
//! Either the vorticity vector or the full velocity-gradient tensor drives
//! the production term, depending on the selected vorticity variant: the
//! baseline variant reads `vorticity`, the Edwards variant reads
//! `velocity_gradient`. Populate whichever the model uses (or both).

use thiserror::Error;

/// Error type for flow-state validation.
#[derive(Debug, Error)]
pub enum StateError {
    /// Density must be strictly positive
    #[error("density must be positive, got {0}")]
    NonPositiveDensity(f64),

    /// Laminar viscosity must be strictly positive
    #[error("laminar viscosity must be positive, got {0}")]
    NonPositiveViscosity(f64),

    /// Cell volume must not be negative
    #[error("cell volume must not be negative, got {0}")]
    NegativeVolume(f64),

    /// Wall distance must not be negative
    #[error("wall distance must not be negative, got {0}")]
    NegativeWallDistance(f64),

    /// A field is NaN or infinite
    #[error("field {0} is not finite")]
    NonFinite(&'static str),

    /// Spatial dimensionality outside 2..=3
    #[error("dimensionality must be 2 or 3, got {0}")]
    BadDimension(usize),
}

/// Local flow and turbulence state at one mesh control volume.
///
/// All quantities are point values gathered by the caller; gradients are
/// computed externally. Units are whatever consistent system the surrounding
/// solver uses.
///
/// # Example
/// ```
/// use sa_source::FlowState;
///
/// let state = FlowState::new(0.1, 1.2, 1.8e-5, 0.05, 1e-3)
///     .with_vorticity([0.0, 0.0, 40.0])
///     .with_nu_tilde_gradient([0.2, -0.1, 0.0]);
///
/// assert!((state.kinematic_viscosity() - 1.5e-5).abs() < 1e-19);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FlowState {
    /// Turbulence scalar ν̃ (modified eddy viscosity)
    pub nu_tilde: f64,
    /// Gradient of ν̃
    pub nu_tilde_gradient: [f64; 3],
    /// Density ρ
    pub density: f64,
    /// Dynamic laminar viscosity μ
    pub laminar_viscosity: f64,
    /// Distance to the nearest wall
    pub wall_distance: f64,
    /// Equivalent sand-grain roughness height (0 for smooth walls)
    pub roughness: f64,
    /// Control-volume size
    pub volume: f64,
    /// Vorticity vector ∇×U (baseline vorticity variant)
    pub vorticity: [f64; 3],
    /// Velocity-gradient tensor, `velocity_gradient[i][j]` = ∂Uᵢ/∂xⱼ
    /// (Edwards vorticity variant)
    pub velocity_gradient: [[f64; 3]; 3],
    /// Strain-rate magnitude (rotating-frame correction)
    pub strain_magnitude: f64,
    /// Whether the rotating-frame vorticity correction applies
    pub rotating_frame: bool,
    /// Spatial dimensionality (2 or 3)
    pub n_dim: usize,
}

impl FlowState {
    /// Create a state from the scalar primitives; vector quantities start at
    /// zero and are filled in with the `with_*` methods.
    pub fn new(
        nu_tilde: f64,
        density: f64,
        laminar_viscosity: f64,
        wall_distance: f64,
        volume: f64,
    ) -> Self {
        Self {
            nu_tilde,
            nu_tilde_gradient: [0.0; 3],
            density,
            laminar_viscosity,
            wall_distance,
            roughness: 0.0,
            volume,
            vorticity: [0.0; 3],
            velocity_gradient: [[0.0; 3]; 3],
            strain_magnitude: 0.0,
            rotating_frame: false,
            n_dim: 3,
        }
    }

    /// Set the gradient of ν̃.
    pub fn with_nu_tilde_gradient(mut self, gradient: [f64; 3]) -> Self {
        self.nu_tilde_gradient = gradient;
        self
    }

    /// Set the vorticity vector.
    pub fn with_vorticity(mut self, vorticity: [f64; 3]) -> Self {
        self.vorticity = vorticity;
        self
    }

    /// Set the velocity-gradient tensor (`[i][j]` = ∂Uᵢ/∂xⱼ).
    pub fn with_velocity_gradient(mut self, gradient: [[f64; 3]; 3]) -> Self {
        self.velocity_gradient = gradient;
        self
    }

    /// Set the wall roughness height.
    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    /// Set the strain-rate magnitude and enable the rotating-frame correction.
    pub fn with_rotating_frame(mut self, strain_magnitude: f64) -> Self {
        self.strain_magnitude = strain_magnitude;
        self.rotating_frame = true;
        self
    }

    /// Set the spatial dimensionality (2 or 3).
    pub fn with_dimensions(mut self, n_dim: usize) -> Self {
        self.n_dim = n_dim;
        self
    }

    /// Kinematic laminar viscosity ν = μ/ρ.
    #[inline]
    pub fn kinematic_viscosity(&self) -> f64 {
        self.laminar_viscosity / self.density
    }

    /// Check the state for obviously nonphysical inputs.
    ///
    /// The evaluator never calls this: malformed inputs propagate
    /// arithmetically (including NaN/Inf) without early termination. Callers
    /// that prefer to fail fast can validate before evaluating.
    pub fn validate(&self) -> Result<(), StateError> {
        let scalars = [
            ("nu_tilde", self.nu_tilde),
            ("density", self.density),
            ("laminar_viscosity", self.laminar_viscosity),
            ("wall_distance", self.wall_distance),
            ("roughness", self.roughness),
            ("volume", self.volume),
            ("strain_magnitude", self.strain_magnitude),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(StateError::NonFinite(name));
            }
        }
        for v in self.nu_tilde_gradient.iter().chain(self.vorticity.iter()) {
            if !v.is_finite() {
                return Err(StateError::NonFinite("vector field"));
            }
        }
        if self.density <= 0.0 {
            return Err(StateError::NonPositiveDensity(self.density));
        }
        if self.laminar_viscosity <= 0.0 {
            return Err(StateError::NonPositiveViscosity(self.laminar_viscosity));
        }
        if self.volume < 0.0 {
            return Err(StateError::NegativeVolume(self.volume));
        }
        if self.wall_distance < 0.0 {
            return Err(StateError::NegativeWallDistance(self.wall_distance));
        }
        if !(2..=3).contains(&self.n_dim) {
            return Err(StateError::BadDimension(self.n_dim));
        }
        Ok(())
    }
}
