//! Spalart-Allmaras model constants.
//!
//! The one-equation SA closure is calibrated by a fixed set of coefficients.
//! This module bundles them together with the derived quantities (κ², cv1³,
//! cw3⁶, cb2/σ, cw1) that the evaluation pipeline consumes directly.
//!
//! # References
//!
//! - Spalart & Allmaras (1994): A one-equation turbulence model for
//!   aerodynamic flows. La Recherche Aérospatiale, No. 1, 5-21.
//! - NASA Turbulence Modeling Resource: <https://turbmodels.larc.nasa.gov/spalart.html>
//!
//! # Standard calibration
//!
//! cb1 = 0.1355, cb2 = 0.622, σ = 2/3, κ = 0.41, cw2 = 0.3, cw3 = 2.0,
//! cv1 = 7.1, ct3 = 1.2, ct4 = 0.5, cr1 = 0.5, and
//! cw1 = cb1/κ² + (1 + cb2)/σ.

use thiserror::Error;

/// Error type for model constant validation.
#[derive(Debug, Error)]
pub enum ConstantsError {
    /// A coefficient that must be strictly positive is not
    #[error("coefficient {name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A coefficient is NaN or infinite
    #[error("coefficient {name} is not finite")]
    NonFinite { name: &'static str },
}

/// Calibration constants for the Spalart-Allmaras model.
///
/// Construct with [`SAConstants::default`] for the standard calibration and
/// adjust individual coefficients with the `with_*` methods. Derived
/// quantities (`k2`, `cv1_3`, `cw3_6`, `cb2_sigma`, `cw1`) are computed on
/// demand so the primary coefficients stay the single source of truth.
///
/// # Example
/// ```
/// use sa_source::SAConstants;
///
/// let constants = SAConstants::default();
/// assert!((constants.cb1 - 0.1355).abs() < 1e-14);
///
/// // cw1 = cb1/k^2 + (1 + cb2)/sigma
/// let expected = 0.1355 / (0.41 * 0.41) + (1.0 + 0.622) / (2.0 / 3.0);
/// assert!((constants.cw1() - expected).abs() < 1e-14);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SAConstants {
    /// Production coefficient
    pub cb1: f64,
    /// Cross-diffusion coefficient
    pub cb2: f64,
    /// Turbulent Prandtl number of the ν̃ equation
    pub sigma: f64,
    /// von Kármán constant
    pub kappa: f64,
    /// Destruction blending coefficient
    pub cw2: f64,
    /// Destruction limiter coefficient
    pub cw3: f64,
    /// Viscous damping coefficient
    pub cv1: f64,
    /// Trip-term amplitude
    pub ct3: f64,
    /// Trip-term decay rate
    pub ct4: f64,
    /// Roughness correction coefficient (Aupoix & Spalart 2003)
    pub cr1: f64,
}

impl Default for SAConstants {
    fn default() -> Self {
        Self {
            cb1: 0.1355,
            cb2: 0.622,
            sigma: 2.0 / 3.0,
            kappa: 0.41,
            cw2: 0.3,
            cw3: 2.0,
            cv1: 7.1,
            ct3: 1.2,
            ct4: 0.5,
            cr1: 0.5,
        }
    }
}

impl SAConstants {
    /// Standard calibration (Spalart & Allmaras 1994).
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the trip-term coefficients (ct3, ct4).
    pub fn with_trip_coefficients(mut self, ct3: f64, ct4: f64) -> Self {
        self.ct3 = ct3;
        self.ct4 = ct4;
        self
    }

    /// Override the roughness coefficient cr1.
    pub fn with_roughness_coefficient(mut self, cr1: f64) -> Self {
        self.cr1 = cr1;
        self
    }

    /// Override the viscous damping coefficient cv1.
    pub fn with_cv1(mut self, cv1: f64) -> Self {
        self.cv1 = cv1;
        self
    }

    /// κ²
    #[inline]
    pub fn k2(&self) -> f64 {
        self.kappa * self.kappa
    }

    /// cv1³
    #[inline]
    pub fn cv1_3(&self) -> f64 {
        self.cv1 * self.cv1 * self.cv1
    }

    /// cw3⁶
    #[inline]
    pub fn cw3_6(&self) -> f64 {
        self.cw3.powi(6)
    }

    /// cb2/σ
    #[inline]
    pub fn cb2_sigma(&self) -> f64 {
        self.cb2 / self.sigma
    }

    /// Destruction coefficient cw1 = cb1/κ² + (1 + cb2)/σ.
    #[inline]
    pub fn cw1(&self) -> f64 {
        self.cb1 / self.k2() + (1.0 + self.cb2) / self.sigma
    }

    /// Check that every coefficient is finite and the ones that appear in
    /// denominators are strictly positive.
    ///
    /// The evaluation pipeline never calls this; it is offered for callers
    /// that want to reject a bad calibration up front instead of letting
    /// NaN/Inf propagate arithmetically.
    pub fn validate(&self) -> Result<(), ConstantsError> {
        let all = [
            ("cb1", self.cb1),
            ("cb2", self.cb2),
            ("sigma", self.sigma),
            ("kappa", self.kappa),
            ("cw2", self.cw2),
            ("cw3", self.cw3),
            ("cv1", self.cv1),
            ("ct3", self.ct3),
            ("ct4", self.ct4),
            ("cr1", self.cr1),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(ConstantsError::NonFinite { name });
            }
        }
        for (name, value) in [("sigma", self.sigma), ("kappa", self.kappa)] {
            if value <= 0.0 {
                return Err(ConstantsError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}
