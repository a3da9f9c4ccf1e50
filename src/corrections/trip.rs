//! Transition trip term ft2 and its ν̃-derivative.
//!
//! The trip term suppresses production in laminar regions upstream of a
//! transition trip. Most RANS practice runs with it disabled (ft2 = 0), which
//! is why [`TripTerm::Off`] is the default; [`TripTerm::NonZero`] follows the
//! literature form ft2 = ct3·exp(−ct4·Ji²).
//!
//! Reads `ji`/`d_ji` from the record; writes `ft2`/`d_ft2`.

use crate::vars::ModelVars;

/// Disabled trip term.
#[inline]
pub fn trip_term_off(vars: &mut ModelVars) {
    vars.ft2 = 0.0;
    vars.d_ft2 = 0.0;
}

/// Literature trip term: ft2 = ct3·exp(−ct4·Ji²), chained through Ji.
#[inline]
pub fn trip_term_nonzero(vars: &mut ModelVars) {
    let xsi2 = vars.ji * vars.ji;
    vars.ft2 = vars.ct3 * (-vars.ct4 * xsi2).exp();
    vars.d_ft2 = -2.0 * vars.ct4 * vars.ji * vars.ft2 * vars.d_ji;
}

/// Trip-term activation selected at model construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TripTerm {
    /// ft2 = 0 (standard practice)
    #[default]
    Off,
    /// ft2 = ct3·exp(−ct4·Ji²)
    NonZero,
}

impl TripTerm {
    /// Write ft2 and d_ft2 into the record.
    #[inline]
    pub fn compute(&self, vars: &mut ModelVars) {
        match self {
            TripTerm::Off => trip_term_off(vars),
            TripTerm::NonZero => trip_term_nonzero(vars),
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TripTerm::Off => "trip-off",
            TripTerm::NonZero => "trip-nonzero",
        }
    }
}
