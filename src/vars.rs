//! Per-call scratch record for the evaluation pipeline.
//!
//! One [`ModelVars`] is zero-initialized at the start of every
//! [`SourceEvaluator::evaluate`](crate::SourceEvaluator::evaluate) call and
//! threaded by exclusive reference through the pipeline steps. Each field is
//! written exactly once, in pipeline order, before anything reads it; the
//! record never outlives the call.

use crate::constants::SAConstants;

/// Model constants and intermediate quantities for one evaluation.
///
/// Field groups mirror the evaluation pipeline: calibration constants copied
/// from [`SAConstants`], the chained damping/production functions and their
/// ν̃-derivatives, and a few cached helpers (inverse distances, squared
/// gradient norm).
#[derive(Clone, Copy, Debug)]
pub struct ModelVars {
    // Constants
    pub cv1_3: f64,
    pub k2: f64,
    pub cb1: f64,
    pub cw2: f64,
    pub ct3: f64,
    pub ct4: f64,
    pub cw3_6: f64,
    pub cb2_sigma: f64,
    pub sigma: f64,
    pub cb2: f64,
    pub cw1: f64,
    pub cr1: f64,

    // Intermediate functions and their derivatives w.r.t. ν̃
    pub ft2: f64,
    pub d_ft2: f64,
    pub r: f64,
    pub d_r: f64,
    pub g: f64,
    pub d_g: f64,
    pub glim: f64,
    pub fw: f64,
    pub d_fw: f64,
    pub ji: f64,
    pub d_ji: f64,
    pub s: f64,
    pub shat: f64,
    pub d_shat: f64,
    pub fv1: f64,
    pub d_fv1: f64,
    pub fv2: f64,
    pub d_fv2: f64,

    // Helpers
    pub omega: f64,
    pub dist_2: f64,
    pub inv_k2_d2: f64,
    pub inv_shat: f64,
    pub g_6: f64,
    pub norm2_grad: f64,
}

impl ModelVars {
    /// Fresh record: constants populated, every intermediate at zero.
    pub fn new(constants: &SAConstants) -> Self {
        Self {
            cv1_3: constants.cv1_3(),
            k2: constants.k2(),
            cb1: constants.cb1,
            cw2: constants.cw2,
            ct3: constants.ct3,
            ct4: constants.ct4,
            cw3_6: constants.cw3_6(),
            cb2_sigma: constants.cb2_sigma(),
            sigma: constants.sigma,
            cb2: constants.cb2,
            cw1: constants.cw1(),
            cr1: constants.cr1,

            ft2: 0.0,
            d_ft2: 0.0,
            r: 0.0,
            d_r: 0.0,
            g: 0.0,
            d_g: 0.0,
            glim: 0.0,
            fw: 0.0,
            d_fw: 0.0,
            ji: 0.0,
            d_ji: 0.0,
            s: 0.0,
            shat: 0.0,
            d_shat: 0.0,
            fv1: 0.0,
            d_fv1: 0.0,
            fv2: 0.0,
            d_fv2: 0.0,

            omega: 0.0,
            dist_2: 0.0,
            inv_k2_d2: 0.0,
            inv_shat: 0.0,
            g_6: 0.0,
            norm2_grad: 0.0,
        }
    }
}
