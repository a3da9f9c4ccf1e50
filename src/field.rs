//! Bulk evaluation over a slice of point states.
//!
//! The evaluator itself is single-threaded; evaluation across mesh points is
//! embarrassingly parallel as long as each worker keeps its own evaluator.
//! [`evaluate_field`] is the sequential sweep; with the `parallel` feature,
//! [`evaluate_field_parallel`] distributes points over the rayon pool with
//! one evaluator per worker.

use crate::evaluator::SourceEvaluator;
use crate::model::SaModel;
use crate::state::FlowState;

/// Residual and Jacobian for one point, copied out of the evaluator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointSource {
    /// Net source residual, scaled by cell volume
    pub residual: f64,
    /// d(residual)/dν̃, scaled by cell volume
    pub jacobian: f64,
}

/// Evaluate the source terms at every point, sequentially.
pub fn evaluate_field(model: SaModel, points: &[FlowState]) -> Vec<PointSource> {
    let mut evaluator = SourceEvaluator::new(model);
    points
        .iter()
        .map(|point| {
            let view = evaluator.evaluate(point);
            PointSource {
                residual: view.residual(),
                jacobian: view.jacobian(),
            }
        })
        .collect()
}

/// Evaluate the source terms at every point on the rayon thread pool.
///
/// Each worker initializes its own [`SourceEvaluator`], so no scratch state
/// is shared. Results are in point order and identical to
/// [`evaluate_field`].
#[cfg(feature = "parallel")]
pub fn evaluate_field_parallel(model: SaModel, points: &[FlowState]) -> Vec<PointSource> {
    use rayon::prelude::*;

    points
        .par_iter()
        .map_init(
            || SourceEvaluator::new(model),
            |evaluator, point| {
                let view = evaluator.evaluate(point);
                PointSource {
                    residual: view.residual(),
                    jacobian: view.jacobian(),
                }
            },
        )
        .collect()
}
