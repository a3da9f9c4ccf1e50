//! Integration tests for the SA source-term evaluator.
//!
//! These tests verify:
//! - Wall-distance guard behavior
//! - Variant-specific production/destruction forms
//! - Jacobian structure (cross-production contributes nothing)
//! - Determinism and volume scaling across the full pipeline

use sa_source::{
    evaluate_field, FlowState, ModifiedVorticity, SAConstants, SaModel, SourceEvaluator,
    SourceTerms, TripTerm, VorticityModel, WallDamping,
};

fn boundary_layer_state(nu_tilde: f64, wall_distance: f64) -> FlowState {
    FlowState::new(nu_tilde, 1.2, 1.8e-5, wall_distance, 1e-6)
        .with_vorticity([0.0, 0.0, 150.0])
        .with_nu_tilde_gradient([1e-3, -5e-4, 2e-4])
}

fn all_variants() -> Vec<SaModel> {
    vec![
        SaModel::baseline(),
        SaModel::edwards(),
        SaModel::negative(),
        SaModel::baseline().with_trip_term(TripTerm::NonZero),
    ]
}

/// A state for the Edwards variant needs the velocity-gradient tensor.
fn edwards_state(nu_tilde: f64) -> FlowState {
    FlowState::new(nu_tilde, 1.2, 1.8e-5, 0.01, 1e-6)
        .with_velocity_gradient([[0.0, 120.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]])
        .with_nu_tilde_gradient([1e-3, 0.0, 0.0])
}

#[test]
fn test_wall_guard_for_every_variant() {
    // dist <= 1e-10 must short-circuit to zero regardless of everything else
    for model in all_variants() {
        let mut evaluator = SourceEvaluator::new(model);
        for dist in [0.0, 1e-12, 1e-10] {
            let state = boundary_layer_state(0.3, dist)
                .with_velocity_gradient([[0.0, 99.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
            let result = evaluator.evaluate(&state);
            assert_eq!(result.residual(), 0.0, "variant {}", model.name());
            assert_eq!(result.jacobian(), 0.0, "variant {}", model.name());
        }
    }
}

#[test]
fn test_baseline_produces_finite_sources_in_boundary_layer() {
    let mut evaluator = SourceEvaluator::new(SaModel::baseline());
    let result = evaluator.evaluate(&boundary_layer_state(1e-4, 0.01));

    assert!(result.residual().is_finite());
    assert!(result.jacobian().is_finite());
    assert!(evaluator.production() > 0.0);
    assert!(evaluator.destruction() > 0.0);
    assert!(evaluator.cross_production() > 0.0);
}

#[test]
fn test_edwards_runs_on_velocity_gradient_input() {
    let mut evaluator = SourceEvaluator::new(SaModel::edwards());
    let result = evaluator.evaluate(&edwards_state(1e-4));

    assert!(result.residual().is_finite());
    assert!(result.jacobian().is_finite());
    assert!(evaluator.production() > 0.0);
}

#[test]
fn test_edwards_zero_gradient_tensor_means_no_production() {
    // Zero velocity gradient -> Omega = 0 -> S = 0 -> production floored away
    let state = FlowState::new(1e-4, 1.2, 1.8e-5, 0.01, 1e-6)
        .with_nu_tilde_gradient([0.0, 0.0, 0.0]);

    let mut evaluator = SourceEvaluator::new(SaModel::edwards());
    evaluator.evaluate(&state);

    // Shat is floored at 1e-10, so production is vanishingly small
    assert!(evaluator.production().abs() < 1e-10);
}

#[test]
fn test_negative_variant_production_linear_in_nu_tilde() {
    // For nue < 0: P = cb1 * (1 - ct3) * S * nue, independent of the damping
    // chain. Linearity: P(2x)/P(x) = 2 exactly in exact arithmetic.
    let c = SAConstants::default();
    let s = 150.0; // vorticity magnitude of the test state

    let mut evaluator = SourceEvaluator::new(SaModel::negative());

    for nue in [-1e-5, -1e-3, -0.1] {
        evaluator.evaluate(&boundary_layer_state(nue, 0.01));
        let expected = c.cb1 * (1.0 - c.ct3) * s * nue;
        let got = evaluator.production();
        assert!(
            (got - expected).abs() < expected.abs() * 1e-12,
            "nue = {nue}: production {got} != {expected}"
        );
        // ct3 = 1.2 > 1, nue < 0: the negative-branch production is positive
        assert!(got > 0.0);
    }
}

#[test]
fn test_negative_variant_matches_baseline_for_positive_nu_tilde() {
    let state = boundary_layer_state(1e-4, 0.01);

    let mut baseline = SourceEvaluator::new(SaModel::baseline());
    let mut negative = SourceEvaluator::new(SaModel::negative());

    let (rb, jb) = {
        let r = baseline.evaluate(&state);
        (r.residual(), r.jacobian())
    };
    let (rn, jn) = {
        let r = negative.evaluate(&state);
        (r.residual(), r.jacobian())
    };

    assert_eq!(rb.to_bits(), rn.to_bits());
    assert_eq!(jb.to_bits(), jn.to_bits());
}

#[test]
fn test_negative_variant_stays_finite_for_negative_nu_tilde() {
    // The damping chain may internally produce Inf/NaN for nue <= 0, but the
    // negative source branch never reads it.
    let mut evaluator = SourceEvaluator::new(SaModel::negative());
    let result = evaluator.evaluate(&boundary_layer_state(-0.05, 0.01));

    assert!(result.residual().is_finite());
    assert!(result.jacobian().is_finite());
}

#[test]
fn test_cross_production_contributes_nothing_to_jacobian() {
    // Same state with and without a nu_tilde gradient: residual shifts by the
    // cross-production, the Jacobian must be bit-identical.
    for model in all_variants() {
        for nue in [1e-4, -1e-4] {
            let with_grad = boundary_layer_state(nue, 0.01)
                .with_velocity_gradient([[0.0, 99.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
            let mut without_grad = with_grad;
            without_grad.nu_tilde_gradient = [0.0; 3];

            let mut a = SourceEvaluator::new(model);
            let mut b = SourceEvaluator::new(model);
            let ja = a.evaluate(&with_grad).jacobian();
            let jb = b.evaluate(&without_grad).jacobian();

            assert_eq!(
                ja.to_bits(),
                jb.to_bits(),
                "variant {} nue {nue}",
                model.name()
            );
        }
    }
}

#[test]
fn test_residual_scales_linearly_with_volume() {
    for model in all_variants() {
        let state = boundary_layer_state(1e-4, 0.01)
            .with_velocity_gradient([[0.0, 99.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        let mut tripled = state;
        tripled.volume = 3.0 * state.volume;

        let mut a = SourceEvaluator::new(model);
        let mut b = SourceEvaluator::new(model);
        let (ra, ja) = {
            let r = a.evaluate(&state);
            (r.residual(), r.jacobian())
        };
        let (rb, jb) = {
            let r = b.evaluate(&tripled);
            (r.residual(), r.jacobian())
        };

        assert!((rb - 3.0 * ra).abs() < ra.abs().max(1e-30) * 1e-12);
        assert!((jb - 3.0 * ja).abs() < ja.abs().max(1e-30) * 1e-12);
    }
}

#[test]
fn test_repeated_evaluation_is_bit_identical() {
    for model in all_variants() {
        let state = boundary_layer_state(1e-4, 0.01)
            .with_velocity_gradient([[0.0, 99.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        let mut evaluator = SourceEvaluator::new(model);

        let first = {
            let r = evaluator.evaluate(&state);
            (r.residual(), r.jacobian())
        };
        for _ in 0..3 {
            let r = evaluator.evaluate(&state);
            assert_eq!(first.0.to_bits(), r.residual().to_bits());
            assert_eq!(first.1.to_bits(), r.jacobian().to_bits());
        }
    }
}

#[test]
fn test_jacobian_approximates_residual_derivative() {
    // Central finite difference of the residual w.r.t. nu_tilde should agree
    // with the analytic Jacobian away from clamps and floors.
    let base = boundary_layer_state(1e-4, 0.01);
    let h = 1e-10;

    let mut evaluator = SourceEvaluator::new(SaModel::baseline());

    let jac = evaluator.evaluate(&base).jacobian();

    let mut plus = base;
    plus.nu_tilde += h;
    let r_plus = evaluator.evaluate(&plus).residual();

    let mut minus = base;
    minus.nu_tilde -= h;
    let r_minus = evaluator.evaluate(&minus).residual();

    let fd = (r_plus - r_minus) / (2.0 * h);
    assert!(
        (jac - fd).abs() < jac.abs() * 1e-3,
        "analytic {jac} vs finite difference {fd}"
    );
}

#[test]
fn test_custom_variant_combination_runs() {
    let model = SaModel::baseline()
        .with_vorticity(VorticityModel::Edwards)
        .with_trip_term(TripTerm::NonZero)
        .with_modified_vorticity(ModifiedVorticity::Negative)
        .with_damping(WallDamping::Edwards)
        .with_source_terms(SourceTerms::Negative);
    assert_eq!(model.name(), "sa-negative");

    let mut evaluator = SourceEvaluator::new(model);
    let result = evaluator.evaluate(&edwards_state(1e-4));
    assert!(result.residual().is_finite());
}

#[test]
fn test_field_evaluation_over_boundary_layer_profile() {
    let points: Vec<FlowState> = (1..=32)
        .map(|i| boundary_layer_state(1e-5 * i as f64, 0.002 * i as f64))
        .collect();

    let field = evaluate_field(SaModel::baseline(), &points);
    assert_eq!(field.len(), points.len());
    for out in &field {
        assert!(out.residual.is_finite());
        assert!(out.jacobian.is_finite());
    }
}
