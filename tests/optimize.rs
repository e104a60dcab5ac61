use approx::assert_relative_eq;
use mathpipe::api::Domain;
use mathpipe::{
    BoundedSearch, Bounds, Environment, Extrema, FunctionOptimizer, MathError, Normalizer,
    SearchConfig,
};

fn optimize_on(function: &str, low: f64, high: f64) -> Result<Extrema, MathError> {
    let normalizer = Normalizer::default();
    let canonical = normalizer.normalize_expression(function)?;
    let expr = normalizer.parse_canonical(&canonical)?;
    FunctionOptimizer::default().optimize(&expr, Domain { low, high })
}

fn extrema(function: &str, low: f64, high: f64) -> Extrema {
    optimize_on(function, low, high)
        .unwrap_or_else(|e| panic!("failed to optimize {function}: {e}"))
}

#[test]
fn parabola_on_default_domain() {
    let found = extrema("x^2", -10.0, 10.0);
    assert_relative_eq!(found.minimum.point, 0.0, epsilon = 1e-8);
    assert_relative_eq!(found.minimum.value, 0.0, epsilon = 1e-8);
    assert_relative_eq!(found.maximum.point.abs(), 10.0, epsilon = 1e-8);
    assert_relative_eq!(found.maximum.value, 100.0, epsilon = 1e-6);
}

#[test]
fn shifted_parabola_minimum() {
    let found = extrema("(x - 3)^2 + 1", -10.0, 10.0);
    assert_relative_eq!(found.minimum.point, 3.0, epsilon = 1e-6);
    assert_relative_eq!(found.minimum.value, 1.0, epsilon = 1e-9);
}

#[test]
fn implicit_multiplication_in_functions() {
    let found = extrema("2x^2 - 8x", -10.0, 10.0);
    assert_relative_eq!(found.minimum.point, 2.0, epsilon = 1e-6);
    assert_relative_eq!(found.minimum.value, -8.0, epsilon = 1e-9);
}

#[test]
fn starting_point_is_clipped_into_the_domain() {
    let found = extrema("x^2", 1.0, 5.0);
    assert_relative_eq!(found.minimum.point, 1.0);
    assert_relative_eq!(found.minimum.value, 1.0);
    assert_relative_eq!(found.maximum.point, 5.0, epsilon = 1e-8);
    assert_relative_eq!(found.maximum.value, 25.0, epsilon = 1e-6);
}

#[test]
fn extrema_stay_inside_the_domain() {
    for function in ["x^3", "sin(x)", "x", "-x^2 + 4x", "abs(x - 1)"] {
        let found = extrema(function, -2.0, 3.0);
        for point in [found.minimum.point, found.maximum.point] {
            assert!((-2.0..=3.0).contains(&point), "{function}: {point} outside domain");
        }
        assert!(found.minimum.value <= found.maximum.value, "{function}");
    }
}

#[test]
fn degenerate_domain_evaluates_a_single_point() {
    let found = extrema("x^2 + 1", 2.0, 2.0);
    assert_eq!(found.minimum, found.maximum);
    assert_eq!(found.minimum.point, 2.0);
    assert_eq!(found.minimum.value, 5.0);
}

#[test]
fn inverted_domain_is_rejected() {
    let err = optimize_on("x^2", 5.0, -5.0).unwrap_err();
    assert_eq!(err, MathError::Domain { low: 5.0, high: -5.0 });
    assert!(err.is_optimization());
}

#[test]
fn non_finite_bounds_are_rejected() {
    assert!(matches!(
        optimize_on("x", f64::NAN, 1.0),
        Err(MathError::Domain { .. })
    ));
    assert!(matches!(
        optimize_on("x", 0.0, f64::INFINITY),
        Err(MathError::Domain { .. })
    ));
}

#[test]
fn evaluation_failures_become_optimization_errors() {
    for function in ["1/x", "log(x)"] {
        match optimize_on(function, -1.0, 1.0) {
            Err(MathError::Optimization(_)) => {}
            other => panic!("expected an optimization error for {function}, got {other:?}"),
        }
    }
}

#[test]
fn named_constants_evaluate() {
    let found = extrema("x - pi", 0.0, 1.0);
    assert_relative_eq!(found.minimum.value, -std::f64::consts::PI, epsilon = 1e-9);
}

#[test]
fn custom_symbol() {
    let normalizer = Normalizer::new(Environment::with_symbol("t"));
    let expr = normalizer
        .parse_canonical(&normalizer.normalize_expression("(t - 1)^2").unwrap())
        .unwrap();
    let optimizer = FunctionOptimizer::new(Environment::with_symbol("t"), SearchConfig::default());
    let found = optimizer.optimize(&expr, Domain { low: -4.0, high: 4.0 }).unwrap();
    assert_relative_eq!(found.minimum.point, 1.0, epsilon = 1e-6);
}

#[test]
fn bounded_search_reports_iteration_cap() {
    let config = SearchConfig {
        max_iterations: 1,
        ..SearchConfig::default()
    };
    let search = BoundedSearch::new(config);
    assert_eq!(search.config().max_iterations, 1);
    assert_eq!(search.config().tolerance, SearchConfig::default().tolerance);
    let bounds = Bounds::new(-10.0, 10.0).unwrap();
    let minimum = search.minimize(|x| Ok((x - 7.0).powi(2)), 0.0, bounds).unwrap();
    assert!(!minimum.converged);
    assert_eq!(minimum.iterations, 1);
}

#[test]
fn bounded_search_converges_on_smooth_objective() {
    let search = BoundedSearch::default();
    let bounds = Bounds::new(-10.0, 10.0).unwrap();
    let minimum = search.minimize(|x| Ok((x + 4.5).powi(2)), 0.0, bounds).unwrap();
    assert!(minimum.converged);
    assert_relative_eq!(minimum.point, -4.5, epsilon = 1e-6);
}

#[test]
fn bounded_search_rejects_non_finite_values() {
    let search = BoundedSearch::default();
    let bounds = Bounds::new(0.0, 1.0).unwrap();
    let err = search.minimize(|_| Ok(f64::NAN), 0.5, bounds).unwrap_err();
    assert!(matches!(err, MathError::Optimization(_)));
}

#[test]
fn search_config_problems_are_listed() {
    let config = SearchConfig {
        tolerance: 0.0,
        contraction: 1.5,
        ..SearchConfig::default()
    };
    assert_eq!(config.problems().len(), 2);
    assert!(SearchConfig::default().problems().is_empty());
}
