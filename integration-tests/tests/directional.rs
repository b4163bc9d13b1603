use std::f64::consts::FRAC_1_SQRT_2;

use approx::assert_relative_eq;
use integration_tests::test_objectives::{Counting, bowl, bowl_exact_step, bowl_gradient};
use stride_solvers::{
    descent, gradient,
    optimization::{
        equal_interval::{self, Status},
        line_search::{self, Config, Error, Ray},
    },
};

fn steepest_bowl_direction() -> [f64; 2] {
    let norm = 53f64.sqrt();
    [-7.0 / norm, -2.0 / norm]
}

#[test]
fn estimated_gradient_matches_analytic_gradient() {
    let estimate = gradient::estimate(&bowl, &[1.0, 1.0], gradient::DEFAULT_STEP).unwrap();
    let exact = bowl_gradient(&[1.0, 1.0]);

    assert_relative_eq!(estimate[0], exact[0], epsilon = 1e-3);
    assert_relative_eq!(estimate[1], exact[1], epsilon = 1e-3);
}

#[test]
fn descent_check_classifies_directions() {
    let gradient = bowl_gradient(&[1.0, 1.0]);
    let uphill = gradient;
    let downhill = gradient.map(|g| -g);

    assert!(descent::is_descent(&bowl, &downhill, &[1.0, 1.0]).unwrap());
    assert!(!descent::is_descent(&bowl, &uphill, &[1.0, 1.0]).unwrap());
    assert!(descent::is_descent(&bowl, &steepest_bowl_direction(), &[1.0, 1.0]).unwrap());
}

#[test]
fn step_agrees_with_exact_line_minimizer() {
    let base = [1.0, 1.0];
    let direction = steepest_bowl_direction();

    let solution =
        line_search::minimize_unobserved(&bowl, base, direction, [0.0, 10.0], &Config::default())
            .unwrap();

    let exact = bowl_exact_step(base, direction);
    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.step, exact, epsilon = 1e-6);
    assert_relative_eq!(solution.point[0], base[0] + exact * direction[0], epsilon = 1e-6);
    assert_relative_eq!(solution.point[1], base[1] + exact * direction[1], epsilon = 1e-6);
}

#[test]
fn diagonal_step_matches_reference_value() {
    let direction = [-FRAC_1_SQRT_2, -FRAC_1_SQRT_2];

    let solution = line_search::minimize_unobserved(
        &bowl,
        [1.0, 1.0],
        direction,
        [0.0, 5.0],
        &Config::default(),
    )
    .unwrap();

    assert_relative_eq!(solution.step, 1.580_591_629_719_820_4, epsilon = 1e-7);
    assert_relative_eq!(solution.step, bowl_exact_step([1.0, 1.0], direction), epsilon = 1e-7);
}

#[test]
fn ray_lets_other_minimizers_search_the_same_line() {
    let base = [1.0, 1.0];
    let direction = steepest_bowl_direction();
    let ray = Ray::new(&bowl, base, direction);

    let along_ray =
        equal_interval::minimize_unobserved(&ray, [0.0, 10.0], &equal_interval::Config::default())
            .unwrap();
    let searched =
        line_search::minimize_unobserved(&bowl, base, direction, [0.0, 10.0], &Config::default())
            .unwrap();

    assert_eq!(along_ray.x, searched.step);
    assert_eq!(along_ray.evals, searched.evals);
    assert_eq!(ray.point(along_ray.x), searched.point);
}

#[test]
fn non_descent_direction_is_rejected_before_searching() {
    let objective = Counting::new(bowl);
    let uphill = bowl_gradient(&[1.0, 1.0]);

    let result = line_search::minimize_unobserved(
        &objective,
        [1.0, 1.0],
        uphill,
        [0.0, 1.0],
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::NonDescentDirection { slope }) if slope > 0.0));
    assert_eq!(objective.calls(), 3);
}

#[test]
fn every_call_is_accounted_for() {
    let objective = Counting::new(bowl);

    let solution = line_search::minimize_unobserved(
        &objective,
        [1.0, 1.0],
        steepest_bowl_direction(),
        [0.0, 10.0],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(solution.check_evals, 3);
    assert_eq!(solution.evals + solution.check_evals, objective.calls());
}

#[test]
fn three_intervals_fail_explicitly_on_centered_minimum() {
    let search = equal_interval::Config::new(3, 1e-12, 100).unwrap();
    let config = Config::from(search);

    let result = line_search::minimize_unobserved(
        &bowl,
        [1.0, 1.0],
        [-FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
        [0.0, 5.0],
        &config,
    );

    assert!(matches!(
        result,
        Err(Error::Search(equal_interval::Error::DidNotConverge {
            iters: 0,
            evals: 3,
            ..
        }))
    ));
}

#[test]
fn minimum_past_the_bracket_is_reported() {
    let result = line_search::minimize_unobserved(
        &bowl,
        [1.0, 1.0],
        steepest_bowl_direction(),
        [0.0, 1.0],
        &Config::default(),
    );

    assert!(matches!(
        result,
        Err(Error::Search(equal_interval::Error::MinimumBeyondBracket { evals: 10, .. }))
    ));
}
