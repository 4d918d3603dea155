//! Per-family prior behavior: densities, normalization, truncation, and
//! the point mass.

use approx::assert_relative_eq;
use bf_model::prelude::*;

#[test]
fn normal_prior_density_shape() {
    let prior = Prior::normal(0.0, 1.0, None, None);
    // standard normal at the mean
    assert_relative_eq!(prior.evaluate(0.0).unwrap(), 0.3989, max_relative = 1e-3);
    // symmetry
    assert_relative_eq!(
        prior.evaluate(-1.0).unwrap(),
        prior.evaluate(1.0).unwrap(),
        epsilon = 1e-8
    );
}

#[test]
fn normal_prior_normalizes_over_the_real_line() {
    let prior = Prior::normal(0.0, 1.0, None, None);
    let mass = prior.integrate(None, None).unwrap();
    assert_relative_eq!(mass, 1.0, epsilon = 1e-6);
}

#[test]
fn normal_prior_partial_integral() {
    let prior = Prior::normal(0.0, 1.0, None, None);
    let mass = prior.integrate(Some(-1.0), Some(1.0)).unwrap();
    assert_relative_eq!(mass, 0.6827, epsilon = 1e-2);
}

#[test]
fn beta_prior_normalizes_on_unit_interval() {
    let prior = Prior::beta(2.0, 5.0, None, None);
    let mass = prior.integrate(Some(0.0), Some(1.0)).unwrap();
    assert_relative_eq!(mass, 1.0, epsilon = 1e-6);
    assert_relative_eq!(prior.evaluate(0.5).unwrap(), 0.9375, epsilon = 1e-10);
}

#[test]
fn student_t_prior_behaves_like_a_density() {
    let prior = Prior::student_t(0.0, 1.0, 3.0, None, None);
    let at_center = prior.evaluate(0.0).unwrap();
    assert!(at_center > 0.0);
    let partial = prior.integrate(Some(-1.0), Some(1.0)).unwrap();
    assert!(partial > 0.0 && partial < 1.0);
    let full = prior.integrate(None, None).unwrap();
    assert_relative_eq!(full, 1.0, epsilon = 1e-6);
}

#[test]
fn cauchy_prior_density_and_mass() {
    let prior = Prior::cauchy(0.0, 1.0, None, None);
    assert_relative_eq!(
        prior.evaluate(0.0).unwrap(),
        std::f64::consts::FRAC_1_PI,
        epsilon = 1e-12
    );
    let full = prior.integrate(None, None).unwrap();
    assert_relative_eq!(full, 1.0, epsilon = 1e-6);
}

#[test]
fn point_prior_is_an_indicator() {
    let prior = Prior::point(3.0);
    assert_eq!(prior.evaluate(3.0).unwrap(), 1.0);
    assert_eq!(prior.evaluate(2.9).unwrap(), 0.0);
    assert_eq!(prior.evaluate(3.1).unwrap(), 0.0);
}

#[test]
fn point_prior_interval_mass() {
    let prior = Prior::point(2.0);
    assert_eq!(prior.integrate(Some(1.5), Some(2.5)).unwrap(), 1.0);
    assert_eq!(prior.integrate(Some(2.1), Some(3.0)).unwrap(), 0.0);
}

#[test]
fn truncated_normal_renormalizes() {
    let prior = Prior::normal(0.0, 1.0, Some(0.0), None);
    // half-normal density
    assert_relative_eq!(prior.evaluate(1.0).unwrap(), 0.48394144903828673, epsilon = 1e-10);
    assert_eq!(prior.evaluate(-0.5).unwrap(), 0.0);
    let mass = prior.integrate(None, None).unwrap();
    assert_relative_eq!(mass, 1.0, epsilon = 1e-6);
}

#[test]
fn truncated_cauchy_mass_is_one() {
    let prior = Prior::cauchy(0.0, 1.0, Some(-2.0), Some(2.0));
    let mass = prior.integrate(None, None).unwrap();
    assert_relative_eq!(mass, 1.0, epsilon = 1e-6);
    assert_eq!(prior.evaluate(3.0).unwrap(), 0.0);
}

#[test]
fn prior_vector_evaluation_matches_scalar() {
    let prior = Prior::cauchy(0.0, 1.0, None, None);
    let many = prior.evaluate_many(&[-0.5, 0.0, 0.5]).unwrap();
    for (&x, &v) in [-0.5, 0.0, 0.5].iter().zip(many.iter()) {
        assert_relative_eq!(prior.evaluate(x).unwrap(), v, epsilon = 1e-12);
    }
}
