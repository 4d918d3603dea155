//! End-to-end model comparison on the default one-sample t-test scenario.

use approx::assert_relative_eq;
use bf_model::prelude::*;

#[test]
fn default_t_test_bayes_factor() {
    let t: f64 = 2.03;
    let n: f64 = 80.0;
    let d = t / n.sqrt();

    // likelihood of the observed effect size
    let likelihood = Likelihood::noncentral_d(d, n);

    // a wide Cauchy prior for the alternative, a point null
    let h1_prior = Prior::cauchy(0.0, 1.0, None, None);
    let h0_prior = Prior::point(0.0);

    let m1 = likelihood.combine(&h1_prior);
    let m0 = likelihood.combine(&h0_prior);

    let m1_evidence = m1.integrate().unwrap();
    let m0_evidence = m0.integrate().unwrap();

    let bf = m1_evidence.bayes_factor(&m0_evidence).unwrap();
    assert_relative_eq!(bf, 0.6420764880775981, max_relative = 1e-8);

    // the inverse comparison favors the null by the reciprocal amount
    let bf01 = m0_evidence.divide(&m1_evidence).unwrap();
    assert_relative_eq!(bf01, 1.0 / bf, max_relative = 1e-12);
}

#[test]
fn savage_dickey_ratio_matches_evidence_division() {
    let t: f64 = 2.03;
    let n: f64 = 80.0;
    let d = t / n.sqrt();

    let likelihood = Likelihood::noncentral_d(d, n);
    let h1_prior = Prior::cauchy(0.0, 1.0, None, None);
    let h0_prior = Prior::point(0.0);

    let m1 = likelihood.combine(&h1_prior);
    let m0 = likelihood.combine(&h0_prior);

    let bf = m1
        .integrate()
        .unwrap()
        .bayes_factor(&m0.integrate().unwrap())
        .unwrap();

    // prior/posterior density ratio at the null value
    let posterior = m1.posterior();
    let sd_bf = h1_prior.evaluate(0.0).unwrap() / posterior.evaluate(0.0).unwrap();

    assert_relative_eq!(sd_bf, bf, max_relative = 1e-9);
}

#[test]
fn repeated_integration_is_stable() {
    let likelihood = Likelihood::noncentral_d(0.2, 50.0);
    let model = likelihood.combine(&Prior::cauchy(0.0, 0.707, None, None));
    let first = model.integrate().unwrap();
    let second = model.integrate().unwrap();
    assert_relative_eq!(first.value(), second.value(), epsilon = 1e-15);
}

#[test]
fn evidence_display_renders_the_value() {
    let likelihood = Likelihood::normal(0.4, 0.3);
    let evidence = likelihood
        .combine(&Prior::point(0.0))
        .integrate()
        .unwrap();
    assert_eq!(evidence.to_string(), evidence.value().to_string());
}
