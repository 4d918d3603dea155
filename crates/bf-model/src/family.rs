//! Closed distribution-family definitions.
//!
//! Each variant carries exactly the required (and optional) parameters of
//! its family as typed fields, so a definition with a missing required
//! parameter cannot be constructed. Value-domain checks (positive scales
//! and the like) are the engine's responsibility and surface on the first
//! engine call.

use bf_core::ParamSet;

/// Likelihood families: how observed data informs the unknown parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LikelihoodFamily {
    /// Normal likelihood for an observed `mean` with standard error `se`.
    Normal { mean: f64, se: f64 },
    /// One-sample Cohen's d likelihood (d-scaled noncentral t).
    NoncentralD { d: f64, n: f64 },
    /// Two-sample Cohen's d likelihood.
    NoncentralD2 { d: f64, n1: f64, n2: f64 },
    /// Likelihood for an observed t statistic with `df` degrees of freedom.
    NoncentralT { t: f64, df: f64 },
    /// Location-scale Student-t likelihood.
    StudentT { mean: f64, sd: f64, df: f64 },
    /// Binomial likelihood for `successes` out of `trials`.
    Binomial { successes: f64, trials: f64 },
}

impl LikelihoodFamily {
    /// Canonical family tag used in engine descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal { .. } => "normal",
            Self::NoncentralD { .. } => "noncentral_d",
            Self::NoncentralD2 { .. } => "noncentral_d2",
            Self::NoncentralT { .. } => "noncentral_t",
            Self::StudentT { .. } => "student_t",
            Self::Binomial { .. } => "binomial",
        }
    }

    /// Ordered parameter records for engine handoff.
    pub fn params(&self) -> ParamSet {
        match *self {
            Self::Normal { mean, se } => {
                ParamSet::from_pairs([("mean", Some(mean)), ("se", Some(se))])
            }
            Self::NoncentralD { d, n } => {
                ParamSet::from_pairs([("d", Some(d)), ("n", Some(n))])
            }
            Self::NoncentralD2 { d, n1, n2 } => {
                ParamSet::from_pairs([("d", Some(d)), ("n1", Some(n1)), ("n2", Some(n2))])
            }
            Self::NoncentralT { t, df } => {
                ParamSet::from_pairs([("t", Some(t)), ("df", Some(df))])
            }
            Self::StudentT { mean, sd, df } => {
                ParamSet::from_pairs([("mean", Some(mean)), ("sd", Some(sd)), ("df", Some(df))])
            }
            Self::Binomial { successes, trials } => ParamSet::from_pairs([
                ("successes", Some(successes)),
                ("trials", Some(trials)),
            ]),
        }
    }
}

/// Prior families: belief over the unknown parameter before seeing data.
///
/// `ll`/`ul` are optional truncation bounds, forwarded to the engine as
/// plain parameters; the engine renormalizes the density on `[ll, ul]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriorFamily {
    Normal { mean: f64, sd: f64, ll: Option<f64>, ul: Option<f64> },
    Cauchy { location: f64, scale: f64, ll: Option<f64>, ul: Option<f64> },
    Point { point: f64 },
    StudentT { mean: f64, sd: f64, df: f64, ll: Option<f64>, ul: Option<f64> },
    Beta { alpha: f64, beta: f64, ll: Option<f64>, ul: Option<f64> },
}

impl PriorFamily {
    /// Canonical family tag used in engine descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal { .. } => "normal",
            Self::Cauchy { .. } => "cauchy",
            Self::Point { .. } => "point",
            Self::StudentT { .. } => "student_t",
            Self::Beta { .. } => "beta",
        }
    }

    /// Ordered parameter records for engine handoff; absent optionals are
    /// dropped, not serialized as nulls.
    pub fn params(&self) -> ParamSet {
        match *self {
            Self::Normal { mean, sd, ll, ul } => ParamSet::from_pairs([
                ("mean", Some(mean)),
                ("sd", Some(sd)),
                ("ll", ll),
                ("ul", ul),
            ]),
            Self::Cauchy { location, scale, ll, ul } => ParamSet::from_pairs([
                ("location", Some(location)),
                ("scale", Some(scale)),
                ("ll", ll),
                ("ul", ul),
            ]),
            Self::Point { point } => ParamSet::from_pairs([("point", Some(point))]),
            Self::StudentT { mean, sd, df, ll, ul } => ParamSet::from_pairs([
                ("mean", Some(mean)),
                ("sd", Some(sd)),
                ("df", Some(df)),
                ("ll", ll),
                ("ul", ul),
            ]),
            Self::Beta { alpha, beta, ll, ul } => ParamSet::from_pairs([
                ("alpha", Some(alpha)),
                ("beta", Some(beta)),
                ("ll", ll),
                ("ul", ul),
            ]),
        }
    }
}
