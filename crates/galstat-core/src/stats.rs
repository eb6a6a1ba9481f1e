//! Statistics engine: descriptive and inferential statistics
//!
//! Every operation is a pure function of its input slices. Undersized
//! samples are rejected with `InsufficientSample` instead of silently
//! producing NaN.

use crate::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Mean and standard error of one metric over one population
///
/// The two are always computed together and reported together.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SummaryStatistic {
    pub mean: f64,
    pub standard_error: f64,
    pub count: usize,
}

/// Two-sample t-test outcome (two-sided)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TTestResult {
    pub statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: f64,
}

/// Spearman rank correlation outcome (two-sided)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub coefficient: f64,
    pub p_value: f64,
}

/// Equal-variance (pooled) or unequal-variance t-test
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TTestKind {
    /// Student's t with pooled variance, the standard equal-variance default
    Student,
    /// Welch's t with per-group variances
    Welch,
}

impl Default for TTestKind {
    fn default() -> Self {
        TTestKind::Student
    }
}

/// Arithmetic mean; fails on empty input
pub fn mean(xs: &[f64]) -> AnalysisResult<f64> {
    if xs.is_empty() {
        return Err(AnalysisError::InsufficientSample {
            statistic: "mean",
            required: 1,
            actual: 0,
        });
    }
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Sample variance with Bessel's correction (denominator n - 1)
fn sample_variance(xs: &[f64], mean: f64) -> f64 {
    let ss: f64 = xs.iter().map(|&x| (x - mean) * (x - mean)).sum();
    ss / (xs.len() - 1) as f64
}

/// Standard error of the mean: sample std / sqrt(n); fails for n < 2
pub fn standard_error(xs: &[f64]) -> AnalysisResult<f64> {
    if xs.len() < 2 {
        return Err(AnalysisError::InsufficientSample {
            statistic: "standard error",
            required: 2,
            actual: xs.len(),
        });
    }
    let m = mean(xs)?;
    Ok((sample_variance(xs, m) / xs.len() as f64).sqrt())
}

/// Mean and standard error together
pub fn summarize(xs: &[f64]) -> AnalysisResult<SummaryStatistic> {
    Ok(SummaryStatistic {
        mean: mean(xs)?,
        standard_error: standard_error(xs)?,
        count: xs.len(),
    })
}

/// Two-sided p-value for a t statistic with the given degrees of freedom
fn two_sided_t_p_value(t: f64, dof: f64) -> f64 {
    // dof > 0 is guaranteed by the n >= 2 checks in the callers.
    let dist = StudentsT::new(0.0, 1.0, dof).expect("positive degrees of freedom");
    (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0)
}

/// Independent two-sample t-test, two-sided
///
/// `Student` pools the variances (equal-variance assumption); `Welch` uses
/// the Welch-Satterthwaite degrees of freedom. Either group with fewer than
/// two elements is rejected.
pub fn two_sample_t_test(a: &[f64], b: &[f64], kind: TTestKind) -> AnalysisResult<TTestResult> {
    for group in [a, b] {
        if group.len() < 2 {
            return Err(AnalysisError::InsufficientSample {
                statistic: "two-sample t-test",
                required: 2,
                actual: group.len(),
            });
        }
    }

    let (na, nb) = (a.len() as f64, b.len() as f64);
    let (ma, mb) = (mean(a)?, mean(b)?);
    let (va, vb) = (sample_variance(a, ma), sample_variance(b, mb));

    let (statistic, dof) = match kind {
        TTestKind::Student => {
            let pooled = ((na - 1.0) * va + (nb - 1.0) * vb) / (na + nb - 2.0);
            let denom = (pooled * (1.0 / na + 1.0 / nb)).sqrt();
            let t = if denom == 0.0 { 0.0 } else { (ma - mb) / denom };
            (t, na + nb - 2.0)
        }
        TTestKind::Welch => {
            let sa = va / na;
            let sb = vb / nb;
            let denom = (sa + sb).sqrt();
            let t = if denom == 0.0 { 0.0 } else { (ma - mb) / denom };
            let dof = if sa + sb == 0.0 {
                na + nb - 2.0
            } else {
                (sa + sb) * (sa + sb)
                    / (sa * sa / (na - 1.0) + sb * sb / (nb - 1.0))
            };
            (t, dof)
        }
    };

    Ok(TTestResult {
        statistic,
        p_value: two_sided_t_p_value(statistic, dof),
        degrees_of_freedom: dof,
    })
}

/// Average ranks (1-based); ties get the mean of the ranks they span
fn average_ranks(xs: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..xs.len()).collect();
    order.sort_by(|&i, &j| xs[i].partial_cmp(&xs[j]).unwrap_or(std::cmp::Ordering::Equal));

    let mut ranks = vec![0.0; xs.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && xs[order[j + 1]] == xs[order[i]] {
            j += 1;
        }
        // Ranks i+1 ..= j+1 share the value; assign their average.
        let avg = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg;
        }
        i = j + 1;
    }
    ranks
}

/// Pearson correlation of two equal-length vectors
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return 0.0;
    }
    sxy / (sxx.sqrt() * syy.sqrt())
}

/// Spearman rank correlation with a two-sided p-value
///
/// Ranks both vectors (average ranks for ties), computes Pearson correlation
/// on the ranks, and derives the p-value from the t-distributed statistic
/// `rho * sqrt((n-2) / (1 - rho^2))` with n-2 degrees of freedom. Length
/// mismatch or fewer than two elements is rejected.
pub fn spearman_rank_correlation(x: &[f64], y: &[f64]) -> AnalysisResult<CorrelationResult> {
    if x.len() != y.len() {
        return Err(AnalysisError::InvalidDomain {
            quantity: "rank correlation",
            detail: format!("vector lengths differ: {} vs {}", x.len(), y.len()),
        });
    }
    if x.len() < 2 {
        return Err(AnalysisError::InsufficientSample {
            statistic: "rank correlation",
            required: 2,
            actual: x.len(),
        });
    }

    let coefficient = pearson(&average_ranks(x), &average_ranks(y));

    let n = x.len() as f64;
    let p_value = if n <= 2.0 || (1.0 - coefficient * coefficient) <= f64::EPSILON {
        // |rho| = 1 (or n = 2): the t statistic diverges.
        0.0
    } else {
        let t = coefficient * ((n - 2.0) / (1.0 - coefficient * coefficient)).sqrt();
        two_sided_t_p_value(t, n - 2.0)
    };

    Ok(CorrelationResult {
        coefficient,
        p_value,
    })
}
