//! Descriptive statistics over f64 samples.
//!
//! All moments are population moments (division by `n`, not `n - 1`),
//! matching the calculator convention. Kurtosis is reported as excess
//! kurtosis (normal distribution = 0).

use crate::error::StatsError;

fn ensure_data(data: &[f64], need: usize) -> Result<(), StatsError> {
    if data.len() < need {
        return Err(StatsError::InsufficientData {
            got: data.len(),
            need,
        });
    }
    Ok(())
}

fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    ensure_data(data, 1)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Median (middle element, or midpoint of the middle pair).
pub fn median(data: &[f64]) -> Result<f64, StatsError> {
    ensure_data(data, 1)?;
    let sorted = sorted_copy(data);
    let n = sorted.len();
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Population variance.
///
/// Requires at least 2 data points.
pub fn variance(data: &[f64]) -> Result<f64, StatsError> {
    ensure_data(data, 2)?;
    let m = mean(data)?;
    Ok(data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64)
}

/// Population standard deviation.
///
/// Requires at least 2 data points.
pub fn std_dev(data: &[f64]) -> Result<f64, StatsError> {
    Ok(variance(data)?.sqrt())
}

/// The three quartiles of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// Lower quartile
    pub q1: f64,
    /// Median
    pub q2: f64,
    /// Upper quartile
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range `q3 - q1`.
    #[inline]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Quartiles by the index method: Q1 and Q3 are the elements at
/// `floor(n/4)` and `floor(3n/4)` of the sorted sample, Q2 is the median.
pub fn quartiles(data: &[f64]) -> Result<Quartiles, StatsError> {
    ensure_data(data, 1)?;
    let sorted = sorted_copy(data);
    let n = sorted.len();
    Ok(Quartiles {
        q1: sorted[n / 4],
        q2: median(&sorted)?,
        q3: sorted[3 * n / 4],
    })
}

/// Population skewness (third standardised moment).
///
/// # Errors
///
/// - `StatsError::InsufficientData` for fewer than 2 points
/// - `StatsError::ZeroVariance` for constant data
pub fn skewness(data: &[f64]) -> Result<f64, StatsError> {
    standardised_moment(data, 3)
}

/// Excess kurtosis (fourth standardised moment minus 3).
///
/// # Errors
///
/// - `StatsError::InsufficientData` for fewer than 2 points
/// - `StatsError::ZeroVariance` for constant data
pub fn kurtosis(data: &[f64]) -> Result<f64, StatsError> {
    Ok(standardised_moment(data, 4)? - 3.0)
}

fn standardised_moment(data: &[f64], order: i32) -> Result<f64, StatsError> {
    ensure_data(data, 2)?;
    let m = mean(data)?;
    let sd = std_dev(data)?;
    if sd == 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    Ok(data.iter().map(|x| ((x - m) / sd).powi(order)).sum::<f64>() / data.len() as f64)
}
