//! Gaussian kernel density estimation.
//!
//! The bandwidth follows Scott's rule (`sigma * n^(-1/5)`, with the sample
//! standard deviation), and the curve is evaluated on an evenly spaced grid
//! that extends `cut` bandwidths past the smallest and largest samples.

use core::f64::consts::PI;

/// Number of points each density curve is evaluated at.
pub const GRID_SIZE: usize = 200;

/// A density curve evaluated over a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub bandwidth: f64,
    /// `(x, density)` pairs, ascending in `x`.
    pub points: Vec<(f64, f64)>,
}

impl DensityCurve {
    /// Largest density value on the curve.
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|&(_, y)| y).fold(0.0, f64::max)
    }

    /// Range of `x` covered by the grid.
    pub fn support(&self) -> (f64, f64) {
        match (self.points.first(), self.points.last()) {
            (Some(&(lo, _)), Some(&(hi, _))) => (lo, hi),
            _ => (0.0, 0.0),
        }
    }
}

/// Estimates the density of `samples`.
///
/// Returns `None` when there are fewer than two samples or the samples have
/// zero variance, as no bandwidth can be derived.
pub fn estimate_density(samples: &[f64], cut: f64) -> Option<DensityCurve> {
    let bandwidth = scott_bandwidth(samples)?;

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - cut * bandwidth;
    let hi = max + cut * bandwidth;
    let step = (hi - lo) / (GRID_SIZE - 1) as f64;

    let points = (0..GRID_SIZE)
        .map(|i| {
            let x = lo + step * i as f64;
            (x, evaluate(samples, bandwidth, x))
        })
        .collect();

    Some(DensityCurve { bandwidth, points })
}

/// Density of the Gaussian mixture centred on `samples` at `x`.
pub fn evaluate(samples: &[f64], bandwidth: f64, x: f64) -> f64 {
    let norm = 1.0 / (samples.len() as f64 * bandwidth * (2.0 * PI).sqrt());
    let sum: f64 = samples
        .iter()
        .map(|&s| {
            let z = (x - s) / bandwidth;
            (-0.5 * z * z).exp()
        })
        .sum();
    sum * norm
}

/// Scott's rule bandwidth, or `None` if it would be zero or undefined.
pub fn scott_bandwidth(samples: &[f64]) -> Option<f64> {
    let n = samples.len();
    if n < 2 {
        return None;
    }

    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let bandwidth = variance.sqrt() * (n as f64).powf(-0.2);

    (bandwidth.is_finite() && bandwidth > 0.0).then_some(bandwidth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scott_bandwidth_of_two_samples() {
        // std = sqrt(50), n^(-1/5) = 2^(-0.2)
        let bw = scott_bandwidth(&[10.0, 20.0]).unwrap();
        let expected = 50f64.sqrt() * 2f64.powf(-0.2);
        assert!((bw - expected).abs() < 1e-12);
    }

    #[test]
    fn degenerate_samples_have_no_bandwidth() {
        assert!(scott_bandwidth(&[]).is_none());
        assert!(scott_bandwidth(&[3.0]).is_none());
        assert!(scott_bandwidth(&[3.0, 3.0, 3.0]).is_none());
        assert!(estimate_density(&[3.0, 3.0], 3.0).is_none());
    }

    #[test]
    fn density_integrates_to_about_one() {
        let samples = [12.0, 15.0, 11.0, 18.0, 14.0, 13.5, 16.0];
        let curve = estimate_density(&samples, 3.0).unwrap();
        assert_eq!(curve.points.len(), GRID_SIZE);

        let area: f64 = curve
            .points
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum();
        assert!((area - 1.0).abs() < 0.01, "area was {area}");
    }

    #[test]
    fn grid_extends_cut_bandwidths_past_the_data() {
        let samples = [1.0, 2.0, 4.0];
        let curve = estimate_density(&samples, 2.0).unwrap();
        let (lo, hi) = curve.support();
        assert!((lo - (1.0 - 2.0 * curve.bandwidth)).abs() < 1e-9);
        assert!((hi - (4.0 + 2.0 * curve.bandwidth)).abs() < 1e-9);
    }

    #[test]
    fn peak_sits_near_the_cluster() {
        let samples = [5.0, 5.1, 4.9, 5.0, 20.0];
        let curve = estimate_density(&samples, 3.0).unwrap();
        let &(x_at_peak, _) = curve
            .points
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();
        assert!(x_at_peak < 12.0);
        assert!(curve.peak() > 0.0);
    }
}
