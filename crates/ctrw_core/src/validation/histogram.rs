//! Probability-density histograms of a sample.

use super::error::ValidationError;

/// Equal-width histogram over [from, to), normalised as a probability density.
///
/// Bar heights are `count / (N · width)` where N is the size of the whole
/// sample, including values outside the range. Bar areas are then the
/// empirical probability of landing in each bin, which is directly
/// comparable with a density curve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    from: f64,
    width: f64,
    counts: Vec<usize>,
    total: usize,
}

impl Histogram {
    /// Bins `values` into `bins` equal-width bins over [from, to).
    ///
    /// Values outside the range (and NaN) are counted in the total but not
    /// in any bin.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHistogram`] if the bounds are not
    /// finite, `from >= to`, or `bins == 0`; [`ValidationError::EmptySample`]
    /// if `values` is empty.
    pub fn new(values: &[f64], from: f64, to: f64, bins: usize) -> Result<Self, ValidationError> {
        if !(from.is_finite() && to.is_finite() && from < to && bins > 0) {
            return Err(ValidationError::InvalidHistogram { from, to, bins });
        }
        if values.is_empty() {
            return Err(ValidationError::EmptySample);
        }

        let width = (to - from) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &x in values {
            if x >= from && x < to {
                // Rounding can push x just below `to` into index `bins`.
                let idx = (((x - from) / width) as usize).min(bins - 1);
                counts[idx] += 1;
            }
        }

        Ok(Self {
            from,
            width,
            counts,
            total: values.len(),
        })
    }

    /// Width shared by all bins.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.width
    }

    /// Number of bins.
    #[inline]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Raw counts per bin.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Size of the sample the histogram was built from.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Left edge of bin `i`.
    #[inline]
    pub fn bin_start(&self, i: usize) -> f64 {
        self.from + i as f64 * self.width
    }

    /// Bin centres, in bin order.
    pub fn centres(&self) -> Vec<f64> {
        (0..self.bins())
            .map(|i| self.bin_start(i) + 0.5 * self.width)
            .collect()
    }

    /// Density-normalised bar heights, in bin order.
    pub fn densities(&self) -> Vec<f64> {
        let norm = self.total as f64 * self.width;
        self.counts.iter().map(|&c| c as f64 / norm).collect()
    }

    /// Fraction of the sample that fell inside [from, to).
    pub fn coverage(&self) -> f64 {
        self.counts.iter().sum::<usize>() as f64 / self.total as f64
    }
}
