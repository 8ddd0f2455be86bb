//! Compensated floating-point summation.

use num_traits::Float;

/// Running sum with Neumaier's compensation (improved Kahan–Babuška).
///
/// Tracks the low-order bits lost by each addition in a separate error term,
/// so long sums of mixed-sign terms (shoelace areas) stay accurate.
///
/// # Example
///
/// ```
/// use triangulum::tolerance::CompensatedSum;
///
/// let mut sum = CompensatedSum::new();
/// for x in [1.0_f64, 1e100, 1.0, -1e100] {
///     sum.add(x);
/// }
/// assert_eq!(sum.value(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompensatedSum<F> {
    sum: F,
    err: F,
}

impl<F: Float> CompensatedSum<F> {
    /// Creates an empty sum.
    #[inline]
    pub fn new() -> Self {
        Self {
            sum: F::zero(),
            err: F::zero(),
        }
    }

    /// Adds a term.
    #[inline]
    pub fn add(&mut self, k: F) {
        let m = self.sum + k;
        self.err = self.err
            + if self.sum.abs() >= k.abs() {
                self.sum - m + k
            } else {
                k - m + self.sum
            };
        self.sum = m;
    }

    /// Returns the compensated total.
    #[inline]
    pub fn value(&self) -> F {
        self.sum + self.err
    }
}

impl<F: Float> Default for CompensatedSum<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Extend<F> for CompensatedSum<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for k in iter {
            self.add(k);
        }
    }
}

/// Sums `values` with Neumaier compensation. Empty input sums to zero.
pub fn neumaier_sum<F, I>(values: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    let mut sum = CompensatedSum::new();
    sum.extend(values);
    sum.value()
}
