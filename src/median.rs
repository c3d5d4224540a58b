use crate::{MedianError, Samples};

/// Calculates the exact median of `values`
///
/// The values are copied into a scratch buffer which is sorted and then discarded,
/// so `values` itself is never reordered.
/// For an odd number of values, the result is the middle one after sorting;
/// for an even number, it's the mean of the two middle ones.
///
/// Values are ordered with [`f64::total_cmp`], so NaNs and infinities are accepted:
/// negative NaNs sort before everything else, positive NaNs after, and `-0.0` before `0.0`.
///
/// Fails with [`MedianError::Empty`] if `values` is empty,
/// or [`MedianError::Allocation`] if the scratch buffer can't be allocated.
pub fn median(values: &[f64]) -> Result<f64, MedianError> {
    if values.is_empty() {
        return Err(MedianError::Empty);
    }

    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(values.len())
        .map_err(|_| MedianError::allocation(values.len()))?;
    scratch.extend_from_slice(values);
    scratch.sort_unstable_by(f64::total_cmp);

    #[cfg(feature = "logging")]
    log::trace!("Sorted a snapshot of {} values", scratch.len());

    let mid = scratch.len() / 2;
    if scratch.len() % 2 == 0 {
        Ok((scratch[mid - 1] + scratch[mid]) / 2.)
    } else {
        Ok(scratch[mid])
    }
}

impl Samples {
    /// Exact median of every value collected so far
    ///
    /// See [`median`] for details.
    pub fn median(&self) -> Result<f64, MedianError> {
        median(self.as_slice())
    }

    /// Exact median of the first `count` values collected
    ///
    /// Fails with [`MedianError::PrefixOutOfRange`] if fewer than `count` values have been collected.
    pub fn median_of_first(&self, count: usize) -> Result<f64, MedianError> {
        let prefix = self
            .as_slice()
            .get(..count)
            .ok_or(MedianError::PrefixOutOfRange {
                count,
                len: self.len(),
            })?;

        median(prefix)
    }
}
