use std::fmt;

use crate::MedianError;

/// Number of values the backing storage of [`Samples`] grows by whenever it runs out of room
pub const GROWTH_INCREMENT: usize = 1000;

/// An append-only sequence of sample values, kept in insertion order
///
/// Storage grows in fixed blocks of [`GROWTH_INCREMENT`] values,
/// so growing the buffer happens at most once every [`GROWTH_INCREMENT`] pushes.
/// Values can be appended with [`Self::push`], but never removed or reordered:
/// the length of a [`Samples`] only ever goes up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    values: Vec<f64>,
}

impl Samples {
    /// Constructs an empty [`Self`], without allocating
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to the end of the sequence
    ///
    /// Fails with [`MedianError::Allocation`] if the storage is full and can't be grown.
    pub fn push(&mut self, value: f64) -> Result<(), MedianError> {
        if self.values.len() == self.capacity() {
            let wanted = self.capacity().saturating_add(GROWTH_INCREMENT);
            self.values
                .try_reserve_exact(GROWTH_INCREMENT)
                .map_err(|_| MedianError::allocation(wanted))?;

            #[cfg(feature = "logging")]
            log::trace!("Grew sample storage to {} values", self.capacity());
        }

        self.values.push(value);
        Ok(())
    }

    /// Number of values collected so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values have been collected
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values that fit before the storage has to grow again
    pub(crate) fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// The collected values, in insertion order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over the collected values, in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }
}

impl From<Vec<f64>> for Samples {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl AsRef<[f64]> for Samples {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a Samples {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lists every value on a single line, each right-aligned in a 10 character column with two decimals
impl fmt::Display for Samples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.values {
            write!(f, "{v:10.2}")?;
        }
        writeln!(f)
    }
}
