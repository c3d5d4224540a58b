use std::io;

use thiserror::Error;

/// Everything that can go wrong while reading samples or computing their median
#[derive(Error, Debug)]
pub enum MedianError {
    /// A buffer could not be allocated or grown
    #[error("can't allocate {bytes} bytes")]
    Allocation {
        /// Size of the failed request
        bytes: usize,
    },

    /// There were no values to compute a median of
    #[error("no values to compute a median of")]
    Empty,

    /// A prefix median was requested over more values than were collected
    #[error("requested the median of the first {count} values, but only {len} are available")]
    PrefixOutOfRange {
        /// Requested prefix length
        count: usize,
        /// Number of values available
        len: usize,
    },

    /// The input stream could not be read
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The result could not be written out
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl MedianError {
    /// Builds an [`MedianError::Allocation`] for `elements` values of `f64`
    pub(crate) fn allocation(elements: usize) -> Self {
        Self::Allocation {
            bytes: elements.saturating_mul(std::mem::size_of::<f64>()),
        }
    }
}
