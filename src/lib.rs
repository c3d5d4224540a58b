#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod error;
mod median;
mod reader;
mod samples;

pub use error::MedianError;
pub use median::median;
pub use reader::read_samples;
pub use samples::{Samples, GROWTH_INCREMENT};
