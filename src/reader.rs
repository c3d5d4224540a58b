use std::io::BufRead;

use crate::{MedianError, Samples};

/// Reads whitespace-separated numbers from `reader` until the input runs out or a token isn't a number
///
/// Every token is parsed as an [`f64`], using the same grammar as [`str::parse`]:
/// an optional sign, digits with an optional fraction and exponent, or one of `inf`, `infinity` and `nan`.
/// The first token that doesn't parse ends the input; nothing after it is read from `reader`
/// beyond the rest of its line.
///
/// Running out of input is not an error, so the returned [`Samples`] may be empty.
/// Errors from `reader` itself and failures to grow the sample storage are propagated.
pub fn read_samples<R: BufRead>(mut reader: R) -> Result<Samples, MedianError> {
    let mut samples = Samples::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            #[cfg(feature = "logging")]
            log::debug!("Reached end of input after {} values", samples.len());

            return Ok(samples);
        }

        for token in line.split(is_separator).filter(|t| !t.is_empty()) {
            match parse_token(token) {
                Some(v) => samples.push(v)?,
                None => {
                    #[cfg(feature = "logging")]
                    log::debug!(
                        "Stopped reading at non-numeric token {:?} after {} values",
                        String::from_utf8_lossy(token),
                        samples.len()
                    );

                    return Ok(samples);
                }
            }
        }
    }
}

impl Samples {
    /// Collects samples from `reader`
    ///
    /// See [`read_samples`] for how the input is tokenized and when reading stops.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, MedianError> {
        read_samples(reader)
    }
}

/// ASCII whitespace, plus vertical tab, which [`u8::is_ascii_whitespace`] leaves out
fn is_separator(b: &u8) -> bool {
    b.is_ascii_whitespace() || *b == b'\x0b'
}

fn parse_token(token: &[u8]) -> Option<f64> {
    std::str::from_utf8(token).ok()?.parse().ok()
}
