//! A more fully-fledged example, reading samples from text and showcasing the other methods on [`Samples`]

use median::{MedianError, Samples};

/// Some text to read samples from
///
/// Reading stops at `end`, so the last line is never seen
const INPUT: &str = "18.6 83.1 21.5 21.4 63.4
64.1 4.6 92.7 31.1 94.8
2.4 44.5 70.0 17.1 61.0 end
1000 1000 1000";

fn main() -> Result<(), MedianError> {
    // Any `BufRead` works here, a byte slice included
    let samples = Samples::read_from(INPUT.as_bytes())?;
    println!("Read {} samples:", samples.len());
    print!("{samples}");

    // Medians of growing prefixes of the data
    for count in 1..=samples.len() {
        println!(
            "Median of the first {count} samples: {}",
            samples.median_of_first(count)?
        );
    }

    // Asking for more than was read is an error
    if let Err(e) = samples.median_of_first(samples.len() + 1) {
        println!("As expected: {e}");
    }

    // Once we've processed everything, we can get our answer out
    println!("The median is: {}", samples.median()?);

    // Empty inputs don't have a median
    let empty = Samples::read_from("not a number".as_bytes())?;
    if let Err(e) = empty.median() {
        println!("No samples: {e}");
    }

    Ok(())
}
