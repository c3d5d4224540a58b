//! A basic example showing minimal usage
//!
//! We compute the median of some in-memory data, without touching standard input

/// Some sample data to calculate the median for
///
/// Note that the exact median is 44.5
const DATA: [f64; 15] = [
    18.6, 83.1, 21.5, 21.4, 63.4, 64.1, 4.6, 92.7, 31.1, 94.8, 2.4, 44.5, 70.0, 17.1, 61.0,
];

fn main() -> Result<(), median::MedianError> {
    let median = median::median(&DATA)?;
    println!("The median is: {median}");

    Ok(())
}
