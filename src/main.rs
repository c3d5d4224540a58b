use std::{
    io::{self, Write},
    process::ExitCode,
};

use median::{read_samples, MedianError};

fn run() -> Result<(), MedianError> {
    let samples = read_samples(io::stdin().lock())?;

    #[cfg(feature = "logging")]
    log::trace!("Values read:\n{samples}");

    let median = samples.median()?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{median:.6}")
        .and_then(|()| stdout.flush())
        .map_err(MedianError::Output)
}

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("### error: {e}");
            ExitCode::FAILURE
        }
    }
}
