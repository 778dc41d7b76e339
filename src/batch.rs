//! The batch driver: every entry of a folder becomes a 128x128 icon, in place.

use std::{
    fs,
    io::Write,
    path::Path,
};

use crate::{
    decode::decode,
    encode::encode,
    error::{ErrorKind, ScaleError},
    operations::{identify, resize},
    si_err,
};

/// Tally of a finished run. Failed entries have already been reported one by one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
}

/// Resizes every image directly inside `dir`, reporting progress on stdout.
///
/// Only a failure to list `dir` itself is returned as an error;
/// entries that cannot be processed are reported and skipped.
pub fn run(dir: &Path) -> Result<BatchReport, ScaleError> {
    let mut stdout = std::io::stdout().lock();
    run_with_output(dir, &mut stdout)
}

pub fn run_with_output(dir: &Path, out: &mut impl Write) -> Result<BatchReport, ScaleError> {
    let entries = fs::read_dir(dir).map_err(|error| {
        si_err!(
            ErrorKind::ListDirectory,
            "unable to open folder '{}': {}",
            dir.display(),
            error
        )
    })?;

    let mut report = BatchReport::default();
    for entry in entries {
        // entries are visited in whatever order the OS lists them
        let result = match entry {
            Ok(entry) => {
                let path = dir.join(entry.file_name());
                process_entry(&path, out).map_err(|err| (path, err))
            }
            Err(error) => Err((
                dir.to_path_buf(),
                si_err!(ErrorKind::ReadEntry, error),
            )),
        };
        match result {
            Ok(()) => report.processed += 1,
            Err((path, err)) => {
                report.failed += 1;
                report_failure(&path, &err, out);
            }
        }
    }
    Ok(report)
}

/// decode, report, resize, overwrite
fn process_entry(path: &Path, out: &mut impl Write) -> Result<(), ScaleError> {
    let mut image = decode(path)?;
    identify::print_dimensions(&image, out)?;
    resize::thumbnail(&mut image)?;
    encode(&image, path)
}

fn report_failure(path: &Path, err: &ScaleError, out: &mut impl Write) {
    let _ = writeln!(out, "can not process image {}", path.display()); // ignore broken stdout
    eprintln!("{err}");
}
