//! `.data` file writer.
//!
//! A file is written to a sibling temporary file first, which is then renamed
//! over the destination. Readers never observe a half written file, and a
//! failed generation leaves the previous file in place.
use std::borrow::Borrow;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{DataResult, TestCase};

/// Extension appended to the destination path while it's being written.
const TEMP_EXTENSION: &str = ".new";

/// Writes the header, every test case and the trailer of a `.data` file.
///
/// # Arguments
///
/// * `out` - Where the file content is written.
/// * `test_cases` - Test cases, written in iteration order.
/// * `caller` - Name of the generator, recorded in the header.
pub fn write_data<W, I>(out: &mut W, test_cases: I, caller: &str) -> DataResult<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<TestCase>,
{
    writeln!(out, "# Automatically generated by {caller}. Do not edit!")?;

    let mut written = 0;
    let mut skipped = 0;
    for tc in test_cases {
        let tc = tc.borrow();
        tc.write(&mut *out)?;

        if tc.is_skipped() {
            skipped += 1;
        } else {
            written += 1;
        }
    }

    out.write_all(b"\n# End of automatically generated file.\n")?;

    tracing::debug!("{written} test cases written, {skipped} skipped");
    Ok(())
}

/// Writes the test cases to the given `.data` file.
///
/// If the file already exists, it is overwritten. When `caller` is `None`,
/// the name of the running program is used.
pub fn write_data_file<P, I>(path: P, test_cases: I, caller: Option<&str>) -> DataResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: Borrow<TestCase>,
{
    let path = path.as_ref();
    let caller = caller.map_or_else(default_caller, str::to_string);
    let temp_path = temp_path(path);

    tracing::trace!("Writing {}", temp_path.display());
    if let Err(e) = write_temp_file(&temp_path, test_cases, &caller) {
        match fs::remove_file(&temp_path) {
            Err(rm) if rm.kind() != io::ErrorKind::NotFound => {
                tracing::warn!("Could not remove {}: {rm}", temp_path.display());
            }
            _ => (),
        }
        return Err(e);
    }

    fs::rename(&temp_path, path)?;
    tracing::trace!("Renamed {} to {}", temp_path.display(), path.display());

    Ok(())
}

fn write_temp_file<I>(temp_path: &Path, test_cases: I, caller: &str) -> DataResult<()>
where
    I: IntoIterator,
    I::Item: Borrow<TestCase>,
{
    let mut out = BufWriter::new(File::create(temp_path)?);
    write_data(&mut out, test_cases, caller)?;
    out.flush()?;

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut temp: OsString = path.as_os_str().to_owned();
    temp.push(TEMP_EXTENSION);
    PathBuf::from(temp)
}

/// Default generator name of a file header: base name of the running
/// program, as found in `argv[0]`.
pub fn default_caller() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
