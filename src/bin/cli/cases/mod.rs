use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use psa_testgen_data::TestCase;

use crate::error::{CliResult, Error};

const INPUT_EXTENSION: &str = "json";

pub struct TestCaseLoader {}

impl TestCaseLoader {
    /// Loads test cases from a JSON file, or from every JSON file of a
    /// directory in file name order.
    ///
    /// Files of a directory that can't be parsed are skipped with a warning,
    /// a single input file must parse.
    pub fn from_input_path(path: &Utf8Path) -> CliResult<Vec<TestCase>> {
        let test_cases = if path.is_dir() {
            Self::from_dir(path)?
        } else {
            Self::from_file(path)?
        };

        if test_cases.is_empty() {
            tracing::error!("No test case found in '{}'", path);
            return Err(Error::Other("Invalid input".to_string()));
        }

        Ok(test_cases)
    }

    fn from_dir(dir: &Utf8Path) -> CliResult<Vec<TestCase>> {
        let mut files: Vec<Utf8PathBuf> = vec![];
        for entry in dir.read_dir_utf8()? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && path.extension() == Some(INPUT_EXTENSION) {
                files.push(path.to_path_buf());
            }
        }
        files.sort();

        let mut test_cases = vec![];
        for file in files {
            match Self::from_file(&file) {
                Ok(mut tcs) => {
                    tracing::trace!("Adding {} test cases from {file}", tcs.len());
                    test_cases.append(&mut tcs);
                }
                Err(e) => tracing::warn!("Input file {file} could not be parsed {e:?}"),
            }
        }

        Ok(test_cases)
    }

    fn from_file(path: &Utf8Path) -> CliResult<Vec<TestCase>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
