use std::fs::File;
use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use crate::error::CliResult;

/// Generator configuration, command line flags take precedence.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generator name recorded in the header of written files.
    pub caller: Option<String>,
    /// Root of the source tree guards are resolved for.
    pub root: Option<Utf8PathBuf>,
}

impl GeneratorConfig {
    pub fn from_json(path: &Utf8Path) -> CliResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("config.json")).unwrap();
        std::fs::write(&path, r#"{"caller": "generate_psa_tests.py"}"#).unwrap();

        let config = GeneratorConfig::from_json(&path).unwrap();
        assert_eq!(config.caller.as_deref(), Some("generate_psa_tests.py"));
        assert!(config.root.is_none());
    }

    #[test]
    fn test_from_json_unknown_field_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("config.json")).unwrap();
        std::fs::write(&path, r#"{"calller": "typo"}"#).unwrap();

        assert!(GeneratorConfig::from_json(&path).is_err());
    }
}
