//! Detection of the source tree test cases are generated for.
use std::fs;

use camino::Utf8Path;

use crate::GuardResult;

const TF_PSA_CRYPTO_DIRS: &[&str] = &["include", "core", "drivers", "programs", "tests"];
const MBEDTLS_DIRS: &[&str] = &["include", "library", "programs", "tests"];

const VERSION_NUMBER_DEFINE: &str = "#define MBEDTLS_VERSION_NUMBER";
const VERSION_3_6_PREFIX: &str = "0x0306";

/// Kind of source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTree {
    /// A TF-PSA-Crypto tree.
    TfPsaCrypto,
    /// An Mbed TLS tree.
    Mbedtls { version_3_6: bool },
    /// Neither of the above.
    Unknown,
}

impl BuildTree {
    /// Inspects the tree rooted at `root`.
    ///
    /// The version of an Mbed TLS tree is read from
    /// `include/mbedtls/build_info.h`.
    pub fn detect(root: &Utf8Path) -> GuardResult<Self> {
        let tree = if has_dirs(root, TF_PSA_CRYPTO_DIRS) {
            BuildTree::TfPsaCrypto
        } else if has_dirs(root, MBEDTLS_DIRS) {
            let build_info = root.join("include").join("mbedtls").join("build_info.h");
            let content = fs::read_to_string(&build_info)?;

            BuildTree::Mbedtls {
                version_3_6: is_version_3_6(&content),
            }
        } else {
            BuildTree::Unknown
        };

        tracing::debug!("Tree {root} detected as {tree:?}");
        Ok(tree)
    }

    pub fn is_mbedtls_3_6(&self) -> bool {
        matches!(self, BuildTree::Mbedtls { version_3_6: true })
    }
}

fn has_dirs(root: &Utf8Path, dirs: &[&str]) -> bool {
    dirs.iter().all(|d| root.join(d).is_dir())
}

fn is_version_3_6(build_info: &str) -> bool {
    build_info.lines().any(|line| {
        line.trim_start()
            .strip_prefix(VERSION_NUMBER_DEFINE)
            .is_some_and(|value| value.trim_start().starts_with(VERSION_3_6_PREFIX))
    })
}
